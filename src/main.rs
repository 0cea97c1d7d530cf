//! Garden Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent, MouseEvent};

    use garden_dodge::Settings;
    use garden_dodge::platform::{InputCell, InputEvent};
    use garden_dodge::renderer::{CanvasSurface, draw_scene};
    use garden_dodge::sim::{Scene, tick};

    /// Game instance holding all state except input
    struct Game {
        scene: Scene,
        surface: CanvasSurface,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(scene: Scene, surface: CanvasSurface) -> Self {
            Self {
                scene,
                surface,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one frame: simulate then draw
        fn frame(&mut self, input: &Rc<RefCell<InputCell>>, time: f64) {
            let tick_input = input.borrow_mut().snapshot();
            tick(&mut self.scene, &tick_input);
            draw_scene(&self.scene, &mut self.surface);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Update HUD elements in DOM (all optional)
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document
                .query_selector("#hud-obstacles .hud-value")
                .ok()
                .flatten()
            {
                el.set_text_content(Some(&self.scene.obstacles.len().to_string()));
            }

            if let Some(el) = document
                .query_selector("#hud-contacts .hud-value")
                .ok()
                .flatten()
            {
                el.set_text_content(Some(&self.scene.contacts.len().to_string()));
            }

            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.fps.to_string()));
            }
        }
    }

    /// Load and decode the obstacle sprite sheet
    async fn load_sprite_sheet(url: &str) -> Option<HtmlImageElement> {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                log::error!("Could not create image element: {:?}", e);
                return None;
            }
        };
        image.set_src(url);

        match JsFuture::from(image.decode()).await {
            Ok(_) => {
                log::info!("Loaded sprite sheet {}", url);
                Some(image)
            }
            Err(e) => {
                log::error!("Failed to load sprite sheet {}: {:?}", url, e);
                None
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Garden Dodge starting...");

        let settings = Settings::load();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed canvas size
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context request failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let sprite_sheet = load_sprite_sheet(&settings.sprite.url).await;

        // Initialize game
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let mut scene = Scene::new(settings, seed);
        scene.setup();
        log::info!("Game initialized with seed: {}", seed);

        let input = Rc::new(RefCell::new(InputCell::new(scene.pointer)));
        let game = Rc::new(RefCell::new(Game::new(
            scene,
            CanvasSurface::new(ctx, sprite_sheet),
        )));

        setup_input_handlers(&canvas, input.clone());

        // Start game loop
        request_animation_frame(game, input);

        log::info!("Garden Dodge running!");
    }

    /// Wire DOM events into the input cell
    fn setup_input_handlers(canvas: &HtmlCanvasElement, input: Rc<RefCell<InputCell>>) {
        let pointer_events: [(&str, fn(f32, f32) -> InputEvent); 3] = [
            ("mousedown", |x, y| InputEvent::PointerDown { x, y }),
            ("mouseup", |x, y| InputEvent::PointerUp { x, y }),
            ("mousemove", |x, y| InputEvent::PointerMove { x, y }),
        ];

        for (name, make_event) in pointer_events {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let event = make_event(event.offset_x() as f32, event.offset_y() as f32);
                input.borrow_mut().push(event);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard (debug toggle)
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                let mut chars = key.chars();
                if let (Some(key), None) = (chars.next(), chars.next()) {
                    input.borrow_mut().push(InputEvent::KeyDown { key });
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, input: Rc<RefCell<InputCell>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, input, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, input: Rc<RefCell<InputCell>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.frame(&input, time);
            g.update_hud();
        }

        request_animation_frame(game, input);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Garden Dodge (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the web version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = garden_dodge::Settings::load_from(path.as_deref());
    headless_run(settings, 600);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Orbit the pointer around the canvas center and report what the player hit
#[cfg(not(target_arch = "wasm32"))]
fn headless_run(settings: garden_dodge::Settings, frames: u32) {
    use garden_dodge::platform::{InputCell, InputEvent};
    use garden_dodge::renderer::{RecordingSurface, draw_scene};
    use garden_dodge::sim::{Scene, tick};

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let center = settings.canvas().center();
    let orbit = settings.canvas_height * 0.35;

    let mut scene = Scene::new(settings, seed);
    let mut input = InputCell::new(scene.pointer);
    let mut surface = RecordingSurface::new(false);
    let mut frames_in_contact = 0u32;

    for frame in 0..frames {
        let angle = frame as f32 * 0.02;
        input.push(InputEvent::PointerMove {
            x: center.x + angle.cos() * orbit,
            y: center.y + angle.sin() * orbit,
        });

        tick(&mut scene, &input.snapshot());
        surface.reset();
        draw_scene(&scene, &mut surface);

        if scene.in_contact() {
            frames_in_contact += 1;
        }
    }

    log::info!(
        "Headless run done: seed {}, {} obstacles, {} frames, {} in contact, {} draw calls in last frame",
        seed,
        scene.obstacles.len(),
        scene.frame,
        frames_in_contact,
        surface.commands.len()
    );
    println!(
        "{} obstacles placed, player touched an obstacle on {}/{} frames",
        scene.obstacles.len(),
        frames_in_contact,
        frames
    );
}
