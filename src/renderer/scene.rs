//! Frame composition

use super::surface::DrawSurface;
use crate::consts::CIRCLE_OPACITY;
use crate::sim::{Circle, Collidable, Scene};

/// Draw one frame: clear, player, then every obstacle in placement order
pub fn draw_scene<S: DrawSurface + ?Sized>(scene: &Scene, surface: &mut S) {
    surface.clear_rect(scene.settings.canvas());

    // Player body plus a leash to the pointer
    let body = scene.player.circle();
    draw_collision_circle(surface, body);
    surface.line(body.center, scene.pointer.position);

    let sheet = &scene.settings.sprite;
    let sprites = surface.has_sprites();
    for obstacle in &scene.obstacles {
        if sprites {
            surface.draw_sprite(obstacle.sprite_source(sheet), obstacle.sprite_dest(sheet));
        }
        if scene.debug || !sprites {
            draw_collision_circle(surface, obstacle.circle());
        }
    }
}

fn draw_collision_circle<S: DrawSurface + ?Sized>(surface: &mut S, circle: Circle) {
    surface.fill_circle(circle.center, circle.radius, CIRCLE_OPACITY);
    surface.stroke_circle(circle.center, circle.radius);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;
    use crate::sim::{Obstacle, SpriteFrame};
    use crate::Rect;
    use glam::Vec2;

    fn scene_with_two_obstacles(debug: bool) -> Scene {
        let settings = Settings {
            debug,
            ..Settings::default()
        };
        let mut scene = Scene::new(settings, 3);
        scene.setup();
        let sheet = scene.settings.sprite.clone();
        scene.obstacles = vec![
            Obstacle::new(
                Vec2::new(200.0, 500.0),
                40.0,
                SpriteFrame { column: 1, row: 0 },
                &sheet,
            ),
            Obstacle::new(
                Vec2::new(900.0, 550.0),
                40.0,
                SpriteFrame { column: 3, row: 2 },
                &sheet,
            ),
        ];
        scene.pointer.position = Vec2::new(100.0, 100.0);
        scene
    }

    #[test]
    fn test_frame_starts_with_full_clear() {
        let scene = scene_with_two_obstacles(false);
        let mut surface = RecordingSurface::new(true);
        draw_scene(&scene, &mut surface);
        assert_eq!(
            surface.commands[0],
            DrawCommand::Clear(Rect::new(0.0, 0.0, 1280.0, 720.0))
        );
    }

    #[test]
    fn test_player_then_obstacle_sprites() {
        let scene = scene_with_two_obstacles(false);
        let mut surface = RecordingSurface::new(true);
        draw_scene(&scene, &mut surface);

        let center = Vec2::new(640.0, 360.0);
        assert_eq!(
            &surface.commands[1..],
            &[
                DrawCommand::FillCircle {
                    center,
                    radius: 40.0,
                    opacity: 0.5
                },
                DrawCommand::StrokeCircle {
                    center,
                    radius: 40.0
                },
                DrawCommand::Line {
                    from: center,
                    to: Vec2::new(100.0, 100.0)
                },
                DrawCommand::Sprite {
                    source: Rect::new(250.0, 0.0, 250.0, 250.0),
                    dest: Rect::new(75.0, 305.0, 250.0, 250.0),
                },
                DrawCommand::Sprite {
                    source: Rect::new(750.0, 500.0, 250.0, 250.0),
                    dest: Rect::new(775.0, 355.0, 250.0, 250.0),
                },
            ]
        );
    }

    #[test]
    fn test_debug_adds_collision_circles() {
        let scene = scene_with_two_obstacles(true);
        let mut surface = RecordingSurface::new(true);
        draw_scene(&scene, &mut surface);

        let outlines = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .count();
        let sprites = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count();
        assert_eq!(outlines, 3);
        assert_eq!(sprites, 2);
    }

    #[test]
    fn test_missing_sprites_fall_back_to_circles() {
        let scene = scene_with_two_obstacles(false);
        let mut surface = RecordingSurface::new(false);
        draw_scene(&scene, &mut surface);

        assert!(
            !surface
                .commands
                .iter()
                .any(|c| matches!(c, DrawCommand::Sprite { .. }))
        );
        assert_eq!(
            surface.commands.last(),
            Some(&DrawCommand::StrokeCircle {
                center: Vec2::new(900.0, 550.0),
                radius: 40.0
            })
        );
    }
}
