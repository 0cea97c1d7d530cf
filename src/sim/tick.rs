//! Per-frame simulation step

use super::collision::contacts;
use super::state::{PointerState, Scene, ScenePhase};

/// Input for a single frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    /// Latest pointer report
    pub pointer: PointerState,
    /// Flip collision-circle drawing
    pub toggle_debug: bool,
}

/// Advance the scene by one frame
pub fn tick(scene: &mut Scene, input: &TickInput) {
    if scene.phase == ScenePhase::Setup {
        scene.setup();
    }

    scene.pointer = input.pointer;
    if input.toggle_debug {
        scene.debug = !scene.debug;
        log::info!("Debug view: {}", scene.debug);
    }

    scene.player.update(scene.pointer.position);

    let touching = contacts(&scene.player, &scene.obstacles);
    for idx in touching.iter().filter(|&&i| !scene.contacts.contains(&i)) {
        log::debug!("Player touched obstacle {} on frame {}", idx, scene.frame);
    }
    scene.contacts = touching;

    scene.frame += 1;
}
