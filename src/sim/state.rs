//! Scene state
//!
//! The scene owns every entity plus the seeded RNG used for placement. It is
//! built in `Setup`, populated once, and stays `Running` for the rest of the
//! page's life.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Obstacle, Player};
use super::placement::{self, PlacementParams};
use crate::settings::Settings;

/// Scene lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// Player exists, obstacles not yet placed
    Setup,
    /// Steady per-frame loop
    Running,
}

/// Latest pointer report (last event wins)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            pressed: false,
        }
    }
}

/// The whole game
#[derive(Debug, Clone)]
pub struct Scene {
    pub settings: Settings,
    pub phase: ScenePhase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub pointer: PointerState,
    /// Indices of obstacles touching the player this frame
    pub contacts: Vec<usize>,
    /// Draw collision circles
    pub debug: bool,
    /// Frames ticked so far
    pub frame: u64,
    pub seed: u64,
    rng: Pcg32,
}

impl Scene {
    /// Create a scene with the player at the canvas center
    pub fn new(settings: Settings, seed: u64) -> Self {
        let center = settings.canvas().center();
        let player = Player::new(
            center,
            settings.player_radius,
            settings.player_speed,
            settings.player_deadband,
        );
        Self {
            phase: ScenePhase::Setup,
            player,
            obstacles: Vec::new(),
            pointer: PointerState::at(center),
            contacts: Vec::new(),
            debug: settings.debug,
            frame: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
        }
    }

    /// Scatter the obstacles and start running
    ///
    /// Only the first call does anything.
    pub fn setup(&mut self) {
        if self.phase != ScenePhase::Setup {
            return;
        }

        let params = PlacementParams::from_settings(&self.settings);
        self.obstacles = placement::generate(&params, &mut self.rng);
        if self.obstacles.len() < params.count {
            log::info!(
                "Only {} of {} obstacles fit (seed {})",
                self.obstacles.len(),
                params.count,
                self.seed
            );
        } else {
            log::info!("Placed {} obstacles (seed {})", self.obstacles.len(), self.seed);
        }
        self.phase = ScenePhase::Running;
    }

    /// Whether the player currently touches any obstacle
    pub fn in_contact(&self) -> bool {
        !self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::collides;

    #[test]
    fn test_new_scene_is_in_setup() {
        let scene = Scene::new(Settings::default(), 1);
        assert_eq!(scene.phase, ScenePhase::Setup);
        assert!(scene.obstacles.is_empty());
        assert_eq!(scene.player.body.center, Vec2::new(640.0, 360.0));
        assert_eq!(scene.pointer.position, Vec2::new(640.0, 360.0));
        assert!(!scene.pointer.pressed);
    }

    #[test]
    fn test_setup_runs_once() {
        let mut scene = Scene::new(Settings::default(), 77);
        scene.setup();
        assert_eq!(scene.phase, ScenePhase::Running);
        let first: Vec<Vec2> = scene.obstacles.iter().map(|o| o.body.center).collect();
        assert!(first.len() <= scene.settings.obstacle_count);

        scene.setup();
        let second: Vec<Vec2> = scene.obstacles.iter().map(|o| o.body.center).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let mut a = Scene::new(Settings::default(), 2024);
        let mut b = Scene::new(Settings::default(), 2024);
        a.setup();
        b.setup();
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (x, y) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(x.body, y.body);
            assert_eq!(x.frame, y.frame);
        }
    }

    #[test]
    fn test_obstacles_do_not_overlap() {
        let mut scene = Scene::new(Settings::default(), 5);
        scene.setup();
        for (i, a) in scene.obstacles.iter().enumerate() {
            for b in &scene.obstacles[i + 1..] {
                assert!(!collides(a, b));
            }
        }
    }

    #[test]
    fn test_huge_obstacle_count_still_sets_up() {
        let settings =
            Settings::from_json(r#"{ "obstacle_count": 18446744073709551615 }"#).unwrap();
        let mut scene = Scene::new(settings, 8);
        scene.setup();
        assert_eq!(scene.phase, ScenePhase::Running);
        assert!(scene.obstacles.len() <= scene.settings.max_attempts as usize);
    }

    #[test]
    fn test_debug_follows_settings() {
        let settings = Settings {
            debug: true,
            ..Settings::default()
        };
        assert!(Scene::new(settings, 0).debug);
    }
}
