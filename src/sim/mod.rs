//! Platform-independent game logic
//!
//! Nothing in here touches the DOM or a drawing surface:
//! - Seeded RNG only
//! - Stable iteration order (obstacles keep their placement order)
//! - One `tick` per displayed frame

pub mod collision;
pub mod entity;
pub mod placement;
pub mod state;
pub mod tick;

pub use collision::{collides, contacts, is_clear_of};
pub use entity::{Circle, Collidable, Obstacle, Player, SpriteFrame};
pub use placement::{PlacementArea, PlacementParams, generate};
pub use state::{PointerState, Scene, ScenePhase};
pub use tick::{TickInput, tick};
