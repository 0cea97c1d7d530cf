//! Platform abstraction layer
//!
//! Browser event handlers never touch the scene directly. They push
//! `InputEvent`s into an `InputCell`, and the frame loop reads one `TickInput`
//! snapshot per frame.

pub mod input;

pub use input::{InputCell, InputEvent};
