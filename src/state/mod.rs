//! Application state module

pub mod events;
mod forms;
mod hit_map;
mod submission;

pub use events::EventHub;
pub use forms::*;
pub use hit_map::*;
pub use submission::*;
