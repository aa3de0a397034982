#![warn(clippy::all, clippy::cargo)]

mod listlife;
mod utils;

pub use listlife::{next_generation, CellChange, ChangeKind, Generation, LifeState};
pub use utils::parse_rle;
