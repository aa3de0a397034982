mod engine;
mod state;


pub use engine::{next_generation, CellChange, ChangeKind, Generation};
pub use state::LifeState;
