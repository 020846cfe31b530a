mod game;
mod global_id;

pub use game::*;
pub use global_id::*;
