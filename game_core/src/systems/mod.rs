pub mod ai;
pub mod collision;
pub mod spawn;

pub use ai::*;
pub use collision::*;
pub use spawn::*;
