pub mod ball;
pub mod computer;
pub mod player;

pub use ball::*;
pub use computer::*;
pub use player::*;
