pub mod collision;
pub mod input;
pub mod movement;
pub mod referee;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use referee::*;
pub use scoring::*;
