mod code;
mod game;
mod results;
mod scoring;

pub use code::Code;
pub use code::Color;
pub use game::*;
pub use results::*;
pub use scoring::*;
