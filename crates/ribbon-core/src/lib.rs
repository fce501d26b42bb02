pub mod affine;
pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod motion;
pub mod palette;
pub mod rain;
pub mod resize;
pub mod sketch;

pub use affine::*;
pub use chain::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use mesh::*;
pub use motion::*;
pub use palette::*;
pub use rain::*;
pub use resize::*;
pub use sketch::*;
