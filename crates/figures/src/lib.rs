mod board;
pub mod consts;
mod error;
mod figure;
mod growth;
pub mod polygon;

pub use board::{Board, Pressed};
pub use error::FieldError;
pub use figure::{Figure, FigureKind};
pub use growth::{Clicked, Growth};

pub use glam::Vec2;
