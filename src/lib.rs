#![warn(clippy::all)]

mod engine;
mod gui;

pub use engine::{Cell, ColorField, Rgb};
pub use gui::{App, Config};
