//! The window around the drawing session

mod error;
mod keys;
mod sdl;

pub use error::ChromeError;
pub use sdl::run;

const WINDOW_TITLE: &str = "2D Line Drawing Algorithms";
