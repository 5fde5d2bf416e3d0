//! Reusable widgets
//!
//! All class names refer to rules in the application's global stylesheet.

mod button;
mod image;
mod input;

pub use button::*;
pub use image::*;
pub use input::*;
