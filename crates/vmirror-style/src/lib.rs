//! vmirror style values
//!
//! Typed colors and lengths carried by view properties, with the canonical
//! textual forms the inspector protocol expects.

mod color;
mod length;
mod number;

pub use color::Color;
pub use length::Length;
pub use number::format_number;
