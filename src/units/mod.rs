//! Small numeric value types passed across the windowing and drawing APIs.
//!
//! Each family comes in exactly two representations: an integer one for
//! pixel-space coordinates and a floating one for animation math. Conversions
//! between the two are always explicit.

mod color;
mod rect;
mod vec2;

pub use color::{Color, ColorF};
pub use rect::{Rectf, Recti};
pub use vec2::{Vec2f, Vec2i};

/// A unit-type division was attempted with a zero component in the divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("division by zero")]
pub struct DivideByZero;
