//! # Figurakit Core
//!
//! Color models, conversions, and error types for Figurakit.
//! Provides the canonical RGB color store, the derived CMYK/HSL/HSV
//! views, and the error taxonomy shared across the workspace.

pub mod color;
pub mod error;

pub use color::{Cmyk, ColorScheme, ColorValue, Hsl, Hsv, Rgb};
pub use error::{Result, ShapeError};
