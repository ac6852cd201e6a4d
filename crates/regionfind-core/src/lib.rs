//! regionfind Core - Basic data structures for color region finding
//!
//! This crate provides the fundamental data structures shared by the
//! other regionfind crates:
//!
//! - [`Pix`] / [`PixMut`] - RGBA image container (immutable / mutable)
//! - [`PixelGrid`] / [`PixelGridMut`] - the grid access seam the algorithms use
//! - [`Color`] - RGBA color value, plus packing helpers in [`color`]
//! - [`Point`] / [`Region`] - pixel coordinates and ordered point lists

pub mod color;
pub mod error;
pub mod grid;
pub mod pix;
pub mod point;

pub use color::Color;
pub use error::{Error, Result};
pub use grid::{PixelGrid, PixelGridMut};
pub use pix::{ImageFormat, Pix, PixMut};
pub use point::{Point, Region};
