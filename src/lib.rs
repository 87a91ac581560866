//! Deterministic mapping from workplace names to display colors.
//!
//! The UI distinguishes workplaces by color without storing an assignment
//! anywhere: a name is hashed with a 31x polynomial rolling hash (32-bit
//! signed wraparound, UTF-16 code units) and the absolute value modulo the
//! palette length picks the slot. The same name always gets the same color,
//! in every process, with no coordination.
//!
//! Use [`color_for`] for the built-in palette, or construct a [`Palette`]
//! from your own color list:
//!
//! ```
//! use location_color::{color_for, Color, Palette};
//!
//! assert_eq!(color_for("Berlin"), "#9F4CF5");
//!
//! let palette = Palette::new(vec![Color::from("#FF0000"), Color::from("#00FF00")])?;
//! let a = palette.color_for("Büro Berlin");
//! let b = palette.color_for("Büro Berlin");
//! assert_eq!(a, b);
//! # Ok::<(), location_color::PaletteError>(())
//! ```

pub mod hash;
pub mod palette;

pub use palette::{color_for, Color, Palette, PaletteError, DEFAULT_COLORS};
