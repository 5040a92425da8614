//! Procedural generator for a fixed set of PWA icon PNGs.
//!
//! The whole pipeline is deterministic and allocation-only until the final
//! file write:
//!
//! - [`render_logo`] rasterizes the flat logo artwork (background, three
//!   accent bars, one dot) into an RGBA8 bitmap
//! - [`encode_png`] wraps the bitmap in a standard PNG container (signature,
//!   IHDR/IDAT/IEND chunk stream, zlib-compressed scanlines)
//! - [`generate_icons`] writes the three-file icon set into an output
//!   directory, overwriting unconditionally
#![forbid(unsafe_code)]

pub mod error;
pub mod icons;
pub mod logo;
pub mod png;

pub use error::{IcongenError, IcongenResult};
pub use icons::{DEFAULT_OUT_DIR, ICON_SET, IconFile, generate_icons};
pub use logo::{LogoBitmap, LogoPalette, render_logo};
pub use png::encode_png;
