//! # Resume Export
//!
//! Turns a rendered resume region into a downloadable single-page PDF.
//!
//! ```text
//! region HTML ──Rasterizer──► JPEG ──Placement::fit──► build_pdf ──► bytes
//! ```
//!
//! Rasterization is supplied by the host (a browser canvas, a headless
//! renderer, or a pre-rendered file). Everything after it is done here.

mod errors;
mod exporter;
mod layout;
mod pdf;
mod profile;
mod raster;

pub use errors::ExportError;
pub use exporter::{ExportedFile, Exporter};
pub use layout::{PageFormat, Placement};
pub use pdf::build_pdf;
pub use profile::{ExportProfile, FileNaming};
pub use raster::{Prerendered, RasterImage, Rasterizer};
