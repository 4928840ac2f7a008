//! # Resume Preview
//!
//! Turns resume data into HTML for the live preview pane and for the
//! region handed to the rasterizer on export.
//!
//! - [`project`]: document → flat view model (what is shown, with what CSS)
//! - [`render_document`]: editor flow, `#resume-preview`
//! - [`render_static`]: form flow, `#resume`

mod context;
mod document_html;
mod projection;
mod static_html;

#[cfg(test)]
mod tests;

pub use context::RenderOptions;
pub use document_html::render_document;
pub use projection::{project, ItemView, PreviewModel, SectionView};
pub use static_html::render_static;
