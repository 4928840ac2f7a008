//! # Resume Document
//!
//! Data model shared by every resume crate.
//!
//! ```text
//! Document
//!  ├─ theme (background / text / accent)
//!  ├─ profile image + position
//!  └─ sections[]            (ordered, insertion order)
//!      ├─ heading style
//!      └─ content[]         (ordered, reorderable)
//!          └─ title / subheading / details / date styles
//! ```
//!
//! Values are plain owned data compared by deep equality, which is what the
//! editor's history relies on to skip no-op edits.

mod dates;
mod errors;
mod id_generator;
mod image;
mod model;
mod patch;
mod seed;
mod style;

pub use dates::{format_date_range, format_month_year, format_short_month_year};
pub use errors::ImageError;
pub use id_generator::IdGenerator;
pub use image::{ImagePolicy, ImageUpload, DEFAULT_IMAGE_LIMIT};
pub use model::{ContentItem, Document, ImagePosition, Section, SectionKind, Theme};
pub use patch::{ItemPatch, SectionPatch};
pub use style::{
    FontSize, FontStyle, FontWeight, StyleAttributes, StylePatch, TextAlign, TextDecoration,
};

// Re-export the date type used throughout the model
pub use chrono::NaiveDate;
