use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid JPEG: {0}")]
    Image(#[from] image::ImageError),

    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("Image has zero size")]
    EmptyImage,

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
