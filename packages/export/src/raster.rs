use std::io::Cursor;

use image::codecs::jpeg::JpegDecoder;
use image::ImageDecoder;

use crate::errors::ExportError;

/// A rasterized region: JPEG bytes plus pixel dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// 1 = gray, 3 = RGB, 4 = CMYK
    pub components: u8,
}

impl RasterImage {
    /// Wrap JPEG bytes, reading dimensions and components from the frame header
    pub fn from_jpeg(bytes: Vec<u8>) -> Result<Self, ExportError> {
        let decoder = JpegDecoder::new(Cursor::new(bytes.as_slice()))?;
        let (width, height) = decoder.dimensions();
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyImage);
        }
        let components = decoder.original_color_type().channel_count();

        Ok(Self {
            jpeg: bytes,
            width,
            height,
            components,
        })
    }

    pub fn color_space(&self) -> &'static str {
        match self.components {
            1 => "DeviceGray",
            4 => "DeviceCMYK",
            _ => "DeviceRGB",
        }
    }
}

/// Produces a JPEG of the given HTML region at `scale` device pixels per
/// CSS pixel
pub trait Rasterizer {
    fn rasterize(&self, region_html: &str, scale: f32) -> Result<RasterImage, ExportError>;
}

/// Rasterizer that returns an image rendered ahead of time
#[derive(Debug, Clone)]
pub struct Prerendered(pub RasterImage);

impl Rasterizer for Prerendered {
    fn rasterize(&self, _region_html: &str, _scale: f32) -> Result<RasterImage, ExportError> {
        Ok(self.0.clone())
    }
}

/// Black JPEG of the given size, encoded through `image`
#[cfg(test)]
pub(crate) fn test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .unwrap();
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_dimensions_and_components() {
        let image = RasterImage::from_jpeg(test_jpeg(1240, 1754)).unwrap();
        assert_eq!((image.width, image.height), (1240, 1754));
        assert_eq!(image.components, 3);
        assert_eq!(image.color_space(), "DeviceRGB");
    }

    #[test]
    fn test_grayscale_maps_to_device_gray() {
        let img = image::DynamicImage::ImageLuma8(image::GrayImage::new(8, 4));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
            .unwrap();

        let image = RasterImage::from_jpeg(bytes).unwrap();
        assert_eq!(image.components, 1);
        assert_eq!(image.color_space(), "DeviceGray");
    }

    #[test]
    fn test_rejects_non_jpeg() {
        let err = RasterImage::from_jpeg(b"\x89PNG\r\n".to_vec()).unwrap_err();
        assert!(matches!(err, ExportError::Image(_)));
    }

    #[test]
    fn test_rejects_missing_frame() {
        let err = RasterImage::from_jpeg(vec![0xFF, 0xD8, 0xFF, 0xD9]).unwrap_err();
        assert!(matches!(err, ExportError::Image(_)));
    }

    #[test]
    fn test_rejects_truncated() {
        let mut bytes = test_jpeg(10, 10);
        bytes.truncate(12);
        assert!(RasterImage::from_jpeg(bytes).is_err());
    }

    #[test]
    fn test_keeps_original_bytes() {
        let bytes = test_jpeg(16, 16);
        let image = RasterImage::from_jpeg(bytes.clone()).unwrap();
        assert_eq!(image.jpeg, bytes);
    }
}
