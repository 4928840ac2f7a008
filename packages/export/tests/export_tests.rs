//! End-to-end export tests

use std::io::Cursor;

use lopdf::Document;
use resume_export::{
    ExportError, ExportProfile, Exporter, PageFormat, Placement, Prerendered, RasterImage, Rasterizer,
};

fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(width, height));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .unwrap();
    bytes
}

struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _region_html: &str, _scale: f32) -> Result<RasterImage, ExportError> {
        Err(ExportError::Rasterize("canvas tainted".to_string()))
    }
}

/// Records the scale it was asked for
struct ScaleCheck(f32);

impl Rasterizer for ScaleCheck {
    fn rasterize(&self, _region_html: &str, scale: f32) -> Result<RasterImage, ExportError> {
        assert_eq!(scale, self.0);
        RasterImage::from_jpeg(jpeg(100, 140))
    }
}

#[test]
fn test_editor_export_uses_fixed_name() -> anyhow::Result<()> {
    let raster = RasterImage::from_jpeg(jpeg(1200, 1700))?;
    let exporter = Exporter::new(Prerendered(raster), ExportProfile::editor());

    let file = exporter.export("<div id=\"resume-preview\"></div>", "Jane Doe").unwrap();
    assert_eq!(file.file_name, "resume.pdf");
    assert!(file.bytes.starts_with(b"%PDF-"));

    let doc = Document::load_mem(&file.bytes)?;
    assert_eq!(doc.get_pages().len(), 1);
    Ok(())
}

#[test]
fn test_form_export_uses_full_name_and_scale() {
    let exporter = Exporter::new(ScaleCheck(5.0), ExportProfile::form());
    let file = exporter.export("<div id=\"resume\"></div>", "Jane  Doe").unwrap();
    assert_eq!(file.file_name, "Jane_Doe_Resume.pdf");
}

#[test]
fn test_failure_is_swallowed() {
    let exporter = Exporter::new(FailingRasterizer, ExportProfile::editor());
    assert!(exporter.export("<div></div>", "Jane").is_none());
    assert!(matches!(
        exporter.try_export("<div></div>", "Jane"),
        Err(ExportError::Rasterize(_))
    ));
}

#[test]
fn test_fit_leaves_top_offset_blank() {
    let page = PageFormat::A4;
    let placement = Placement::fit(&page, 100.0, 140.0, 30.0);
    assert_eq!(placement.y_mm, 30.0);
    assert!(placement.y_mm + placement.height_mm <= page.height_mm + 1e-3);
}
