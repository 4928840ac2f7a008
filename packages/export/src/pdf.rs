use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::errors::ExportError;
use crate::layout::{mm_to_pt, PageFormat, Placement};
use crate::raster::RasterImage;

/// Assemble a one-page PDF with the raster drawn at `placement`.
///
/// The JPEG is embedded as-is through `DCTDecode`; nothing is re-encoded.
pub fn build_pdf(
    image: &RasterImage,
    page: &PageFormat,
    placement: &Placement,
) -> Result<Vec<u8>, ExportError> {
    if image.width == 0 || image.height == 0 {
        return Err(ExportError::EmptyImage);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(image.width),
            "Height" => i64::from(image.height),
            "ColorSpace" => image.color_space(),
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        image.jpeg.clone(),
    ));

    let (x, y) = placement.origin_pt(page);
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    mm_to_pt(placement.width_mm).into(),
                    0.into(),
                    0.into(),
                    mm_to_pt(placement.height_mm).into(),
                    x.into(),
                    y.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im1".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page.width_pt().into(), page.height_pt().into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im1" => image_id,
            },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}
