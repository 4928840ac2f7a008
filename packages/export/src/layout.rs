//! Page geometry. All lengths are millimetres unless noted.

const POINTS_PER_MM: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageFormat {
    /// ISO A4, portrait
    pub const A4: PageFormat = PageFormat {
        width_mm: 210.0,
        height_mm: 297.0,
    };

    pub fn width_pt(&self) -> f32 {
        mm_to_pt(self.width_mm)
    }

    pub fn height_pt(&self) -> f32 {
        mm_to_pt(self.height_mm)
    }
}

pub(crate) fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Where the raster lands on the page, measured from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl Placement {
    /// Scale an image of `width` × `height` (any unit) to fit below
    /// `top_offset_mm`, keeping its aspect ratio, centred horizontally.
    pub fn fit(page: &PageFormat, width: f32, height: f32, top_offset_mm: f32) -> Placement {
        let top = top_offset_mm.clamp(0.0, page.height_mm);
        if width <= 0.0 || height <= 0.0 {
            return Placement {
                x_mm: page.width_mm / 2.0,
                y_mm: top,
                width_mm: 0.0,
                height_mm: 0.0,
            };
        }

        let ratio = (page.width_mm / width).min((page.height_mm - top) / height);
        let width_mm = width * ratio;
        let height_mm = height * ratio;

        Placement {
            x_mm: (page.width_mm - width_mm) / 2.0,
            y_mm: top,
            width_mm,
            height_mm,
        }
    }

    /// Lower-left corner in PDF user space (origin at the bottom)
    pub(crate) fn origin_pt(&self, page: &PageFormat) -> (f32, f32) {
        (
            mm_to_pt(self.x_mm),
            mm_to_pt(page.height_mm - self.y_mm - self.height_mm),
        )
    }
}
