use crate::errors::ExportError;
use crate::layout::{PageFormat, Placement};
use crate::pdf::build_pdf;
use crate::profile::ExportProfile;
use crate::raster::Rasterizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Runs the rasterize → place → PDF pipeline for one flow
pub struct Exporter<R> {
    rasterizer: R,
    profile: ExportProfile,
    page: PageFormat,
}

impl<R: Rasterizer> Exporter<R> {
    pub fn new(rasterizer: R, profile: ExportProfile) -> Self {
        Self {
            rasterizer,
            profile,
            page: PageFormat::A4,
        }
    }

    pub fn profile(&self) -> &ExportProfile {
        &self.profile
    }

    /// Export the region. Failures are logged and yield `None`; there is
    /// no retry.
    pub fn export(&self, region_html: &str, full_name: &str) -> Option<ExportedFile> {
        match self.try_export(region_html, full_name) {
            Ok(file) => {
                tracing::info!(file = %file.file_name, bytes = file.bytes.len(), "exported resume");
                Some(file)
            }
            Err(error) => {
                tracing::error!(error = %error, "Error generating PDF");
                None
            }
        }
    }

    pub fn try_export(&self, region_html: &str, full_name: &str) -> Result<ExportedFile, ExportError> {
        let image = self.rasterizer.rasterize(region_html, self.profile.scale)?;

        // Size in CSS pixels; only the aspect ratio survives the fit
        let scale = if self.profile.scale > 0.0 { self.profile.scale } else { 1.0 };
        let placement = Placement::fit(
            &self.page,
            image.width as f32 / scale,
            image.height as f32 / scale,
            self.profile.top_offset_mm,
        );

        let bytes = build_pdf(&image, &self.page, &placement)?;
        Ok(ExportedFile {
            file_name: self.profile.file_name.file_name(full_name),
            bytes,
        })
    }
}
