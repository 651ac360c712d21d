use std::io::{Cursor, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::{debug, info};
use tempfile::NamedTempFile;
use tiny_skia::Pixmap;

use super::viewport::Viewport;
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Canvas – the rendered plot before it hits the disk
// ---------------------------------------------------------------------------

/// In-memory raster of a plot plus the viewport it was drawn with.
pub struct Canvas {
    pixmap: Pixmap,
    viewport: Viewport,
}

impl Canvas {
    pub(crate) fn new(pixmap: Pixmap, viewport: Viewport) -> Self {
        Canvas { pixmap, viewport }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Straight (non-premultiplied) RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn to_image(&self) -> RgbaImage {
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        // Length always matches width * height * 4.
        RgbaImage::from_raw(self.width(), self.height(), data)
            .unwrap_or_else(|| RgbaImage::new(self.width(), self.height()))
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> std::result::Result<Vec<u8>, image::ImageError> {
        let mut buf = Cursor::new(Vec::new());
        self.to_image().write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Write the canvas to `path` as PNG, replacing any existing file.
    ///
    /// The bytes go to a temp file in the destination directory that is
    /// persisted over `path`, so a failed save leaves neither a partial image
    /// nor a stray temp file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self
            .encode_png()
            .map_err(|e| PlotError::io(path, std::io::Error::other(e)))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PlotError::io(path, e))?;
        debug!("staging image in {}", tmp.path().display());
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| PlotError::io(path, e))?;
        tmp.persist(path).map_err(|e| PlotError::io(path, e.error))?;

        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}
