//! SVG-to-PNG rasterization via usvg/resvg.

use std::path::Path;

use anyhow::Context as _;

use crate::error::{StageflowError, StageflowResult};

/// Parse and rasterize an SVG document at its declared size.
pub fn rasterize(svg: &str) -> StageflowResult<image::RgbaImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    if width == 0 || height == 0 {
        return Err(StageflowError::render("svg has an empty size"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StageflowError::render("failed to allocate pixmap"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let mut rgba = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| StageflowError::render("pixmap size mismatch"))
}

pub fn write_png(svg: &str, path: &Path) -> StageflowResult<()> {
    let img = rasterize(svg)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// tiny-skia pixmaps are premultiplied; PNG wants straight alpha.
fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
