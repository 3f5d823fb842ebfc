// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at startup from the embedded SVG logo.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/tubegrid.svg");

/// Edge length of the rasterized icon.
const ICON_SIZE: u32 = 128;

/// Rasterizes a square RGBA buffer of the logo.
fn rasterize(size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default())
        .map_err(|err| log::warn!("Window icon SVG is invalid: {err}"))
        .ok()?;

    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Returns `None` if the logo cannot be rendered; the window then uses the
/// platform default.
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE)
        .map_err(|err| log::warn!("Window icon rejected: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_requested_size() {
        let pixmap = rasterize(64).expect("embedded logo renders");
        assert_eq!(pixmap.width(), 64);
        assert_eq!(pixmap.data().len(), 64 * 64 * 4);
    }

    #[test]
    fn logo_is_not_blank() {
        let pixmap = rasterize(ICON_SIZE).expect("embedded logo renders");
        assert!(pixmap.data().chunks(4).any(|px| px[3] > 0));
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
