//! Image helpers: natural size lookup and center-crop painting.

use eframe::egui::{self, CornerRadius, Image, ImageSource, Rect, Ui, Vec2, pos2};

const FULL_UV: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

/// UV sub-rectangle that scales `image` to cover `target` and crops the
/// overflow evenly on both sides.
pub fn crop_uv(image: Vec2, target: Vec2) -> Rect {
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return FULL_UV;
    }
    let scale = (target.x / image.x).max(target.y / image.y);
    let visible = target / scale / image;
    let margin = (Vec2::splat(1.0) - visible) / 2.0;
    Rect::from_min_size(margin.to_pos2(), visible)
}

/// Size the source decodes to, or `fallback` while it is not available.
pub fn natural_size(ctx: &egui::Context, source: ImageSource<'static>, fallback: Vec2) -> Vec2 {
    Image::new(source)
        .fit_to_original_size(1.0)
        .load_for_size(ctx, Vec2::INFINITY)
        .ok()
        .and_then(|poll| poll.size())
        .unwrap_or(fallback)
}

/// Paint `source` into `rect`, cropped to fill it.
pub fn paint_cropped(ui: &Ui, source: ImageSource<'static>, rect: Rect, corners: CornerRadius) {
    let image = Image::new(source).corner_radius(corners);
    let uv = match image.load_for_size(ui.ctx(), rect.size()) {
        Ok(poll) => poll.size().map_or(FULL_UV, |size| crop_uv(size, rect.size())),
        Err(e) => {
            log::debug!("image not loaded: {e}");
            FULL_UV
        }
    };
    image.uv(uv).paint_at(ui, rect);
}
