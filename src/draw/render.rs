//! Cairo-based rendering for drawables and the preview ghost.

use super::color::Color;
use super::drawable::Drawable;
use super::ghost::Ghost;

/// Opacity applied to the marker ghost disc.
pub const MARKER_GHOST_ALPHA: f64 = 0.4;

/// Opacity applied to the sticker ghost glyph.
pub const STICKER_GHOST_ALPHA: f64 = 0.6;

/// Font family used for sticker glyphs.
///
/// Pango falls back to the system emoji font for glyphs the family itself
/// does not cover, so "Sans" handles both emoji and plain-text stickers.
const STICKER_FONT_FAMILY: &str = "Sans";

/// Fills the entire surface with the canvas background color.
///
/// Called first on every repaint; everything else paints over it.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - a failed paint just leaves the old pixels
}

/// Renders all drawables in a collection to a Cairo context.
///
/// Drawables are painted in the order they appear, so the slice order is
/// the z-order (first drawable = bottom layer).
pub fn render_drawables(ctx: &cairo::Context, drawables: &[Drawable]) {
    for drawable in drawables {
        render_drawable(ctx, drawable);
    }
}

/// Renders a single drawable to a Cairo context.
///
/// Dispatches to the appropriate rendering function per variant.
pub fn render_drawable(ctx: &cairo::Context, drawable: &Drawable) {
    match drawable {
        Drawable::Stroke {
            points,
            width,
            color,
        } => {
            render_stroke(ctx, points, *width, *color);
        }
        Drawable::Sticker { glyph, x, y, size } => {
            render_sticker(ctx, glyph, *x, *y, *size, 1.0);
        }
    }
}

/// Render a marker stroke (polyline through points).
///
/// A stroke with fewer than two points paints nothing. It still occupies
/// its slot in history and becomes visible once the drag appends a second
/// point.
pub fn render_stroke(ctx: &cairo::Context, points: &[(f64, f64)], width: f64, color: Color) {
    if points.len() < 2 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    // Start at first point
    let (x0, y0) = points[0];
    ctx.move_to(x0, y0);

    // Draw lines through all points
    for &(x, y) in &points[1..] {
        ctx.line_to(x, y);
    }

    let _ = ctx.stroke();
}

/// Renders a sticker glyph centered at (x, y) using Pango.
///
/// The glyph's ink extents are measured so that the visible pixels, not the
/// logical text box, are centered on the placement point. `alpha` is 1.0
/// for committed stickers and [`STICKER_GHOST_ALPHA`] for the ghost.
pub fn render_sticker(ctx: &cairo::Context, glyph: &str, x: f64, y: f64, size: f64, alpha: f64) {
    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save().ok();

    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);

    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family(STICKER_FONT_FAMILY);
    font_desc.set_absolute_size(size * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(glyph);

    // Measure ink extents in Pango units and center them on (x, y)
    let (ink_rect, _logical_rect) = layout.extents();
    let scale = pango::SCALE as f64;
    let ink_x = ink_rect.x() as f64 / scale;
    let ink_y = ink_rect.y() as f64 / scale;
    let ink_width = ink_rect.width() as f64 / scale;
    let ink_height = ink_rect.height() as f64 / scale;

    ctx.move_to(x - ink_x - ink_width / 2.0, y - ink_y - ink_height / 2.0);
    ctx.set_source_rgba(0.0, 0.0, 0.0, alpha);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Renders the preview ghost.
///
/// The marker ghost is a filled disc of radius width/2 in the ink color at
/// 40% opacity; the sticker ghost is the glyph at 60% opacity. The caller
/// decides *whether* to render (only while the pointer is up).
pub fn render_ghost(ctx: &cairo::Context, ghost: &Ghost, ink: Color) {
    match ghost {
        Ghost::Marker { x, y, width } => {
            let faded = ink.with_alpha(MARKER_GHOST_ALPHA);
            ctx.set_source_rgba(faded.r, faded.g, faded.b, faded.a);
            ctx.arc(*x, *y, width / 2.0, 0.0, std::f64::consts::PI * 2.0);
            let _ = ctx.fill();
        }
        Ghost::Sticker { x, y, glyph, size } => {
            render_sticker(ctx, glyph, *x, *y, *size, STICKER_GHOST_ALPHA);
        }
    }
}
