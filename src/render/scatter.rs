use log::{debug, warn};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::canvas::Canvas;
use super::style::*;
use super::viewport::{nice_ticks, PlotArea, Viewport};
use crate::color::series_color;
use crate::data::model::PointDataset;

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Render the dataset as unconnected circular markers on an equal-aspect
/// plane. An empty dataset yields an empty set of axes.
pub fn render(dataset: &PointDataset) -> Canvas {
    let mut pixmap =
        Pixmap::new(FIGURE_WIDTH, FIGURE_HEIGHT).expect("figure size is a non-zero constant");
    pixmap.fill(rgb(BACKGROUND));

    let area = PlotArea {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: FIGURE_WIDTH as f32 - MARGIN_LEFT - MARGIN_RIGHT,
        height: FIGURE_HEIGHT as f32 - MARGIN_TOP - MARGIN_BOTTOM,
    };
    let viewport = Viewport::fit_equal(dataset.bounds(), area);
    debug!(
        "viewport x {:?} y {:?} ({:.3} px/unit)",
        viewport.x_range,
        viewport.y_range,
        viewport.x_scale()
    );

    draw_markers(&mut pixmap, &viewport, dataset);
    draw_axes(&mut pixmap, &viewport);

    Canvas::new(pixmap, viewport)
}

fn draw_markers(pixmap: &mut Pixmap, viewport: &Viewport, dataset: &PointDataset) {
    let mut paint = Paint::default();
    paint.set_color(rgb(series_color()));
    paint.anti_alias = true;

    let mut skipped = 0usize;
    for p in dataset.points() {
        if !p.is_finite() {
            skipped += 1;
            continue;
        }
        let (px, py) = viewport.to_pixel(p.x, p.y);
        // None when the pixel position overflowed f32.
        let Some(marker) = PathBuilder::from_circle(px, py, MARKER_RADIUS) else {
            skipped += 1;
            continue;
        };
        pixmap.fill_path(&marker, &paint, FillRule::Winding, Transform::identity(), None);
    }

    if skipped > 0 {
        warn!("skipped {skipped} point(s) that cannot be placed on the plot");
    }
}

/// Axes box plus outward tick marks on the bottom and left edges.
fn draw_axes(pixmap: &mut Pixmap, viewport: &Viewport) {
    let area = viewport.area;

    let mut paint = Paint::default();
    paint.set_color(rgb(FOREGROUND));
    paint.anti_alias = true;
    let stroke = Stroke {
        width: FRAME_WIDTH,
        ..Stroke::default()
    };

    if let Some(frame) = Rect::from_xywh(area.left, area.top, area.width, area.height) {
        let path = PathBuilder::from_rect(frame);
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    let mut pb = PathBuilder::new();
    for x in nice_ticks(viewport.x_range.0, viewport.x_range.1, MAX_TICKS) {
        let (px, _) = viewport.to_pixel(x, viewport.y_range.0);
        pb.move_to(px, area.bottom());
        pb.line_to(px, area.bottom() + TICK_LENGTH);
    }
    for y in nice_ticks(viewport.y_range.0, viewport.y_range.1, MAX_TICKS) {
        let (_, py) = viewport.to_pixel(viewport.x_range.0, y);
        pb.move_to(area.left, py);
        pb.line_to(area.left - TICK_LENGTH, py);
    }
    if let Some(ticks) = pb.finish() {
        pixmap.stroke_path(&ticks, &paint, &stroke, Transform::identity(), None);
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba8(r, g, b, 255)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Point;

    fn dataset(points: &[(f64, f64)]) -> PointDataset {
        points.iter().copied().map(Point::from).collect()
    }

    fn marker_pixel(canvas: &Canvas, x: f64, y: f64) -> [u8; 4] {
        let (px, py) = canvas.viewport().to_pixel(x, y);
        canvas.pixel(px as u32, py as u32).unwrap()
    }

    #[test]
    fn markers_are_drawn_at_data_positions() {
        let canvas = render(&dataset(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]));
        let [r, g, b] = series_color();
        for (x, y) in [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)] {
            assert_eq!(marker_pixel(&canvas, x, y), [r, g, b, 255], "marker at ({x}, {y})");
        }
        // No connecting line: the midpoint between two far markers stays blank.
        assert_eq!(marker_pixel(&canvas, 1.5, 2.5), [255, 255, 255, 255]);
    }

    #[test]
    fn empty_dataset_renders_blank_axes() {
        let canvas = render(&PointDataset::default());
        assert_eq!((canvas.width(), canvas.height()), (FIGURE_WIDTH, FIGURE_HEIGHT));
        let vp = canvas.viewport();
        assert!((vp.x_scale() - vp.y_scale()).abs() < 1e-9);
        let (cx, cy) = vp.to_pixel(0.5, 0.5);
        assert_eq!(canvas.pixel(cx as u32, cy as u32), Some([255, 255, 255, 255]));
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let canvas = render(&dataset(&[(f64::NAN, 1.0), (0.0, 0.0), (1.0, f64::INFINITY)]));
        let [r, g, b] = series_color();
        assert_eq!(marker_pixel(&canvas, 0.0, 0.0), [r, g, b, 255]);
    }

    #[test]
    fn far_apart_points_are_all_drawn() {
        let canvas = render(&dataset(&[(-1e308, 0.0), (1e308, 1.0), (0.0, 0.5)]));
        let [r, g, b] = series_color();
        for (x, y) in [(-1e308, 0.0), (1e308, 1.0), (0.0, 0.5)] {
            assert_eq!(marker_pixel(&canvas, x, y), [r, g, b, 255], "marker at ({x}, {y})");
        }
    }

    #[test]
    fn render_uses_equal_aspect() {
        let canvas = render(&dataset(&[(0.0, 0.0), (1000.0, 1.0)]));
        let vp = canvas.viewport();
        let ratio = vp.x_scale() / vp.y_scale();
        assert!((ratio - 1.0).abs() < 1e-9, "ratio {ratio}");
    }
}
