use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::ChartPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawablePrimitive, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_filled: usize,
    pub contours_stroked: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub labels_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::Backend(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = File::create(path.as_ref())
            .map_err(|err| ChartError::Backend(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for primitive in &frame.primitives {
            match primitive {
                DrawablePrimitive::FilledPolygon(polygon) => {
                    append_closed_path(context, &polygon.points);
                    apply_color(context, polygon.color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                    stats.polygons_filled += 1;
                }
                DrawablePrimitive::StrokedPolygon(polygon) => {
                    for contour in &polygon.contours {
                        append_closed_path(context, contour);
                    }
                    apply_color(context, polygon.color);
                    context.set_line_width(polygon.stroke_width);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
                    stats.contours_stroked += polygon.contours.len();
                }
                DrawablePrimitive::LineSegment(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.move_to(line.from.x, line.from.y);
                    context.line_to(line.to.x, line.to.y);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawablePrimitive::Circle(circle) => {
                    context.new_sub_path();
                    context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
                    apply_color(context, circle.color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    stats.circles_drawn += 1;
                }
                DrawablePrimitive::LabelAnchor(label) => {
                    let layout = pangocairo::functions::create_layout(context);
                    let font_description =
                        FontDescription::from_string(&format!("Sans {}px", label.font_size));
                    layout.set_font_description(Some(&font_description));
                    layout.set_text(&label.text);

                    // Anchors are baseline positions; pango lays out from the top edge.
                    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
                    apply_color(context, label.color);
                    context.move_to(label.position.x, label.position.y - baseline);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.labels_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_closed_path(context: &Context, points: &[ChartPoint]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    context.move_to(first.x, first.y);
    for point in rest {
        context.line_to(point.x, point.y);
    }
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
