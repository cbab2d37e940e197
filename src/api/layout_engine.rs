use tracing::{debug, trace, warn};

use crate::core::{
    AttributeSet, ChartPoint, LabelPlacement, PolygonFrame, SideBaseline, VertexList, Viewport,
};
use crate::error::ChartResult;
use crate::render::{
    ChartLayerKind, ChartLayerStack, Circle, FilledPolygon, LabelAnchor, LayeredRenderFrame,
    LineSegment, RenderFrame, StrokedPolygon,
};

use super::ChartConfig;
use super::validation::{ValidatedInput, validate_chart_input};

/// Pure layout engine for polygon distribution charts.
///
/// Carries no state: every call recomputes the whole frame from its inputs,
/// so identical inputs always produce identical frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonChartLayout;

impl PolygonChartLayout {
    /// Resolves center and circumradius without emitting primitives.
    pub fn frame(
        config: &ChartConfig,
        attributes: &AttributeSet,
        viewport: Viewport,
    ) -> ChartResult<PolygonFrame> {
        let input = validate_chart_input(config, attributes, viewport)?;
        Ok(PolygonFrame::resolve(input.arity, input.metrics)?)
    }

    /// Builds the ordered draw list for one chart pass.
    pub fn build(
        config: &ChartConfig,
        attributes: &AttributeSet,
        viewport: Viewport,
    ) -> ChartResult<RenderFrame> {
        Ok(Self::build_layered(config, attributes, viewport, ChartLayerStack::canonical())?
            .into_frame())
    }

    /// Builds primitives bucketed by layer; layers missing from `stack` are skipped.
    pub fn build_layered(
        config: &ChartConfig,
        attributes: &AttributeSet,
        viewport: Viewport,
        stack: ChartLayerStack,
    ) -> ChartResult<LayeredRenderFrame> {
        let input = validate_chart_input(config, attributes, viewport)?;
        let frame = PolygonFrame::resolve(input.arity, input.metrics)?;
        debug!(
            arity = input.arity.count(),
            ring_count = input.ring_count,
            radius = frame.radius,
            center_x = frame.center.x,
            center_y = frame.center.y,
            "resolved polygon frame"
        );

        let clamped = attributes.clamped_count();
        if clamped > 0 {
            warn!(clamped, "attribute values outside [0, 1] were clamped");
        }

        let mut layered = LayeredRenderFrame::from_stack(input.metrics.viewport, stack);
        push_rings(&mut layered, config, &input, &frame);
        push_spokes(&mut layered, config, &frame);
        push_labels(&mut layered, config, &input, &frame, attributes);
        push_overlay(&mut layered, config, &input, &frame, attributes);

        trace!(primitives = layered.primitive_count(), "built chart layers");
        Ok(layered)
    }
}

fn push_rings(
    layered: &mut LayeredRenderFrame,
    config: &ChartConfig,
    input: &ValidatedInput,
    frame: &PolygonFrame,
) {
    let style = &config.style;
    if config.show_ring_fill {
        // Outer rings first so inner ones paint on top.
        for ring in (1..=input.ring_count).rev() {
            let color = if ring % 2 == 0 {
                style.ring_fill_color
            } else {
                style.ring_fill_alt_color
            };
            layered.push(
                ChartLayerKind::RingFill,
                FilledPolygon::new(frame.ring_vertices(ring, input.ring_count), color),
            );
        }
    }

    if config.show_grid_lines {
        let contours: Vec<VertexList> = (1..=input.ring_count)
            .map(|ring| frame.ring_vertices(ring, input.ring_count))
            .collect();
        layered.push(
            ChartLayerKind::GridOutline,
            StrokedPolygon::new(contours, style.grid_line_width, style.grid_line_color),
        );
    }
}

fn push_spokes(layered: &mut LayeredRenderFrame, config: &ChartConfig, frame: &PolygonFrame) {
    if !config.show_connectors {
        return;
    }
    for vertex in frame.outer_vertices() {
        layered.push(
            ChartLayerKind::Spokes,
            LineSegment::new(
                frame.center,
                vertex,
                config.style.grid_line_width,
                config.style.spoke_color,
            ),
        );
    }
}

fn push_labels(
    layered: &mut LayeredRenderFrame,
    config: &ChartConfig,
    input: &ValidatedInput,
    frame: &PolygonFrame,
    attributes: &AttributeSet,
) {
    let placements = input.arity.label_placements();
    for ((index, attribute), placement) in attributes.iter().enumerate().zip(placements) {
        let vertex = frame.point_at(index, 1.0);
        let position = label_position(*placement, vertex, config, input);
        layered.push(
            ChartLayerKind::Labels,
            LabelAnchor::new(
                attribute.label.clone(),
                position,
                index,
                config.text_size,
                config.style.label_color,
            ),
        );
    }
}

/// Baseline-left anchor of a label next to outer vertex `vertex`.
fn label_position(
    placement: LabelPlacement,
    vertex: ChartPoint,
    config: &ChartConfig,
    input: &ValidatedInput,
) -> ChartPoint {
    let text_size = config.text_size;
    let gap = config.text_padding;
    let reserved_width = input.metrics.max_label_chars as f64 * text_size;
    let baseline_drop = |baseline: SideBaseline| match baseline {
        SideBaseline::HalfTextBelow => text_size / 2.0,
        SideBaseline::PaddingBelow => gap,
    };

    match placement {
        LabelPlacement::Above => ChartPoint::new(vertex.x - text_size, vertex.y - gap),
        LabelPlacement::Below => ChartPoint::new(vertex.x - text_size, vertex.y + text_size + gap),
        LabelPlacement::Right(baseline) => {
            ChartPoint::new(vertex.x + gap, vertex.y + baseline_drop(baseline))
        }
        LabelPlacement::Left(baseline) => ChartPoint::new(
            vertex.x - gap - reserved_width,
            vertex.y + baseline_drop(baseline),
        ),
        LabelPlacement::TopMargin => {
            ChartPoint::new(vertex.x - text_size, config.padding.top + text_size)
        }
    }
}

fn push_overlay(
    layered: &mut LayeredRenderFrame,
    config: &ChartConfig,
    input: &ValidatedInput,
    frame: &PolygonFrame,
    attributes: &AttributeSet,
) {
    let style = &config.style;
    let ring_count = f64::from(input.ring_count);
    let points: VertexList = attributes
        .ring_units(input.ring_count)
        .iter()
        .enumerate()
        .map(|(index, units)| frame.point_at(index, units / ring_count))
        .collect();

    layered.push(
        ChartLayerKind::OverlayFill,
        FilledPolygon::new(points.clone(), style.overlay_fill_color),
    );
    layered.push(
        ChartLayerKind::OverlayOutline,
        StrokedPolygon::single(
            points.clone(),
            style.grid_line_width,
            style.overlay_line_color,
        ),
    );

    if config.show_connectors {
        for point in &points {
            layered.push(
                ChartLayerKind::OverlayConnectors,
                LineSegment::new(
                    frame.center,
                    *point,
                    style.grid_line_width,
                    style.overlay_connector_color,
                ),
            );
        }
    }

    for point in points {
        layered.push(
            ChartLayerKind::Markers,
            Circle::new(point, config.marker_radius, style.overlay_line_color),
        );
    }
}
