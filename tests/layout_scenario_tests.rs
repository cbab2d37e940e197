use std::f64::consts::{FRAC_PI_3, TAU};

use approx::assert_abs_diff_eq;
use polygon_chart::api::{ChartConfig, PolygonChartLayout};
use polygon_chart::core::{AttributeSet, ChartPoint, PolygonArity, VertexList, Viewport};
use polygon_chart::render::{ChartLayerKind, ChartLayerStack, DrawablePrimitive};

fn layer_polygon_points(
    config: &ChartConfig,
    attributes: &AttributeSet,
    viewport: Viewport,
    kind: ChartLayerKind,
) -> Vec<VertexList> {
    let layered =
        PolygonChartLayout::build_layered(config, attributes, viewport, ChartLayerStack::canonical())
            .expect("layout");
    layered
        .layer(kind)
        .expect("layer")
        .primitives
        .iter()
        .flat_map(|primitive| match primitive {
            DrawablePrimitive::FilledPolygon(polygon) => vec![polygon.points.clone()],
            DrawablePrimitive::StrokedPolygon(polygon) => polygon.contours.clone(),
            other => panic!("unexpected primitive {other:?}"),
        })
        .collect()
}

fn fraction_along(center: ChartPoint, outer: ChartPoint, point: ChartPoint) -> f64 {
    center.distance_to(point) / center.distance_to(outer)
}

#[test]
fn triangle_sample_overlay_sits_at_expected_ring_fractions() {
    let config = ChartConfig::new(3, 3);
    let attributes = AttributeSet::from_pairs([("数据1", 0.5), ("数据2", 0.1), ("数据3", 1.0)]);
    // 200 − 2·20 padding − 3 chars·20 px leaves a 100-unit side budget.
    let viewport = Viewport::new(200.0, 200.0);

    let frame = PolygonChartLayout::frame(&config, &attributes, viewport).expect("frame");
    assert_abs_diff_eq!(frame.side_budget, 100.0);
    let outer = frame.outer_vertices();

    let overlay = layer_polygon_points(&config, &attributes, viewport, ChartLayerKind::OverlayFill);
    assert_eq!(overlay.len(), 1);
    let overlay = &overlay[0];
    assert_eq!(overlay.len(), 3);

    // Vertex 0 on the straight-up spoke, halfway out (1.5 of 3 ring units).
    assert_abs_diff_eq!(overlay[0].x, frame.center.x, epsilon = 1e-9);
    assert!(overlay[0].y < frame.center.y);
    assert_abs_diff_eq!(
        fraction_along(frame.center, outer[0], overlay[0]),
        0.5,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        fraction_along(frame.center, outer[1], overlay[1]),
        0.1,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(overlay[2].x, outer[2].x, epsilon = 1e-9);
    assert_abs_diff_eq!(overlay[2].y, outer[2].y, epsilon = 1e-9);
}

#[test]
fn square_full_scores_on_single_ring_match_outer_ring() {
    let config = ChartConfig::new(4, 1);
    let attributes = AttributeSet::from_pairs([("a", 1.0), ("b", 1.0), ("c", 1.0), ("d", 1.0)]);
    let viewport = Viewport::new(320.0, 280.0);

    let rings = layer_polygon_points(&config, &attributes, viewport, ChartLayerKind::GridOutline);
    let overlay = layer_polygon_points(&config, &attributes, viewport, ChartLayerKind::OverlayFill);
    assert_eq!(rings.len(), 1);

    for (ring_vertex, overlay_vertex) in rings[0].iter().zip(overlay[0].iter()) {
        assert_abs_diff_eq!(ring_vertex.x, overlay_vertex.x, epsilon = 1e-9);
        assert_abs_diff_eq!(ring_vertex.y, overlay_vertex.y, epsilon = 1e-9);
    }
}

#[test]
fn hexagon_outer_directions_are_spaced_by_a_third_of_pi() {
    let config = ChartConfig::new(6, 3);
    let attributes = AttributeSet::from_pairs((0..6).map(|index| (format!("h{index}"), 0.3)));
    let frame = PolygonChartLayout::frame(&config, &attributes, Viewport::new(480.0, 480.0))
        .expect("frame");

    let mut angles: Vec<f64> = frame
        .outer_vertices()
        .iter()
        .map(|vertex| (vertex.y - frame.center.y).atan2(vertex.x - frame.center.x))
        .map(|angle| angle.rem_euclid(TAU))
        .collect();
    angles.sort_by(f64::total_cmp);

    for pair in angles.windows(2) {
        assert_abs_diff_eq!(pair[1] - pair[0], FRAC_PI_3, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(angles[0] + TAU - angles[5], FRAC_PI_3, epsilon = 1e-9);
    // Flat top: one vertex lies on the horizontal axis.
    assert!(
        angles
            .iter()
            .any(|angle| angle.abs() <= 1e-9 || (TAU - angle).abs() <= 1e-9)
    );
}

#[test]
fn heptagon_overlay_closes_with_its_seventh_value() {
    let config = ChartConfig::new(7, 4);
    let values = [0.2, 0.4, 0.6, 0.8, 1.0, 0.5, 0.25];
    let attributes =
        AttributeSet::from_pairs(values.iter().enumerate().map(|(i, v)| (format!("s{i}"), *v)));
    let viewport = Viewport::new(500.0, 500.0);

    let frame = PolygonChartLayout::frame(&config, &attributes, viewport).expect("frame");
    let outer = frame.outer_vertices();
    let overlay = layer_polygon_points(&config, &attributes, viewport, ChartLayerKind::OverlayFill);
    let overlay = &overlay[0];
    assert_eq!(overlay.len(), 7);

    for (index, value) in values.iter().enumerate() {
        assert_abs_diff_eq!(
            fraction_along(frame.center, outer[index], overlay[index]),
            *value,
            epsilon = 1e-9
        );
    }
}

#[test]
fn every_arity_emits_the_expected_primitive_mix() {
    for arity in PolygonArity::ALL {
        let count = arity.count();
        let config = ChartConfig::new(count as u8, 4);
        let attributes =
            AttributeSet::from_pairs((0..count).map(|index| (format!("v{index}"), 0.6)));
        let frame = PolygonChartLayout::build(&config, &attributes, Viewport::new(600.0, 600.0))
            .expect("layout");
        let counts = frame.counts();

        // Four ring fills plus the overlay fill.
        assert_eq!(counts.filled_polygons, 5);
        // Grid outline pass plus the overlay outline.
        assert_eq!(counts.stroked_polygons, 2);
        // Spokes plus overlay connectors.
        assert_eq!(counts.line_segments, 2 * count);
        assert_eq!(counts.circles, count);
        assert_eq!(counts.labels, count);
    }
}
