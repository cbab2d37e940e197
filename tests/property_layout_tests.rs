use polygon_chart::api::{ChartConfig, PolygonChartLayout};
use polygon_chart::core::{AttributeSet, ChartPoint, VertexList, Viewport};
use polygon_chart::render::{
    ChartLayerKind, ChartLayerStack, DrawablePrimitive, LayeredRenderFrame, NullRenderer, Renderer,
};
use proptest::prelude::*;

fn attributes_for(arity: u8, values: &[f64]) -> AttributeSet {
    AttributeSet::from_pairs(
        values
            .iter()
            .take(usize::from(arity))
            .enumerate()
            .map(|(index, value)| (format!("p{index}"), *value)),
    )
}

fn contours(frame: &LayeredRenderFrame, kind: ChartLayerKind) -> Vec<VertexList> {
    frame
        .layer(kind)
        .map(|layer| {
            layer
                .primitives
                .iter()
                .flat_map(|primitive| match primitive {
                    DrawablePrimitive::FilledPolygon(polygon) => vec![polygon.points.clone()],
                    DrawablePrimitive::StrokedPolygon(polygon) => polygon.contours.clone(),
                    _ => Vec::new(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn lerp(center: ChartPoint, outer: ChartPoint, fraction: f64) -> ChartPoint {
    ChartPoint::new(
        center.x + (outer.x - center.x) * fraction,
        center.y + (outer.y - center.y) * fraction,
    )
}

fn close(a: ChartPoint, b: ChartPoint, scale: f64) -> bool {
    a.distance_to(b) <= 1e-9 * scale.max(1.0)
}

proptest! {
    #[test]
    fn outer_ring_is_a_regular_polygon(
        arity in 3u8..=8,
        ring_count in 1u32..=12,
        width in 300.0f64..1_600.0,
        height in 300.0f64..1_600.0,
        values in prop::collection::vec(0.0f64..=1.0, 8)
    ) {
        let config = ChartConfig::new(arity, ring_count);
        let attributes = attributes_for(arity, &values);
        let frame = PolygonChartLayout::frame(&config, &attributes, Viewport::new(width, height))
            .expect("frame");
        let outer = frame.outer_vertices();
        prop_assert_eq!(outer.len(), usize::from(arity));

        let tolerance = 1e-9 * frame.radius.max(1.0);
        for vertex in &outer {
            prop_assert!((frame.center.distance_to(*vertex) - frame.radius).abs() <= tolerance);
        }
        let first_edge = outer[0].distance_to(outer[1]);
        for index in 0..outer.len() {
            let edge = outer[index].distance_to(outer[(index + 1) % outer.len()]);
            prop_assert!((edge - first_edge).abs() <= tolerance);
        }
    }

    #[test]
    fn rings_are_proportional_along_each_spoke(
        arity in 3u8..=8,
        ring_count in 1u32..=10,
        size in 320.0f64..1_200.0,
        values in prop::collection::vec(0.0f64..=1.0, 8)
    ) {
        let config = ChartConfig::new(arity, ring_count);
        let attributes = attributes_for(arity, &values);
        let viewport = Viewport::new(size, size);
        let frame = PolygonChartLayout::frame(&config, &attributes, viewport).expect("frame");
        let layered = PolygonChartLayout::build_layered(
            &config,
            &attributes,
            viewport,
            ChartLayerStack::canonical(),
        )
        .expect("layout");

        let rings = contours(&layered, ChartLayerKind::GridOutline);
        prop_assert_eq!(rings.len(), ring_count as usize);
        let outer = frame.outer_vertices();
        for (ring_index, ring) in rings.iter().enumerate() {
            let fraction = (ring_index + 1) as f64 / f64::from(ring_count);
            for (vertex, outer_vertex) in ring.iter().zip(outer.iter()) {
                let expected = lerp(frame.center, *outer_vertex, fraction);
                prop_assert!(close(*vertex, expected, frame.radius));
            }
        }
    }

    #[test]
    fn overlay_clamps_values_into_the_outer_ring(
        arity in 3u8..=8,
        ring_count in 1u32..=8,
        values in prop::collection::vec(-2.0f64..3.0, 8)
    ) {
        let config = ChartConfig::new(arity, ring_count);
        let attributes = attributes_for(arity, &values);
        let viewport = Viewport::new(640.0, 560.0);
        let frame = PolygonChartLayout::frame(&config, &attributes, viewport).expect("frame");
        let layered = PolygonChartLayout::build_layered(
            &config,
            &attributes,
            viewport,
            ChartLayerStack::canonical(),
        )
        .expect("layout");

        let overlay = contours(&layered, ChartLayerKind::OverlayFill);
        prop_assert_eq!(overlay.len(), 1);
        let outer = frame.outer_vertices();
        for (index, vertex) in overlay[0].iter().enumerate() {
            let expected = lerp(frame.center, outer[index], values[index].clamp(0.0, 1.0));
            prop_assert!(close(*vertex, expected, frame.radius));
            prop_assert!(frame.center.distance_to(*vertex) <= frame.radius * (1.0 + 1e-12));
        }
    }

    #[test]
    fn layout_is_idempotent_and_renderable(
        arity in 3u8..=8,
        ring_count in 1u32..=6,
        size in 300.0f64..900.0,
        values in prop::collection::vec(0.0f64..=1.0, 8)
    ) {
        let config = ChartConfig::new(arity, ring_count);
        let attributes = attributes_for(arity, &values);
        let viewport = Viewport::new(size, size);

        let first = PolygonChartLayout::build(&config, &attributes, viewport).expect("first");
        let second = PolygonChartLayout::build(&config, &attributes, viewport).expect("second");
        prop_assert_eq!(&first, &second);

        let mut renderer = NullRenderer::default();
        renderer.render(&first).expect("frame should validate");
        prop_assert_eq!(renderer.frames_rendered, 1);
        prop_assert_eq!(renderer.last_counts.circles, usize::from(arity));
    }

    #[test]
    fn counts_outside_supported_range_are_rejected(arity in prop_oneof![0u8..3, 9u8..=u8::MAX]) {
        let config = ChartConfig::new(arity, 3);
        let attributes = attributes_for(arity, &[0.5; 8]);
        let result = PolygonChartLayout::build(&config, &attributes, Viewport::new(400.0, 400.0));
        prop_assert!(result.is_err());
    }
}
