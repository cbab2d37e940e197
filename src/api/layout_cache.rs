use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::core::{AttributeSet, Viewport};
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::{ChartConfig, ChartStyle, PolygonChartLayout};

type Key64 = OrderedFloat<f64>;

/// Runtime metrics exposed by `LayoutCache`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StyleKey {
    colors: [[Key64; 4]; 8],
    grid_line_width: Key64,
}

impl From<&ChartStyle> for StyleKey {
    fn from(style: &ChartStyle) -> Self {
        Self {
            colors: style.named_colors().map(|(_, color)| {
                [
                    OrderedFloat(color.red),
                    OrderedFloat(color.green),
                    OrderedFloat(color.blue),
                    OrderedFloat(color.alpha),
                ]
            }),
            grid_line_width: OrderedFloat(style.grid_line_width),
        }
    }
}

/// Hashable digest of every layout input.
///
/// Colors are keyed on their full-precision channels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutCacheKey {
    arity: u8,
    ring_count: u32,
    metrics: [Key64; 9],
    toggles: [bool; 3],
    style: StyleKey,
    attributes: Vec<(String, Key64)>,
}

impl LayoutCacheKey {
    #[must_use]
    pub fn new(config: &ChartConfig, attributes: &AttributeSet, viewport: Viewport) -> Self {
        Self {
            arity: config.arity,
            ring_count: config.ring_count,
            metrics: [
                OrderedFloat(viewport.width),
                OrderedFloat(viewport.height),
                OrderedFloat(config.padding.left),
                OrderedFloat(config.padding.top),
                OrderedFloat(config.padding.right),
                OrderedFloat(config.padding.bottom),
                OrderedFloat(config.text_size),
                OrderedFloat(config.text_padding),
                OrderedFloat(config.marker_radius),
            ],
            toggles: [
                config.show_ring_fill,
                config.show_grid_lines,
                config.show_connectors,
            ],
            style: StyleKey::from(&config.style),
            attributes: attributes
                .iter()
                .map(|attribute| (attribute.label.clone(), OrderedFloat(attribute.value)))
                .collect(),
        }
    }
}

/// Caller-side memoization of layout results.
///
/// The layout engine itself stays stateless; hosts that redraw at display
/// rate keep one of these next to their surface. Failed layouts are never
/// stored.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<LayoutCacheKey, RenderFrame>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    const MAX_ENTRIES: usize = 256;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached frame for these inputs, building it on first use.
    pub fn get_or_build(
        &mut self,
        config: &ChartConfig,
        attributes: &AttributeSet,
        viewport: Viewport,
    ) -> ChartResult<&RenderFrame> {
        let key = LayoutCacheKey::new(config, attributes, viewport);
        if self.entries.contains_key(&key) {
            self.hits = self.hits.saturating_add(1);
        } else {
            let frame = PolygonChartLayout::build(config, attributes, viewport)?;
            self.misses = self.misses.saturating_add(1);
            if self.entries.len() >= Self::MAX_ENTRIES {
                self.entries.clear();
            }
            self.entries.insert(key.clone(), frame);
        }
        Ok(&self.entries[&key])
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn stats(&self) -> LayoutCacheStats {
        LayoutCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
