use serde::{Deserialize, Serialize};

use crate::core::ChartPadding;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_RING_COUNT: u32 = 3;
pub const DEFAULT_TEXT_SIZE: f64 = 20.0;
pub const DEFAULT_TEXT_PADDING: f64 = 20.0;
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;
pub const DEFAULT_GRID_LINE_WIDTH: f64 = 2.0;

/// Palette and stroke settings for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Fill of even rings.
    pub ring_fill_color: Color,
    /// Fill of odd rings.
    pub ring_fill_alt_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub spoke_color: Color,
    pub overlay_fill_color: Color,
    pub overlay_line_color: Color,
    pub overlay_connector_color: Color,
    pub label_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            ring_fill_color: Color::from_argb(0xFFFA_FAFA),
            ring_fill_alt_color: Color::from_argb(0xFFF8_F8F8),
            grid_line_color: Color::from_argb(0xFFF3_F3F3),
            grid_line_width: DEFAULT_GRID_LINE_WIDTH,
            spoke_color: Color::from_argb(0x80FC_FCFC),
            overlay_fill_color: Color::from_argb(0xB300_D19F),
            overlay_line_color: Color::from_argb(0xFF00_D19F),
            overlay_connector_color: Color::from_argb(0xFF6F_E4C8),
            label_color: Color::from_argb(0xFF00_0000),
        }
    }
}

impl ChartStyle {
    /// Every palette entry with its field name, in declaration order.
    #[must_use]
    pub fn named_colors(&self) -> [(&'static str, Color); 8] {
        [
            ("ring_fill_color", self.ring_fill_color),
            ("ring_fill_alt_color", self.ring_fill_alt_color),
            ("grid_line_color", self.grid_line_color),
            ("spoke_color", self.spoke_color),
            ("overlay_fill_color", self.overlay_fill_color),
            ("overlay_line_color", self.overlay_line_color),
            ("overlay_connector_color", self.overlay_connector_color),
            ("label_color", self.label_color),
        ]
    }
}

/// Immutable chart configuration for one render call.
///
/// Builders consume and return the value, so a partially configured chart
/// never exists behind a shared reference. Serializable so hosts can keep
/// chart setup in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub arity: u8,
    #[serde(default = "default_ring_count")]
    pub ring_count: u32,
    #[serde(default)]
    pub padding: ChartPadding,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    #[serde(default = "default_text_padding")]
    pub text_padding: f64,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_true")]
    pub show_ring_fill: bool,
    #[serde(default = "default_true")]
    pub show_grid_lines: bool,
    #[serde(default = "default_true")]
    pub show_connectors: bool,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartConfig {
    /// Creates a config with the stock palette and metrics.
    #[must_use]
    pub fn new(arity: u8, ring_count: u32) -> Self {
        Self {
            arity,
            ring_count,
            padding: ChartPadding::default(),
            text_size: DEFAULT_TEXT_SIZE,
            text_padding: DEFAULT_TEXT_PADDING,
            marker_radius: DEFAULT_MARKER_RADIUS,
            show_ring_fill: true,
            show_grid_lines: true,
            show_connectors: true,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: ChartPadding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_text_size(mut self, text_size: f64) -> Self {
        self.text_size = text_size;
        self
    }

    /// Sets the gap between the outer ring and its labels.
    #[must_use]
    pub fn with_text_padding(mut self, text_padding: f64) -> Self {
        self.text_padding = text_padding;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius;
        self
    }

    #[must_use]
    pub fn with_ring_fill(mut self, show: bool) -> Self {
        self.show_ring_fill = show;
        self
    }

    #[must_use]
    pub fn with_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = show;
        self
    }

    /// Toggles both grid spokes and overlay connector lines.
    #[must_use]
    pub fn with_connectors(mut self, show: bool) -> Self {
        self.show_connectors = show;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|err| {
            ChartError::Serialization(format!("failed to serialize chart config: {err}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|err| ChartError::Serialization(format!("failed to parse chart config: {err}")))
    }
}

fn default_ring_count() -> u32 {
    DEFAULT_RING_COUNT
}

fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

fn default_text_padding() -> f64 {
    DEFAULT_TEXT_PADDING
}

fn default_marker_radius() -> f64 {
    DEFAULT_MARKER_RADIUS
}

fn default_true() -> bool {
    true
}
