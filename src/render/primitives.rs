use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ChartPoint, VertexList};
use crate::error::{ChartError, ChartResult, ConfigError};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as an Android-style hex string (`#AARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xFF) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`.
    pub fn from_hex(input: &str) -> Result<Self, ConfigError> {
        let digits = input
            .strip_prefix('#')
            .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ConfigError::InvalidColor(input.to_owned()))?;
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| ConfigError::InvalidColor(input.to_owned()))?;
        match digits.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | packed)),
            8 => Ok(Self::from_argb(packed)),
            _ => Err(ConfigError::InvalidColor(input.to_owned())),
        }
    }

    #[must_use]
    pub fn to_argb(self) -> u32 {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.alpha) << 24)
            | (channel(self.red) << 16)
            | (channel(self.green) << 8)
            | channel(self.blue)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.to_argb())
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

fn validate_points(points: &[ChartPoint], what: &str) -> ChartResult<()> {
    if points.len() < 3 {
        return Err(ChartError::InvalidData(format!(
            "{what} needs at least 3 vertices"
        )));
    }
    if points.iter().any(|point| !point.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{what} vertices must be finite"
        )));
    }
    Ok(())
}

fn validate_stroke_width(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Closed polygon filled with a solid color. The closing edge is implicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilledPolygon {
    pub points: VertexList,
    pub color: Color,
}

impl FilledPolygon {
    #[must_use]
    pub fn new(points: VertexList, color: Color) -> Self {
        Self { points, color }
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_points(&self.points, "filled polygon")?;
        self.color.validate()
    }
}

/// One stroke pass over one or more closed contours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokedPolygon {
    pub contours: Vec<VertexList>,
    pub stroke_width: f64,
    pub color: Color,
}

impl StrokedPolygon {
    #[must_use]
    pub fn new(contours: Vec<VertexList>, stroke_width: f64, color: Color) -> Self {
        Self {
            contours,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn single(points: VertexList, stroke_width: f64, color: Color) -> Self {
        Self::new(vec![points], stroke_width, color)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.contours.is_empty() {
            return Err(ChartError::InvalidData(
                "stroked polygon needs at least one contour".to_owned(),
            ));
        }
        for contour in &self.contours {
            validate_points(contour, "stroked polygon")?;
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Draw command for one line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: ChartPoint,
    pub to: ChartPoint,
    pub stroke_width: f64,
    pub color: Color,
}

impl LineSegment {
    #[must_use]
    pub const fn new(from: ChartPoint, to: ChartPoint, stroke_width: f64, color: Color) -> Self {
        Self {
            from,
            to,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled circle, used for overlay vertex markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: ChartPoint,
    pub radius: f64,
    pub color: Color,
}

impl Circle {
    #[must_use]
    pub const fn new(center: ChartPoint, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.center.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Text anchor for one attribute label.
///
/// `position` is the left end of the text baseline; glyph shaping is left to
/// the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub text: String,
    pub position: ChartPoint,
    pub vertex_index: usize,
    pub font_size: f64,
    pub color: Color,
}

impl LabelAnchor {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        position: ChartPoint,
        vertex_index: usize,
        font_size: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            vertex_index,
            font_size,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.position.is_finite() {
            return Err(ChartError::InvalidData(
                "label anchor must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One backend-agnostic draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawablePrimitive {
    FilledPolygon(FilledPolygon),
    StrokedPolygon(StrokedPolygon),
    LineSegment(LineSegment),
    Circle(Circle),
    LabelAnchor(LabelAnchor),
}

impl DrawablePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::FilledPolygon(polygon) => polygon.validate(),
            Self::StrokedPolygon(polygon) => polygon.validate(),
            Self::LineSegment(line) => line.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::LabelAnchor(label) => label.validate(),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::FilledPolygon(polygon) => polygon.color,
            Self::StrokedPolygon(polygon) => polygon.color,
            Self::LineSegment(line) => line.color,
            Self::Circle(circle) => circle.color,
            Self::LabelAnchor(label) => label.color,
        }
    }
}

impl From<FilledPolygon> for DrawablePrimitive {
    fn from(value: FilledPolygon) -> Self {
        Self::FilledPolygon(value)
    }
}

impl From<StrokedPolygon> for DrawablePrimitive {
    fn from(value: StrokedPolygon) -> Self {
        Self::StrokedPolygon(value)
    }
}

impl From<LineSegment> for DrawablePrimitive {
    fn from(value: LineSegment) -> Self {
        Self::LineSegment(value)
    }
}

impl From<Circle> for DrawablePrimitive {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<LabelAnchor> for DrawablePrimitive {
    fn from(value: LabelAnchor) -> Self {
        Self::LabelAnchor(value)
    }
}
