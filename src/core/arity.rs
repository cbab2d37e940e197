use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Share of the viewport height added above the triangle's top vertex.
pub const TRIANGLE_TOP_OFFSET_RATIO: f64 = 0.065;

/// Where vertex 0 sits relative to straight up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Vertex 0 points straight up; the shape is not mirror-symmetric about
    /// the horizontal axis.
    VertexUp,
    /// A flat edge on top, vertex 0 rotated `-θ/2` from straight up.
    FlatTop,
}

/// How the square side budget `W` maps to the circumradius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiusRule {
    /// `W` is the polygon side length.
    SideLength,
    /// `W` is the distance between the left and right flat edges.
    FlatWidth,
    /// `W` is the circumscribed diameter.
    Diameter,
    /// `W` spans the widest pair of vertices, `W = a·(1 + 2·cos θ)`.
    VertexSpan,
}

/// How the polygon center is placed vertically inside the drawing region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CenterRule {
    /// Middle of the inner region.
    RegionMiddle,
    /// Top vertex pinned below the top label row, plus a share of the
    /// viewport height.
    TopAnchored { height_ratio: f64 },
    /// Vertical extent of the polygon centered in the inner region.
    ExtentCentered,
}

/// Vertical baseline nudge used by side labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideBaseline {
    HalfTextBelow,
    PaddingBelow,
}

/// Where a label sits relative to its outer vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPlacement {
    Above,
    Below,
    Right(SideBaseline),
    Left(SideBaseline),
    /// Pinned to the first text row below the top padding.
    TopMargin,
}

use self::LabelPlacement::{Above, Below, Left, Right, TopMargin};
use self::SideBaseline::{HalfTextBelow, PaddingBelow};

const TRIANGLE_LABELS: [LabelPlacement; 3] = [Above, Below, Below];
const SQUARE_LABELS: [LabelPlacement; 4] = [Above, Above, Below, Below];
const PENTAGON_LABELS: [LabelPlacement; 5] = [
    Above,
    Right(PaddingBelow),
    Below,
    Below,
    Left(PaddingBelow),
];
const HEXAGON_LABELS: [LabelPlacement; 6] = [
    Above,
    Above,
    Right(HalfTextBelow),
    Below,
    Below,
    Left(HalfTextBelow),
];
const HEPTAGON_LABELS: [LabelPlacement; 7] = [
    TopMargin,
    Right(HalfTextBelow),
    Right(HalfTextBelow),
    Below,
    Below,
    Left(HalfTextBelow),
    Left(HalfTextBelow),
];
const OCTAGON_LABELS: [LabelPlacement; 8] = [
    Above,
    Above,
    Right(HalfTextBelow),
    Right(HalfTextBelow),
    Below,
    Below,
    Left(HalfTextBelow),
    Left(HalfTextBelow),
];

/// One of the six supported polygon shapes.
///
/// Every per-arity rule lives here so ring, spoke, label and overlay
/// generation share one direction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PolygonArity {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
}

impl PolygonArity {
    pub const ALL: [Self; 6] = [
        Self::Triangle,
        Self::Square,
        Self::Pentagon,
        Self::Hexagon,
        Self::Heptagon,
        Self::Octagon,
    ];

    pub fn from_count(count: u8) -> Result<Self, ConfigError> {
        match count {
            3 => Ok(Self::Triangle),
            4 => Ok(Self::Square),
            5 => Ok(Self::Pentagon),
            6 => Ok(Self::Hexagon),
            7 => Ok(Self::Heptagon),
            8 => Ok(Self::Octagon),
            arity => Err(ConfigError::UnsupportedArity { arity }),
        }
    }

    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Triangle => 3,
            Self::Square => 4,
            Self::Pentagon => 5,
            Self::Hexagon => 6,
            Self::Heptagon => 7,
            Self::Octagon => 8,
        }
    }

    /// Angle between successive center-to-vertex spokes.
    #[must_use]
    pub fn apex_angle(self) -> f64 {
        TAU / self.count() as f64
    }

    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Triangle | Self::Pentagon | Self::Heptagon => Orientation::VertexUp,
            Self::Square | Self::Hexagon | Self::Octagon => Orientation::FlatTop,
        }
    }

    #[must_use]
    pub const fn radius_rule(self) -> RadiusRule {
        match self {
            Self::Triangle => RadiusRule::SideLength,
            Self::Square | Self::Octagon => RadiusRule::FlatWidth,
            Self::Pentagon | Self::Hexagon => RadiusRule::Diameter,
            Self::Heptagon => RadiusRule::VertexSpan,
        }
    }

    #[must_use]
    pub const fn center_rule(self) -> CenterRule {
        match self {
            Self::Triangle => CenterRule::TopAnchored {
                height_ratio: TRIANGLE_TOP_OFFSET_RATIO,
            },
            Self::Heptagon => CenterRule::TopAnchored { height_ratio: 0.0 },
            Self::Pentagon => CenterRule::ExtentCentered,
            Self::Square | Self::Hexagon | Self::Octagon => CenterRule::RegionMiddle,
        }
    }

    #[must_use]
    pub const fn label_placements(self) -> &'static [LabelPlacement] {
        match self {
            Self::Triangle => &TRIANGLE_LABELS,
            Self::Square => &SQUARE_LABELS,
            Self::Pentagon => &PENTAGON_LABELS,
            Self::Hexagon => &HEXAGON_LABELS,
            Self::Heptagon => &HEPTAGON_LABELS,
            Self::Octagon => &OCTAGON_LABELS,
        }
    }

    /// Circumradius for a square side budget `side`.
    #[must_use]
    pub fn circumradius(self, side: f64) -> f64 {
        let theta = self.apex_angle();
        match self.radius_rule() {
            RadiusRule::SideLength => side / (2.0 * (theta / 2.0).sin()),
            RadiusRule::FlatWidth => side / (2.0 * (theta / 2.0).cos()),
            RadiusRule::Diameter => side / 2.0,
            RadiusRule::VertexSpan => {
                let edge = side / (1.0 + 2.0 * theta.cos());
                edge / (2.0 * (theta / 2.0).sin())
            }
        }
    }

    /// Clockwise angle of vertex `index` measured from straight up.
    #[must_use]
    pub fn vertex_angle(self, index: usize) -> f64 {
        let theta = self.apex_angle();
        let start = match self.orientation() {
            Orientation::VertexUp => 0.0,
            Orientation::FlatTop => -theta / 2.0,
        };
        start + theta * index as f64
    }

    /// Unit vector from the center toward vertex `index`, in screen space
    /// (y grows downward).
    #[must_use]
    pub fn vertex_direction(self, index: usize) -> (f64, f64) {
        let angle = self.vertex_angle(index);
        (angle.sin(), -angle.cos())
    }
}

impl TryFrom<u8> for PolygonArity {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_count(value)
    }
}

impl From<PolygonArity> for u8 {
    fn from(value: PolygonArity) -> Self {
        value.count() as u8
    }
}
