use crate::core::{AttributeSet, FrameMetrics, PolygonArity, Viewport};
use crate::error::ConfigError;

use super::ChartConfig;

/// Inputs that passed every structural check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ValidatedInput {
    pub(super) arity: PolygonArity,
    pub(super) ring_count: u32,
    pub(super) metrics: FrameMetrics,
}

/// Checks config, attributes and region before any geometry is computed.
///
/// The first failure wins; nothing is emitted for invalid input.
pub(super) fn validate_chart_input(
    config: &ChartConfig,
    attributes: &AttributeSet,
    viewport: Viewport,
) -> Result<ValidatedInput, ConfigError> {
    let arity = PolygonArity::from_count(config.arity)?;
    if config.ring_count == 0 {
        return Err(ConfigError::ZeroRingCount);
    }
    if attributes.len() != arity.count() {
        return Err(ConfigError::AttributeCountMismatch {
            expected: arity.count(),
            actual: attributes.len(),
        });
    }
    attributes.validate_values()?;
    let viewport = viewport.validate()?;

    for (field, value) in [
        ("padding.left", config.padding.left),
        ("padding.top", config.padding.top),
        ("padding.right", config.padding.right),
        ("padding.bottom", config.padding.bottom),
        ("text_size", config.text_size),
        ("text_padding", config.text_padding),
        ("marker_radius", config.marker_radius),
    ] {
        validate_non_negative(field, value)?;
    }
    validate_positive("text_size", config.text_size)?;
    validate_positive("style.grid_line_width", config.style.grid_line_width)?;
    for (name, color) in config.style.named_colors() {
        color.validate().map_err(|_| {
            ConfigError::InvalidColor(format!(
                "{name}: rgba({}, {}, {}, {})",
                color.red, color.green, color.blue, color.alpha
            ))
        })?;
    }

    Ok(ValidatedInput {
        arity,
        ring_count: config.ring_count,
        metrics: FrameMetrics {
            viewport,
            padding: config.padding,
            text_size: config.text_size,
            text_padding: config.text_padding,
            max_label_chars: attributes.max_label_chars(),
        },
    })
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidSize { field, value });
    }
    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidSize { field, value });
    }
    Ok(())
}
