use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::config::{DEFAULT_RESIZE_TIME, DEFAULT_ZONE_LAYERS};

/// Errors converting raw stored values into domain types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Extrapolation mode outside 1..=3
    InvalidExtrapolateMode(u8),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidExtrapolateMode(value) => {
                write!(f, "Invalid extrapolate mode {} (expected 1, 2 or 3)", value)
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Numerical extrapolation scheme used at zone boundaries.
/// Stored as its 1-based numeric value.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExtrapolateMode {
    FastSingle = 1,
    #[default]
    Single = 2,
    Double = 3,
}

impl ExtrapolateMode {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Position of this mode in a 0-based selector
    pub fn selector_index(self) -> usize {
        self.value() as usize - 1
    }

    pub fn from_selector_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

impl TryFrom<u8> for ExtrapolateMode {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExtrapolateMode::FastSingle),
            2 => Ok(ExtrapolateMode::Single),
            3 => Ok(ExtrapolateMode::Double),
            other => Err(DomainError::InvalidExtrapolateMode(other)),
        }
    }
}

impl From<ExtrapolateMode> for u8 {
    fn from(mode: ExtrapolateMode) -> Self {
        mode.value()
    }
}

impl fmt::Display for ExtrapolateMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExtrapolateMode::FastSingle => write!(f, "Fast-Single"),
            ExtrapolateMode::Single => write!(f, "Single"),
            ExtrapolateMode::Double => write!(f, "Double"),
        }
    }
}

/// Threshold for the determinant stability criterion
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum DetermLimit {
    #[default]
    ZerothOrder, // 1e+3
    FirstOrder, // 1e-3
}

impl DetermLimit {
    pub fn label(self) -> &'static str {
        match self {
            DetermLimit::ZerothOrder => "1e+3",
            DetermLimit::FirstOrder => "1e-3",
        }
    }

    pub fn selector_index(self) -> usize {
        if self == DetermLimit::ZerothOrder { 0 } else { 1 }
    }

    pub fn from_selector_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

impl fmt::Display for DetermLimit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One inlet/outlet region. Only `id` is touched by the configuration
/// dialog; everything else belongs to the zone editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InletOutletZone {
    pub id: Uuid,
    #[serde(default = "default_layers")]
    pub layers: u32,
    // Inflow direction, not normalised
    #[serde(default = "default_direction")]
    pub direction: [f64; 3],
    #[serde(default)]
    pub convert_fluid: bool,
}

fn default_layers() -> u32 {
    DEFAULT_ZONE_LAYERS
}

fn default_direction() -> [f64; 3] {
    [1.0, 0.0, 0.0]
}

impl InletOutletZone {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            layers: default_layers(),
            direction: default_direction(),
            convert_fluid: false,
        }
    }
}

impl Default for InletOutletZone {
    fn default() -> Self {
        Self::new()
    }
}

/// Inlet/outlet settings of a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InletOutletConfig {
    #[serde(default = "default_resize_time")]
    pub resizetime: f64,
    #[serde(default)]
    pub extrapolatemode: ExtrapolateMode,
    #[serde(default)]
    pub determlimit: DetermLimit,
    #[serde(default)]
    pub zones: Vec<InletOutletZone>,
}

fn default_resize_time() -> f64 {
    DEFAULT_RESIZE_TIME
}

impl Default for InletOutletConfig {
    fn default() -> Self {
        Self {
            resizetime: default_resize_time(),
            extrapolatemode: ExtrapolateMode::default(),
            determlimit: DetermLimit::default(),
            zones: Vec::new(),
        }
    }
}

impl InletOutletConfig {
    pub fn zone(&self, id: Uuid) -> Option<&InletOutletZone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    pub fn zone_mut(&mut self, id: Uuid) -> Option<&mut InletOutletZone> {
        self.zones.iter_mut().find(|zone| zone.id == id)
    }

    /// Removes the zone with `id`, keeping the order of the others
    pub fn remove_zone(&mut self, id: Uuid) -> Option<InletOutletZone> {
        let index = self.zones.iter().position(|zone| zone.id == id)?;
        Some(self.zones.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrapolate_mode_selector_is_value_minus_one() {
        for value in 1u8..=3 {
            let mode = ExtrapolateMode::try_from(value).unwrap();
            assert_eq!(mode.selector_index(), value as usize - 1);
            assert_eq!(
                ExtrapolateMode::from_selector_index(mode.selector_index()),
                Some(mode)
            );
        }
        assert_eq!(ExtrapolateMode::from_selector_index(3), None);
    }

    #[test]
    fn extrapolate_mode_rejects_out_of_range_values() {
        assert_eq!(
            ExtrapolateMode::try_from(0),
            Err(DomainError::InvalidExtrapolateMode(0))
        );
        assert!(ExtrapolateMode::try_from(4).is_err());
    }

    #[test]
    fn extrapolate_mode_serializes_as_number() {
        let json = serde_json::to_string(&ExtrapolateMode::Double).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<ExtrapolateMode>("7").is_err());
    }

    #[test]
    fn determ_limit_labels_follow_selector_order() {
        assert_eq!(DetermLimit::from_selector_index(0).unwrap().label(), "1e+3");
        assert_eq!(DetermLimit::from_selector_index(1).unwrap().label(), "1e-3");
        assert_eq!(DetermLimit::FirstOrder.selector_index(), 1);
    }

    #[test]
    fn remove_zone_keeps_remaining_order() {
        let mut config = InletOutletConfig::default();
        let zones: Vec<_> = (0..3).map(|_| InletOutletZone::new()).collect();
        config.zones = zones.clone();

        let removed = config.remove_zone(zones[1].id);
        assert_eq!(removed.map(|z| z.id), Some(zones[1].id));
        assert_eq!(config.zones, vec![zones[0].clone(), zones[2].clone()]);
        assert!(config.remove_zone(zones[1].id).is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: InletOutletConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InletOutletConfig::default());
    }
}
