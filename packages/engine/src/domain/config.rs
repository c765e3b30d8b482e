use serde::{Deserialize, Serialize};

pub const DEFAULT_RECOMPUTE_INTERVAL: f32 = 0.5;
pub const DEFAULT_ROTATION_ADJUSTMENT_SPEED: f32 = 1.0;
pub const DEFAULT_MASS_MULTIPLIER: f32 = 1000.0;

/// Engine-wide gravity tuning
///
/// Every field is optional in JSON; missing ones take the defaults above.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GravityConfig {
    /// Seconds between pairwise recomputations
    pub recompute_interval: f32,
    /// Fraction of the remaining alignment closed per second of auto-orient
    pub rotation_adjustment_speed: f32,
    /// Scales raw mass units into force units
    pub mass_multiplier: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            recompute_interval: DEFAULT_RECOMPUTE_INTERVAL,
            rotation_adjustment_speed: DEFAULT_ROTATION_ADJUSTMENT_SPEED,
            mass_multiplier: DEFAULT_MASS_MULTIPLIER,
        }
    }
}

impl GravityConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GravityConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        check_non_negative("recomputeInterval", self.recompute_interval)?;
        check_non_negative("rotationAdjustmentSpeed", self.rotation_adjustment_speed)?;
        check_non_negative("massMultiplier", self.mass_multiplier)?;
        Ok(())
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be finite, got {}", name, value));
    }
    if value < 0.0 {
        return Err(format!("{} must be >= 0, got {}", name, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = GravityConfig::default();
        assert_eq!(c.recompute_interval, 0.5);
        assert_eq!(c.rotation_adjustment_speed, 1.0);
        assert_eq!(c.mass_multiplier, 1000.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = GravityConfig::from_json(r#"{"massMultiplier": 10}"#).expect("valid config");
        assert_eq!(c.mass_multiplier, 10.0);
        assert_eq!(c.recompute_interval, DEFAULT_RECOMPUTE_INTERVAL);
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = GravityConfig::from_json(r#"{"recomputeInterval": -1}"#).unwrap_err();
        assert!(err.contains("recomputeInterval"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GravityConfig::from_json("{not json").is_err());
    }

    #[test]
    fn to_json_round_trips() {
        let c = GravityConfig { recompute_interval: 0.25, ..GravityConfig::default() };
        assert_eq!(GravityConfig::from_json(&c.to_json()), Ok(c));
    }
}
