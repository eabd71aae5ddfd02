use serde::Deserialize;
use thiserror::Error;

/// Rejected [`SkyConfig`] values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("`{0}` must be a non-negative range with low <= high")]
    Range(&'static str),
    #[error("`{0}` must be a probability in [0, 1]")]
    Chance(&'static str),
    #[error("`{0}` must be positive")]
    Positive(&'static str),
    #[error("`{0}` must lie within [0, 1]")]
    Fraction(&'static str),
    #[error("`{0}` must be at most {1}")]
    TooMany(&'static str, usize),
}

/// Ceiling for the salvo and volley counts of a barrage.
pub const MAX_BARRAGE_COUNT: usize = 256;

/// Timing and placement of comet spawns and the firework barrage.
///
/// Durations are in milliseconds, target ranges are fractions of the viewport.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkyConfig {
    pub first_comet_delay: (f64, f64),
    pub comet_interval: (f64, f64),
    pub comet_pair_chance: f64,
    pub comet_pair_delay: (f64, f64),
    pub salvo_rockets: usize,
    pub salvo_stagger: f64,
    pub volley_cadence: f64,
    pub volley_count: usize,
    pub volley_double_chance: f64,
    /// The trigger fires once its element's top rises above this share of the viewport height.
    pub trigger_ratio: f64,
    pub target_x: (f64, f64),
    pub target_y: (f64, f64),
}

impl Default for SkyConfig {
    fn default() -> Self {
        SkyConfig {
            first_comet_delay: (1000.0, 3000.0),
            comet_interval: (3000.0, 8000.0),
            comet_pair_chance: 0.2,
            comet_pair_delay: (100.0, 400.0),
            salvo_rockets: 5,
            salvo_stagger: 300.0,
            volley_cadence: 500.0,
            volley_count: 16,
            volley_double_chance: 0.4,
            trigger_ratio: 0.75,
            target_x: (0.15, 0.85),
            target_y: (0.1, 0.45),
        }
    }
}

impl SkyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, (low, high)) in [
            ("firstCometDelay", self.first_comet_delay),
            ("cometInterval", self.comet_interval),
            ("cometPairDelay", self.comet_pair_delay),
        ] {
            if !(0.0 <= low && low <= high) {
                return Err(ConfigError::Range(name));
            }
        }

        for (name, chance) in [
            ("cometPairChance", self.comet_pair_chance),
            ("volleyDoubleChance", self.volley_double_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ConfigError::Chance(name));
            }
        }

        for (name, count) in [
            ("salvoRockets", self.salvo_rockets),
            ("volleyCount", self.volley_count),
        ] {
            if count > MAX_BARRAGE_COUNT {
                return Err(ConfigError::TooMany(name, MAX_BARRAGE_COUNT));
            }
        }

        if !(self.salvo_stagger >= 0.0) {
            return Err(ConfigError::Range("salvoStagger"));
        }

        if !(self.volley_cadence > 0.0) {
            return Err(ConfigError::Positive("volleyCadence"));
        }

        if !(self.trigger_ratio > 0.0 && self.trigger_ratio <= 1.0) {
            return Err(ConfigError::Fraction("triggerRatio"));
        }

        for (name, (low, high)) in [("targetX", self.target_x), ("targetY", self.target_y)] {
            if !(0.0 <= low && low <= high && high <= 1.0) {
                return Err(ConfigError::Fraction(name));
            }
        }

        Ok(())
    }

    /// Most rockets a single barrage can launch.
    pub fn max_barrage_rockets(&self) -> usize {
        self.salvo_rockets
            .saturating_add(self.volley_count.saturating_mul(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SkyConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_barrage_rockets(), 37);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SkyConfig =
            serde_json::from_str(r#"{ "cometPairChance": 0.5, "cometInterval": [2000, 4000] }"#)
                .unwrap();

        assert_eq!(config.comet_pair_chance, 0.5);
        assert_eq!(config.comet_interval, (2000.0, 4000.0));
        assert_eq!(config.volley_count, 16);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let reversed = SkyConfig {
            comet_interval: (8000.0, 3000.0),
            ..Default::default()
        };
        assert_eq!(
            reversed.validate(),
            Err(ConfigError::Range("cometInterval"))
        );

        let chance = SkyConfig {
            volley_double_chance: 1.5,
            ..Default::default()
        };
        assert_eq!(
            chance.validate(),
            Err(ConfigError::Chance("volleyDoubleChance"))
        );

        let cadence = SkyConfig {
            volley_cadence: 0.0,
            ..Default::default()
        };
        assert_eq!(
            cadence.validate(),
            Err(ConfigError::Positive("volleyCadence"))
        );

        let target = SkyConfig {
            target_y: (0.1, 1.2),
            ..Default::default()
        };
        assert_eq!(target.validate(), Err(ConfigError::Fraction("targetY")));

        let flood: SkyConfig = serde_json::from_str(
            r#"{ "volleyCount": 18446744073709551615, "salvoRockets": 4000000000 }"#,
        )
        .unwrap();
        assert_eq!(
            flood.validate(),
            Err(ConfigError::TooMany("salvoRockets", MAX_BARRAGE_COUNT))
        );
        assert_eq!(flood.max_barrage_rockets(), usize::MAX);

        let volleys = SkyConfig {
            volley_count: MAX_BARRAGE_COUNT + 1,
            ..Default::default()
        };
        assert_eq!(
            volleys.validate(),
            Err(ConfigError::TooMany("volleyCount", MAX_BARRAGE_COUNT))
        );

        let ceiling = SkyConfig {
            salvo_rockets: MAX_BARRAGE_COUNT,
            volley_count: MAX_BARRAGE_COUNT,
            ..Default::default()
        };
        assert_eq!(ceiling.validate(), Ok(()));

        let nan = SkyConfig {
            trigger_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }
}
