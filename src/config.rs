//! Engine configuration.
//!
//! Scoring constants, cost assumptions, and suggestion limits. Every field
//! has a default, so an empty TOML document yields `EngineConfig::default()`.
//!
//! ```toml
//! workday_hours = 8.0
//! default_max_suggestions = 3
//! as_of = "2025-01-15"
//!
//! [scoring]
//! location_bonus = 10.0
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FleetResult;
use crate::models::WeatherRating;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Billable hours per mission day for pilots.
    pub workday_hours: f64,
    /// Suggestions returned by `suggest` when the caller gives no limit.
    pub default_max_suggestions: usize,
    /// Suggestions attached to each priority reassignment entry.
    pub priority_suggestions: usize,
    /// Reference date for maintenance checks. `None` = local today.
    pub as_of: Option<NaiveDate>,
    /// Candidate scoring constants.
    pub scoring: ScoringWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workday_hours: 8.0,
            default_max_suggestions: 3,
            priority_suggestions: 2,
            as_of: None,
            scoring: ScoringWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> FleetResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> FleetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Candidate scoring constants (higher score = better candidate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Points every eligible candidate starts with.
    pub base: f64,
    /// Maximum pilot experience bonus.
    pub experience_cap: f64,
    /// Experience hours that earn the full bonus.
    pub experience_hours_for_cap: f64,
    /// Bonus for being based at the mission site.
    pub location_bonus: f64,
    /// Maximum cost-efficiency bonus.
    pub cost_efficiency_max: f64,
    /// Penalty for a pilot who already holds an assignment.
    pub assigned_penalty: f64,
    /// Drone weather-tier bonuses.
    pub weather: WeatherBonus,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 50.0,
            experience_cap: 20.0,
            experience_hours_for_cap: 500.0,
            location_bonus: 10.0,
            cost_efficiency_max: 20.0,
            assigned_penalty: 5.0,
            weather: WeatherBonus::default(),
        }
    }
}

/// Bonus per weather tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherBonus {
    pub generic: f64,
    pub ip42: f64,
    pub ip43: f64,
    pub ip45: f64,
}

impl Default for WeatherBonus {
    fn default() -> Self {
        Self {
            generic: 0.0,
            ip42: 7.0,
            ip43: 14.0,
            ip45: 20.0,
        }
    }
}

impl WeatherBonus {
    /// Bonus for a tier.
    pub fn for_rating(&self, rating: WeatherRating) -> f64 {
        match rating {
            WeatherRating::Generic => self.generic,
            WeatherRating::Ip42 => self.ip42,
            WeatherRating::Ip43 => self.ip43,
            WeatherRating::Ip45 => self.ip45,
        }
    }
}
