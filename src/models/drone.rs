//! Drone model.
//!
//! Drones are the equipment resources of the fleet. A drone is assignable
//! iff it is `Active` and not holding a mission; weather eligibility is a
//! fixed table over the drone's ingress-protection tier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Weather;

/// Operational status of a drone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroneStatus {
    /// Flight-ready.
    Active,
    /// Out of service for maintenance.
    Maintenance,
    /// Parked, not in rotation.
    Standby,
}

/// Weather tolerance tier.
///
/// Ordered by increasing all-weather capability:
/// `Generic < IP42 < IP43 < IP45`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeatherRating {
    /// No ingress protection.
    Generic,
    /// Light rain.
    #[serde(rename = "IP42")]
    Ip42,
    /// Rain.
    #[serde(rename = "IP43")]
    Ip43,
    /// All weather, including storms.
    #[serde(rename = "IP45")]
    Ip45,
}

impl WeatherRating {
    /// Whether this tier may fly in the given forecast.
    ///
    /// | Forecast | Admitted tiers |
    /// |----------|----------------|
    /// | Sunny, Cloudy | all |
    /// | Rainy | IP42, IP43, IP45 |
    /// | Stormy | IP45 |
    /// | other | none |
    pub fn allowed_for(self, weather: &Weather) -> bool {
        match weather {
            Weather::Sunny | Weather::Cloudy => true,
            Weather::Rainy => self >= WeatherRating::Ip42,
            Weather::Stormy => self == WeatherRating::Ip45,
            Weather::Other(_) => false,
        }
    }

    /// Label as it appears in the fleet sheet.
    pub fn label(self) -> &'static str {
        match self {
            WeatherRating::Generic => "Generic",
            WeatherRating::Ip42 => "IP42",
            WeatherRating::Ip43 => "IP43",
            WeatherRating::Ip45 => "IP45",
        }
    }
}

/// A drone in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    /// Unique drone identifier.
    pub id: String,
    /// Model name (e.g., "DJI M300").
    pub model: String,
    /// Capability tags, matched against a mission's required skills.
    pub capabilities: Vec<String>,
    /// Weather tolerance tier.
    pub weather_rating: WeatherRating,
    /// Mission this drone currently holds, if any.
    pub current_assignment: Option<String>,
    /// Operational status.
    pub status: DroneStatus,
    /// Current base location.
    pub location: String,
    /// Last day before maintenance becomes overdue.
    pub maintenance_due: Option<NaiveDate>,
    /// Date the drone entered the fleet.
    pub acquisition_date: Option<NaiveDate>,
    /// Billing rate per day.
    pub daily_rate: f64,
}

impl Drone {
    /// Creates an active, generic-rated drone with no capabilities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model: String::new(),
            capabilities: Vec::new(),
            weather_rating: WeatherRating::Generic,
            current_assignment: None,
            status: DroneStatus::Active,
            location: "Unknown".to_string(),
            maintenance_due: None,
            acquisition_date: None,
            daily_rate: 0.0,
        }
    }

    /// Sets the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Adds a capability tag.
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Sets the weather tier.
    pub fn with_weather_rating(mut self, rating: WeatherRating) -> Self {
        self.weather_rating = rating;
        self
    }

    /// Sets the current assignment link.
    pub fn with_assignment(mut self, mission_id: impl Into<String>) -> Self {
        self.current_assignment = Some(mission_id.into());
        self
    }

    /// Sets the operational status.
    pub fn with_status(mut self, status: DroneStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the current location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the maintenance due date.
    pub fn with_maintenance_due(mut self, due: NaiveDate) -> Self {
        self.maintenance_due = Some(due);
        self
    }

    /// Sets the acquisition date.
    pub fn with_acquisition_date(mut self, date: NaiveDate) -> Self {
        self.acquisition_date = Some(date);
        self
    }

    /// Sets the daily rate.
    pub fn with_daily_rate(mut self, rate: f64) -> Self {
        self.daily_rate = rate;
        self
    }

    /// Available ⇔ `Active` and unassigned.
    pub fn is_available(&self) -> bool {
        self.status == DroneStatus::Active && self.current_assignment.is_none()
    }

    /// Whether maintenance is overdue as of `today` (strictly after due date).
    pub fn is_maintenance_due(&self, today: NaiveDate) -> bool {
        self.maintenance_due.is_some_and(|due| today > due)
    }

    /// Whether the drone holds every required capability.
    pub fn has_capabilities(&self, required: &[String]) -> bool {
        required.iter().all(|c| self.capabilities.contains(c))
    }

    /// Required capabilities the drone lacks, in the order given.
    pub fn missing_capabilities(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|c| !self.capabilities.contains(c))
            .cloned()
            .collect()
    }

    /// Whether the drone's tier is admitted for the forecast.
    #[inline]
    pub fn can_fly_in(&self, weather: &Weather) -> bool {
        self.weather_rating.allowed_for(weather)
    }

    /// Cost of holding the drone for `duration_days`.
    pub fn mission_cost(&self, duration_days: i64) -> f64 {
        self.daily_rate * duration_days as f64
    }
}
