//! Mission model.
//!
//! A mission is a dated job at one location that needs one pilot and one
//! drone. Date ranges are inclusive on both ends.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Forecast weather label.
///
/// Unrecognized labels are kept verbatim in `Other` and admit no drone tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Other(String),
}

impl From<String> for Weather {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Sunny" => Weather::Sunny,
            "Cloudy" => Weather::Cloudy,
            "Rainy" => Weather::Rainy,
            "Stormy" => Weather::Stormy,
            _ => Weather::Other(label),
        }
    }
}

impl From<&str> for Weather {
    fn from(label: &str) -> Self {
        Weather::from(label.to_string())
    }
}

impl From<Weather> for String {
    fn from(weather: Weather) -> Self {
        weather.to_string()
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::Sunny => f.write_str("Sunny"),
            Weather::Cloudy => f.write_str("Cloudy"),
            Weather::Rainy => f.write_str("Rainy"),
            Weather::Stormy => f.write_str("Stormy"),
            Weather::Other(label) => f.write_str(label),
        }
    }
}

/// Business priority of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MissionPriority {
    /// Can slip.
    Low,
    /// Default.
    Medium,
    /// Client-critical.
    High,
}

/// Lifecycle status of a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    /// Not yet staffed.
    Pending,
    /// Staffed, not started.
    Scheduled,
    /// In progress.
    Active,
    /// Finished.
    Completed,
}

/// A scheduled job requiring one pilot and one drone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique mission identifier.
    pub id: String,
    /// Project name.
    pub project_name: String,
    /// Client name.
    pub client_name: String,
    /// Site location.
    pub location: String,
    /// Skill tags required of the pilot and capability tags required of the drone.
    pub required_skills: Vec<String>,
    /// Certification tags required of the pilot.
    pub required_certifications: Vec<String>,
    /// First day (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
    /// Budget ceiling for pilot and drone cost combined.
    pub budget: f64,
    /// Forecast for the mission window.
    pub weather_forecast: Weather,
    /// Assigned pilot, if any.
    pub assigned_pilot: Option<String>,
    /// Assigned drone, if any.
    pub assigned_drone: Option<String>,
    /// Business priority.
    pub priority: MissionPriority,
    /// Lifecycle status.
    pub status: MissionStatus,
}

impl Mission {
    /// Creates a pending, medium-priority, sunny mission over `[start, end]`.
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            project_name: String::new(),
            client_name: String::new(),
            location: String::new(),
            required_skills: Vec::new(),
            required_certifications: Vec::new(),
            start_date,
            end_date,
            budget: 0.0,
            weather_forecast: Weather::Sunny,
            assigned_pilot: None,
            assigned_drone: None,
            priority: MissionPriority::Medium,
            status: MissionStatus::Pending,
        }
    }

    /// Sets the project name.
    pub fn with_project(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Sets the client name.
    pub fn with_client(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// Sets the site location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Adds a required skill (and drone capability).
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Adds a required certification.
    pub fn with_required_certification(mut self, cert: impl Into<String>) -> Self {
        self.required_certifications.push(cert.into());
        self
    }

    /// Sets the budget ceiling.
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Sets the forecast.
    pub fn with_weather(mut self, weather: impl Into<Weather>) -> Self {
        self.weather_forecast = weather.into();
        self
    }

    /// Sets the assigned pilot.
    pub fn with_pilot(mut self, pilot_id: impl Into<String>) -> Self {
        self.assigned_pilot = Some(pilot_id.into());
        self
    }

    /// Sets the assigned drone.
    pub fn with_drone(mut self, drone_id: impl Into<String>) -> Self {
        self.assigned_drone = Some(drone_id.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: MissionPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: MissionStatus) -> Self {
        self.status = status;
        self
    }

    /// Inclusive length in days: `end - start + 1`.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Whether the inclusive date ranges intersect.
    ///
    /// Missions sharing a single boundary day overlap.
    pub fn overlaps(&self, other: &Mission) -> bool {
        !(self.end_date < other.start_date || self.start_date > other.end_date)
    }

    /// Whether any resource is assigned.
    pub fn has_assignment(&self) -> bool {
        self.assigned_pilot.is_some() || self.assigned_drone.is_some()
    }
}
