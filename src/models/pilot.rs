//! Pilot model.
//!
//! Pilots are the human resources of the fleet. Each pilot carries skill
//! and certification tags, an experience record, a billing rate, and an
//! optional availability window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Roster status of a pilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PilotStatus {
    /// Can take assignments.
    Available,
    /// Temporarily away.
    #[serde(rename = "On Leave")]
    OnLeave,
    /// Not assignable for any other reason.
    Unavailable,
}

/// A drone pilot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    /// Unique pilot identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Skill tags (e.g., "Mapping", "Thermal").
    pub skills: Vec<String>,
    /// Certification tags (e.g., "DGCA", "Night Ops").
    pub certifications: Vec<String>,
    /// Cumulative flight experience (hours).
    pub experience_hours: f64,
    /// Current base location.
    pub location: String,
    /// Mission this pilot currently holds, if any.
    pub current_assignment: Option<String>,
    /// Roster status.
    pub status: PilotStatus,
    /// First day of availability (inclusive). `None` = open-ended.
    pub available_from: Option<NaiveDate>,
    /// Last day of availability (inclusive). `None` = open-ended.
    pub available_until: Option<NaiveDate>,
    /// Billing rate per working hour.
    pub hourly_rate: f64,
    /// Monthly working hour ceiling.
    pub max_monthly_hours: f64,
}

impl Pilot {
    /// Creates an available pilot with no tags and no window.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            skills: Vec::new(),
            certifications: Vec::new(),
            experience_hours: 0.0,
            location: String::new(),
            current_assignment: None,
            status: PilotStatus::Available,
            available_from: None,
            available_until: None,
            hourly_rate: 0.0,
            max_monthly_hours: 160.0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Adds a certification tag.
    pub fn with_certification(mut self, cert: impl Into<String>) -> Self {
        self.certifications.push(cert.into());
        self
    }

    /// Sets experience hours.
    pub fn with_experience(mut self, hours: f64) -> Self {
        self.experience_hours = hours;
        self
    }

    /// Sets the current location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the current assignment link.
    pub fn with_assignment(mut self, mission_id: impl Into<String>) -> Self {
        self.current_assignment = Some(mission_id.into());
        self
    }

    /// Sets the roster status.
    pub fn with_status(mut self, status: PilotStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the availability window (both ends inclusive).
    pub fn with_window(mut self, from: NaiveDate, until: NaiveDate) -> Self {
        self.available_from = Some(from);
        self.available_until = Some(until);
        self
    }

    /// Sets the hourly rate.
    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = rate;
        self
    }

    /// Sets the monthly hour ceiling.
    pub fn with_max_monthly_hours(mut self, hours: f64) -> Self {
        self.max_monthly_hours = hours;
        self
    }

    /// Whether the pilot is `Available` and the window covers `[start, end]`.
    pub fn is_available_for(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if self.status != PilotStatus::Available {
            return false;
        }
        if self.available_from.is_some_and(|from| start < from) {
            return false;
        }
        if self.available_until.is_some_and(|until| end > until) {
            return false;
        }
        true
    }

    /// Whether the pilot holds every required skill.
    pub fn has_skills(&self, required: &[String]) -> bool {
        required.iter().all(|s| self.skills.contains(s))
    }

    /// Whether the pilot holds every required certification.
    pub fn has_certifications(&self, required: &[String]) -> bool {
        required.iter().all(|c| self.certifications.contains(c))
    }

    /// Required skills the pilot lacks, in the order given.
    pub fn missing_skills(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|s| !self.skills.contains(s))
            .cloned()
            .collect()
    }

    /// Required certifications the pilot lacks, in the order given.
    pub fn missing_certifications(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|c| !self.certifications.contains(c))
            .cloned()
            .collect()
    }

    /// Cost of `duration_days` working days at `workday_hours` per day.
    pub fn mission_cost(&self, duration_days: i64, workday_hours: f64) -> f64 {
        duration_days as f64 * workday_hours * self.hourly_rate
    }

    /// Whether the pilot currently holds any assignment.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.current_assignment.is_some()
    }
}
