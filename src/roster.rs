//! Pilot roster queries and status updates.
//!
//! Read-only views over the fleet's pilots, plus the roster-side status
//! change the conversational front end exposes as `update_pilot_status`.
//! Assignment links are not touched here; they change only through the
//! matcher.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fleet::Fleet;
use crate::models::{Pilot, PilotStatus};

/// Hours and billing figures of one pilot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotHours {
    pub pilot_id: String,
    pub name: String,
    pub hourly_rate: f64,
    pub max_monthly_hours: f64,
    pub experience_hours: f64,
}

/// Cost of a pilot over a number of working days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotCost {
    pub pilot_id: String,
    pub name: String,
    pub hourly_rate: f64,
    pub duration_days: i64,
    pub work_hours: f64,
    pub total_cost: f64,
}

/// Head counts across the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCapacity {
    pub total: usize,
    pub available: usize,
    /// Available pilots holding an assignment.
    pub assigned: usize,
    /// Available pilots with no assignment.
    pub unassigned: usize,
    pub on_leave: usize,
    pub unavailable: usize,
}

/// Query view over the fleet's pilots.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    fleet: &'a Fleet,
    workday_hours: f64,
}

impl<'a> Roster<'a> {
    /// Creates a roster view.
    pub fn new(fleet: &'a Fleet, workday_hours: f64) -> Self {
        Self {
            fleet,
            workday_hours,
        }
    }

    /// Looks up a pilot.
    pub fn pilot(&self, id: &str) -> Option<&'a Pilot> {
        self.fleet.pilot(id)
    }

    /// Pilots with status `Available`, assigned or not.
    pub fn available_pilots(&self) -> Vec<&'a Pilot> {
        self.fleet
            .pilots()
            .filter(|p| p.status == PilotStatus::Available)
            .collect()
    }

    /// Available pilots holding every listed skill.
    pub fn by_skill(&self, skills: &[String]) -> Vec<&'a Pilot> {
        self.available_where(|p| p.has_skills(skills))
    }

    /// Available pilots holding every listed certification.
    pub fn by_certification(&self, certifications: &[String]) -> Vec<&'a Pilot> {
        self.available_where(|p| p.has_certifications(certifications))
    }

    /// Available pilots based at `location`.
    pub fn by_location(&self, location: &str) -> Vec<&'a Pilot> {
        self.available_where(|p| p.location == location)
    }

    /// Qualified pilots free over `[start, end]`, local ones first, then
    /// by experience (most first).
    pub fn candidates_for(
        &self,
        skills: &[String],
        certifications: &[String],
        location: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&'a Pilot> {
        let mut found = self.available_where(|p| {
            p.has_skills(skills) && p.has_certifications(certifications) && p.is_available_for(start, end)
        });
        found.sort_by(|a, b| {
            (a.location != location)
                .cmp(&(b.location != location))
                .then_with(|| {
                    b.experience_hours
                        .partial_cmp(&a.experience_hours)
                        .unwrap_or(Ordering::Equal)
                })
        });
        found
    }

    /// Hours and rate figures for one pilot.
    pub fn hours_summary(&self, id: &str) -> Option<PilotHours> {
        self.pilot(id).map(|p| PilotHours {
            pilot_id: p.id.clone(),
            name: p.name.clone(),
            hourly_rate: p.hourly_rate,
            max_monthly_hours: p.max_monthly_hours,
            experience_hours: p.experience_hours,
        })
    }

    /// Cost of one pilot over `duration_days`.
    pub fn pilot_cost(&self, id: &str, duration_days: i64) -> Option<PilotCost> {
        self.pilot(id).map(|p| PilotCost {
            pilot_id: p.id.clone(),
            name: p.name.clone(),
            hourly_rate: p.hourly_rate,
            duration_days,
            work_hours: duration_days as f64 * self.workday_hours,
            total_cost: p.mission_cost(duration_days, self.workday_hours),
        })
    }

    /// Head counts by status.
    pub fn capacity(&self) -> RosterCapacity {
        let mut cap = RosterCapacity::default();
        for p in self.fleet.pilots() {
            cap.total += 1;
            match p.status {
                PilotStatus::Available if p.is_assigned() => {
                    cap.available += 1;
                    cap.assigned += 1;
                }
                PilotStatus::Available => {
                    cap.available += 1;
                    cap.unassigned += 1;
                }
                PilotStatus::OnLeave => cap.on_leave += 1,
                PilotStatus::Unavailable => cap.unavailable += 1,
            }
        }
        cap
    }

    fn available_where(&self, pred: impl Fn(&Pilot) -> bool) -> Vec<&'a Pilot> {
        self.fleet
            .pilots()
            .filter(|p| p.status == PilotStatus::Available && pred(p))
            .collect()
    }
}

/// Changes a pilot's roster status. `false` if the pilot is unknown.
pub fn update_pilot_status(fleet: &mut Fleet, pilot_id: &str, status: PilotStatus) -> bool {
    match fleet.pilot_mut(pilot_id) {
        Some(pilot) => {
            debug!(pilot = pilot_id, from = ?pilot.status, to = ?status, "pilot status updated");
            pilot.status = status;
            true
        }
        None => false,
    }
}
