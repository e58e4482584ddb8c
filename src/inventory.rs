//! Drone inventory queries and status updates.
//!
//! Query methods only ever return assignable drones (`Active` and not
//! holding a mission), except [`Inventory::maintenance_alerts`], which
//! scans the whole fleet.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fleet::Fleet;
use crate::models::{Drone, DroneStatus, Weather};

/// Drone counts by status and assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub standby: usize,
    /// Active and unassigned.
    pub available: usize,
    /// Holding a mission, whatever the status.
    pub assigned: usize,
}

/// A drone whose maintenance date has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceAlert {
    pub drone_id: String,
    pub model: String,
    pub maintenance_due: NaiveDate,
    pub status: DroneStatus,
}

/// Query view over the fleet's drones.
#[derive(Debug, Clone, Copy)]
pub struct Inventory<'a> {
    fleet: &'a Fleet,
}

impl<'a> Inventory<'a> {
    /// Creates an inventory view.
    pub fn new(fleet: &'a Fleet) -> Self {
        Self { fleet }
    }

    /// Looks up a drone.
    pub fn drone(&self, id: &str) -> Option<&'a Drone> {
        self.fleet.drone(id)
    }

    /// Active, unassigned drones.
    pub fn available_drones(&self) -> Vec<&'a Drone> {
        self.available_where(|_| true)
    }

    /// Available drones holding every listed capability.
    pub fn by_capability(&self, capabilities: &[String]) -> Vec<&'a Drone> {
        self.available_where(|d| d.has_capabilities(capabilities))
    }

    /// Available drones based at `location`.
    pub fn by_location(&self, location: &str) -> Vec<&'a Drone> {
        self.available_where(|d| d.location == location)
    }

    /// Available drones whose tier admits `weather`.
    pub fn by_weather(&self, weather: &Weather) -> Vec<&'a Drone> {
        self.available_where(|d| d.can_fly_in(weather))
    }

    /// Capable, weather-fit drones; local ones first, then cheapest first.
    pub fn candidates_for(
        &self,
        capabilities: &[String],
        weather: &Weather,
        location: &str,
    ) -> Vec<&'a Drone> {
        let mut found = self.available_where(|d| d.has_capabilities(capabilities) && d.can_fly_in(weather));
        found.sort_by(|a, b| {
            (a.location != location)
                .cmp(&(b.location != location))
                .then_with(|| a.daily_rate.partial_cmp(&b.daily_rate).unwrap_or(Ordering::Equal))
        });
        found
    }

    /// Counts by status and assignment.
    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary::default();
        for d in self.fleet.drones() {
            summary.total += 1;
            match d.status {
                DroneStatus::Active => summary.active += 1,
                DroneStatus::Maintenance => summary.maintenance += 1,
                DroneStatus::Standby => summary.standby += 1,
            }
            if d.is_available() {
                summary.available += 1;
            }
            if d.current_assignment.is_some() {
                summary.assigned += 1;
            }
        }
        summary
    }

    /// Every drone overdue for maintenance as of the fleet's reference date.
    pub fn maintenance_alerts(&self) -> Vec<MaintenanceAlert> {
        let today = self.fleet.as_of();
        self.fleet
            .drones()
            .filter(|d| d.is_maintenance_due(today))
            .filter_map(|d| {
                d.maintenance_due.map(|due| MaintenanceAlert {
                    drone_id: d.id.clone(),
                    model: d.model.clone(),
                    maintenance_due: due,
                    status: d.status,
                })
            })
            .collect()
    }

    fn available_where(&self, pred: impl Fn(&Drone) -> bool) -> Vec<&'a Drone> {
        self.fleet
            .drones()
            .filter(|d| d.is_available() && pred(d))
            .collect()
    }
}

/// Changes a drone's status. `false` if the drone is unknown.
pub fn update_drone_status(fleet: &mut Fleet, drone_id: &str, status: DroneStatus) -> bool {
    match fleet.drone_mut(drone_id) {
        Some(drone) => {
            debug!(drone = drone_id, from = ?drone.status, to = ?status, "drone status updated");
            drone.status = status;
            true
        }
        None => false,
    }
}

/// Sets the maintenance date and takes the drone out of service.
/// `false` if the drone is unknown.
pub fn flag_maintenance(fleet: &mut Fleet, drone_id: &str, date: NaiveDate) -> bool {
    match fleet.drone_mut(drone_id) {
        Some(drone) => {
            debug!(drone = drone_id, due = %date, "drone flagged for maintenance");
            drone.maintenance_due = Some(date);
            drone.status = DroneStatus::Maintenance;
            true
        }
        None => false,
    }
}
