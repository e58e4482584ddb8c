//! Per-mission conflict checks.
//!
//! Each check reads the fleet and appends findings; none reads another's
//! output. A mission whose assigned pilot/drone id names no record is
//! skipped by the checks for that resource.

use crate::fleet::Fleet;
use crate::models::{Conflict, ConflictType, Mission, Severity};

/// Double-booking, skill gap, certification gap.
pub(crate) fn check_pilot(fleet: &Fleet, mission: &Mission, out: &mut Vec<Conflict>) {
    let Some(pilot) = mission.assigned_pilot.as_deref().and_then(|id| fleet.pilot(id)) else {
        return;
    };

    for other in fleet.missions() {
        if other.id == mission.id || other.assigned_pilot.as_deref() != Some(pilot.id.as_str()) {
            continue;
        }
        if mission.overlaps(other) {
            out.push(
                Conflict::new(
                    ConflictType::DoubleBooking,
                    Severity::Critical,
                    &mission.id,
                    format!(
                        "Pilot {} assigned to overlapping missions: {} and {}",
                        pilot.name, mission.id, other.id
                    ),
                )
                .with_pilot(&pilot.id)
                .with_action(format!("Reassign pilot from {} or {}", mission.id, other.id)),
            );
        }
    }

    let missing_skills = pilot.missing_skills(&mission.required_skills);
    if !missing_skills.is_empty() {
        let list = missing_skills.join(", ");
        out.push(
            Conflict::new(
                ConflictType::SkillMismatch,
                Severity::Warning,
                &mission.id,
                format!("Pilot {} lacks required skills: {list}", pilot.name),
            )
            .with_pilot(&pilot.id)
            .with_action(format!("Find pilot with skills: {list}")),
        );
    }

    // Certification gaps share the skill_mismatch tag but are critical.
    let missing_certs = pilot.missing_certifications(&mission.required_certifications);
    if !missing_certs.is_empty() {
        let list = missing_certs.join(", ");
        out.push(
            Conflict::new(
                ConflictType::SkillMismatch,
                Severity::Critical,
                &mission.id,
                format!("Pilot {} lacks required certifications: {list}", pilot.name),
            )
            .with_pilot(&pilot.id)
            .with_action(format!("Find pilot with certifications: {list}")),
        );
    }
}

/// Double-booking, overdue maintenance, capability gap, weather risk.
pub(crate) fn check_drone(fleet: &Fleet, mission: &Mission, out: &mut Vec<Conflict>) {
    let Some(drone) = mission.assigned_drone.as_deref().and_then(|id| fleet.drone(id)) else {
        return;
    };

    for other in fleet.missions() {
        if other.id == mission.id || other.assigned_drone.as_deref() != Some(drone.id.as_str()) {
            continue;
        }
        if mission.overlaps(other) {
            out.push(
                Conflict::new(
                    ConflictType::DoubleBooking,
                    Severity::Critical,
                    &mission.id,
                    format!(
                        "Drone {} assigned to overlapping missions: {} and {}",
                        drone.model, mission.id, other.id
                    ),
                )
                .with_drone(&drone.id)
                .with_action(format!("Reassign drone from {} or {}", mission.id, other.id)),
            );
        }
    }

    if drone.is_maintenance_due(fleet.as_of()) {
        let due = drone
            .maintenance_due
            .map(|d| d.to_string())
            .unwrap_or_default();
        out.push(
            Conflict::new(
                ConflictType::MaintenanceConflict,
                Severity::Critical,
                &mission.id,
                format!("Drone {} is due for maintenance (due: {due})", drone.model),
            )
            .with_drone(&drone.id)
            .with_action("Schedule maintenance before mission or reassign drone"),
        );
    }

    let missing = drone.missing_capabilities(&mission.required_skills);
    if !missing.is_empty() {
        let list = missing.join(", ");
        out.push(
            Conflict::new(
                ConflictType::EquipmentMismatch,
                Severity::Warning,
                &mission.id,
                format!("Drone {} lacks capabilities: {list}", drone.model),
            )
            .with_drone(&drone.id)
            .with_action(format!("Find drone with capabilities: {list}")),
        );
    }

    if !drone.can_fly_in(&mission.weather_forecast) {
        out.push(
            Conflict::new(
                ConflictType::WeatherRisk,
                Severity::Warning,
                &mission.id,
                format!(
                    "Drone {} (rating: {}) cannot fly in {}",
                    drone.model,
                    drone.weather_rating.label(),
                    mission.weather_forecast
                ),
            )
            .with_drone(&drone.id)
            .with_action("Find weather-rated drone or delay mission"),
        );
    }
}

/// Pilot cost plus drone cost against the mission budget.
pub(crate) fn check_budget(
    fleet: &Fleet,
    mission: &Mission,
    workday_hours: f64,
    out: &mut Vec<Conflict>,
) {
    let days = mission.duration_days();
    let pilot_cost = mission
        .assigned_pilot
        .as_deref()
        .and_then(|id| fleet.pilot(id))
        .map(|p| p.mission_cost(days, workday_hours))
        .unwrap_or(0.0);
    let drone_cost = mission
        .assigned_drone
        .as_deref()
        .and_then(|id| fleet.drone(id))
        .map(|d| d.mission_cost(days))
        .unwrap_or(0.0);
    let total = pilot_cost + drone_cost;

    if total > mission.budget {
        let overage = total - mission.budget;
        out.push(
            Conflict::new(
                ConflictType::BudgetOverrun,
                Severity::Warning,
                &mission.id,
                format!(
                    "Mission budget ${:.2} exceeded by ${overage:.2} (estimated cost ${total:.2})",
                    mission.budget
                ),
            )
            .with_action("Consider cheaper resources or increase budget"),
        );
    }
}

/// One combined finding listing every resource based away from the site.
pub(crate) fn check_location(fleet: &Fleet, mission: &Mission, out: &mut Vec<Conflict>) {
    let mut mismatched = Vec::new();

    if let Some(pilot) = mission.assigned_pilot.as_deref().and_then(|id| fleet.pilot(id)) {
        if pilot.location != mission.location {
            mismatched.push(format!("Pilot {} at {}", pilot.name, pilot.location));
        }
    }
    if let Some(drone) = mission.assigned_drone.as_deref().and_then(|id| fleet.drone(id)) {
        if drone.location != mission.location {
            mismatched.push(format!("Drone {} at {}", drone.model, drone.location));
        }
    }

    if !mismatched.is_empty() {
        out.push(
            Conflict::new(
                ConflictType::LocationMismatch,
                Severity::Info,
                &mission.id,
                format!(
                    "Resource location mismatch: {} != mission location {}",
                    mismatched.join(", "),
                    mission.location
                ),
            )
            .with_action("Consider travel time or relocation costs"),
        );
    }
}
