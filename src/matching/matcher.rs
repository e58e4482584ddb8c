//! The matcher: ranking reads and reassignment writes.

use tracing::{debug, trace};

use super::eligibility::{drone_eligible, pilot_eligible};
use super::scoring::{rank_order, score_drone, score_pilot, ScoreBreakdown};
use super::{ActiveAssignment, DroneMatch, MatchSummary, PilotMatch};
use crate::config::{EngineConfig, ScoringWeights};
use crate::fleet::Fleet;
use crate::models::{Drone, Mission, Pilot};

/// Scores and ranks candidates, and applies reassignments.
///
/// Holds only configuration; all state lives in the [`Fleet`] passed to
/// each call.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    workday_hours: f64,
}

impl Matcher {
    /// Creates a matcher from engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            weights: config.scoring.clone(),
            workday_hours: config.workday_hours,
        }
    }

    /// Score of one pilot for one mission, eligible or not.
    pub fn pilot_score(&self, pilot: &Pilot, mission: &Mission) -> ScoreBreakdown {
        score_pilot(pilot, mission, &self.weights, self.workday_hours)
    }

    /// Score of one drone for one mission, eligible or not.
    pub fn drone_score(&self, drone: &Drone, mission: &Mission) -> ScoreBreakdown {
        score_drone(drone, mission, &self.weights)
    }

    /// All eligible pilots for `mission`, best first.
    pub fn rank_pilots(&self, fleet: &Fleet, mission: &Mission) -> Vec<PilotMatch> {
        let mut ranked: Vec<PilotMatch> = fleet
            .pilots()
            .filter(|p| pilot_eligible(p, mission))
            .map(|p| {
                let breakdown = self.pilot_score(p, mission);
                let score = breakdown.total();
                trace!(mission = %mission.id, pilot = %p.id, score, "pilot candidate");
                PilotMatch {
                    pilot_id: p.id.clone(),
                    score,
                    breakdown,
                }
            })
            .collect();

        ranked.sort_by(|a, b| rank_order(a.score, &a.pilot_id, b.score, &b.pilot_id));
        ranked
    }

    /// All eligible drones for `mission`, best first.
    pub fn rank_drones(&self, fleet: &Fleet, mission: &Mission) -> Vec<DroneMatch> {
        let today = fleet.as_of();
        let mut ranked: Vec<DroneMatch> = fleet
            .drones()
            .filter(|d| drone_eligible(d, mission, today))
            .map(|d| {
                let breakdown = self.drone_score(d, mission);
                let score = breakdown.total();
                trace!(mission = %mission.id, drone = %d.id, score, "drone candidate");
                DroneMatch {
                    drone_id: d.id.clone(),
                    score,
                    breakdown,
                }
            })
            .collect();

        ranked.sort_by(|a, b| rank_order(a.score, &a.drone_id, b.score, &b.drone_id));
        ranked
    }

    /// Highest-scoring eligible pilot, if any.
    pub fn best_pilot(&self, fleet: &Fleet, mission: &Mission) -> Option<PilotMatch> {
        self.rank_pilots(fleet, mission).into_iter().next()
    }

    /// Highest-scoring eligible drone, if any.
    pub fn best_drone(&self, fleet: &Fleet, mission: &Mission) -> Option<DroneMatch> {
        self.rank_drones(fleet, mission).into_iter().next()
    }

    /// Best pilot and best drone for a mission.
    ///
    /// Returns `None` if the mission is unknown.
    pub fn match_mission(&self, fleet: &Fleet, mission_id: &str) -> Option<MatchSummary> {
        let mission = fleet.mission(mission_id)?;
        let pilot = self.best_pilot(fleet, mission);
        let drone = self.best_drone(fleet, mission);

        Some(MatchSummary {
            mission_id: mission.id.clone(),
            pilot_score: pilot.as_ref().map(|p| p.score).unwrap_or(0.0),
            pilot_id: pilot.map(|p| p.pilot_id),
            drone_score: drone.as_ref().map(|d| d.score).unwrap_or(0.0),
            drone_id: drone.map(|d| d.drone_id),
        })
    }

    /// Missions with a pilot or a drone assigned, in identity order.
    pub fn active_assignments(&self, fleet: &Fleet) -> Vec<ActiveAssignment> {
        fleet
            .missions()
            .filter(|m| m.has_assignment())
            .map(|m| ActiveAssignment {
                mission_id: m.id.clone(),
                project_name: m.project_name.clone(),
                pilot_id: m.assigned_pilot.clone(),
                drone_id: m.assigned_drone.clone(),
                start_date: m.start_date,
                end_date: m.end_date,
                status: m.status,
            })
            .collect()
    }

    /// Puts `pilot_id` on `mission_id`.
    ///
    /// Returns `false` (and changes nothing) if either id is unknown.
    /// The previous holder's link is cleared only if it still points at
    /// this mission. No eligibility check is made, and the new pilot's
    /// previous mission (if any) keeps naming it.
    pub fn reassign_pilot(&self, fleet: &mut Fleet, mission_id: &str, pilot_id: &str) -> bool {
        if fleet.pilot(pilot_id).is_none() {
            debug!(mission = mission_id, pilot = pilot_id, "reassign rejected: unknown pilot");
            return false;
        }
        let Some(mission) = fleet.mission_mut(mission_id) else {
            debug!(mission = mission_id, pilot = pilot_id, "reassign rejected: unknown mission");
            return false;
        };
        let previous = mission.assigned_pilot.replace(pilot_id.to_string());

        if let Some(old) = previous.as_deref().and_then(|id| fleet.pilot_mut(id)) {
            if old.current_assignment.as_deref() == Some(mission_id) {
                old.current_assignment = None;
            }
        }
        if let Some(pilot) = fleet.pilot_mut(pilot_id) {
            pilot.current_assignment = Some(mission_id.to_string());
        }

        debug!(
            mission = mission_id,
            from = previous.as_deref().unwrap_or("-"),
            to = pilot_id,
            "pilot reassigned"
        );
        true
    }

    /// Puts `drone_id` on `mission_id`. Same link rules as
    /// [`reassign_pilot`](Self::reassign_pilot).
    pub fn reassign_drone(&self, fleet: &mut Fleet, mission_id: &str, drone_id: &str) -> bool {
        if fleet.drone(drone_id).is_none() {
            debug!(mission = mission_id, drone = drone_id, "reassign rejected: unknown drone");
            return false;
        }
        let Some(mission) = fleet.mission_mut(mission_id) else {
            debug!(mission = mission_id, drone = drone_id, "reassign rejected: unknown mission");
            return false;
        };
        let previous = mission.assigned_drone.replace(drone_id.to_string());

        if let Some(old) = previous.as_deref().and_then(|id| fleet.drone_mut(id)) {
            if old.current_assignment.as_deref() == Some(mission_id) {
                old.current_assignment = None;
            }
        }
        if let Some(drone) = fleet.drone_mut(drone_id) {
            drone.current_assignment = Some(mission_id.to_string());
        }

        debug!(
            mission = mission_id,
            from = previous.as_deref().unwrap_or("-"),
            to = drone_id,
            "drone reassigned"
        );
        true
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
