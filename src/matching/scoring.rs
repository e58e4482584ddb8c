//! Candidate scoring.
//!
//! | Component | Pilot | Drone |
//! |-----------|-------|-------|
//! | Base | 50 | 50 |
//! | Experience | `min(hours / 500 × 20, 20)` | - |
//! | Weather tier | - | Generic 0, IP42 7, IP43 14, IP45 20 |
//! | Location | 10 if same site | 10 if same site |
//! | Cost efficiency | `max(0, (1 − cost / budget) × 20)` if cost ≤ budget | same, with daily cost |
//! | Penalty | −5 if already assigned | - |
//!
//! Pilot cost is `duration_days × workday_hours × hourly_rate`; drone cost
//! is `daily_rate × duration_days`. The constants come from
//! [`ScoringWeights`](crate::config::ScoringWeights).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::models::{Drone, Mission, Pilot};

const EPSILON: f64 = 1e-9;

/// Per-component score of one candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Starting points of every eligible candidate.
    pub base: f64,
    /// Pilot experience bonus, capped.
    pub experience: f64,
    /// Drone weather-tier bonus.
    pub weather: f64,
    /// Same-site bonus.
    pub location: f64,
    /// Share of the budget left after this candidate's cost.
    pub cost_efficiency: f64,
    /// Subtracted from the total.
    pub penalty: f64,
}

impl ScoreBreakdown {
    /// Sum of bonuses minus penalty.
    pub fn total(&self) -> f64 {
        self.base + self.experience + self.weather + self.location + self.cost_efficiency
            - self.penalty
    }
}

pub(crate) fn score_pilot(
    pilot: &Pilot,
    mission: &Mission,
    weights: &ScoringWeights,
    workday_hours: f64,
) -> ScoreBreakdown {
    let experience = if weights.experience_hours_for_cap > 0.0 {
        (pilot.experience_hours / weights.experience_hours_for_cap * weights.experience_cap)
            .min(weights.experience_cap)
    } else {
        weights.experience_cap
    };
    let cost = pilot.mission_cost(mission.duration_days(), workday_hours);

    ScoreBreakdown {
        base: weights.base,
        experience,
        weather: 0.0,
        location: location_bonus(&pilot.location, mission, weights),
        cost_efficiency: cost_efficiency(cost, mission.budget, weights),
        penalty: if pilot.is_assigned() {
            weights.assigned_penalty
        } else {
            0.0
        },
    }
}

pub(crate) fn score_drone(drone: &Drone, mission: &Mission, weights: &ScoringWeights) -> ScoreBreakdown {
    let cost = drone.mission_cost(mission.duration_days());

    ScoreBreakdown {
        base: weights.base,
        experience: 0.0,
        weather: weights.weather.for_rating(drone.weather_rating),
        location: location_bonus(&drone.location, mission, weights),
        cost_efficiency: cost_efficiency(cost, mission.budget, weights),
        penalty: 0.0,
    }
}

fn location_bonus(location: &str, mission: &Mission, weights: &ScoringWeights) -> f64 {
    if location == mission.location {
        weights.location_bonus
    } else {
        0.0
    }
}

/// No bonus over budget or against a non-positive budget.
fn cost_efficiency(cost: f64, budget: f64, weights: &ScoringWeights) -> f64 {
    if budget <= 0.0 || cost > budget {
        return 0.0;
    }
    ((1.0 - cost / budget) * weights.cost_efficiency_max).max(0.0)
}

/// Higher score first; equal scores by identity ascending.
pub(crate) fn rank_order(score_a: f64, id_a: &str, score_b: f64, id_b: &str) -> Ordering {
    if (score_a - score_b).abs() > EPSILON {
        return score_b.partial_cmp(&score_a).unwrap_or(Ordering::Equal);
    }
    id_a.cmp(id_b)
}
