//! Random fleet generator.
//!
//! Produces random but well-formed fleets (unique ids, valid date ranges,
//! non-negative amounts, consistent back-links) for tests and benchmarks.
//! The same seed always yields the same fleet.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::FleetResult;
use crate::fleet::Fleet;
use crate::models::{
    Drone, DroneStatus, Mission, MissionPriority, Pilot, PilotStatus, Weather, WeatherRating,
};

const SKILLS: &[&str] = &["Mapping", "Survey", "Inspection", "Thermal"];
const CERTIFICATIONS: &[&str] = &["DGCA", "Night Ops"];
const LOCATIONS: &[&str] = &["Bangalore", "Mumbai", "Delhi", "Pune"];
const MODELS: &[&str] = &["DJI M30", "DJI Mavic 3", "Skydio X10", "Autel EVO II"];

/// Configuration for generating fleets.
#[derive(Debug, Clone)]
pub struct FleetGeneratorConfig {
    pub num_pilots: usize,
    pub num_drones: usize,
    pub num_missions: usize,
    /// First day missions may start on; also the fleet's reference date.
    pub start: NaiveDate,
    /// Missions start within this many days of `start`.
    pub horizon_days: i64,
    /// Mission length range in days (min, max), inclusive.
    pub mission_length_range: (i64, i64),
    /// Fraction of missions given a pilot and drone up front (0.0 to 1.0).
    pub pre_assigned_fraction: f64,
    /// Fraction of drones whose maintenance is already overdue.
    pub overdue_maintenance_fraction: f64,
    /// Budget range per mission (min, max).
    pub budget_range: (f64, f64),
}

impl Default for FleetGeneratorConfig {
    fn default() -> Self {
        Self {
            num_pilots: 8,
            num_drones: 6,
            num_missions: 12,
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            horizon_days: 30,
            mission_length_range: (1, 5),
            pre_assigned_fraction: 0.5,
            overdue_maintenance_fraction: 0.15,
            budget_range: (1_000.0, 20_000.0),
        }
    }
}

/// Seeded generator for fleets.
pub struct FleetGenerator {
    config: FleetGeneratorConfig,
    rng: StdRng,
}

impl FleetGenerator {
    /// Create a new generator with the given config and seed.
    pub fn new(config: FleetGeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates raw records.
    pub fn generate_records(&mut self) -> (Vec<Pilot>, Vec<Drone>, Vec<Mission>) {
        let mut pilots = self.generate_pilots();
        let mut drones = self.generate_drones();
        let mut missions = self.generate_missions();
        self.pre_assign(&mut pilots, &mut drones, &mut missions);
        (pilots, drones, missions)
    }

    /// Generates a fleet dated at the configured start.
    pub fn generate(&mut self) -> FleetResult<Fleet> {
        let (pilots, drones, missions) = self.generate_records();
        Ok(Fleet::new(pilots, drones, missions)?.with_as_of(self.config.start))
    }

    fn generate_pilots(&mut self) -> Vec<Pilot> {
        (0..self.config.num_pilots)
            .map(|i| {
                let mut pilot = Pilot::new(format!("P{:03}", i + 1))
                    .with_name(format!("Pilot {}", i + 1))
                    .with_location(self.pick(LOCATIONS))
                    .with_experience(self.rng.random_range(0..2_000) as f64)
                    .with_hourly_rate(self.rng.random_range(20..120) as f64)
                    .with_status(match self.rng.random_range(0..10) {
                        0 => PilotStatus::OnLeave,
                        1 => PilotStatus::Unavailable,
                        _ => PilotStatus::Available,
                    });
                for skill in self.subset(SKILLS, 1) {
                    pilot = pilot.with_skill(skill);
                }
                for cert in self.subset(CERTIFICATIONS, 0) {
                    pilot = pilot.with_certification(cert);
                }
                if self.rng.random_bool(0.2) {
                    let from = self.random_day();
                    let span = self.rng.random_range(5..=self.config.horizon_days.max(5));
                    let until = from + Duration::days(span);
                    pilot = pilot.with_window(from, until);
                }
                pilot
            })
            .collect()
    }

    fn generate_drones(&mut self) -> Vec<Drone> {
        let ratings = [
            WeatherRating::Generic,
            WeatherRating::Ip42,
            WeatherRating::Ip43,
            WeatherRating::Ip45,
        ];
        (0..self.config.num_drones)
            .map(|i| {
                let rating = ratings[self.rng.random_range(0..ratings.len())];
                let mut drone = Drone::new(format!("D{:03}", i + 1))
                    .with_model(self.pick(MODELS))
                    .with_location(self.pick(LOCATIONS))
                    .with_weather_rating(rating)
                    .with_daily_rate(self.rng.random_range(50..500) as f64)
                    .with_status(match self.rng.random_range(0..10) {
                        0 => DroneStatus::Maintenance,
                        1 => DroneStatus::Standby,
                        _ => DroneStatus::Active,
                    });
                for cap in self.subset(SKILLS, 1) {
                    drone = drone.with_capability(cap);
                }
                let due = if self.rng.random_bool(self.config.overdue_maintenance_fraction) {
                    self.config.start - Duration::days(self.rng.random_range(1..30))
                } else {
                    self.config.start + Duration::days(self.rng.random_range(30..180))
                };
                drone.with_maintenance_due(due)
            })
            .collect()
    }

    fn generate_missions(&mut self) -> Vec<Mission> {
        let weathers = [Weather::Sunny, Weather::Cloudy, Weather::Rainy, Weather::Stormy];
        let priorities = [MissionPriority::Low, MissionPriority::Medium, MissionPriority::High];
        let (min_len, max_len) = self.config.mission_length_range;
        let (min_budget, max_budget) = self.config.budget_range;

        (0..self.config.num_missions)
            .map(|i| {
                let start = self.random_day();
                let end = start + Duration::days(self.rng.random_range(min_len..=max_len) - 1);
                let mut mission = Mission::new(format!("M{:03}", i + 1), start, end)
                    .with_project(format!("Project {}", i + 1))
                    .with_client(format!("Client {}", self.rng.random_range(1..=5)))
                    .with_location(self.pick(LOCATIONS))
                    .with_budget(self.rng.random_range(min_budget..=max_budget).round())
                    .with_weather(weathers[self.rng.random_range(0..weathers.len())].clone())
                    .with_priority(priorities[self.rng.random_range(0..priorities.len())]);
                for skill in self.subset(SKILLS, 1).into_iter().take(2) {
                    mission = mission.with_required_skill(skill);
                }
                if self.rng.random_bool(0.3) {
                    mission = mission.with_required_certification(self.pick(CERTIFICATIONS));
                }
                mission
            })
            .collect()
    }

    /// Gives a fraction of missions a random pilot and drone, keeping each
    /// holder's link on its latest mission. Overlaps are left in place.
    fn pre_assign(&mut self, pilots: &mut [Pilot], drones: &mut [Drone], missions: &mut [Mission]) {
        if pilots.is_empty() || drones.is_empty() {
            return;
        }
        for mission in missions.iter_mut() {
            if !self.rng.random_bool(self.config.pre_assigned_fraction) {
                continue;
            }
            let p = self.rng.random_range(0..pilots.len());
            let d = self.rng.random_range(0..drones.len());
            mission.assigned_pilot = Some(pilots[p].id.clone());
            mission.assigned_drone = Some(drones[d].id.clone());
            pilots[p].current_assignment = Some(mission.id.clone());
            drones[d].current_assignment = Some(mission.id.clone());
        }
    }

    fn pick(&mut self, pool: &[&str]) -> String {
        pool[self.rng.random_range(0..pool.len())].to_string()
    }

    /// Random subset of `pool` with at least `min` items, in pool order.
    fn subset(&mut self, pool: &[&str], min: usize) -> Vec<String> {
        let mut chosen: Vec<String> = pool
            .iter()
            .filter(|_| self.rng.random_bool(0.5))
            .map(|s| s.to_string())
            .collect();
        while chosen.len() < min.min(pool.len()) {
            let extra = self.pick(pool);
            if !chosen.contains(&extra) {
                chosen.push(extra);
            }
        }
        chosen
    }

    fn random_day(&mut self) -> NaiveDate {
        let offset = self.rng.random_range(0..self.config.horizon_days.max(1));
        self.config.start + Duration::days(offset)
    }
}
