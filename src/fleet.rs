//! Fleet store.
//!
//! The arena every engine component reads from: pilots, drones, and
//! missions keyed by identity. Components borrow the fleet instead of
//! copying it, so a mutation made through one is seen by all.
//!
//! Iteration is in identity order (`BTreeMap`), which makes every ranking
//! and detection pass deterministic.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::error::{FleetError, FleetResult};
use crate::models::{Drone, Mission, Pilot};
use crate::validation::{audit_links, validate_input};

/// Identity-keyed pilots, drones, and missions for one engine session.
#[derive(Debug, Clone)]
pub struct Fleet {
    pilots: BTreeMap<String, Pilot>,
    drones: BTreeMap<String, Drone>,
    missions: BTreeMap<String, Mission>,
    as_of: NaiveDate,
}

impl Fleet {
    /// Builds a fleet from ingested records.
    ///
    /// Fails if [`validate_input`] reports any problem. Link inconsistencies
    /// found by [`audit_links`] are logged and kept as-is.
    pub fn new(pilots: Vec<Pilot>, drones: Vec<Drone>, missions: Vec<Mission>) -> FleetResult<Self> {
        validate_input(&pilots, &drones, &missions).map_err(FleetError::InvalidInput)?;

        for finding in audit_links(&pilots, &drones, &missions) {
            warn!(kind = ?finding.kind, "{}", finding.message);
        }

        Ok(Self {
            pilots: pilots.into_iter().map(|p| (p.id.clone(), p)).collect(),
            drones: drones.into_iter().map(|d| (d.id.clone(), d)).collect(),
            missions: missions.into_iter().map(|m| (m.id.clone(), m)).collect(),
            as_of: chrono::Local::now().date_naive(),
        })
    }

    /// Sets the reference date used for maintenance checks.
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    /// Reference "today".
    #[inline]
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Moves the reference date.
    pub fn set_as_of(&mut self, as_of: NaiveDate) {
        self.as_of = as_of;
    }

    /// Looks up a pilot.
    pub fn pilot(&self, id: &str) -> Option<&Pilot> {
        self.pilots.get(id)
    }

    /// Looks up a drone.
    pub fn drone(&self, id: &str) -> Option<&Drone> {
        self.drones.get(id)
    }

    /// Looks up a mission.
    pub fn mission(&self, id: &str) -> Option<&Mission> {
        self.missions.get(id)
    }

    /// Pilots in identity order.
    pub fn pilots(&self) -> impl Iterator<Item = &Pilot> {
        self.pilots.values()
    }

    /// Drones in identity order.
    pub fn drones(&self) -> impl Iterator<Item = &Drone> {
        self.drones.values()
    }

    /// Missions in identity order.
    pub fn missions(&self) -> impl Iterator<Item = &Mission> {
        self.missions.values()
    }

    /// Number of pilots.
    pub fn pilot_count(&self) -> usize {
        self.pilots.len()
    }

    /// Number of drones.
    pub fn drone_count(&self) -> usize {
        self.drones.len()
    }

    /// Number of missions.
    pub fn mission_count(&self) -> usize {
        self.missions.len()
    }

    pub(crate) fn pilot_mut(&mut self, id: &str) -> Option<&mut Pilot> {
        self.pilots.get_mut(id)
    }

    pub(crate) fn drone_mut(&mut self, id: &str) -> Option<&mut Drone> {
        self.drones.get_mut(id)
    }

    pub(crate) fn mission_mut(&mut self, id: &str) -> Option<&mut Mission> {
        self.missions.get_mut(id)
    }
}
