//! Input validation for fleet data.
//!
//! Two passes with different weight:
//!
//! - [`validate_input`] checks structural integrity and is fatal to fleet
//!   construction: duplicate IDs, inverted date ranges, negative or
//!   non-finite amounts.
//! - [`audit_links`] checks assignment links between records. These are
//!   tolerated (the engine never auto-repairs links) and only reported.

use std::collections::{HashMap, HashSet};

use crate::models::{Drone, Mission, Pilot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records in one collection share an ID.
    DuplicateId,
    /// A date range ends before it starts.
    InvalidDateRange,
    /// A rate, budget, or hour figure is negative or not finite.
    InvalidAmount,
    /// An assignment link names a record that doesn't exist.
    UnknownReference,
    /// A resource points at a mission that names a different holder.
    BrokenBackLink,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input records of one engine session.
///
/// Checks:
/// 1. No duplicate pilot, drone, or mission IDs
/// 2. Mission `end_date >= start_date`
/// 3. Pilot availability window `until >= from` when both are set
/// 4. Rates, budgets, and hours are finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(pilots: &[Pilot], drones: &[Drone], missions: &[Mission]) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(pilots.iter().map(|p| p.id.as_str()), "pilot", &mut errors);
    check_unique(drones.iter().map(|d| d.id.as_str()), "drone", &mut errors);
    check_unique(missions.iter().map(|m| m.id.as_str()), "mission", &mut errors);

    for p in pilots {
        if let (Some(from), Some(until)) = (p.available_from, p.available_until) {
            if until < from {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDateRange,
                    format!("Pilot '{}' availability ends ({until}) before it starts ({from})", p.id),
                ));
            }
        }
        check_amount(p.hourly_rate, "Pilot", &p.id, "hourly rate", &mut errors);
        check_amount(p.experience_hours, "Pilot", &p.id, "experience hours", &mut errors);
        check_amount(p.max_monthly_hours, "Pilot", &p.id, "max monthly hours", &mut errors);
    }

    for d in drones {
        check_amount(d.daily_rate, "Drone", &d.id, "daily rate", &mut errors);
    }

    for m in missions {
        if m.end_date < m.start_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDateRange,
                format!(
                    "Mission '{}' ends ({}) before it starts ({})",
                    m.id, m.end_date, m.start_date
                ),
            ));
        }
        check_amount(m.budget, "Mission", &m.id, "budget", &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Reports assignment links that don't line up.
///
/// A mission naming an unknown pilot/drone, or a pilot/drone naming an
/// unknown mission, is `UnknownReference`. A pilot/drone whose mission
/// names a different holder is `BrokenBackLink`. A mission naming a holder
/// whose own link points elsewhere is not reported: that is the normal
/// state of a double-booked resource.
pub fn audit_links(pilots: &[Pilot], drones: &[Drone], missions: &[Mission]) -> Vec<ValidationError> {
    let mut findings = Vec::new();

    let pilot_ids: HashSet<&str> = pilots.iter().map(|p| p.id.as_str()).collect();
    let drone_ids: HashSet<&str> = drones.iter().map(|d| d.id.as_str()).collect();
    let by_id: HashMap<&str, &Mission> = missions.iter().map(|m| (m.id.as_str(), m)).collect();

    for m in missions {
        if let Some(pid) = &m.assigned_pilot {
            if !pilot_ids.contains(pid.as_str()) {
                findings.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Mission '{}' references unknown pilot '{pid}'", m.id),
                ));
            }
        }
        if let Some(did) = &m.assigned_drone {
            if !drone_ids.contains(did.as_str()) {
                findings.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Mission '{}' references unknown drone '{did}'", m.id),
                ));
            }
        }
    }

    for p in pilots {
        let Some(mid) = &p.current_assignment else {
            continue;
        };
        match by_id.get(mid.as_str()) {
            None => findings.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Pilot '{}' references unknown mission '{mid}'", p.id),
            )),
            Some(m) if m.assigned_pilot.as_deref() != Some(p.id.as_str()) => {
                findings.push(ValidationError::new(
                    ValidationErrorKind::BrokenBackLink,
                    format!("Pilot '{}' claims mission '{mid}' which does not name it", p.id),
                ))
            }
            Some(_) => {}
        }
    }

    for d in drones {
        let Some(mid) = &d.current_assignment else {
            continue;
        };
        match by_id.get(mid.as_str()) {
            None => findings.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Drone '{}' references unknown mission '{mid}'", d.id),
            )),
            Some(m) if m.assigned_drone.as_deref() != Some(d.id.as_str()) => {
                findings.push(ValidationError::new(
                    ValidationErrorKind::BrokenBackLink,
                    format!("Drone '{}' claims mission '{mid}' which does not name it", d.id),
                ))
            }
            Some(_) => {}
        }
    }

    findings
}

fn check_unique<'a>(
    ids: impl Iterator<Item = &'a str>,
    label: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {label} ID: {id}"),
            ));
        }
    }
}

fn check_amount(value: f64, entity: &str, id: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAmount,
            format!("{entity} '{id}' has invalid {field}: {value}"),
        ));
    }
}
