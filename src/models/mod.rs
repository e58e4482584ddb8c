//! Drone operations domain models.
//!
//! Plain records with small derived predicates. No engine logic lives here.
//!
//! # Domain Mappings
//!
//! | drone-ops | Scheduling term | Role |
//! |-----------|-----------------|------|
//! | Mission | Task | Dated job with requirements |
//! | Pilot | Human resource | Skills, certifications, hourly rate |
//! | Drone | Primary resource | Capabilities, weather tier, daily rate |
//! | Conflict | Violation | Rule broken by the current assignment |

mod conflict;
mod drone;
mod mission;
mod pilot;
mod suggestion;

pub use conflict::{Conflict, ConflictType, Severity};
pub use drone::{Drone, DroneStatus, WeatherRating};
pub use mission::{Mission, MissionPriority, MissionStatus, Weather};
pub use pilot::{Pilot, PilotStatus};
pub use suggestion::{PriorityReassignment, ReassignmentSuggestion, Urgency};
