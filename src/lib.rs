//! Drone operations coordination engine.
//!
//! Matches pilots and drones to time-bounded missions, detects conflicts in
//! the current assignment state, and proposes corrective reassignments.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Pilot`, `Drone`, `Mission`, `Conflict`,
//!   `ReassignmentSuggestion`, `PriorityReassignment`
//! - **`validation`**: Input integrity checks (duplicate IDs, date ranges,
//!   amounts, assignment links)
//! - **`fleet`**: Identity-keyed store the components borrow
//! - **`matching`**: Eligibility gates, scoring, ranking, reassignment
//! - **`conflicts`**: Full-schedule conflict detection
//! - **`reassignment`**: Suggestions and priority reassignment list
//! - **`roster`** / **`inventory`**: Pilot and drone queries and status updates
//! - **`report`**: Conflict and status summaries
//! - **`actions`**: `Engine` facade and the front-end action set
//! - **`config`**: TOML-loadable engine configuration
//! - **`generator`**: Seeded random fleets for tests and benchmarks
//!
//! # Architecture
//!
//! Synchronous and in-memory. The engine performs no I/O apart from
//! optional config loading, and logs through `tracing` without installing
//! a subscriber.

pub mod actions;
pub mod config;
pub mod conflicts;
pub mod error;
pub mod fleet;
pub mod generator;
pub mod inventory;
pub mod matching;
pub mod models;
pub mod reassignment;
pub mod report;
pub mod roster;
pub mod validation;

pub use actions::{Action, ActionOutcome, Engine};
pub use config::EngineConfig;
pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
