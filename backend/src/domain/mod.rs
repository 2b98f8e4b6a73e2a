//! # Domain Module
//!
//! Business logic for the kiosk backend.
//!
//! ## Module Organization
//!
//! - **rotation**: the chore rotation engine, a pure function of chores and time
//! - **dates**: local-midnight and next-Monday arithmetic used by the engine
//! - **clock**: injectable source of "now"
//! - **chore_service**: configuration reads and writes, with rotation applied on read
//! - **commands**: internal command/result types used by the services
//! - **models**: rotation classes, fragments and status snapshots
//! - **error**: typed errors the IO layer maps to status codes
//!
//! ## Business Rules
//!
//! - Chores rotate only with at least two kids in the roster
//! - Daily chores change hands at local midnight, weekly chores at Monday's midnight
//! - A kid leaving the roster hands their chores to the first kid at the next rotation
//! - Next-rotation instants are stored as absolute timestamps, so restarts are harmless

pub mod chore_service;
pub mod clock;
pub mod commands;
pub mod dates;
pub mod error;
pub mod models;
pub mod rotation;

pub use chore_service::*;
pub use clock::*;
pub use error::ChoreError;
