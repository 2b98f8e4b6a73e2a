//! # IO Module
//!
//! Interface layer between the kiosk UI and the domain logic.
//!
//! Translates HTTP requests into chore service calls and domain results into
//! JSON responses. No business rules live here.
//!
//! ## Supported Operations
//!
//! - **GET /api/config**: full configuration, chores rotated as of now
//! - **POST /api/config**: replace the configuration
//! - **GET /api/chores**: chores section only
//! - **GET /api/chores/rotation**: rotation schedule summary
//! - **POST /api/chores/reassign**: hand a chore to a kid by hand
//! - **GET /api/health**: liveness probe

pub mod rest;

pub use rest::*;
