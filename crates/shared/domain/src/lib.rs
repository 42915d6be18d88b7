//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod document;
pub mod kinds;
pub mod value;

/// Key of a dialect zone (e.g. `andino`, `sur_espana`).
pub type ZoneKey = String;
/// Code of an administrative unit (e.g. `AR`, `ES-CN`).
pub type UnitCode = String;
/// Key of a linguistic feature (e.g. `seseo`).
pub type FeatureKey = String;
