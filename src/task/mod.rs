//! Personal task management.
//!
//! Tasks are created in the `todo` status, move freely between `todo`,
//! `doing` and `done` except that a done task can never return to `todo`,
//! and live in a volatile in-process store. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
