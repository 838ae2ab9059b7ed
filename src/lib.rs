//! Taskboard: personal task management service.
//!
//! This crate provides task creation, status lifecycle enforcement, lookup by
//! status and deletion over a concurrency-safe in-memory store, exposed
//! through a small JSON HTTP API.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, store, use cases and HTTP adapter
//! - [`config`]: Server configuration from the environment
//! - [`telemetry`]: Tracing subscriber set-up

pub mod config;
pub mod task;
pub mod telemetry;
