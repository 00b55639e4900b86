//! Fate Spinner - decision randomizer core.
//!
//! Picks one winner uniformly from a user-supplied list of options,
//! dramatizes the reveal through one of four animation drivers, and keeps
//! a bounded, persisted history of past decisions.
//!
//! # Architecture
//!
//! - `domain` - Options, selection, animation state machines, history log
//! - `ports` - Randomness, key-value storage and notification contracts
//! - `adapters` - Concrete implementations of the ports
//! - `application` - History service, tick runner and the decision cycle
//! - `config` - Environment-driven configuration
//! - `telemetry` - Tracing subscriber set-up

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
