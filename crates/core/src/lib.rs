//! plane_trail_core - Leg geometry and home reference for the plane_trail autopilot
//!
//! Pure, platform-agnostic navigation state that the flight controller
//! updates whenever the active target changes. Host-testable without any
//! embedded dependencies.
//!
//! # Design Principles
//!
//! - **Explicit ownership**: all state lives in [`navigation::NavContext`]
//! - **Events, not callbacks**: operations return the notifications they
//!   produced; the caller forwards them through [`navigation::NavSink`]
//! - **No allocation**: fixed-capacity `heapless` containers only
//!
//! # Modules
//!
//! - [`location`]: Geodetic location type and local offsets
//! - [`navigation`]: Leg geometry, home reference, passed-point test, events
//! - [`parameters`]: Parameter store and navigation parameter block
//! - [`logging`]: `log_*!` macros (defmt on target, stdout in tests)
//!
//! # Features
//!
//! - `defmt`: route `log_*!` to defmt. This is the only feature gate in the
//!   crate. There is no separate firmware package in this workspace to host
//!   the macros, so they live here and compile to nothing when the feature
//!   is off.
//!
//! `std` is linked only for unit tests so log output reaches the test
//! harness.

#![cfg_attr(not(test), no_std)]

pub mod logging;

pub mod location;
pub mod navigation;
pub mod parameters;

pub use location::{Location, LocationFlags};
