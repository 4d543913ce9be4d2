//! Leg geometry and home reference
//!
//! - [`passed_point`]: pure overshoot geometry
//! - [`home`]: home location and lock state machine
//! - [`leg`]: leg endpoints, crosstrack and loiter direction
//! - [`context`]: `NavContext`, the single owner used by the controller
//! - [`events`]: notifications returned by every operation

pub mod context;
pub mod events;
pub mod home;
pub mod leg;
pub mod passed_point;

pub use context::NavContext;
pub use events::{
    dispatch, AdvisoryText, NavEvent, NavEvents, NavSink, Severity, ADVISORY_TEXT_LEN,
    MAX_NAV_EVENTS,
};
pub use home::{HomeError, HomeLock, HomeRefresh, HomeReference, HomeState};
pub use leg::{Crosstrack, LegGeometry, LegTarget, LoiterDirection};
pub use passed_point::{location_passed_point, location_path_proportion};
