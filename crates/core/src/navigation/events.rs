//! Navigation Event Types and Collaborator Trait
//!
//! Leg and home operations never call collaborators directly. Each
//! operation returns the notifications it produced, in order, and the
//! caller forwards them with [`dispatch`]. The firmware layer maps them
//! onto its subsystems:
//! - `Advisory` -> STATUSTEXT
//! - `SetTargetAltitude` -> altitude limiter / FBW climb limit
//! - `ResetProgressWatchdog` -> loiter angle reset (missed waypoint check)
//! - `RecomputeGlideSlope` / `RecomputeTurnGeometry` -> trajectory shaping
//! - `ReclassifyFlightStage` -> flight stage update (guided only)
//! - `PersistHome` / `BroadcastHome` / `LogHome` -> storage, HOME_POSITION, onboard log
//! - `UpdateBaroCalibration` -> barometer ground calibration

use heapless::{String, Vec};

use crate::location::Location;

/// Maximum notifications produced by a single operation.
pub const MAX_NAV_EVENTS: usize = 8;

/// Maximum advisory text length (STATUSTEXT payload width).
pub const ADVISORY_TEXT_LEN: usize = 50;

/// Advisory text buffer
pub type AdvisoryText = String<ADVISORY_TEXT_LEN>;

/// Ordered notifications returned by one operation
pub type NavEvents = Vec<NavEvent, MAX_NAV_EVENTS>;

/// Advisory severity (MAV_SEVERITY values)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

/// One-way notification to a navigation collaborator
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Text for the telemetry status channel
    Advisory {
        severity: Severity,
        text: AdvisoryText,
    },
    /// New altitude target / climb limit reference
    SetTargetAltitude(Location),
    /// Clear missed-leg detection state
    ResetProgressWatchdog,
    /// Recompute glide slope for the new leg
    RecomputeGlideSlope,
    /// Recompute turn geometry for the new leg
    RecomputeTurnGeometry,
    /// Re-evaluate the flight stage
    ReclassifyFlightStage,
    /// Write home to durable storage
    PersistHome(Location),
    /// Announce home over telemetry
    BroadcastHome(Location),
    /// Record home in the onboard log
    LogHome(Location),
    /// Refresh barometer ground calibration
    UpdateBaroCalibration,
}

impl NavEvent {
    /// Build an advisory, truncating text that does not fit
    pub fn advisory(severity: Severity, text: &str) -> Self {
        let mut buf = AdvisoryText::new();
        for c in text.chars() {
            if buf.push(c).is_err() {
                break;
            }
        }
        NavEvent::Advisory {
            severity,
            text: buf,
        }
    }
}

/// Receiver for navigation notifications.
///
/// Implemented by the firmware layer (or a test double). Methods are
/// fire-and-forget; collaborators never write back into navigation state.
pub trait NavSink {
    /// Send a status text to the ground station.
    fn advisory_notice(&mut self, severity: Severity, text: &str);

    /// Set the altitude target from a leg endpoint.
    fn set_target_altitude(&mut self, target: &Location);

    /// Reset leg progress / missed waypoint tracking.
    fn reset_progress_watchdog(&mut self);

    fn recompute_glide_slope(&mut self);

    fn recompute_turn_geometry(&mut self);

    fn reclassify_flight_stage(&mut self);

    /// Store home durably.
    fn persist_home(&mut self, home: &Location);

    /// Announce home to all telemetry links.
    fn broadcast_home(&mut self, home: &Location);

    /// Record home in the onboard log. Default: no log backend.
    fn log_home(&mut self, _home: &Location) {}

    fn update_baro_calibration(&mut self);
}

/// Forward events to a sink in emission order
pub fn dispatch(events: &[NavEvent], sink: &mut dyn NavSink) {
    for event in events {
        match event {
            NavEvent::Advisory { severity, text } => sink.advisory_notice(*severity, text),
            NavEvent::SetTargetAltitude(loc) => sink.set_target_altitude(loc),
            NavEvent::ResetProgressWatchdog => sink.reset_progress_watchdog(),
            NavEvent::RecomputeGlideSlope => sink.recompute_glide_slope(),
            NavEvent::RecomputeTurnGeometry => sink.recompute_turn_geometry(),
            NavEvent::ReclassifyFlightStage => sink.reclassify_flight_stage(),
            NavEvent::PersistHome(loc) => sink.persist_home(loc),
            NavEvent::BroadcastHome(loc) => sink.broadcast_home(loc),
            NavEvent::LogHome(loc) => sink.log_home(loc),
            NavEvent::UpdateBaroCalibration => sink.update_baro_calibration(),
        }
    }
}
