//! Navigation Context
//!
//! Single owner of leg geometry, the home reference and the navigation
//! parameters. The controller keeps one `NavContext` and passes it by
//! `&mut` into every entry point; there is no global navigation state.
//!
//! Every operation runs to completion and returns the notifications it
//! produced. The caller forwards them with
//! [`dispatch`](super::events::dispatch) after the call returns, so
//! collaborators only ever observe fully applied state.

use heapless::Vec;

use super::events::{AdvisoryText, NavEvent, NavEvents, Severity};
use super::home::{HomeError, HomeLock, HomeRefresh, HomeReference};
use super::leg::{LegGeometry, LegTarget};
use crate::location::Location;
use crate::parameters::NavParams;

/// Navigation state owned by the flight controller
#[derive(Clone, Debug, Default)]
pub struct NavContext {
    leg: LegGeometry,
    home: HomeReference,
    params: NavParams,
}

impl NavContext {
    /// Create a context with no home and an empty leg
    pub fn new(params: NavParams) -> Self {
        Self {
            leg: LegGeometry::new(),
            home: HomeReference::new(),
            params,
        }
    }

    pub fn leg(&self) -> &LegGeometry {
        &self.leg
    }

    pub fn home(&self) -> &HomeReference {
        &self.home
    }

    pub fn home_lock(&self) -> HomeLock {
        self.home.lock_state()
    }

    pub fn params(&self) -> &NavParams {
        &self.params
    }

    /// Apply reloaded parameters (takes effect on the next transition)
    pub fn set_params(&mut self, params: NavParams) {
        self.params = params;
    }

    /// Advance to the next sequenced mission target
    ///
    /// Accepts either a [`LegTarget`] or a raw mission [`Location`], whose
    /// zero latitude/longitude/altitude are interpreted as "hold here".
    pub fn transition_to_target(
        &mut self,
        target: impl Into<LegTarget>,
        current: &Location,
    ) -> NavEvents {
        self.leg.transition_to_target(target.into(), current, &self.home)
    }

    /// Fly to an operator-commanded (guided) target
    pub fn transition_to_guided(&mut self, target: &Location, current: &Location) -> NavEvents {
        self.leg.transition_to_guided(target, current, self.params.loiter_radius)
    }

    /// Arm crosstrack suppression for the next mission transition
    pub fn suppress_next_crosstrack(&mut self) {
        self.leg.suppress_next_crosstrack();
    }

    /// Capture home from a position fix on the ground
    ///
    /// Leaves home unlocked and points both leg endpoints at it so a
    /// reference exists before the first target is issued. Refused, with
    /// no notifications, once home is locked.
    pub fn initialize_home(&mut self, fix: &Location) -> NavEvents {
        let mut events = Vec::new();

        let Some(home) = self.home.capture(fix) else {
            crate::log_warn!("Home: locked, ignoring re-initialization");
            return events;
        };
        self.leg.seed(&home);

        crate::log_info!("Home: initialized at {} {} alt {}", home.lat, home.lng, home.alt);

        let _ = events.push(NavEvent::advisory(Severity::Info, "Init HOME"));
        let _ = events.push(NavEvent::LogHome(home));
        let _ = events.push(NavEvent::BroadcastHome(home));
        let _ = events.push(NavEvent::Advisory {
            severity: Severity::Info,
            text: gps_alt_text(home.alt),
        });
        let _ = events.push(NavEvent::PersistHome(home));

        events
    }

    /// Periodic home update while the vehicle is still on the ground
    ///
    /// Follows the fix while home is unlocked. The barometer calibration
    /// update is requested on every call regardless of lock state.
    pub fn refresh_home(&mut self, fix: &Location) -> NavEvents {
        let mut events = Vec::new();

        if let HomeRefresh::Updated(home) = self.home.refresh(fix) {
            let _ = events.push(NavEvent::LogHome(home));
            let _ = events.push(NavEvent::BroadcastHome(home));
        }
        let _ = events.push(NavEvent::UpdateBaroCalibration);

        events
    }

    /// Freeze home for the rest of the flight (arming)
    pub fn lock_home(&mut self) -> Result<(), HomeError> {
        let home = self.home.lock()?;
        crate::log_info!("Home: locked at alt {}", home.alt);
        Ok(())
    }
}

/// "GPS alt: <alt>" status text, altitude in centimeters
fn gps_alt_text(alt: i32) -> AdvisoryText {
    use core::fmt::Write;

    let mut text = AdvisoryText::new();
    // Longest possible text is well under the buffer size
    let _ = write!(text, "GPS alt: {}", alt);
    text
}
