//! Leg Geometry
//!
//! Tracks the leg currently being flown (`previous_waypoint` ->
//! `next_waypoint`) and applies target changes coming from the mission
//! sequencer (`transition_to_target`) or from guided commands
//! (`transition_to_guided`).
//!
//! A mission transition runs these steps, in order:
//! 1. Pick the leg start (chained from the old target, or the vehicle
//!    position when crosstrack suppression is pending)
//! 2. Resolve "hold here" targets against the vehicle position
//! 3. Convert a home-relative altitude to absolute, once
//! 4. Restart the leg at the vehicle if it is already past the target
//! 5. Emit collaborator notifications

use heapless::Vec;

use super::events::{NavEvent, NavEvents, Severity};
use super::home::HomeReference;
use super::passed_point::location_passed_point;
use crate::location::{Location, LocationFlags};

/// Target handed to a mission transition
///
/// Zero latitude/longitude used to mean "here" in mission items; that
/// inference happens once, in `From<Location>`, and everything downstream
/// works on the explicit variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegTarget {
    /// Fly to an explicit position
    Absolute(Location),
    /// Hold the current horizontal position at the given altitude
    HoldCurrentPosition { alt: i32, flags: LocationFlags },
    /// Hold the current position and altitude as an absolute snapshot
    HoldCurrentPositionAndAltitude { flags: LocationFlags },
}

impl From<Location> for LegTarget {
    fn from(loc: Location) -> Self {
        if !loc.is_zero_latlng() {
            LegTarget::Absolute(loc)
        } else if loc.alt == 0 {
            LegTarget::HoldCurrentPositionAndAltitude { flags: loc.flags }
        } else {
            LegTarget::HoldCurrentPosition {
                alt: loc.alt,
                flags: loc.flags,
            }
        }
    }
}

impl LegTarget {
    /// Concrete location for this target given the vehicle position
    ///
    /// The altitude frame is left as requested; only the
    /// position-and-altitude snapshot forces an absolute frame.
    pub fn resolve(&self, current: &Location) -> Location {
        match *self {
            LegTarget::Absolute(loc) => loc,
            LegTarget::HoldCurrentPosition { alt, flags } => Location {
                lat: current.lat,
                lng: current.lng,
                alt,
                flags,
            },
            LegTarget::HoldCurrentPositionAndAltitude { flags } => Location {
                lat: current.lat,
                lng: current.lng,
                alt: current.alt,
                flags: flags - (LocationFlags::RELATIVE_ALT | LocationFlags::TERRAIN_ALT),
            },
        }
    }
}

/// Crosstrack guidance state across leg transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Crosstrack {
    /// Blend lateral path on this leg
    #[default]
    Enabled,
    /// This leg started from the vehicle position; no blending
    Suppressed,
    /// Next mission transition starts fresh from the vehicle position
    SuppressNext {
        /// Suppression state of the leg being flown now
        current_suppressed: bool,
    },
}

impl Crosstrack {
    /// Lateral blending disabled on the current leg
    pub fn no_crosstrack(&self) -> bool {
        matches!(
            self,
            Crosstrack::Suppressed
                | Crosstrack::SuppressNext {
                    current_suppressed: true
                }
        )
    }

    /// Suppression waiting for the next mission transition
    pub fn pending_no_crosstrack(&self) -> bool {
        matches!(self, Crosstrack::SuppressNext { .. })
    }

    fn arm(self) -> Self {
        Crosstrack::SuppressNext {
            current_suppressed: self.no_crosstrack(),
        }
    }

    /// State for a new mission leg, and whether that leg starts fresh
    fn advance(self) -> (Self, bool) {
        if self.pending_no_crosstrack() {
            (Crosstrack::Suppressed, true)
        } else {
            (Crosstrack::Enabled, false)
        }
    }
}

/// Loiter direction for the active target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoiterDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl LoiterDirection {
    /// +1 for clockwise, -1 for counter-clockwise
    pub fn sign(&self) -> i8 {
        match self {
            LoiterDirection::Clockwise => 1,
            LoiterDirection::CounterClockwise => -1,
        }
    }

    /// Direction from the configured loiter radius and a per-target hint
    ///
    /// A negative radius or a counter-clockwise flag selects
    /// counter-clockwise.
    pub fn from_radius(loiter_radius: f32, ccw_hint: bool) -> Self {
        if loiter_radius < 0.0 || ccw_hint {
            LoiterDirection::CounterClockwise
        } else {
            LoiterDirection::Clockwise
        }
    }
}

/// Leg endpoints and per-leg guidance flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegGeometry {
    previous_waypoint: Location,
    next_waypoint: Location,
    crosstrack: Crosstrack,
    loiter_direction: LoiterDirection,
}

impl LegGeometry {
    pub const fn new() -> Self {
        Self {
            previous_waypoint: Location::new(0, 0, 0),
            next_waypoint: Location::new(0, 0, 0),
            crosstrack: Crosstrack::Enabled,
            loiter_direction: LoiterDirection::Clockwise,
        }
    }

    pub fn previous_waypoint(&self) -> &Location {
        &self.previous_waypoint
    }

    pub fn next_waypoint(&self) -> &Location {
        &self.next_waypoint
    }

    pub fn crosstrack(&self) -> Crosstrack {
        self.crosstrack
    }

    pub fn no_crosstrack(&self) -> bool {
        self.crosstrack.no_crosstrack()
    }

    pub fn pending_no_crosstrack(&self) -> bool {
        self.crosstrack.pending_no_crosstrack()
    }

    pub fn loiter_direction(&self) -> LoiterDirection {
        self.loiter_direction
    }

    /// Start the next mission leg from the vehicle position
    ///
    /// Used after mode changes and mission jumps, where blending from the
    /// previous leg would pull the vehicle sideways.
    pub fn suppress_next_crosstrack(&mut self) {
        self.crosstrack = self.crosstrack.arm();
        crate::log_debug!("Leg: crosstrack suppressed for next leg");
    }

    /// Point both endpoints at `loc` (used when home is initialized)
    pub(crate) fn seed(&mut self, loc: &Location) {
        self.previous_waypoint = *loc;
        self.next_waypoint = *loc;
    }

    /// Advance to a sequenced mission target
    ///
    /// # Arguments
    ///
    /// * `target` - Mission target (see [`LegTarget`])
    /// * `current` - Vehicle position snapshot
    /// * `home` - Home reference used as the relative altitude datum
    pub fn transition_to_target(
        &mut self,
        target: LegTarget,
        current: &Location,
        home: &HomeReference,
    ) -> NavEvents {
        let mut events = Vec::new();

        let (crosstrack, start_fresh) = self.crosstrack.advance();
        self.crosstrack = crosstrack;
        self.previous_waypoint = if start_fresh {
            *current
        } else {
            self.next_waypoint
        };

        let mut next = target.resolve(current);
        if next.is_relative_alt() {
            if !home.is_set() {
                crate::log_warn!("Leg: relative altitude with no home, using zero datum");
            }
            next.alt = next.alt.saturating_add(home.altitude());
            next.flags.remove(LocationFlags::RELATIVE_ALT);
        }
        self.next_waypoint = next;

        // Starting a leg we are already past would complete it immediately
        if location_passed_point(current, &self.previous_waypoint, &self.next_waypoint) {
            crate::log_info!("Leg: already past target, restarting leg at vehicle");
            let _ = events.push(NavEvent::advisory(
                Severity::Notice,
                "Resetting previous waypoint",
            ));
            self.previous_waypoint = *current;
        }

        let _ = events.push(NavEvent::SetTargetAltitude(self.next_waypoint));
        let _ = events.push(NavEvent::ResetProgressWatchdog);
        let _ = events.push(NavEvent::RecomputeGlideSlope);
        let _ = events.push(NavEvent::RecomputeTurnGeometry);

        crate::log_debug!(
            "Leg: next wp {} {} alt {}",
            self.next_waypoint.lat,
            self.next_waypoint.lng,
            self.next_waypoint.alt
        );

        events
    }

    /// Fly to an operator-commanded target
    ///
    /// Guided targets are already absolute, so no sentinel resolution,
    /// altitude conversion or overshoot correction is applied. The
    /// altitude limiter is held at the current altitude.
    ///
    /// # Arguments
    ///
    /// * `target` - Guided target location
    /// * `current` - Vehicle position snapshot
    /// * `loiter_radius` - Configured loiter radius (sign selects direction)
    pub fn transition_to_guided(
        &mut self,
        target: &Location,
        current: &Location,
        loiter_radius: f32,
    ) -> NavEvents {
        let mut events = Vec::new();

        self.loiter_direction = LoiterDirection::from_radius(loiter_radius, target.is_loiter_ccw());
        self.previous_waypoint = *current;
        self.next_waypoint = *target;

        let _ = events.push(NavEvent::SetTargetAltitude(*current));
        let _ = events.push(NavEvent::ReclassifyFlightStage);
        let _ = events.push(NavEvent::RecomputeGlideSlope);
        let _ = events.push(NavEvent::RecomputeTurnGeometry);
        let _ = events.push(NavEvent::ResetProgressWatchdog);

        crate::log_debug!(
            "Leg: guided wp {} {} alt {}",
            target.lat,
            target.lng,
            target.alt
        );

        events
    }
}
