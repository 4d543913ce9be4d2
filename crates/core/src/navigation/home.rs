//! Home Reference
//!
//! Owns the home location used as the altitude datum and initial
//! navigation target, together with its lock state.
//!
//! # State machine
//!
//! ```text
//! Unset --initialize--> Unlocked --refresh--> Unlocked --lock--> Locked
//! ```
//!
//! `Locked` is terminal: nothing in this crate can move or unlock home
//! once the vehicle has committed to flight.

use core::fmt;

use crate::location::Location;

/// Home lock state without the location payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HomeLock {
    /// No home captured yet
    #[default]
    Unset,
    /// Home follows the position fix until locked
    Unlocked,
    /// Home frozen for the rest of the flight
    Locked,
}

/// Home state with the location carried by the states that have one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HomeState {
    #[default]
    Unset,
    Unlocked(Location),
    Locked(Location),
}

/// Errors from home reference operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeError {
    /// Home has not been captured yet
    NotSet,
}

impl fmt::Display for HomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeError::NotSet => write!(f, "home position not set"),
        }
    }
}

/// Outcome of a refresh tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeRefresh {
    /// Home was overwritten with the new fix
    Updated(Location),
    /// Home left unchanged (unset or locked)
    Unchanged,
}

/// Home location and lock state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HomeReference {
    state: HomeState,
}

impl HomeReference {
    /// Create an unset home reference
    pub const fn new() -> Self {
        Self {
            state: HomeState::Unset,
        }
    }

    pub fn state(&self) -> HomeState {
        self.state
    }

    pub fn lock_state(&self) -> HomeLock {
        match self.state {
            HomeState::Unset => HomeLock::Unset,
            HomeState::Unlocked(_) => HomeLock::Unlocked,
            HomeState::Locked(_) => HomeLock::Locked,
        }
    }

    /// Current home location, if one has been captured
    pub fn location(&self) -> Option<&Location> {
        match &self.state {
            HomeState::Unset => None,
            HomeState::Unlocked(loc) | HomeState::Locked(loc) => Some(loc),
        }
    }

    pub fn is_set(&self) -> bool {
        self.location().is_some()
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, HomeState::Locked(_))
    }

    /// Altitude datum in centimeters, zero while unset
    pub fn altitude(&self) -> i32 {
        self.location().map_or(0, |loc| loc.alt)
    }

    /// Capture `fix` as home and leave it unlocked
    ///
    /// Returns the stored home, or `None` when home is locked and the
    /// capture was refused.
    pub fn capture(&mut self, fix: &Location) -> Option<Location> {
        match self.state {
            HomeState::Locked(_) => None,
            HomeState::Unset | HomeState::Unlocked(_) => {
                self.state = HomeState::Unlocked(*fix);
                Some(*fix)
            }
        }
    }

    /// Overwrite home with `fix` only while unlocked
    pub fn refresh(&mut self, fix: &Location) -> HomeRefresh {
        match self.state {
            HomeState::Unlocked(_) => {
                self.state = HomeState::Unlocked(*fix);
                HomeRefresh::Updated(*fix)
            }
            HomeState::Unset | HomeState::Locked(_) => HomeRefresh::Unchanged,
        }
    }

    /// Freeze home (arming)
    ///
    /// Locking an already locked home is a no-op.
    pub fn lock(&mut self) -> Result<Location, HomeError> {
        match self.state {
            HomeState::Unset => Err(HomeError::NotSet),
            HomeState::Unlocked(loc) | HomeState::Locked(loc) => {
                self.state = HomeState::Locked(loc);
                Ok(loc)
            }
        }
    }
}
