//! Geodetic Location Type
//!
//! Fixed-precision location used for every leg endpoint and the home
//! reference. Coordinates follow the MISSION_ITEM_INT convention
//! (degrees * 1e7) and altitude is carried in centimeters.
//!
//! # Altitude frames
//!
//! - `RELATIVE_ALT` set: altitude is above home and must be converted
//!   exactly once before it is used as a target.
//! - `RELATIVE_ALT` clear: altitude is absolute against the home datum.
//! - `TERRAIN_ALT` set: altitude is above terrain (terrain following is
//!   handled outside this crate).

use bitflags::bitflags;
use libm::cosf;
use nalgebra::Vector2;

/// Meters per 1e-7 degree of latitude (equatorial Earth radius).
pub const LOCATION_SCALING_FACTOR: f32 = 0.011_131_884_502_145_034;

/// Full circle of longitude in degrees * 1e7.
const LONGITUDE_FULL_CIRCLE: i64 = 3_600_000_000;

bitflags! {
    /// Altitude frame and loiter flags attached to a location
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LocationFlags: u8 {
        /// Altitude is relative to home
        const RELATIVE_ALT = 0b0000_0001;
        /// Altitude is relative to terrain
        const TERRAIN_ALT = 0b0000_0010;
        /// Loiter counter-clockwise at this location
        const LOITER_CCW = 0b0000_0100;
    }
}

impl Default for LocationFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Geodetic location with altitude frame flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Latitude in degrees * 1e7
    pub lat: i32,
    /// Longitude in degrees * 1e7
    pub lng: i32,
    /// Altitude in centimeters (frame given by `flags`)
    pub alt: i32,
    /// Altitude frame and loiter flags
    pub flags: LocationFlags,
}

impl Location {
    /// Create a location with an absolute altitude
    ///
    /// # Arguments
    ///
    /// * `lat` - Latitude in degrees * 1e7
    /// * `lng` - Longitude in degrees * 1e7
    /// * `alt` - Absolute altitude in centimeters
    pub const fn new(lat: i32, lng: i32, alt: i32) -> Self {
        Self {
            lat,
            lng,
            alt,
            flags: LocationFlags::empty(),
        }
    }

    /// Create a location whose altitude is relative to home
    pub const fn relative(lat: i32, lng: i32, alt: i32) -> Self {
        Self {
            lat,
            lng,
            alt,
            flags: LocationFlags::RELATIVE_ALT,
        }
    }

    /// Return a copy with the given flags replaced
    pub const fn with_flags(mut self, flags: LocationFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_relative_alt(&self) -> bool {
        self.flags.contains(LocationFlags::RELATIVE_ALT)
    }

    pub fn is_terrain_alt(&self) -> bool {
        self.flags.contains(LocationFlags::TERRAIN_ALT)
    }

    pub fn is_loiter_ccw(&self) -> bool {
        self.flags.contains(LocationFlags::LOITER_CCW)
    }

    /// True when latitude and longitude are both exactly zero
    pub fn is_zero_latlng(&self) -> bool {
        self.lat == 0 && self.lng == 0
    }

    /// True when both locations share latitude and longitude
    pub fn same_latlng_as(&self, other: &Location) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }

    /// Shrink factor for east distances at this latitude
    ///
    /// Clamped to 0.01 so offsets stay finite near the poles.
    pub fn longitude_scale(&self) -> f32 {
        let lat_rad = (self.lat as f32 * 1e-7).to_radians();
        cosf(lat_rad).clamp(0.01, 1.0)
    }

    /// North/east offset in meters from `self` to `other`
    ///
    /// Flat-earth approximation, accurate for leg-sized distances.
    pub fn offset_ne(&self, other: &Location) -> Vector2<f32> {
        let d_lat = other.lat as i64 - self.lat as i64;
        let d_lng = wrap_longitude_delta(other.lng as i64 - self.lng as i64);
        Vector2::new(
            d_lat as f32 * LOCATION_SCALING_FACTOR,
            d_lng as f32 * LOCATION_SCALING_FACTOR * self.longitude_scale(),
        )
    }
}

/// Wrap a longitude difference into +/-180 degrees (degrees * 1e7)
fn wrap_longitude_delta(delta: i64) -> i64 {
    let half = LONGITUDE_FULL_CIRCLE / 2;
    if delta > half {
        delta - LONGITUDE_FULL_CIRCLE
    } else if delta < -half {
        delta + LONGITUDE_FULL_CIRCLE
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_absolute() {
        let loc = Location::new(357_000_000, 1_396_000_000, 10_000);
        assert!(!loc.is_relative_alt());
        assert!(!loc.is_terrain_alt());
        assert!(!loc.is_loiter_ccw());
    }

    #[test]
    fn test_relative_constructor() {
        let loc = Location::relative(1, 2, 3);
        assert!(loc.is_relative_alt());
        assert_eq!(loc.flags, LocationFlags::RELATIVE_ALT);
    }

    #[test]
    fn test_default_is_zero_absolute() {
        let loc = Location::default();
        assert!(loc.is_zero_latlng());
        assert_eq!(loc.alt, 0);
        assert!(loc.flags.is_empty());
    }

    #[test]
    fn test_same_latlng_ignores_altitude_and_flags() {
        let a = Location::new(-337_000_000, -1_512_000_000, 5_000);
        let b = Location::relative(-337_000_000, -1_512_000_000, 0);
        assert!(a.same_latlng_as(&b));
        assert!(!a.same_latlng_as(&Location::new(-337_000_000, -1_512_000_001, 5_000)));
    }

    #[test]
    fn test_offset_north() {
        // 0.001 degree of latitude is ~111 m
        let a = Location::new(0, 0, 0);
        let b = Location::new(10_000, 0, 0);
        let ne = a.offset_ne(&b);
        assert!((ne.x - 111.3).abs() < 0.5);
        assert!(ne.y.abs() < 0.001);
    }

    #[test]
    fn test_offset_east_scaled_by_latitude() {
        // At 60 degrees latitude an east step is half as long
        let a = Location::new(600_000_000, 0, 0);
        let b = Location::new(600_000_000, 10_000, 0);
        let ne = a.offset_ne(&b);
        assert!(ne.x.abs() < 0.001);
        assert!((ne.y - 55.66).abs() < 0.5);
    }

    #[test]
    fn test_offset_across_antimeridian() {
        let a = Location::new(0, 1_799_990_000, 0);
        let b = Location::new(0, -1_799_990_000, 0);
        let ne = a.offset_ne(&b);
        // 0.002 degrees east, not 359.998 degrees west
        assert!((ne.y - 222.6).abs() < 1.0);
    }

    #[test]
    fn test_with_flags_replaces_flags() {
        let loc = Location::relative(1, 2, 3)
            .with_flags(LocationFlags::TERRAIN_ALT | LocationFlags::LOITER_CCW);
        assert!(!loc.is_relative_alt());
        assert!(loc.is_terrain_alt());
        assert!(loc.is_loiter_ccw());
    }
}
