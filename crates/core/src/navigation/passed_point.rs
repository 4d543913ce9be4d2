//! Passed-point test
//!
//! Pure geometry for deciding whether the vehicle already lies beyond the
//! end of a leg.

use crate::location::Location;

/// Fraction of the leg `prev -> next` covered by the projection of `current`
///
/// 0.0 at `prev`, 1.0 at `next`, above 1.0 past `next`, negative behind
/// `prev`. Returns `None` for a zero-length leg.
pub fn location_path_proportion(
    current: &Location,
    prev: &Location,
    next: &Location,
) -> Option<f32> {
    if prev.same_latlng_as(next) {
        return None;
    }
    let leg = prev.offset_ne(next);
    let leg_len_sq = leg.norm_squared();
    let progress = prev.offset_ne(current);
    Some(leg.dot(&progress) / leg_len_sq)
}

/// True when `current` projects onto the leg at or beyond `next`
///
/// A zero-length leg has no direction, so nothing can be past it.
pub fn location_passed_point(current: &Location, prev: &Location, next: &Location) -> bool {
    matches!(location_path_proportion(current, prev, next), Some(p) if p >= 1.0)
}
