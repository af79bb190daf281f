//! Party conflict detection over prefetched reservations.

use std::collections::HashSet;

use crate::domain::entities::Reservation;

/// Returns true if any of the given reservations includes at least one
/// member of the party.
///
/// The reservations are expected to be prefetched for the relevant
/// restaurant and time window; this only answers the membership question.
pub fn party_overlaps(reservations: &[Reservation], party: &[i64]) -> bool {
    let party: HashSet<i64> = party.iter().copied().collect();
    reservations
        .iter()
        .any(|reservation| reservation.user_ids.iter().any(|id| party.contains(id)))
}

/// Collects the table ids held by the given reservations.
///
/// Feeds the allocator's occupied set (and the search path's table
/// filtering) from one restaurant-wide window query.
pub fn occupied_tables(reservations: &[Reservation]) -> HashSet<i64> {
    reservations
        .iter()
        .map(|reservation| reservation.table_id)
        .collect()
}
