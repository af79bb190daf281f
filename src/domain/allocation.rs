//! Deterministic table allocation.

use std::collections::HashSet;

use crate::domain::entities::Table;

/// Picks the table to assign to a party.
///
/// Candidates are tables with capacity at least `party_size` whose id is not
/// in `occupied`. The pick is best fit: smallest sufficient capacity, ties
/// broken by lowest id, so the same inputs always allocate the same table.
/// Returns `None` when no candidate remains.
pub fn best_fit<'a>(
    tables: &'a [Table],
    party_size: i32,
    occupied: &HashSet<i64>,
) -> Option<&'a Table> {
    tables
        .iter()
        .filter(|table| table.seats(party_size) && !occupied.contains(&table.id))
        .min_by_key(|table| (table.capacity, table.id))
}
