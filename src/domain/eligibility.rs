//! Dietary eligibility check.

use std::collections::HashSet;

/// Decides whether a restaurant's endorsements cover every dietary
/// restriction held by a party.
///
/// `party_restrictions` is the flattened list of restriction ids across all
/// party members; duplicates are fine. The party is eligible iff every
/// restriction id appears in `endorsements`. An empty restriction list is
/// always eligible, whatever the restaurant offers.
pub fn covers<'a, I>(party_restrictions: I, endorsements: &HashSet<i64>) -> bool
where
    I: IntoIterator<Item = &'a i64>,
{
    party_restrictions
        .into_iter()
        .all(|restriction| endorsements.contains(restriction))
}
