//! User entity representing a diner.

/// A registered diner.
///
/// `restriction_ids` holds the ids of the endorsement rows certifying each
/// dietary restriction the user has declared. Restriction and endorsement
/// ids share one key space, so a restaurant's endorsement set can be checked
/// against them directly.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub restriction_ids: Vec<i64>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        name: String,
        email: String,
        latitude: f64,
        longitude: f64,
        restriction_ids: Vec<i64>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            latitude,
            longitude,
            restriction_ids,
        }
    }

    /// Returns true if the user has declared no dietary restrictions.
    pub fn is_unrestricted(&self) -> bool {
        self.restriction_ids.is_empty()
    }
}
