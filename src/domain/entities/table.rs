//! Table entity.

/// A physical table owned by a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: i64,
    pub restaurant_id: i64,
    /// Seating capacity, always positive.
    pub capacity: i32,
}

impl Table {
    /// Creates a new Table instance.
    pub fn new(id: i64, restaurant_id: i64, capacity: i32) -> Self {
        Self {
            id,
            restaurant_id,
            capacity,
        }
    }

    /// Returns true if the table seats a party of the given size.
    pub fn seats(&self, party_size: i32) -> bool {
        self.capacity >= party_size
    }
}
