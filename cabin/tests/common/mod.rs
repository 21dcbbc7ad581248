//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the cabin library.

use cabin::{GridDims, ReservationManager, SeatId};

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for creating test managers with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ManagerFixture;
/// let manager = ManagerFixture::new()
///     .with_rows(2)
///     .with_booked_seat(0, 0, "Alice")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ManagerFixture {
    rows: u16,
    columns: u16,
    waiting_list_max: usize,
    booked: Vec<(u16, u16, String)>,
    waiting: Vec<String>,
    fill_remaining: bool,
}

#[allow(dead_code)]
impl ManagerFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - rows: 5
    /// - columns: 3
    /// - waiting list capacity: 10
    /// - no bookings, nobody waiting
    pub fn new() -> Self {
        Self {
            rows: 5,
            columns: 3,
            waiting_list_max: 10,
            booked: Vec::new(),
            waiting: Vec::new(),
            fill_remaining: false,
        }
    }

    /// Sets the number of seat rows.
    pub fn with_rows(mut self, rows: u16) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of seat columns.
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the waiting list capacity.
    pub fn with_waiting_list_max(mut self, capacity: usize) -> Self {
        self.waiting_list_max = capacity;
        self
    }

    /// Books a seat before the fixture is handed to the test.
    pub fn with_booked_seat(mut self, row: u16, col: u16, name: impl Into<String>) -> Self {
        self.booked.push((row, col, name.into()));
        self
    }

    /// Adds a passenger to the waiting list.
    pub fn with_waiting(mut self, name: impl Into<String>) -> Self {
        self.waiting.push(name.into());
        self
    }

    /// Books every seat not covered by `with_booked_seat` with generated
    /// names, leaving the grid full.
    pub fn fully_booked(mut self) -> Self {
        self.fill_remaining = true;
        self
    }

    /// Builds the manager.
    ///
    /// # Panics
    ///
    /// Panics if the fixture describes an invalid layout or an impossible
    /// booking. This is acceptable in test code where we want to fail fast
    /// on invalid fixtures.
    pub fn build(self) -> ReservationManager {
        let dims = GridDims::new(self.rows, self.columns).expect("fixture should have valid dims");
        let mut manager = ReservationManager::new(dims, self.waiting_list_max);

        for (row, col, name) in &self.booked {
            manager
                .book_seat(SeatId::new(*row, *col), name)
                .expect("fixture booking should succeed");
        }

        if self.fill_remaining {
            for (i, seat) in dims.seats().enumerate() {
                if manager.occupant(seat).expect("fixture seat in bounds").is_none() {
                    manager
                        .book_seat(seat, &format!("Passenger{i}"))
                        .expect("fixture fill should succeed");
                }
            }
        }

        for name in &self.waiting {
            manager
                .add_to_waiting_list(name)
                .expect("fixture waiting list entry should succeed");
        }

        manager
    }
}

impl Default for ManagerFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_default() {
        let manager = ManagerFixture::new().build();
        assert_eq!(manager.dims().seat_count(), 15);
        assert_eq!(manager.waiting_list_capacity(), 10);
        assert_eq!(manager.occupied_seats(), 0);
    }

    #[test]
    fn test_fixture_custom() {
        let manager = ManagerFixture::new()
            .with_rows(2)
            .with_columns(2)
            .with_waiting_list_max(3)
            .with_booked_seat(0, 1, "Alice")
            .with_waiting("Bob")
            .build();

        assert_eq!(manager.dims().seat_count(), 4);
        assert_eq!(manager.occupied_seats(), 1);
        assert_eq!(manager.waiting_count(), 1);
    }

    #[test]
    fn test_fixture_fully_booked() {
        let manager = ManagerFixture::new()
            .with_rows(2)
            .with_columns(3)
            .with_booked_seat(0, 0, "Kept")
            .fully_booked()
            .build();

        assert!(manager.is_grid_full());
        assert_eq!(
            manager
                .occupant(SeatId::new(0, 0))
                .unwrap()
                .unwrap()
                .as_str(),
            "Kept"
        );
    }
}
