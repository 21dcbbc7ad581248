//! Seat coordinates, grid dimensions, and seat-level status types.
//!
//! Seats are addressed by zero-based `(row, column)` pairs. The cabin
//! dimensions are fixed for the lifetime of a reservation session and
//! every seat address is checked against them before use.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::passenger::PassengerName;

/// Position of a seat in the cabin grid.
///
/// Rows and columns are zero-based. A `SeatId` is a plain coordinate; it
/// is not guaranteed to fall inside any particular grid until checked with
/// [`GridDims::contains`].
///
/// # Examples
///
/// ```
/// use cabin::SeatId;
///
/// let seat = SeatId::new(2, 1);
/// assert_eq!(seat.row, 2);
/// assert_eq!(seat.col, 1);
/// assert_eq!(seat.to_string(), "[2, 1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId {
    /// Zero-based row index.
    pub row: u16,
    /// Zero-based column index.
    pub col: u16,
}

impl SeatId {
    /// Creates a seat coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// Dimensions of the cabin seat grid.
///
/// Both dimensions must be at least 1. Seats are enumerated in row-major
/// order: all of row 0 first, then row 1, and so on.
///
/// # Examples
///
/// ```
/// use cabin::{GridDims, SeatId};
///
/// let dims = GridDims::new(5, 3).unwrap();
/// assert_eq!(dims.rows(), 5);
/// assert_eq!(dims.columns(), 3);
/// assert_eq!(dims.seat_count(), 15);
/// assert!(dims.contains(SeatId::new(4, 2)));
/// assert!(!dims.contains(SeatId::new(5, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    rows: u16,
    columns: u16,
}

impl GridDims {
    /// Creates grid dimensions, validating that both are at least 1.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(rows: u16, columns: u16) -> Result<Self, InvalidDimsError> {
        if rows == 0 || columns == 0 {
            return Err(InvalidDimsError {
                rows,
                columns,
                reason: "both dimensions must be at least 1".into(),
            });
        }
        Ok(Self { rows, columns })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Returns the total number of seats in the grid.
    #[must_use]
    pub const fn seat_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Checks if a seat coordinate falls inside the grid.
    #[must_use]
    pub const fn contains(&self, seat: SeatId) -> bool {
        seat.row < self.rows && seat.col < self.columns
    }

    /// Returns an iterator over all seats in row-major order.
    #[must_use]
    pub fn seats(&self) -> SeatIter {
        SeatIter {
            dims: *self,
            next: 0,
        }
    }
}

impl Default for GridDims {
    /// Returns the standard five-row, three-column cabin.
    fn default() -> Self {
        Self {
            rows: crate::config::DEFAULT_ROWS,
            columns: crate::config::DEFAULT_COLUMNS,
        }
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl IntoIterator for GridDims {
    type Item = SeatId;
    type IntoIter = SeatIter;

    fn into_iter(self) -> Self::IntoIter {
        self.seats()
    }
}

/// Iterator over the seats of a grid in row-major order.
#[derive(Debug, Clone)]
pub struct SeatIter {
    dims: GridDims,
    next: usize,
}

impl Iterator for SeatIter {
    type Item = SeatId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.dims.seat_count() {
            return None;
        }
        let columns = self.dims.columns as usize;
        let seat = SeatId::new(
            u16::try_from(self.next / columns).ok()?,
            u16::try_from(self.next % columns).ok()?,
        );
        self.next += 1;
        Some(seat)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dims.seat_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SeatIter {}

/// Error type for invalid grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDimsError {
    /// The offending row count.
    pub rows: u16,
    /// The offending column count.
    pub columns: u16,
    /// The reason the dimensions are invalid.
    pub reason: String,
}

impl fmt::Display for InvalidDimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid grid dimensions {}x{}: {}",
            self.rows, self.columns, self.reason
        )
    }
}

impl std::error::Error for InvalidDimsError {}

/// Availability of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// The seat has no occupant and can be booked.
    Available,
    /// The seat is held by a passenger.
    Occupied,
}

impl SeatStatus {
    /// Checks if the seat can be booked.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
        }
    }
}

/// A seat together with its occupant, as enumerated by grid snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatEntry {
    /// The seat coordinate.
    pub seat: SeatId,
    /// The occupant, or `None` for a vacant seat.
    pub occupant: Option<PassengerName>,
}

impl SeatEntry {
    /// Returns the status implied by the occupant field.
    #[must_use]
    pub const fn status(&self) -> SeatStatus {
        match self.occupant {
            Some(_) => SeatStatus::Occupied,
            None => SeatStatus::Available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_display() {
        assert_eq!(SeatId::new(0, 0).to_string(), "[0, 0]");
        assert_eq!(SeatId::new(4, 2).to_string(), "[4, 2]");
    }

    #[test]
    fn test_seat_id_ordering() {
        // Row-major: row dominates, column breaks ties
        assert!(SeatId::new(0, 2) < SeatId::new(1, 0));
        assert!(SeatId::new(1, 0) < SeatId::new(1, 1));
    }

    #[test]
    fn test_dims_valid() {
        let dims = GridDims::new(5, 3).unwrap();
        assert_eq!(dims.rows(), 5);
        assert_eq!(dims.columns(), 3);
        assert_eq!(dims.seat_count(), 15);
    }

    #[test]
    fn test_dims_zero_rows_invalid() {
        let err = GridDims::new(0, 3).unwrap_err();
        assert_eq!(err.rows, 0);
        assert_eq!(err.columns, 3);
    }

    #[test]
    fn test_dims_zero_columns_invalid() {
        assert!(GridDims::new(5, 0).is_err());
        assert!(GridDims::new(0, 0).is_err());
    }

    #[test]
    fn test_dims_single_seat() {
        let dims = GridDims::new(1, 1).unwrap();
        assert_eq!(dims.seat_count(), 1);
        assert!(dims.contains(SeatId::new(0, 0)));
        assert!(!dims.contains(SeatId::new(0, 1)));
        assert!(!dims.contains(SeatId::new(1, 0)));
    }

    #[test]
    fn test_dims_contains_boundaries() {
        let dims = GridDims::new(5, 3).unwrap();
        assert!(dims.contains(SeatId::new(0, 0)));
        assert!(dims.contains(SeatId::new(4, 2)));
        assert!(!dims.contains(SeatId::new(5, 2)));
        assert!(!dims.contains(SeatId::new(4, 3)));
        assert!(!dims.contains(SeatId::new(u16::MAX, u16::MAX)));
    }

    #[test]
    fn test_dims_display() {
        let dims = GridDims::new(5, 3).unwrap();
        assert_eq!(dims.to_string(), "5x3");
    }

    #[test]
    fn test_dims_default() {
        let dims = GridDims::default();
        assert_eq!(dims.rows(), 5);
        assert_eq!(dims.columns(), 3);
    }

    #[test]
    fn test_seat_iter_row_major() {
        let dims = GridDims::new(2, 3).unwrap();
        let seats: Vec<SeatId> = dims.seats().collect();
        assert_eq!(
            seats,
            vec![
                SeatId::new(0, 0),
                SeatId::new(0, 1),
                SeatId::new(0, 2),
                SeatId::new(1, 0),
                SeatId::new(1, 1),
                SeatId::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_seat_iter_len() {
        let dims = GridDims::new(5, 3).unwrap();
        let iter = dims.seats();
        assert_eq!(iter.len(), 15);
        assert_eq!(iter.count(), 15);
    }

    #[test]
    fn test_seat_iter_into_iterator() {
        let dims = GridDims::new(2, 2).unwrap();
        let mut visited = 0;
        for seat in dims {
            assert!(dims.contains(seat));
            visited += 1;
        }
        assert_eq!(visited, 4);
    }

    #[test]
    fn test_seat_status_predicates() {
        assert!(SeatStatus::Available.is_available());
        assert!(!SeatStatus::Occupied.is_available());
    }

    #[test]
    fn test_seat_status_display() {
        assert_eq!(SeatStatus::Available.to_string(), "available");
        assert_eq!(SeatStatus::Occupied.to_string(), "occupied");
    }

    #[test]
    fn test_seat_entry_status() {
        let vacant = SeatEntry {
            seat: SeatId::new(0, 0),
            occupant: None,
        };
        assert_eq!(vacant.status(), SeatStatus::Available);

        let taken = SeatEntry {
            seat: SeatId::new(0, 1),
            occupant: Some(PassengerName::new("Alice").unwrap()),
        };
        assert_eq!(taken.status(), SeatStatus::Occupied);
    }

    #[test]
    fn test_invalid_dims_error_display() {
        let err = GridDims::new(0, 0).unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("0x0"));
        assert!(display.contains("at least 1"));
    }
}
