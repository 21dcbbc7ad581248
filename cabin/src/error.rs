//! Error types for the cabin library.
//!
//! This module provides the error hierarchy for all reservation operations,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::seat::{GridDims, SeatId};

/// Result type alias for operations that may fail with a cabin error.
///
/// # Examples
///
/// ```
/// use cabin::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cabin library.
///
/// This enum encompasses all possible error conditions that can occur
/// during seat reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An empty or otherwise invalid passenger name was provided.
    #[error("invalid passenger name: {reason}")]
    InvalidName {
        /// The reason the name is invalid.
        reason: String,
    },

    /// A seat coordinate falls outside the cabin grid.
    #[error("seat {seat} is outside the {dims} grid")]
    InvalidIndex {
        /// The out-of-bounds seat coordinate.
        seat: SeatId,
        /// The dimensions of the grid it was checked against.
        dims: GridDims,
    },

    /// The seat already has an occupant.
    #[error("seat {seat} is already booked")]
    SeatOccupied {
        /// The occupied seat.
        seat: SeatId,
    },

    /// The seat has no occupant to cancel.
    #[error("seat {seat} is not booked")]
    SeatEmpty {
        /// The vacant seat.
        seat: SeatId,
    },

    /// Every seat in the grid is booked.
    #[error("all {seats} seats are booked")]
    GridFull {
        /// The total number of seats.
        seats: usize,
    },

    /// The waiting list is at capacity.
    #[error("waiting list is full ({capacity} entries)")]
    WaitingListFull {
        /// The waiting list capacity.
        capacity: usize,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

// Additional conversions for better ergonomics

impl From<crate::passenger::InvalidNameError> for Error {
    fn from(err: crate::passenger::InvalidNameError) -> Self {
        Self::InvalidName { reason: err.reason }
    }
}

impl From<crate::waitlist::WaitingListFullError> for Error {
    fn from(err: crate::waitlist::WaitingListFullError) -> Self {
        Self::WaitingListFull {
            capacity: err.capacity,
        }
    }
}

impl From<crate::seat::InvalidDimsError> for Error {
    fn from(err: crate::seat::InvalidDimsError) -> Self {
        Self::Validation {
            field: "grid".to_string(),
            message: format!("{}x{}: {}", err.rows, err.columns, err.reason),
        }
    }
}

impl Error {
    /// Check if error indicates an invalid passenger name.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::Error;
    ///
    /// let err = Error::InvalidName { reason: "blank".to_string() };
    /// assert!(err.is_invalid_name());
    /// ```
    #[must_use]
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidName { .. })
    }

    /// Check if error indicates a fully booked grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::Error;
    ///
    /// let err = Error::GridFull { seats: 15 };
    /// assert!(err.is_grid_full());
    /// ```
    #[must_use]
    pub fn is_grid_full(&self) -> bool {
        matches!(self, Self::GridFull { .. })
    }

    /// Check if error indicates a full waiting list.
    #[must_use]
    pub fn is_waiting_list_full(&self) -> bool {
        matches!(self, Self::WaitingListFull { .. })
    }
}
