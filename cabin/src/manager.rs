//! Seat reservation manager.
//!
//! [`ReservationManager`] owns the seat grid and the waiting list for a
//! single flight and is the only type that mutates them. All operations
//! validate their inputs up front and either complete fully or leave the
//! state untouched.
//!
//! # Examples
//!
//! ```
//! use cabin::{CancelOutcome, GridDims, ReservationManager, SeatId};
//!
//! let dims = GridDims::new(5, 3).unwrap();
//! let mut manager = ReservationManager::new(dims, 10);
//!
//! // Book a seat
//! manager.book_seat(SeatId::new(0, 0), "Alice").unwrap();
//! assert_eq!(manager.occupied_seats(), 1);
//!
//! // Cancel it again; nobody is waiting, so the seat simply frees up
//! let outcome = manager.cancel_seat(SeatId::new(0, 0)).unwrap();
//! assert_eq!(outcome, CancelOutcome::Cancelled);
//! ```

use crate::config::{CabinConfig, DEFAULT_WAITING_LIST_MAX};
use crate::error::{Error, Result};
use crate::grid::SeatGrid;
use crate::passenger::PassengerName;
use crate::seat::{GridDims, SeatEntry, SeatId, SeatStatus};
use crate::waitlist::WaitingList;

/// Outcome of a successful seat cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The seat was freed; nobody was waiting.
    Cancelled,
    /// The seat was immediately reassigned to the passenger who had waited
    /// longest on the waiting list.
    PromotedFromWaitingList(PassengerName),
}

impl CancelOutcome {
    /// Returns the promoted passenger, if the cancellation triggered one.
    #[must_use]
    pub const fn promoted(&self) -> Option<&PassengerName> {
        match self {
            Self::Cancelled => None,
            Self::PromotedFromWaitingList(name) => Some(name),
        }
    }
}

/// Source of passenger names for bulk-fill operations.
///
/// Name production is an external concern; any producer (a random
/// generator, a fixed roster, a test stub) can drive the fill helpers.
pub trait NameSource {
    /// Produces the next candidate name.
    fn next_name(&mut self) -> String;
}

impl<F> NameSource for F
where
    F: FnMut() -> String,
{
    fn next_name(&mut self) -> String {
        self()
    }
}

/// Manages seat reservations and the waiting list for a single flight.
///
/// The grid dimensions and waiting-list capacity are fixed at construction
/// and never change afterwards.
#[derive(Debug, Clone)]
pub struct ReservationManager {
    grid: SeatGrid,
    waitlist: WaitingList,
}

impl ReservationManager {
    /// Creates a manager with an empty grid and waiting list.
    #[must_use]
    pub fn new(dims: GridDims, waiting_list_capacity: usize) -> Self {
        Self {
            grid: SeatGrid::new(dims),
            waitlist: WaitingList::new(waiting_list_capacity),
        }
    }

    /// Creates a manager using the standard cabin layout.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(GridDims::default(), DEFAULT_WAITING_LIST_MAX)
    }

    /// Creates a manager from a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the configuration holds out-of-range
    /// values.
    pub fn from_config(config: &CabinConfig) -> Result<Self> {
        let (dims, capacity) = config.resolve()?;
        Ok(Self::new(dims, capacity))
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.grid.dims()
    }

    /// Returns the waiting list capacity.
    #[must_use]
    pub fn waiting_list_capacity(&self) -> usize {
        self.waitlist.capacity()
    }

    /// Returns the number of occupied seats.
    #[must_use]
    pub fn occupied_seats(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Returns the number of passengers on the waiting list.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waitlist.len()
    }

    /// Checks if every seat is occupied.
    #[must_use]
    pub fn is_grid_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Checks if the waiting list is at capacity.
    #[must_use]
    pub fn is_waiting_list_full(&self) -> bool {
        self.waitlist.is_full()
    }

    /// Reports whether a seat is available or occupied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if the coordinate is out of bounds.
    pub fn seat_status(&self, seat: SeatId) -> Result<SeatStatus> {
        self.ensure_in_bounds(seat)?;
        match self.grid.occupant(seat) {
            Some(_) => Ok(SeatStatus::Occupied),
            None => Ok(SeatStatus::Available),
        }
    }

    /// Returns the occupant of a seat, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if the coordinate is out of bounds.
    pub fn occupant(&self, seat: SeatId) -> Result<Option<&PassengerName>> {
        self.ensure_in_bounds(seat)?;
        Ok(self.grid.occupant(seat))
    }

    /// Books a seat for the named passenger.
    ///
    /// Validation order: the coordinate is checked first, then overall grid
    /// fullness, then the name, and finally the target seat's occupancy. An
    /// empty name therefore fails even when the target seat is occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::{GridDims, ReservationManager, SeatId};
    ///
    /// let mut manager = ReservationManager::new(GridDims::new(2, 2).unwrap(), 4);
    /// let seat = manager.book_seat(SeatId::new(1, 0), "Alice").unwrap();
    /// assert_eq!(seat, SeatId::new(1, 0));
    ///
    /// // The same seat cannot be booked twice
    /// assert!(manager.book_seat(SeatId::new(1, 0), "Bob").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`], [`Error::GridFull`],
    /// [`Error::InvalidName`], or [`Error::SeatOccupied`].
    pub fn book_seat(&mut self, seat: SeatId, name: &str) -> Result<SeatId> {
        self.ensure_in_bounds(seat)?;
        self.ensure_grid_not_full()?;
        let name = PassengerName::new(name)?;
        if self.grid.occupant(seat).is_some() {
            return Err(Error::SeatOccupied { seat });
        }
        self.grid.set(seat, name);
        Ok(seat)
    }

    /// Cancels the booking on a seat.
    ///
    /// If anyone is waiting, the passenger at the front of the waiting list
    /// is removed from it and assigned the freed seat in the same step, and
    /// the outcome names them. Otherwise the seat becomes available.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::{CancelOutcome, GridDims, ReservationManager, SeatId};
    ///
    /// let mut manager = ReservationManager::new(GridDims::new(1, 1).unwrap(), 2);
    /// manager.book_seat(SeatId::new(0, 0), "Alice").unwrap();
    /// manager.add_to_waiting_list("Bob").unwrap();
    ///
    /// let outcome = manager.cancel_seat(SeatId::new(0, 0)).unwrap();
    /// assert_eq!(outcome.promoted().unwrap().as_str(), "Bob");
    ///
    /// // Bob now holds the seat
    /// assert!(manager.is_grid_full());
    /// assert_eq!(manager.waiting_count(), 0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] if the coordinate is out of bounds,
    /// or [`Error::SeatEmpty`] if the seat has no occupant.
    pub fn cancel_seat(&mut self, seat: SeatId) -> Result<CancelOutcome> {
        self.ensure_in_bounds(seat)?;
        if self.grid.clear_seat(seat).is_none() {
            return Err(Error::SeatEmpty { seat });
        }
        match self.waitlist.pop_front() {
            Some(promoted) => {
                self.grid.set(seat, promoted.clone());
                log::debug!("Promoted {promoted} from the waiting list to seat {seat}");
                Ok(CancelOutcome::PromotedFromWaitingList(promoted))
            }
            None => Ok(CancelOutcome::Cancelled),
        }
    }

    /// Adds a passenger to the back of the waiting list.
    ///
    /// Returns the zero-based position they were placed at. Joining is
    /// permitted even while seats are still available; callers that want to
    /// steer passengers to open seats first should check [`is_grid_full`]
    /// before offering the waiting list.
    ///
    /// [`is_grid_full`]: Self::is_grid_full
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty, or
    /// [`Error::WaitingListFull`] if the list is at capacity.
    pub fn add_to_waiting_list(&mut self, name: &str) -> Result<usize> {
        let name = PassengerName::new(name)?;
        let position = self.waitlist.push_back(name)?;
        Ok(position)
    }

    /// Returns every seat with its occupant in row-major order.
    ///
    /// The snapshot is an independent copy; later mutations of the manager
    /// do not affect it.
    #[must_use]
    pub fn grid_snapshot(&self) -> Vec<SeatEntry> {
        self.grid.entries()
    }

    /// Returns the waiting list as a fixed-length sequence of slots.
    ///
    /// The result always has exactly `waiting_list_capacity` entries, with
    /// waiting passengers in queue order followed by `None` for each free
    /// slot.
    #[must_use]
    pub fn waiting_list_snapshot(&self) -> Vec<Option<PassengerName>> {
        self.waitlist.snapshot()
    }

    /// Books every seat with names drawn from the source.
    ///
    /// Existing occupants are replaced. One name is drawn per seat; names
    /// that fail validation leave their seat untouched. Returns the number
    /// of seats assigned.
    pub fn fill_grid(&mut self, names: &mut dyn NameSource) -> usize {
        let mut assigned = 0;
        for seat in self.grid.dims() {
            if let Ok(name) = PassengerName::new(names.next_name()) {
                self.grid.set(seat, name);
                assigned += 1;
            }
        }
        log::debug!("Filled {assigned} seats from the name source");
        assigned
    }

    /// Replaces the waiting list contents with names drawn from the source.
    ///
    /// The list is cleared first. One name is drawn per slot; names that
    /// fail validation leave their slot free. Returns the number of
    /// passengers added.
    pub fn fill_waiting_list(&mut self, names: &mut dyn NameSource) -> usize {
        self.waitlist.clear();
        let mut added = 0;
        for _ in 0..self.waitlist.capacity() {
            if let Ok(name) = PassengerName::new(names.next_name()) {
                if self.waitlist.push_back(name).is_ok() {
                    added += 1;
                }
            }
        }
        log::debug!("Filled {added} waiting list slots from the name source");
        added
    }

    fn ensure_in_bounds(&self, seat: SeatId) -> Result<()> {
        let dims = self.grid.dims();
        if dims.contains(seat) {
            Ok(())
        } else {
            Err(Error::InvalidIndex { seat, dims })
        }
    }

    fn ensure_grid_not_full(&self) -> Result<()> {
        if self.grid.is_full() {
            Err(Error::GridFull {
                seats: self.grid.dims().seat_count(),
            })
        } else {
            Ok(())
        }
    }
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}
