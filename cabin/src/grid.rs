//! Row-major seat storage backing the reservation manager.

use crate::passenger::PassengerName;
use crate::seat::{GridDims, SeatEntry, SeatId};

/// Flat row-major store of seat occupants.
///
/// Callers are expected to bounds-check coordinates against [`GridDims`]
/// before indexing; all accessors here assume in-bounds seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeatGrid {
    dims: GridDims,
    seats: Vec<Option<PassengerName>>,
}

impl SeatGrid {
    pub(crate) fn new(dims: GridDims) -> Self {
        Self {
            dims,
            seats: vec![None; dims.seat_count()],
        }
    }

    pub(crate) const fn dims(&self) -> GridDims {
        self.dims
    }

    fn index(&self, seat: SeatId) -> usize {
        debug_assert!(self.dims.contains(seat));
        seat.row as usize * self.dims.columns() as usize + seat.col as usize
    }

    pub(crate) fn occupant(&self, seat: SeatId) -> Option<&PassengerName> {
        self.seats[self.index(seat)].as_ref()
    }

    pub(crate) fn set(&mut self, seat: SeatId, name: PassengerName) {
        let index = self.index(seat);
        self.seats[index] = Some(name);
    }

    /// Vacates a seat, returning the previous occupant if there was one.
    pub(crate) fn clear_seat(&mut self, seat: SeatId) -> Option<PassengerName> {
        let index = self.index(seat);
        self.seats[index].take()
    }

    pub(crate) fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|slot| slot.is_some()).count()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.seats.iter().all(Option::is_some)
    }

    /// Enumerates every seat with its occupant in row-major order.
    pub(crate) fn entries(&self) -> Vec<SeatEntry> {
        self.dims
            .seats()
            .map(|seat| SeatEntry {
                seat,
                occupant: self.occupant(seat).cloned(),
            })
            .collect()
    }
}
