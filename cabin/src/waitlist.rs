//! Bounded FIFO waiting list for passengers without a seat.
//!
//! The list has a fixed capacity chosen at construction. Passengers join at
//! the back and leave from the front when a seat opens up; relative order is
//! never changed by any operation.

use std::collections::VecDeque;
use std::fmt;

use crate::passenger::PassengerName;

/// A bounded first-in first-out waiting list.
///
/// # Examples
///
/// ```
/// use cabin::{PassengerName, WaitingList};
///
/// let mut list = WaitingList::new(3);
/// list.push_back(PassengerName::new("Alice").unwrap()).unwrap();
/// list.push_back(PassengerName::new("Bob").unwrap()).unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.pop_front().unwrap().as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingList {
    entries: VecDeque<PassengerName>,
    capacity: usize,
}

impl WaitingList {
    /// Creates an empty waiting list with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of entries the list can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of passengers currently waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks if the list is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Appends a passenger at the back of the list.
    ///
    /// Returns the zero-based position the passenger was placed at.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is already at capacity.
    pub fn push_back(&mut self, name: PassengerName) -> Result<usize, WaitingListFullError> {
        if self.is_full() {
            return Err(WaitingListFullError {
                capacity: self.capacity,
            });
        }
        self.entries.push_back(name);
        Ok(self.entries.len() - 1)
    }

    /// Removes and returns the passenger at the front of the list.
    pub fn pop_front(&mut self) -> Option<PassengerName> {
        self.entries.pop_front()
    }

    /// Returns the passenger at the front without removing them.
    #[must_use]
    pub fn front(&self) -> Option<&PassengerName> {
        self.entries.front()
    }

    /// Returns an iterator over waiting passengers in queue order.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, PassengerName> {
        self.entries.iter()
    }

    /// Removes every entry, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns a fixed-length view of the list.
    ///
    /// The result always has exactly `capacity` slots; occupied slots come
    /// first in queue order, followed by `None` for each free slot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Option<PassengerName>> {
        let mut slots: Vec<Option<PassengerName>> = Vec::with_capacity(self.capacity);
        slots.extend(self.entries.iter().cloned().map(Some));
        slots.resize(self.capacity, None);
        slots
    }
}

impl<'a> IntoIterator for &'a WaitingList {
    type Item = &'a PassengerName;
    type IntoIter = std::collections::vec_deque::Iter<'a, PassengerName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Error type for appending to a full waiting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingListFullError {
    /// The capacity that was exceeded.
    pub capacity: usize,
}

impl fmt::Display for WaitingListFullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "waiting list is full ({} entries)", self.capacity)
    }
}

impl std::error::Error for WaitingListFullError {}
