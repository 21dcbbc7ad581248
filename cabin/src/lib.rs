#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cabin
//!
//! A library for managing seat reservations on a single flight.
//!
//! This library provides core types and functionality for booking seats in
//! a fixed-size cabin grid, cancelling them, and maintaining a bounded FIFO
//! waiting list that feeds freed seats.
//!
//! ## Core Types
//!
//! - [`ReservationManager`]: The single owner of all reservation state
//! - [`SeatId`] and [`GridDims`]: Seat coordinates with bounds checking
//! - [`PassengerName`] and [`WaitingList`]: Validated names and the FIFO queue
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cabin::{GridDims, ReservationManager, SeatId};
//!
//! let dims = GridDims::new(5, 3).unwrap();
//! let mut manager = ReservationManager::new(dims, 10);
//!
//! // Book a seat for a passenger
//! manager.book_seat(SeatId::new(0, 0), "Alice").unwrap();
//! assert_eq!(manager.occupied_seats(), 1);
//!
//! // A full cabin steers passengers to the waiting list
//! assert!(!manager.is_grid_full());
//! manager.add_to_waiting_list("Bob").unwrap();
//!
//! // Cancelling a seat promotes the first waiting passenger
//! let outcome = manager.cancel_seat(SeatId::new(0, 0)).unwrap();
//! assert_eq!(outcome.promoted().unwrap().as_str(), "Bob");
//! ```

pub mod config;
pub mod error;
mod grid;
pub mod logging;
pub mod manager;
pub mod output;
pub mod passenger;
pub mod seat;
pub mod waitlist;

// Re-export key types at crate root for convenience
pub use config::{CabinConfig, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::{CancelOutcome, NameSource, ReservationManager};
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, OutputFormatter};
pub use passenger::PassengerName;
pub use seat::{GridDims, SeatEntry, SeatId, SeatStatus};
pub use waitlist::WaitingList;
