//! CLI command implementations.
//!
//! This module contains the top-level commands plus one module per
//! session command:
//! - `session`: Run an interactive reservation session (the default)
//! - `completions`: Generate shell completion scripts
//! - `status`: Check whether a seat is available
//! - `book`: Book a seat, or join the waiting list when the cabin is full
//! - `cancel`: Cancel a booking, promoting the next waiting passenger
//! - `wait`: Join the waiting list
//! - `seats`: List every seat and its occupant
//! - `waitlist`: List every waiting list slot up to capacity
//! - `fill_seats` / `fill_waitlist`: Demo fills from the sample roster
//! - `suggest_name`: Print the next sample passenger name

pub mod book;
pub mod cancel;
pub mod completions;
pub mod fill_seats;
pub mod fill_waitlist;
pub mod seats;
pub mod session;
pub mod status;
pub mod suggest_name;
pub mod wait;
pub mod waitlist;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use fill_seats::FillSeatsCommand;
pub use fill_waitlist::FillWaitlistCommand;
pub use seats::SeatsCommand;
pub use session::SessionCommand;
pub use status::StatusCommand;
pub use suggest_name::SuggestNameCommand;
pub use wait::WaitCommand;
pub use waitlist::WaitlistCommand;
