//! Core types for the guestlist ecosystem.
//!
//! This crate provides the types shared by the guestlist CLI:
//! - `Event` for backend-owned event metadata
//! - `rsvp` for attendance status and count handling
//! - `Session` for the locally persisted event id and guest identity

pub mod error;
pub mod event;
pub mod rsvp;
pub mod session;
pub mod user;

pub use error::{GuestlistError, GuestlistResult};
pub use event::Event;
pub use rsvp::{toggle_target, AttendanceCounts, CountsView, RsvpStatus};
pub use session::Session;
pub use user::UserIdentity;
