//! hello-birthday - remembers a user's date of birth and greets them
//!
//! The service exposes two user-facing endpoints:
//! - `PUT /hello/{username}` stores or updates a date of birth
//! - `GET /hello/{username}` returns the number of days until the next birthday
//!
//! Validation and date arithmetic are pure functions; persistence sits behind
//! the [`storage::UserStore`] trait.

pub mod api;
pub mod birthday;
pub mod config;
pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
