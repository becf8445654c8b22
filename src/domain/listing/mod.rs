// SPDX-License-Identifier: MPL-2.0
//! Listing domain types.
//!
//! Value objects describing what the carousel asks the listing endpoint for
//! and what it gets back, independent of the HTTP transport.

pub mod newtypes;
pub mod types;

pub use newtypes::{PageNumber, PageSize};
pub use types::{ListingQuery, RemoteImage};
