// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations that wrap external dependencies (HTTP) and
//! convert their results into domain types.
//!
//! # Available Adapters
//!
//! - [`listing_client`]: Listing and image downloads via `reqwest`

pub mod listing_client;

pub use listing_client::ListingClient;
