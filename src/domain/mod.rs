// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with no dependency on the GUI or HTTP stack.
//!
//! # Modules
//!
//! - [`listing`]: Listing value objects ([`RemoteImage`](listing::RemoteImage),
//!   [`ListingQuery`](listing::ListingQuery), [`PageNumber`](listing::PageNumber),
//!   [`PageSize`](listing::PageSize))

pub mod listing;
