// SPDX-License-Identifier: MPL-2.0
//! Carousel controller: slider state, its observable store, and the pure
//! view model the UI renders from.
//!
//! ## Architecture
//!
//! ```text
//! store.rs (observable container, subscribers)
//!     └── state.rs      - SliderState, Message, Effect, handle()
//! view_model.rs         - SliderState -> CarouselView (loading / error / ready)
//! ```
//!
//! The store never performs I/O. A message that needs the network returns
//! [`Effect::FetchListing`]; the caller runs the request and feeds the result
//! back as [`Message::Loaded`] with the ticket it was given.

pub mod state;
pub mod store;
pub mod view_model;

pub use state::{DisplayState, Effect, LoadTicket, Message, SliderState};
pub use store::{SliderStore, SubscriberId};
pub use view_model::{view_model, CarouselView, Indicator, Slides};
