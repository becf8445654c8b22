// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an image carousel built with the Iced GUI framework.
//!
//! It fetches one page of a remote image listing (picsum-style
//! `<base>list?page=&limit=` endpoint) and lets the user step through the
//! images with previous/next arrows and per-image indicators.
//!
//! The carousel logic lives in [`slider`] and has no GUI dependency: the
//! store, its messages, and the view model can be driven from tests or any
//! other front end.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod slider;
pub mod ui;
