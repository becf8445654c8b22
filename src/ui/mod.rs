// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": widgets read slider state and emit
//! `slider::Message`s; they never mutate anything themselves.
//!
//! - [`carousel`] - The carousel widget and the displayed-picture sub-component
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod carousel;
pub mod design_tokens;
pub mod styles;
