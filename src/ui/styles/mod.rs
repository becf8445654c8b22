// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the carousel widgets.

pub mod button;
pub mod container;
pub mod tooltip;
