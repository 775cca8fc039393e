// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message`, a `view` taking a `ViewContext`, and a
//! message handler returning an `Effect` for the application to carry out.
//!
//! - [`locale_switcher`] - Language label and drop-down
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod locale_switcher;
