// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Cascade integration tests.
//!
//! Provides mock catalogue stores and icon font fixtures for fast,
//! deterministic tests without a real catalogue.
//!
//! # Components
//!
//! - [`CountingIconFontStore`] - In-memory store that counts lookups
//! - [`FailingIconFontStore`] - Store whose every lookup fails
//! - [`fixtures`] - Sample icon font config and records

pub mod fixtures;
pub mod mock_store;

pub use fixtures::{fontello_config, sample_font, write_fontello_config};
pub use mock_store::{CountingIconFontStore, FailingIconFontStore};
