// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the icon font catalogue.
//!
//! Editing UIs fetch a font's glyph families from
//! `/fetch-icon-catalogue/{id}` to populate the icon picker, and the
//! font list from `/fetch-icon-catalogue/`. The store is shared read-only,
//! so handlers run concurrently without coordination.

pub mod handlers;
pub mod server;

pub use server::{router, start_server, GatewayState, ServerConfig};
