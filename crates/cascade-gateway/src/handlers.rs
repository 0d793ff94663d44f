// SPDX-FileCopyrightText: 2026 Cascade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request handlers for the catalogue and health routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cascade_core::IconFontId;
use cascade_iconfont::CatalogueError;
use serde::Serialize;

use crate::server::GatewayState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// One entry of the font listing, used to fill the icon font select.
#[derive(Debug, Serialize)]
pub struct IconFontSummary {
    pub id: IconFontId,
    pub identifier: String,
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /fetch-icon-catalogue/
pub async fn list_icon_fonts(State(state): State<GatewayState>) -> Json<Vec<IconFontSummary>> {
    let fonts = state
        .catalogue
        .list()
        .into_iter()
        .map(|font| IconFontSummary {
            id: font.id,
            identifier: font.identifier.clone(),
        })
        .collect();
    Json(fonts)
}

/// GET /fetch-icon-catalogue/{id}
///
/// The id arrives as raw text so a malformed id gets the same 404 as an
/// unknown one.
pub async fn fetch_icon_catalogue(
    State(state): State<GatewayState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(id) = raw_id.parse::<IconFontId>() else {
        tracing::debug!(id = %raw_id, "malformed icon font id");
        return not_found(&raw_id);
    };

    match state.catalogue.find_by_id(id) {
        Ok(font) => Json(font.catalogue_payload()).into_response(),
        Err(CatalogueError::NotFound { .. }) => not_found(&raw_id),
        Err(e) => {
            tracing::warn!(%id, error = %e, "icon font catalogue lookup failed");
            not_found(&raw_id)
        }
    }
}

fn not_found(raw_id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("IconFont with id={raw_id} does not exist"),
    )
        .into_response()
}
