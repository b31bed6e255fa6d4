// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{ApiResponse, SendRequest},
    state::AppState,
};

use super::{malformed_request, run_blocking};

#[utoipa::path(
    post,
    path = "/send",
    request_body = SendRequest,
    tag = "Transfers",
    responses(
        (status = 200, description = "OK with echoed id, INVALID_SIG or ERR with message", body = ApiResponse)
    )
)]
pub async fn send(
    State(state): State<AppState>,
    request: Result<Json<SendRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return Ok(malformed_request(rejection)),
    };
    let response = run_blocking(&state, move |service| service.send(&request)).await?;
    Ok(Json(response))
}
