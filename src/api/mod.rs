// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    contract::AccountRecordV1,
    error::ApiError,
    models::{ApiResponse, BalanceQuery, CreateAccountRequest, ResponseCode, SendRequest},
    service::AccountService,
    state::AppState,
};

pub mod accounts;
pub mod health;
pub mod transfers;

/// Run a ledger-bound service call off the async workers.
pub(crate) async fn run_blocking<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&AccountService) -> T + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || op(&service))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Ledger task failed");
            ApiError::internal("Ledger task failed")
        })
}

/// Answer a body or query that failed to decode with `ERR`.
pub(crate) fn malformed_request(rejection: impl std::fmt::Display) -> Json<ApiResponse> {
    tracing::warn!(error = %rejection, "Rejected undecodable request");
    Json(ApiResponse::err(rejection.to_string()))
}

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/balance", get(accounts::get_balance))
        .route("/account", put(accounts::create_account))
        .route("/accounts", get(accounts::list_accounts))
        .route("/send", post(transfers::send))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        accounts::get_balance,
        accounts::create_account,
        accounts::list_accounts,
        transfers::send,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            AccountRecordV1,
            ApiResponse,
            BalanceQuery,
            CreateAccountRequest,
            ResponseCode,
            SendRequest,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Accounts", description = "Account creation and signed balance queries"),
        (name = "Transfers", description = "Signed transfers between accounts"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
