// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use crate::{
    contract::AccountRecordV1,
    error::ApiError,
    models::{ApiResponse, BalanceQuery, CreateAccountRequest},
    state::AppState,
};

use super::{malformed_request, run_blocking};

#[utoipa::path(
    get,
    path = "/balance",
    params(BalanceQuery),
    tag = "Accounts",
    responses(
        (status = 200, description = "OK with balance, ACCOUNT_NOT_EXIST, INVALID_SIG or ERR", body = ApiResponse)
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    query: Result<Query<BalanceQuery>, QueryRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return Ok(malformed_request(rejection)),
    };
    let response = run_blocking(&state, move |service| service.get_balance(&query)).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/account",
    request_body = CreateAccountRequest,
    tag = "Accounts",
    responses(
        (status = 200, description = "OK or ERR with message", body = ApiResponse)
    )
)]
pub async fn create_account(
    State(state): State<AppState>,
    request: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, ApiError> {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => return Ok(malformed_request(rejection)),
    };
    let response = run_blocking(&state, move |service| service.create_account(&request)).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/accounts",
    tag = "Accounts",
    responses(
        (status = 200, description = "All accounts in key order", body = [AccountRecordV1]),
        (status = 500, description = "A stored record could not be decoded"),
        (status = 503, description = "Ledger unavailable")
    )
)]
pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountRecordV1>>, ApiError> {
    let accounts = run_blocking(&state, |service| service.list_accounts()).await??;
    Ok(Json(accounts.iter().map(AccountRecordV1::from).collect()))
}
