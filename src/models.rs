// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response shapes for the account endpoints. Field names follow
//! the established client protocol (`accountId`, `fromId`, ...), so every
//! struct renames to camelCase explicitly.
//!
//! ## Signed Requests
//!
//! [`BalanceQuery`] and [`SendRequest`] implement [`SignedRequest`]; their
//! canonical messages are:
//!
//! | Request | Canonical message |
//! |---------|-------------------|
//! | Balance | `id ‖ timestamp ‖ "accountId" ‖ accountId` |
//! | Send | `id ‖ timestamp ‖ "fromId" ‖ fromId ‖ "toId" ‖ toId ‖ "amount" ‖ amount` |
//!
//! `amount` is rendered with exactly six decimals.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::amount::Amount;
use crate::auth::{CanonicalMessage, SignedRequest};

// =============================================================================
// Requests
// =============================================================================

/// Signed balance lookup, sent as query parameters.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BalanceQuery {
    /// Client correlation number, echoed in the response.
    pub id: i64,
    /// Client timestamp (signed, not checked for freshness).
    pub timestamp: i64,
    /// Base64 RSA-SHA256 signature over the canonical message.
    pub signature: String,
    pub account_id: String,
}

impl SignedRequest for BalanceQuery {
    fn signature(&self) -> &str {
        &self.signature
    }

    fn canonical_message(&self) -> String {
        CanonicalMessage::new(self.id, self.timestamp)
            .field("accountId", &self.account_id)
            .finish()
    }
}

/// Signed transfer between two accounts.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub id: i64,
    pub timestamp: i64,
    pub signature: String,
    pub from_id: String,
    pub to_id: String,
    #[schema(value_type = f64, example = 40.0)]
    pub amount: Amount,
}

impl SignedRequest for SendRequest {
    fn signature(&self) -> &str {
        &self.signature
    }

    fn canonical_message(&self) -> String {
        CanonicalMessage::new(self.id, self.timestamp)
            .field("fromId", &self.from_id)
            .field("toId", &self.to_id)
            .field("amount", self.amount)
            .finish()
    }
}

/// Unauthenticated account creation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_id: String,
    /// Base64 DER X.509 SubjectPublicKeyInfo (RSA).
    pub public_key: String,
    #[schema(value_type = f64, example = 100.0)]
    pub balance: Amount,
}

// =============================================================================
// Responses
// =============================================================================

/// Outcome vocabulary exposed to clients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    Ok,
    Err,
    InvalidSig,
    AccountNotExist,
}

/// Message attached to [`ResponseCode::InvalidSig`].
pub const INVALID_SIG_MSG: &str = "Signature is invalid";

/// Message attached to [`ResponseCode::AccountNotExist`].
pub const ACCOUNT_NOT_EXIST_MSG: &str = "Account not exists on ledger";

/// Body of every facade response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiResponse {
    pub code: ResponseCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>)]
    pub balance: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ApiResponse {
    fn with_code(code: ResponseCode) -> Self {
        Self {
            code,
            id: None,
            balance: None,
            msg: None,
        }
    }

    pub fn ok() -> Self {
        Self::with_code(ResponseCode::Ok)
    }

    pub fn ok_with_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::ok()
        }
    }

    pub fn balance(id: i64, balance: Amount) -> Self {
        Self {
            id: Some(id),
            balance: Some(balance),
            ..Self::ok()
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            ..Self::with_code(ResponseCode::Err)
        }
    }

    pub fn invalid_sig() -> Self {
        Self {
            msg: Some(INVALID_SIG_MSG.to_string()),
            ..Self::with_code(ResponseCode::InvalidSig)
        }
    }

    pub fn account_not_exist() -> Self {
        Self {
            msg: Some(ACCOUNT_NOT_EXIST_MSG.to_string()),
            ..Self::with_code(ResponseCode::AccountNotExist)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_query_canonical_message() {
        let query = BalanceQuery {
            id: 7,
            timestamp: 1_700_000_000_000,
            signature: String::new(),
            account_id: "alice".to_string(),
        };
        assert_eq!(query.canonical_message(), "71700000000000accountIdalice");
    }

    #[test]
    fn send_request_parses_protocol_field_names() {
        let request: SendRequest = serde_json::from_str(
            r#"{"id":1,"timestamp":1700000000000,"signature":"c2ln",
                "fromId":"A","toId":"B","amount":40.0}"#,
        )
        .unwrap();
        assert_eq!(request.signature(), "c2ln");
        assert_eq!(
            request.canonical_message(),
            "11700000000000fromIdAtoIdBamount40.000000"
        );
    }

    #[test]
    fn create_request_accepts_integer_balance() {
        let request: CreateAccountRequest =
            serde_json::from_str(r#"{"accountId":"A","publicKey":"KEY","balance":100}"#).unwrap();
        assert_eq!(request.balance, Amount::from_units(100).unwrap());
    }

    #[test]
    fn response_codes_serialize_screaming_snake_case() {
        let json = serde_json::to_value(ApiResponse::account_not_exist()).unwrap();
        assert_eq!(json["code"], "ACCOUNT_NOT_EXIST");
        assert_eq!(json["msg"], ACCOUNT_NOT_EXIST_MSG);

        let json = serde_json::to_value(ApiResponse::invalid_sig()).unwrap();
        assert_eq!(json["code"], "INVALID_SIG");
    }

    #[test]
    fn optional_fields_are_omitted() {
        let json = serde_json::to_string(&ApiResponse::ok_with_id(1)).unwrap();
        assert_eq!(json, r#"{"code":"OK","id":1}"#);

        let json = serde_json::to_string(&ApiResponse::balance(2, Amount::from_micros(60_500_000)))
            .unwrap();
        assert_eq!(json, r#"{"code":"OK","id":2,"balance":60.5}"#);
    }
}
