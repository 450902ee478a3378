//! To report request decoding and validation errors.
//!
//! ```
//! use sylvia_iot_contracts::err::ErrResp;
//! // To report a missing field.
//! fn check(name: &str) -> Result<(), ErrResp> {
//!     if name.len() == 0 {
//!         return Err(ErrResp::ErrRequired(Some("`name` is required".to_string())));
//!     }
//!     Ok(())
//! }
//! assert!(check("").is_err());
//! ```
//!
//! All errors are caused by client input, so all of them are rendered as `400 Bad Request` when
//! they are returned from an HTTP handler.

use std::{error::Error, fmt};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The request error definitions.
#[derive(Debug, PartialEq)]
pub enum ErrResp {
    /// The input is empty or not a well-formed document.
    ErrDecode(Option<String>),
    /// A mandatory field is missing or empty.
    ErrRequired(Option<String>),
    /// A present field does not satisfy its format or value set.
    ErrInvalid(Option<String>),
}

/// Used for generating HTTP body for errors.
#[derive(Serialize)]
struct RespJson<'a> {
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// 400, malformed or empty input.
pub const E_DECODE: &'static str = "err_decode";
/// 400, mandatory field missing.
pub const E_FIELD_REQUIRED: &'static str = "err_field_required";
/// 400, field format or value error.
pub const E_FIELD_INVALID: &'static str = "err_field_invalid";

/// To generate error JSON string for HTTP body.
pub fn to_json(code: &str, message: Option<&str>) -> String {
    match serde_json::to_string(&RespJson { code, message }) {
        Err(_) => format!("{{\"code\":\"{}\"}}", code),
        Ok(str) => str,
    }
}

impl ErrResp {
    /// The error code string.
    pub fn code(&self) -> &'static str {
        match self {
            ErrResp::ErrDecode(_) => E_DECODE,
            ErrResp::ErrRequired(_) => E_FIELD_REQUIRED,
            ErrResp::ErrInvalid(_) => E_FIELD_INVALID,
        }
    }

    /// The error description.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrResp::ErrDecode(desc) | ErrResp::ErrRequired(desc) | ErrResp::ErrInvalid(desc) => {
                desc.as_deref()
            }
        }
    }

    fn resp_json(&'_ self) -> RespJson<'_> {
        RespJson {
            code: self.code(),
            message: self.message(),
        }
    }
}

impl fmt::Display for ErrResp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_json(self.code(), self.message()))
    }
}

impl Error for ErrResp {}

impl IntoResponse for ErrResp {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.resp_json())).into_response()
    }
}
