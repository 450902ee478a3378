//! Shared request/response contracts of Sylvia-IoT device services.
//!
//! The data flows through these modules like:
//!
//! ```text
//! bytes -> requests (decode + validate) -> dtos -> models (map or merge)
//! models -> dtos -> responses
//! ```

pub mod constants;
pub mod dtos;
pub mod err;
pub mod logger;
pub mod models;
pub mod requests;
pub mod responses;
pub mod strings;
