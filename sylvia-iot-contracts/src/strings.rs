//! Field format predicates shared by request validators.

use url::Url;
use uuid::Uuid;

/// Length of the hyphenated UUID form `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
const UUID_HYPHENATED_LEN: usize = 36;

/// To check if the string is a hyphenated UUID.
///
/// The simple, braced and URN forms are rejected.
pub fn is_uuid(value: &str) -> bool {
    value.len() == UUID_HYPHENATED_LEN && Uuid::try_parse(value).is_ok()
}

/// To check if the (base address) URI is valid.
pub fn is_uri(uri: &str) -> bool {
    Url::parse(uri).is_ok()
}

/// To generate a random UUID (v4) in the hyphenated form.
pub fn new_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
