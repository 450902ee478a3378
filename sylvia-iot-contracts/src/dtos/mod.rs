//! Externally facing representations of resources.

use serde::{Deserialize, Deserializer};

pub mod device_service;

pub use device_service::{DeviceService, UpdateDeviceService};

/// To deserialize a patch field where an explicit `null` means "clear".
///
/// Use with `#[serde(default)]` so that an absent field stays [`None`]:
///
/// | JSON              | Result          |
/// |-------------------|-----------------|
/// | (absent)          | `None`          |
/// | `null`            | `Some(empty)`   |
/// | value             | `Some(value)`   |
pub fn clearable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

/// To deserialize a field where an explicit `null` is the same as the empty value.
///
/// Use with `#[serde(default)]` so that an absent field is also the empty value.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
