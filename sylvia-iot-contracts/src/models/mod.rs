//! Storage models handed to the persistence layer.
//!
//! Request DTOs are mapped onto or merged into these structures. This crate never stores them.

pub mod device_service;

pub use device_service::DeviceService;
