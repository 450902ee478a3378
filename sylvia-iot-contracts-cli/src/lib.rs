//! The command-line tool for validating and merging device service requests.

pub mod libs;
