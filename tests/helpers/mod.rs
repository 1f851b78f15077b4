//! Test helpers module
//!
//! Mock attendance API server, canned payloads and context setup shared by
//! the integration tests.

#![allow(dead_code)]

pub mod api_mock;
pub mod test_data;

pub use api_mock::*;
pub use test_data::*;
