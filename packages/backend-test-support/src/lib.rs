//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests.

pub mod logging;
