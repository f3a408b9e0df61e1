//! JSON boundary for host applications.

mod json_api;

pub use json_api::{simulate_match_json, SimulateRequest, SimulateResponse, SCHEMA_VERSION};
