//! Integration tests for the asset tree engine.

mod helpers;
mod json_boundary_test;
mod logging_test;
mod scenario_test;
