//! Integration tests for the HTTP endpoints

mod batch_endpoint_tests;
mod health_tests;
