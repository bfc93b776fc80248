//! Integration tests for Earnings Scout

mod discovery_tests;
