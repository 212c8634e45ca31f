//! # Integration Test Flows
//!
//! The operator CLI produces a code, the SMS gateway decodes it.

pub mod cli_to_gateway;
