//! Integration tests for courtside-validator.

mod properties;
mod scenarios;
