//! Trade Ledger API
//!
//! Authenticated REST API over an in-memory, append-only trade ledger.

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod persistence;
pub mod secrets;
