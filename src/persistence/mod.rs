//! Persistence Layer
//!
//! In-memory storage for accounts and the trade ledger. Nothing survives a
//! restart.
//!
//! Each repository owns its collection behind a `tokio::sync::RwLock`:
//! - users: insert takes the write lock for the duplicate check and push
//! - trades: append takes the write lock for id assignment and push
//!
//! Repositories are built once at startup and shared through `Arc`s held in
//! the application state.

pub mod repository;
pub mod seed;

pub use repository::{InMemoryTradeRepository, InMemoryUserRepository};
