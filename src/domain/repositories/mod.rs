pub mod trade_repository;
pub mod user_repository;
