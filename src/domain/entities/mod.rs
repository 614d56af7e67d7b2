pub mod trade;
pub mod user;
