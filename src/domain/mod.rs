pub mod filter;
pub mod ticket;
pub mod user;
