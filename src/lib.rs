//! Ticketing client: an in-memory mirror of a remote ticket API, kept in sync
//! through confirmed mutations, with list and detail text views.

pub mod cmd;
pub mod config;
pub mod context;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;
pub mod store;
#[cfg(test)]
mod test_support;
pub mod view;
pub mod workflow;
