//! Outbound HTTP seam: a minimal client trait, the production reqwest
//! client, and credential decorators.

mod basic;
mod client;
pub mod auth;

pub use basic::{BasicClient, FEED_TIMEOUT};
pub use client::HttpClient;
