//! Client-side query cache
//!
//! - cache.rs: keyed state store (pure, no reactivity), request dedup and caching
//! - client.rs: Leptos context wrapper + `use_query` hook

mod cache;
mod client;

pub use cache::{QueryCache, QueryStart, QueryState};
pub use client::{use_query, QueryClient, QueryResult};
