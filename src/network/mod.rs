//! Network layer - collection download and request execution
//!
//! One shared client constructed at startup; one request in flight at a
//! time for the whole session.

pub mod client;

pub use client::{create_client, execute_request, fetch_collection, FetchError};
