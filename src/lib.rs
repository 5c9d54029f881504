//! # Runman
//!
//! A terminal-based Postman collection runner. Downloads a collection
//! document from a configured URL, then offers an interactive menu to
//! list requests, run one or all of them against live servers, add new
//! requests, and save the collection back to indented JSON.
//!
//! ## Features
//! - String- and object-shaped request URLs, normalized on load
//! - Post-response assertions matched by pattern (status ok, sample args.source)
//! - Optional headers, bodies, and test scripts on added requests
//! - Collection persistence to indented JSON
//!
//! ## Architecture
//! Sequential, single-session: settings -> fetch -> menu loop. One shared
//! HTTP client, one request in flight at a time; "run all" never overlaps
//! calls.

pub mod app;
pub mod assertions;
pub mod constants;
pub mod models;
pub mod network;
pub mod settings;
pub mod storage;

// Re-export commonly used types
pub use app::App;
pub use models::{Body, Collection, Event, Header, Info, Item, Request, Response, Script, Url};
pub use settings::Settings;
