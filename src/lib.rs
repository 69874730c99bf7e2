//! paps-serve - typed endpoint registry and request validators for the PAPS
//! gig-jobs API
//!
//! This library describes every operation of the PAPS REST API (postings,
//! applications, assignments, chat, comments, ratings, auth and admin) as an
//! immutable endpoint table, and checks request payloads against the field
//! rules of each resource before anything is sent over the wire.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod output;
pub mod paths;
pub mod serve;
