//! Core use-case services.
//!
//! # Responsibility
//! - `mutation`: invariant-enforcing catalog operations, storage-agnostic.
//! - `library`: caller-side facade that owns the live catalog and snapshots
//!   it after every successful mutation.

pub mod library;
pub mod mutation;
