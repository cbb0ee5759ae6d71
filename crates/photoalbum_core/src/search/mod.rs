//! Catalog search entry points.
//!
//! # Responsibility
//! - Query photos across all albums by tag content.
//! - Keep result shaping inside core.
//!
//! # Invariants
//! - Search is read-only and never triggers persistence.

pub mod tags;
