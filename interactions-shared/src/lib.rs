//! # Interactions Shared
//! This crate defines the shared data structures and types used across the
//! interaction engine: vote records and their denormalized counters, client
//! view states, bookmarks, contribution ledger entries, and the derived
//! activity/badge aggregates.
pub mod types;
