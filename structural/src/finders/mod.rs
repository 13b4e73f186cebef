//! Concrete [`UserFinder`](crate::UserFinder) implementations.
//!
//! `memory` is the fast store used as the proxy's cache; `db` stands in for a
//! slower authoritative source over a fixed dataset.

pub mod db;
pub mod memory;
