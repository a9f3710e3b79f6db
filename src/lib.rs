//! # baltree
//!
//! A self-balancing ordered map for Rust, backed by a height-balanced
//! (AVL-style) binary search tree stored in an index-addressed arena.
//!
//! ## Overview
//!
//! The crate provides [`BalancedMap`](ordered::BalancedMap), a mutable
//! ordered associative container with:
//!
//! - **O(log N) insertion** that rejects duplicate keys instead of
//!   overwriting, and restores balance with single/double rotations
//! - **O(log N) lookup** via [`get`](ordered::BalancedMap::get) /
//!   [`search`](ordered::BalancedMap::search)
//! - **Arena storage**: nodes live in one `Vec` and link to each other by
//!   index, so parent back-references never form ownership cycles and
//!   teardown is a single vector drop
//! - **Diagnostic rendering**: an indented, depth-revealing dump of the
//!   tree shape for debugging
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for [`BalancedMap`](ordered::BalancedMap)
//!
//! ## Example
//!
//! ```rust
//! use baltree::ordered::BalancedMap;
//!
//! let mut map = BalancedMap::new();
//! assert!(map.insert(2, "two"));
//! assert!(map.insert(1, "one"));
//! assert!(map.insert(3, "three"));
//!
//! // Duplicate keys are rejected, never overwritten
//! assert!(!map.insert(2, "TWO"));
//!
//! assert_eq!(map.get(&2), Some(&"two"));
//! assert_eq!(map.search(&4).ok(), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use baltree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordered::*;
}

pub mod ordered;
