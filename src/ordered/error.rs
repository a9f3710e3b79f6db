//! Error types for map lookups.

/// Error returned by a failed lookup.
///
/// [`BalancedMap::search`](super::BalancedMap::search) reports an absent key
/// (including any lookup on an empty map) with this error instead of a
/// default value, so a stored value can never be confused with a miss.
///
/// # Examples
///
/// ```rust
/// use baltree::ordered::{BalancedMap, NotFoundError};
///
/// let map: BalancedMap<i32, String> = BalancedMap::new();
/// assert_eq!(map.search(&1), Err(NotFoundError));
/// assert_eq!(format!("{}", NotFoundError), "key not found in map");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundError;

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("key not found in map")
    }
}

impl std::error::Error for NotFoundError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error_display() {
        assert_eq!(format!("{NotFoundError}"), "key not found in map");
    }

    #[test]
    fn test_not_found_error_equality() {
        assert_eq!(NotFoundError, NotFoundError.clone());
    }

    #[test]
    fn test_not_found_error_is_error() {
        use std::error::Error;

        let _: &dyn Error = &NotFoundError;
        assert!(NotFoundError.source().is_none());
    }
}
