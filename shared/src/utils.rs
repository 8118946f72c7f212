//! # Shared Utility Functions
//!
//! Address display helpers used by both the wallet page and the backend logs.

/// Characters kept at each end of a truncated address.
const AFFIX_LEN: usize = 4;

/// Shorten an address for display: first and last four characters with an
/// ellipsis in between.
///
/// Addresses are opaque ASCII identifiers (base58), so byte slicing is safe.
/// Strings too short to shorten meaningfully are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(truncate_address(addr), "8W6Q...JKAL");
/// assert_eq!(truncate_address("short"), "short");
/// ```
pub fn truncate_address(address: &str) -> String {
    let len = address.len();
    if len <= AFFIX_LEN * 2 {
        return address.to_string();
    }

    format!("{}...{}", &address[..AFFIX_LEN], &address[len - AFFIX_LEN..])
}
