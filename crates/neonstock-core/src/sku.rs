//! SKU generation for the "generate" button on the product form.
//!
//! Format: `{PREFIX}{TIMESTAMP}{NONCE}`
//! - PREFIX: first three characters of the name, upper-cased (`PRD` when
//!   the name is blank)
//! - TIMESTAMP: last six digits of the epoch milliseconds
//! - NONCE: two digits, `00`-`99`
//!
//! The caller supplies the clock and the randomness so this stays pure.

/// Builds a SKU from a product name.
///
/// ```rust
/// use neonstock_core::sku::generate_sku;
///
/// assert_eq!(generate_sku("neon strip", 1_717_171_234_567, 7), "NEO23456707");
/// assert_eq!(generate_sku("", 42, 99), "PRD00004299");
/// ```
pub fn generate_sku(name: &str, epoch_millis: i64, nonce: u8) -> String {
    let prefix: String = name.trim().chars().take(3).collect::<String>().to_uppercase();
    let prefix = if prefix.is_empty() { "PRD".to_string() } else { prefix };

    let stamp = epoch_millis.rem_euclid(1_000_000);
    format!("{}{:06}{:02}", prefix, stamp, nonce % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_keep_what_they_have() {
        assert_eq!(generate_sku("tv", 123, 5), "TV00012305");
    }

    #[test]
    fn test_nonce_is_two_digits() {
        assert_eq!(generate_sku("Lamp", 999_999, 250), "LAM99999950");
    }

    #[test]
    fn test_blank_name_uses_default_prefix() {
        assert!(generate_sku("   ", 1, 1).starts_with("PRD"));
    }
}
