//! # Validation Module
//!
//! Input validation for the documented contracts in this crate.
//!
//! The invoice calculator and product filter are total over their documented
//! domains; callers are expected to validate inputs here first rather than
//! rely on those functions to reject anything.

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_ITEM_QUANTITY, MAX_SEARCH_TERM_LEN};

/// Validates an order-line quantity.
///
/// ## Rules
/// - Must be positive (>= 1)
/// - Must not exceed `MAX_ITEM_QUANTITY`
///
/// ## Example
/// ```rust
/// use grocemate_core::validation::validate_quantity;
///
/// assert!(validate_quantity(3).is_ok());
/// assert!(validate_quantity(0).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a monetary amount in paise.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (free items)
pub fn validate_amount_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::Negative {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a free-text search term.
///
/// ## Rules
/// - Can be empty (no narrowing)
/// - Maximum `MAX_SEARCH_TERM_LEN` characters after trimming
///
/// ## Returns
/// The trimmed term.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.chars().count() > MAX_SEARCH_TERM_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_TERM_LEN,
        });
    }

    Ok(term.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-2).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_amount_non_negative() {
        assert!(validate_amount_paise(0).is_ok());
        assert!(validate_amount_paise(50_000).is_ok());
        assert!(validate_amount_paise(-1).is_err());
    }

    #[test]
    fn test_search_term_trimmed() {
        assert_eq!(validate_search_term("  rice  ").unwrap(), "rice");
        assert_eq!(validate_search_term("").unwrap(), "");
        assert!(validate_search_term(&"a".repeat(101)).is_err());
    }
}
