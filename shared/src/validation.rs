//! Validation utilities for the Sanabel Bakery inventory system
//!
//! Includes Jordan-specific checks for contact data.

use rust_decimal::Decimal;

// ============================================================================
// Ledger Input Validations
// ============================================================================

/// Validate a movement or payment quantity/amount is strictly positive
pub fn validate_positive(value: Decimal) -> Result<(), &'static str> {
    if value <= Decimal::ZERO {
        return Err("Value must be positive");
    }
    Ok(())
}

/// Validate a price or threshold is not negative
pub fn validate_non_negative(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Value cannot be negative");
    }
    Ok(())
}

/// Validate the paid amount of a purchase does not exceed its total
pub fn validate_paid_within_total(paid: Decimal, total: Decimal) -> Result<(), &'static str> {
    if paid < Decimal::ZERO {
        return Err("Paid amount cannot be negative");
    }
    if paid > total {
        return Err("Paid amount cannot exceed the total price");
    }
    Ok(())
}

/// Validate an entity display name is non-empty
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

// ============================================================================
// Jordan-Specific Validations
// ============================================================================

/// Validate a Jordanian phone number
/// Accepts: 0791234567, 079-123-4567, +962791234567
pub fn validate_jordanian_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // Local mobile: 10 digits starting with 07
    if digits.len() == 10 && digits.starts_with("07") {
        return Ok(());
    }
    // Local landline: 9 digits starting with 0
    if digits.len() == 9 && digits.starts_with('0') {
        return Ok(());
    }
    // International format with 962 country code
    if digits.len() == 12 && digits.starts_with("962") {
        return Ok(());
    }

    Err("Invalid Jordanian phone number format")
}
