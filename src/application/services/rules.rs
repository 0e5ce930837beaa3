//! Field rules shared by the services.

use crate::error::AppError;

/// Maximum length of a bakery or baked good name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Rejects blank or overlong names.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_field("name", "must not be blank"));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::invalid_field(
            "name",
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }

    Ok(())
}

/// Rejects prices that are not finite or are negative.
pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() {
        return Err(AppError::invalid_field("price", "must be a finite number"));
    }

    if price < 0.0 {
        return Err(AppError::invalid_field("price", "must not be negative"));
    }

    Ok(())
}
