//! Value checks shared by priced entities (products and menus).
use rust_decimal::Decimal;

use crate::errors::ModelError;

/// A price must be present and not negative.
pub fn validate_price(price: Option<Decimal>) -> Result<Decimal, ModelError> {
    match price {
        None => Err(ModelError::Validation("price required".into())),
        Some(p) if p.is_sign_negative() && !p.is_zero() => {
            Err(ModelError::Validation(format!("price must be >= 0, got {p}")))
        }
        Some(p) => Ok(p),
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn missing_price_rejected() {
        assert!(matches!(validate_price(None), Err(ModelError::Validation(_))));
    }

    #[test]
    fn negative_price_rejected() {
        assert!(validate_price(Some(Decimal::from(-1))).is_err());
        assert!(validate_price(Some(Decimal::from_str("-0.01").unwrap())).is_err());
    }

    #[test]
    fn zero_and_positive_accepted() {
        assert_eq!(validate_price(Some(Decimal::ZERO)).unwrap(), Decimal::ZERO);
        // -0 is still zero
        assert!(validate_price(Some(Decimal::from_str("-0").unwrap())).is_ok());
        assert_eq!(validate_price(Some(Decimal::from(16000))).unwrap(), Decimal::from(16000));
    }

    #[test]
    fn blank_name_rejected() {
        assert!(validate_name("  ").is_err());
        assert!(validate_name("fried chicken").is_ok());
    }
}
