use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Non-negative, finite product price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ProductError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ProductError::InvalidPrice);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_zero_price() {
        assert_eq!(Price::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn should_reject_negative_price() {
        assert!(matches!(Price::new(-0.01), Err(ProductError::InvalidPrice)));
    }

    #[test]
    fn should_reject_non_finite_price() {
        assert!(matches!(Price::new(f64::NAN), Err(ProductError::InvalidPrice)));
        assert!(matches!(
            Price::new(f64::INFINITY),
            Err(ProductError::InvalidPrice)
        ));
    }

    #[test]
    fn should_display_two_decimals() {
        assert_eq!(Price::new(3.5).unwrap().to_string(), "3.50");
    }
}
