//! Cart Entities
//!
//! A cart line joins a cart row with its product.

use serde::{Deserialize, Serialize};

use super::{DomainError, DomainResult};

/// One line of the cart as returned by `GET /get_cart`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Cart row id (not the product id)
    pub id: u32,
    pub product_id: u32,
    pub name: String,
    /// Current unit price of the product
    pub price: f64,
    pub quantity: u32,
}

/// Body of `POST /add_to_cart`
///
/// Both fields are optional on the wire so that a missing field is
/// reported with the service's own message instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AddToCartRequest {
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

impl AddToCartRequest {
    /// Validate and narrow to `(product_id, quantity)`
    pub fn validate(&self) -> DomainResult<(u32, u32)> {
        let (product_id, quantity) = match (self.product_id, self.quantity) {
            (Some(p), Some(q)) if p != 0 && q != 0 => (p, q),
            _ => return Err(DomainError::InvalidInput("Missing product_id or quantity".into())),
        };
        let product_id = u32::try_from(product_id)
            .map_err(|_| DomainError::NotFound("Product not found".into()))?;
        if quantity < 0 {
            return Err(DomainError::InvalidInput("Quantity must be positive".into()));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::InvalidInput("Quantity too large".into()))?;
        Ok((product_id, quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_values() {
        let req = AddToCartRequest { product_id: Some(3), quantity: Some(1) };
        assert_eq!(req.validate(), Ok((3, 1)));
    }

    #[test]
    fn test_validate_rejects_missing_or_zero() {
        for req in [
            AddToCartRequest { product_id: None, quantity: Some(1) },
            AddToCartRequest { product_id: Some(1), quantity: None },
            AddToCartRequest { product_id: Some(0), quantity: Some(1) },
            AddToCartRequest { product_id: Some(1), quantity: Some(0) },
        ] {
            assert!(matches!(req.validate(), Err(DomainError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_validate_rejects_negative_quantity() {
        let req = AddToCartRequest { product_id: Some(1), quantity: Some(-2) };
        assert_eq!(
            req.validate(),
            Err(DomainError::InvalidInput("Quantity must be positive".into()))
        );
    }

    #[test]
    fn test_validate_rejects_quantity_beyond_u32() {
        let req = AddToCartRequest { product_id: Some(1), quantity: Some(i64::from(u32::MAX) + 1) };
        assert_eq!(req.validate(), Err(DomainError::InvalidInput("Quantity too large".into())));
    }

    #[test]
    fn test_negative_product_is_unknown() {
        let req = AddToCartRequest { product_id: Some(-1), quantity: Some(1) };
        assert!(matches!(req.validate(), Err(DomainError::NotFound(_))));
    }
}
