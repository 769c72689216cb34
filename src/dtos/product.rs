// src/dtos/product.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductChanges};

pub const MISSING_FIELDS: &str = "All fields are required";
pub const EMPTY_FIELDS: &str = "Fields cannot be empty";

// Every field is optional so that a missing one becomes a 400 with our own
// message instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl CreateProductRequest {
    /// Rejects the request unless name, price and image are all present and
    /// truthy (non-empty text, non-zero price).
    pub fn validate(self) -> Result<NewProduct, AppError> {
        match (self.name, self.price, self.image) {
            (Some(name), Some(price), Some(image))
                if !name.is_empty() && is_truthy(price) && !image.is_empty() =>
            {
                Ok(NewProduct { name, price, image })
            }
            _ => Err(AppError::validation(MISSING_FIELDS)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl UpdateProductRequest {
    /// Omitted fields are kept as stored; provided ones must still be
    /// non-empty so a patch cannot break a stored product.
    pub fn validate(self) -> Result<ProductChanges, AppError> {
        let empty_name = self.name.as_deref().is_some_and(str::is_empty);
        let empty_image = self.image.as_deref().is_some_and(str::is_empty);
        let zero_price = self.price.is_some_and(|p| !is_truthy(p));

        if empty_name || empty_image || zero_price {
            return Err(AppError::validation(EMPTY_FIELDS));
        }

        Ok(ProductChanges {
            name: self.name,
            price: self.price,
            image: self.image,
        })
    }
}

fn is_truthy(price: f64) -> bool {
    price != 0.0 && !price.is_nan()
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: Option<&str>, price: Option<f64>, image: Option<&str>) -> CreateProductRequest {
        CreateProductRequest {
            name: name.map(String::from),
            price,
            image: image.map(String::from),
        }
    }

    #[test]
    fn create_accepts_complete_payload() {
        let product = create(Some("Lamp"), Some(25.0), Some("lamp.png")).validate().unwrap();
        assert_eq!(
            product,
            NewProduct { name: "Lamp".into(), price: 25.0, image: "lamp.png".into() }
        );
    }

    #[test]
    fn create_rejects_missing_or_falsy_fields() {
        let cases = [
            create(None, Some(25.0), Some("lamp.png")),
            create(Some("Lamp"), None, Some("lamp.png")),
            create(Some("Lamp"), Some(25.0), None),
            create(Some(""), Some(25.0), Some("lamp.png")),
            create(Some("Lamp"), Some(0.0), Some("lamp.png")),
            create(Some("Lamp"), Some(25.0), Some("")),
        ];

        for case in cases {
            match case.validate() {
                Err(AppError::ValidationError(msg)) => assert_eq!(msg, MISSING_FIELDS),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn create_accepts_negative_price() {
        assert!(create(Some("Refund"), Some(-3.5), Some("r.png")).validate().is_ok());
    }

    #[test]
    fn update_allows_partial_patch() {
        let changes = UpdateProductRequest { price: Some(30.0), ..Default::default() }
            .validate()
            .unwrap();
        assert_eq!(changes, ProductChanges { price: Some(30.0), ..Default::default() });
    }

    #[test]
    fn update_rejects_emptied_fields() {
        let emptied = UpdateProductRequest { name: Some(String::new()), ..Default::default() };
        assert!(matches!(emptied.validate(), Err(AppError::ValidationError(_))));

        let zeroed = UpdateProductRequest { price: Some(0.0), ..Default::default() };
        assert!(matches!(zeroed.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn create_request_tolerates_missing_keys() {
        let req: CreateProductRequest = serde_json::from_str(r#"{"name":"Lamp"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Lamp"));
        assert!(req.price.is_none());
        assert!(req.image.is_none());
    }
}
