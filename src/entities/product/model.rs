//! Product entity model and request payloads

use crate::core::error::{ShopError, ShopResult};
use crate::core::numeric;
use crate::core::{Entity, EntityKind};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// Fields a new product must carry, in the order they are checked
pub const REQUIRED_FIELDS: &[&str] = &["title", "description", "code", "price", "stock", "category"];

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub price: f64,
    pub status: bool,
    pub stock: f64,
    pub category: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Payload for `POST /api/products`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,

    #[validate(required, length(min = 1))]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "numeric::option_f64")]
    #[validate(required)]
    pub price: Option<f64>,

    pub status: Option<bool>,

    #[serde(default, deserialize_with = "numeric::option_f64")]
    #[validate(required)]
    pub stock: Option<f64>,

    #[validate(required, length(min = 1))]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "thumbnails_if_array")]
    pub thumbnails: Option<Vec<String>>,
}

impl CreateProductRequest {
    /// Check required fields and build the product
    ///
    /// The id is left at 0; the store assigns it under the write gate.
    pub fn into_product(self) -> ShopResult<Product> {
        if let Err(errors) = self.validate() {
            let field = first_failed(&errors, REQUIRED_FIELDS).unwrap_or(REQUIRED_FIELDS[0]);
            return Err(ShopError::MissingField {
                field,
                required: REQUIRED_FIELDS,
            });
        }

        Ok(Product {
            id: 0,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            code: self.code.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            status: self.status.unwrap_or(true),
            stock: self.stock.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            thumbnails: self.thumbnails.unwrap_or_default(),
        })
    }
}

/// Payload for `PUT /api/products/{pid}`
///
/// Every field is optional; only the ones present overwrite the stored
/// product. `id` is captured so that an attempt to change it can be rejected.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<Value>,

    #[validate(length(min = 1))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "numeric::option_f64")]
    pub price: Option<f64>,

    pub status: Option<bool>,

    #[serde(default, deserialize_with = "numeric::option_f64")]
    pub stock: Option<f64>,

    #[validate(length(min = 1))]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "thumbnails_if_array")]
    pub thumbnails: Option<Vec<String>>,
}

const TEXT_FIELDS: &[&str] = &["title", "description", "code", "category"];

impl UpdateProductRequest {
    /// Reject payloads that touch the id or blank out a text field
    pub fn check(&self) -> ShopResult<()> {
        if self.id.is_some() {
            return Err(ShopError::Validation(
                "Product id cannot be updated".to_string(),
            ));
        }

        if let Err(errors) = self.validate() {
            let field = first_failed(&errors, TEXT_FIELDS).unwrap_or("payload");
            return Err(ShopError::Validation(format!(
                "Field '{field}' must not be empty"
            )));
        }

        Ok(())
    }

    /// Shallow merge onto `product`
    pub fn apply_to(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(thumbnails) = self.thumbnails {
            product.thumbnails = thumbnails;
        }
    }
}

fn first_failed(errors: &ValidationErrors, order: &[&'static str]) -> Option<&'static str> {
    let failed = errors.field_errors();
    order.iter().copied().find(|field| failed.contains_key(*field))
}

/// Thumbnails are taken only when sent as an array; anything else is ignored
fn thumbnails_if_array<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(de::Error::custom(format!(
                    "thumbnails must be strings, got {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Ok(None),
    }
}
