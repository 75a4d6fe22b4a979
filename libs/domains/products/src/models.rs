use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Default page when `page` is missing or unusable
pub const DEFAULT_PAGE: usize = 1;
/// Default page size when `limit` is missing or unusable
pub const DEFAULT_LIMIT: usize = 10;

/// Product entity - a single catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the server
    pub id: String,
    /// Product name, never empty
    pub name: String,
    /// Price, strictly positive
    pub price: f64,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category used for filtering and stats (compared case-insensitively)
    #[serde(default)]
    pub category: String,
    /// Whether the product is in stock
    #[serde(default)]
    pub in_stock: bool,
}

/// Payload for both create and update.
///
/// On update only the fields present are applied; `id` is never read from
/// the body. `name` and `price` accept any JSON value and treat one of the
/// wrong type as absent, so that validation reports it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "Name must be a non-empty string."),
        length(min = 1, message = "Name must be a non-empty string.")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "Price must be a positive number."),
        range(exclusive_min = 0.0, message = "Price must be a positive number.")
    )]
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Keeps a field only if it has the expected JSON type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Query parameters for listing products
///
/// Numeric parameters are kept as raw strings; unusable values fall back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// 1-indexed page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

impl ProductQuery {
    /// Category to filter on, if a non-empty one was given.
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn page(&self) -> usize {
        parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> usize {
        parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT)
    }

    /// Index of the first item on the requested page.
    pub fn offset(&self) -> usize {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

/// Reads the leading digits of `raw`, like `"2abc"` → 2. Zero counts as
/// unusable; a number too large for `usize` saturates.
fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let digits: String = raw?
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }
    match digits.parse::<usize>() {
        Ok(n) => (n > 0).then_some(n),
        // only digits, so the only possible failure is overflow
        Err(_) => Some(usize::MAX),
    }
}

/// Search query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name (required)
    pub q: Option<String>,
}

impl Product {
    /// Build a product from a validated payload.
    pub fn new(id: impl Into<String>, input: ProductInput) -> Self {
        Self {
            id: id.into(),
            name: input.name.unwrap_or_default(),
            price: input.price.unwrap_or_default(),
            description: input.description,
            category: input.category.unwrap_or_default(),
            in_stock: input.in_stock.unwrap_or_default(),
        }
    }

    /// Apply the fields present in `update`; the id is left alone.
    pub fn apply_update(&mut self, update: ProductInput) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }

    /// Case-insensitive category equality.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: serde_json::Value) -> ProductInput {
        serde_json::from_value(value).unwrap()
    }

    fn first_message(input: &ProductInput) -> String {
        let errors = input.validate().unwrap_err();
        axum_helpers::errors::first_validation_message(&errors)
    }

    #[test]
    fn test_valid_input_passes() {
        let input = input(json!({ "name": "Desk", "price": 150 }));
        assert!(input.validate().is_ok());
        assert_eq!(input.price, Some(150.0));
    }

    #[test]
    fn test_name_errors() {
        for body in [
            json!({ "price": 10 }),
            json!({ "name": "", "price": 10 }),
            json!({ "name": 42, "price": 10 }),
            json!({ "name": null, "price": 10 }),
        ] {
            assert_eq!(first_message(&input(body)), "Name must be a non-empty string.");
        }
    }

    #[test]
    fn test_price_errors() {
        for body in [
            json!({ "name": "Desk" }),
            json!({ "name": "Desk", "price": 0 }),
            json!({ "name": "Desk", "price": -5 }),
            json!({ "name": "Desk", "price": "150" }),
        ] {
            assert_eq!(first_message(&input(body)), "Price must be a positive number.");
        }
    }

    #[test]
    fn test_name_is_reported_before_price() {
        assert_eq!(first_message(&input(json!({}))), "Name must be a non-empty string.");
    }

    #[test]
    fn test_unknown_fields_and_id_are_ignored() {
        let input = input(json!({ "id": "hijack", "name": "Desk", "price": 1, "color": "red" }));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_in_stock_uses_camel_case() {
        let input = input(json!({ "name": "Desk", "price": 1, "inStock": true }));
        assert_eq!(input.in_stock, Some(true));

        let product = Product::new("p1", input);
        let rendered = serde_json::to_value(&product).unwrap();
        assert_eq!(rendered["inStock"], json!(true));
        assert!(rendered.get("description").is_none());
    }

    #[test]
    fn test_apply_update_merges_present_fields_only() {
        let mut product = Product::new(
            "1",
            input(json!({
                "name": "Laptop",
                "price": 1200,
                "description": "Powerful",
                "category": "electronics",
                "inStock": true
            })),
        );

        product.apply_update(input(json!({ "price": 999, "inStock": false })));

        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.price, 999.0);
        assert_eq!(product.description.as_deref(), Some("Powerful"));
        assert_eq!(product.category, "electronics");
        assert!(!product.in_stock);
    }

    #[test]
    fn test_in_category_ignores_case() {
        let product = Product::new(
            "1",
            input(json!({ "name": "Laptop", "price": 1, "category": "Electronics" })),
        );
        assert!(product.in_category("electronics"));
        assert!(product.in_category("ELECTRONICS"));
        assert!(!product.in_category("electronic"));
    }

    #[test]
    fn test_pagination_defaults() {
        let query = ProductQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_pagination_falls_back_on_unusable_values() {
        for raw in ["abc", "0", "-3", ""] {
            let query = ProductQuery {
                page: Some(raw.to_string()),
                limit: Some(raw.to_string()),
                ..Default::default()
            };
            assert_eq!(query.page(), DEFAULT_PAGE, "page {raw:?}");
            assert_eq!(query.limit(), DEFAULT_LIMIT, "limit {raw:?}");
        }
    }

    #[test]
    fn test_pagination_reads_leading_digits() {
        let query = ProductQuery {
            page: Some("2abc".to_string()),
            limit: Some(" 5 ".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), 2);
        assert_eq!(query.limit(), 5);
        assert_eq!(query.offset(), 5);
    }

    #[test]
    fn test_pagination_saturates_huge_values() {
        let query = ProductQuery {
            page: Some("99999999999999999999".to_string()),
            limit: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page(), usize::MAX);
        assert_eq!(query.offset(), usize::MAX - 1);

        let query = ProductQuery {
            limit: Some("000".to_string()),
            ..Default::default()
        };
        assert_eq!(query.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_empty_category_is_no_filter() {
        let query = ProductQuery {
            category: Some(String::new()),
            ..Default::default()
        };
        assert!(query.category_filter().is_none());
    }
}
