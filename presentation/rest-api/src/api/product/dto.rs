use serde_json::Value;

use business::domain::product::model::Product;

/// Plain product record as served over HTTP.
///
/// Products carry arbitrary descriptive fields, so the body is an open JSON
/// object rather than a fixed schema.
pub type ProductResponse = Value;

pub fn product_response(product: &Product) -> ProductResponse {
    Value::Object(product.to_plain_record())
}

/// Parses the `limit` query parameter.
///
/// Only plain decimal digits are accepted. Values beyond `usize::MAX` saturate,
/// since any limit at least the catalog size returns the whole catalog.
pub fn parse_limit(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse::<usize>().unwrap_or(usize::MAX))
}
