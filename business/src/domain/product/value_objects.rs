use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Number;
use uuid::Uuid;

use super::errors::ProductError;

static CANONICAL_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("canonical id pattern compiles")
});

/// Identifier of a catalog product.
///
/// Only the canonical hyphenated UUID form (8-4-4-4-12 hex digits) is accepted;
/// braced, URN and unhyphenated spellings are rejected even though `Uuid`
/// itself would parse them. Hex digits may be in either case and compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Returns true only if `candidate` is in canonical identifier format.
    pub fn is_valid(candidate: &str) -> bool {
        CANONICAL_ID.is_match(candidate)
    }

    pub fn parse(candidate: &str) -> Result<Self, ProductError> {
        if !Self::is_valid(candidate) {
            return Err(ProductError::InvalidId);
        }
        Uuid::parse_str(candidate)
            .map(Self)
            .map_err(|_| ProductError::InvalidId)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Non-negative unit price.
///
/// Keeps the number exactly as it was loaded so a price written as `10`
/// is served back as `10`, not `10.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Price(Number);

impl Price {
    pub fn new(amount: Number) -> Result<Self, ProductError> {
        match amount.as_f64() {
            Some(value) if value < 0.0 => Err(ProductError::NegativePrice),
            Some(_) => Ok(Self(amount)),
            None => Err(ProductError::InvalidField("price")),
        }
    }

    pub fn from_f64(amount: f64) -> Result<Self, ProductError> {
        Number::from_f64(amount)
            .ok_or(ProductError::InvalidField("price"))
            .and_then(Self::new)
    }

    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

/// Non-negative whole number of units in stock.
///
/// Integral floats such as `3.0` are accepted and, like `Price`, served back
/// exactly as they were loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock(Number);

impl Stock {
    pub fn new(count: Number) -> Result<Self, ProductError> {
        if count.is_u64() {
            return Ok(Self(count));
        }
        if count.is_i64() {
            return Err(ProductError::NegativeStock);
        }
        match count.as_f64() {
            Some(value) if value.fract() != 0.0 => Err(ProductError::InvalidField("stock")),
            Some(value) if value < 0.0 => Err(ProductError::NegativeStock),
            Some(value) if value <= u64::MAX as f64 => Ok(Self(count)),
            _ => Err(ProductError::InvalidField("stock")),
        }
    }

    pub fn from_count(count: u64) -> Self {
        Self(Number::from(count))
    }

    pub fn count(&self) -> u64 {
        self.0
            .as_u64()
            .or_else(|| self.0.as_f64().map(|value| value as u64))
            .unwrap_or_default()
    }

    pub fn as_number(&self) -> &Number {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_accept_canonical_identifier() {
        assert!(ProductId::is_valid("3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7a"));
        assert!(ProductId::is_valid("11111111-1111-1111-1111-111111111111"));
    }

    #[test]
    fn should_accept_uppercase_hex_digits() {
        assert!(ProductId::is_valid("3F2B8C1E-9D4A-4E6B-8F7C-2A1D0E9B8C7A"));
    }

    #[test]
    fn should_reject_non_canonical_spellings() {
        assert!(!ProductId::is_valid("not-a-uuid"));
        assert!(!ProductId::is_valid(""));
        assert!(!ProductId::is_valid("3f2b8c1e9d4a4e6b8f7c2a1d0e9b8c7a"));
        assert!(!ProductId::is_valid("{3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7a}"));
        assert!(!ProductId::is_valid(
            "urn:uuid:3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7a"
        ));
        assert!(!ProductId::is_valid(" 3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7a"));
        assert!(!ProductId::is_valid("3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7g"));
        assert!(!ProductId::is_valid("3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7"));
    }

    #[test]
    fn should_parse_case_insensitively_to_the_same_id() {
        let lower = ProductId::parse("3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7a").unwrap();
        let upper = ProductId::parse("3F2B8C1E-9D4A-4E6B-8F7C-2A1D0E9B8C7A").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(upper.to_string(), "3f2b8c1e-9d4a-4e6b-8f7c-2a1d0e9b8c7a");
    }

    #[test]
    fn should_return_invalid_id_error_when_parsing_malformed_identifier() {
        let result = "not-a-uuid".parse::<ProductId>();

        assert!(matches!(result, Err(ProductError::InvalidId)));
    }

    #[test]
    fn should_keep_integer_price_as_integer() {
        let price = Price::new(Number::from(10u64)).unwrap();

        assert!(price.as_number().is_u64());
        assert_eq!(price.as_f64(), 10.0);
    }

    #[test]
    fn should_accept_zero_price() {
        assert!(Price::from_f64(0.0).is_ok());
    }

    #[test]
    fn should_reject_negative_price() {
        assert!(matches!(
            Price::from_f64(-0.01),
            Err(ProductError::NegativePrice)
        ));
        assert!(matches!(
            Price::new(Number::from(-5i64)),
            Err(ProductError::NegativePrice)
        ));
    }

    #[test]
    fn should_reject_non_finite_price() {
        assert!(matches!(
            Price::from_f64(f64::NAN),
            Err(ProductError::InvalidField("price"))
        ));
        assert!(matches!(
            Price::from_f64(f64::INFINITY),
            Err(ProductError::InvalidField("price"))
        ));
    }

    #[test]
    fn should_accept_integral_float_stock() {
        let stock = Stock::new(Number::from_f64(3.0).unwrap()).unwrap();

        assert_eq!(stock.count(), 3);
        assert!(stock.as_number().is_f64());
    }

    #[test]
    fn should_reject_fractional_stock() {
        assert!(matches!(
            Stock::new(Number::from_f64(1.5).unwrap()),
            Err(ProductError::InvalidField("stock"))
        ));
    }

    #[test]
    fn should_reject_negative_stock() {
        assert!(matches!(
            Stock::new(Number::from(-3i64)),
            Err(ProductError::NegativeStock)
        ));
        assert!(matches!(
            Stock::new(Number::from_f64(-2.0).unwrap()),
            Err(ProductError::NegativeStock)
        ));
    }

    #[test]
    fn should_keep_integer_stock_as_integer() {
        let stock = Stock::new(Number::from(12u64)).unwrap();

        assert_eq!(stock.count(), 12);
        assert_eq!(Stock::from_count(12), stock);
    }

    proptest! {
        #[test]
        fn any_generated_uuid_is_valid(bytes in any::<[u8; 16]>()) {
            let id = Uuid::from_bytes(bytes).hyphenated().to_string();
            prop_assert!(ProductId::is_valid(&id));
            prop_assert_eq!(ProductId::parse(&id).unwrap().to_string(), id);
        }

        #[test]
        fn wrong_length_is_never_valid(candidate in "[0-9a-f-]{0,35}|[0-9a-f-]{37,60}") {
            prop_assert!(!ProductId::is_valid(&candidate));
        }

        #[test]
        fn foreign_characters_are_never_valid(
            prefix in "[0-9a-f]{8}",
            bad in "[g-zG-Z_ ]",
        ) {
            let candidate = format!("{prefix}-{bad}bcd-1234-5678-9abcdef01234");
            prop_assert!(!ProductId::is_valid(&candidate));
        }
    }
}
