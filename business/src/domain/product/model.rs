use serde_json::{Map, Value};

use super::errors::ProductError;
use super::value_objects::{Price, ProductId, Stock};

/// Plain key-value snapshot of a product. The only shape that leaves the core.
pub type ProductRecord = Map<String, Value>;

const ID: &str = "id";
const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const PRICE: &str = "price";
const STOCK: &str = "stock";

const RESERVED_FIELDS: [&str; 5] = [ID, TITLE, DESCRIPTION, PRICE, STOCK];

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    /// Identifier exactly as spelled in the source record.
    id_text: String,
    title: String,
    /// `None` when the source had no description; `Some(Value::Null)` for an explicit `null`.
    description: Option<Value>,
    price: Price,
    stock: Stock,
    attributes: ProductRecord,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub title: String,
    pub description: Option<String>,
    pub price: Price,
    pub stock: Stock,
    /// Extra descriptive fields. Keys that clash with the named fields are dropped.
    pub attributes: ProductRecord,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let id_text = props.id.to_string();
        let description = props.description.clone().map(Value::String);
        Self::build(props, id_text, description)
    }

    fn build(
        props: NewProductProps,
        id_text: String,
        description: Option<Value>,
    ) -> Result<Self, ProductError> {
        if props.title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }

        let attributes = props
            .attributes
            .into_iter()
            .filter(|(key, _)| !RESERVED_FIELDS.contains(&key.as_str()))
            .collect();

        Ok(Self {
            id: props.id,
            id_text,
            title: props.title,
            description,
            price: props.price,
            stock: props.stock,
            attributes,
        })
    }

    /// Builds a product from a raw source record, validating every named field.
    ///
    /// A `null` required field counts as missing. A `null` description is kept
    /// and served back as `null`.
    pub fn from_record(record: Value) -> Result<Self, ProductError> {
        let Value::Object(fields) = record else {
            return Err(ProductError::InvalidRecord);
        };

        let (id, id_text) = match required(&fields, ID)? {
            Value::String(raw) => (ProductId::parse(raw)?, raw.clone()),
            _ => return Err(ProductError::InvalidField(ID)),
        };

        let title = match required(&fields, TITLE)? {
            Value::String(title) => title.clone(),
            _ => return Err(ProductError::InvalidField(TITLE)),
        };

        let description = match fields.get(DESCRIPTION) {
            None => None,
            Some(value @ (Value::Null | Value::String(_))) => Some(value.clone()),
            Some(_) => return Err(ProductError::InvalidField(DESCRIPTION)),
        };

        let price = match required(&fields, PRICE)? {
            Value::Number(amount) => Price::new(amount.clone())?,
            _ => return Err(ProductError::InvalidField(PRICE)),
        };

        let stock = match required(&fields, STOCK)? {
            Value::Number(count) => Stock::new(count.clone())?,
            _ => return Err(ProductError::InvalidField(STOCK)),
        };

        Self::build(
            NewProductProps {
                id,
                title,
                description: None,
                price,
                stock,
                attributes: fields,
            },
            id_text,
            description,
        )
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().and_then(Value::as_str)
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn stock(&self) -> u64 {
        self.stock.count()
    }

    pub fn attributes(&self) -> &ProductRecord {
        &self.attributes
    }

    /// One-way projection to the wire-safe record.
    pub fn to_plain_record(&self) -> ProductRecord {
        let mut record = ProductRecord::new();
        record.insert(ID.to_string(), Value::String(self.id_text.clone()));
        record.insert(TITLE.to_string(), Value::String(self.title.clone()));
        if let Some(description) = &self.description {
            record.insert(DESCRIPTION.to_string(), description.clone());
        }
        record.insert(
            PRICE.to_string(),
            Value::Number(self.price.as_number().clone()),
        );
        record.insert(
            STOCK.to_string(),
            Value::Number(self.stock.as_number().clone()),
        );
        for (key, value) in &self.attributes {
            record.insert(key.clone(), value.clone());
        }
        record
    }
}

fn required<'a>(fields: &'a ProductRecord, name: &'static str) -> Result<&'a Value, ProductError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(ProductError::MissingField(name)),
        Some(value) => Ok(value),
    }
}
