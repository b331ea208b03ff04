#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.invalid_record")]
    InvalidRecord,
    #[error("product.missing_field.{0}")]
    MissingField(&'static str),
    #[error("product.invalid_field.{0}")]
    InvalidField(&'static str),
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
