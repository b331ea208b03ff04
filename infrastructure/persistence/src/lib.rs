pub mod product {
    pub mod document;
    pub mod repository;
    pub mod source;
}
