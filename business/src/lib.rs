pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod load;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod source;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod load;
        }
    }
}
