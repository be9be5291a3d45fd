pub mod application {
    pub mod product {
        pub mod add_favorite;
        pub mod fetch_products;
        pub mod get_favorites;
        pub mod remove_favorite;
        pub mod repository;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod data_sources;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod request_state;
        pub mod use_cases {
            pub mod add_favorite;
            pub mod fetch_products;
            pub mod get_favorites;
            pub mod remove_favorite;
        }
    }
    pub mod shared {
        pub mod observable;
    }
}
