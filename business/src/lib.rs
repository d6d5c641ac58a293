pub mod application {
    pub mod product {
        pub mod add;
        pub mod get;
        pub mod list;
        pub mod update_qty;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod record;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get;
            pub mod list;
            pub mod update_qty;
        }
    }
}
