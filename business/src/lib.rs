pub mod application {
    pub mod category {
        pub mod get_all;
    }
    pub mod farmer {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_by_user_id;
        pub mod update;
    }
    pub mod product {
        pub mod get_by_id;
        pub mod hydrator;
        pub mod search;
    }
    pub mod user {
        pub mod get_by_id;
        pub mod get_current;
        pub mod login;
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod farmer {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_by_user_id;
            pub mod update;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod hydration;
        pub mod model;
        pub mod read_model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod search;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_current;
            pub mod login;
            pub mod register;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
