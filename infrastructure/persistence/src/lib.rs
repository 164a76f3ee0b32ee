pub mod db;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod farmer {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod query;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
