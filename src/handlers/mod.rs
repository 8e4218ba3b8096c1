pub mod areas;
pub mod auth;
pub mod centers;
pub mod contacts;
pub mod images;
pub mod stats;
pub mod symbols;
pub mod tenants;
