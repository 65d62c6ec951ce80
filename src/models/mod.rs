pub mod metrics;
pub mod product;
pub mod profile;
pub mod roadmap;
pub mod seed;
pub mod sentiment;
pub mod store_state;
pub mod trend;
pub mod views;
