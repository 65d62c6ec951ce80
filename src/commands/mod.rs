pub mod products;
pub mod sentiment;
pub mod settings;
pub mod store;
