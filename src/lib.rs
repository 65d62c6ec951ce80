pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;

use log::info;
use models::seed::SeedData;
use models::store_state::{SharedStore, StoreState};

/// Initializes logging and builds the shared store every command receives.
pub fn run(seed: SeedData) -> SharedStore {
    // A host may already have installed a logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();

    info!(
        "Starting store with {} products and {} milestones",
        seed.products.len(),
        seed.roadmap.len()
    );
    StoreState::new(seed).into_shared()
}
