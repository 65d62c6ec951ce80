use crate::analysis::comparison::{categories, compare_product, filter_and_sort};
use crate::commands::settings::DashboardSettings;
use crate::commands::store::lock_store;
use crate::error::StoreError;
use crate::models::product::{ComparisonRecord, ProductComparison, ProductSort};
use crate::models::store_state::SharedStore;
use crate::models::views::ProductListing;

pub async fn list_products(
    store: &SharedStore,
    settings: &DashboardSettings,
    category: Option<String>,
    sort: Option<ProductSort>,
) -> Result<ProductListing, String> {
    list_products_internal(store, settings, category.as_deref(), sort)
}

pub fn list_products_internal(
    store: &SharedStore,
    settings: &DashboardSettings,
    category: Option<&str>,
    sort: Option<ProductSort>,
) -> Result<ProductListing, String> {
    let state = lock_store(store)?;
    let sort = sort.unwrap_or(settings.default_sort);

    Ok(ProductListing {
        categories: categories(state.products()),
        products: filter_and_sort(state.products(), category, sort)
            .iter()
            .map(|p| compare_product(p, &settings.thresholds))
            .collect(),
    })
}

pub async fn get_product_comparison(
    store: &SharedStore,
    settings: &DashboardSettings,
    product_id: String,
) -> Result<ProductComparison, String> {
    let state = lock_store(store)?;
    state
        .product(&product_id)
        .map(|p| compare_product(p, &settings.thresholds))
        .ok_or_else(|| StoreError::ProductNotFound(product_id).to_string())
}

/// Snapshots today's comparison for a product into the history.
pub async fn record_comparison(
    store: &SharedStore,
    settings: &DashboardSettings,
    product_id: String,
) -> Result<ComparisonRecord, String> {
    let today = chrono::Local::now().date_naive();
    let mut state = lock_store(store)?;
    state
        .record_comparison(&product_id, &settings.thresholds, today)
        .ok_or_else(|| StoreError::ProductNotFound(product_id).to_string())
}

pub async fn get_comparison_history(store: &SharedStore) -> Result<Vec<ComparisonRecord>, String> {
    let state = lock_store(store)?;
    Ok(state.comparison_history().to_vec())
}
