//! Dashboard aggregation.

use std::sync::Arc;

use serde::Serialize;

use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::asset::AssetRepository;
use assetdesk_database::repositories::consumable::ConsumableRepository;
use assetdesk_database::repositories::license::LicenseRepository;

/// One status bucket in the asset breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    /// Status label name.
    pub status: String,
    /// Number of assets carrying that status.
    pub count: i64,
}

/// Aggregated counts shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Total number of assets.
    pub total_assets: i64,
    /// Asset counts grouped by status label.
    pub assets_by_status: Vec<StatusCount>,
    /// Total number of consumable stock items.
    pub total_consumables: i64,
    /// Total number of software licenses.
    pub total_licenses: i64,
}

/// Computes dashboard summaries from independent count queries.
#[derive(Debug, Clone)]
pub struct DashboardService {
    assets: Arc<AssetRepository>,
    consumables: Arc<ConsumableRepository>,
    licenses: Arc<LicenseRepository>,
}

impl DashboardService {
    /// Create a new dashboard service.
    pub fn new(
        assets: Arc<AssetRepository>,
        consumables: Arc<ConsumableRepository>,
        licenses: Arc<LicenseRepository>,
    ) -> Self {
        Self {
            assets,
            consumables,
            licenses,
        }
    }

    /// Gather the dashboard counts.
    ///
    /// The four queries are independent and run concurrently.
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let (total_assets, by_status, total_consumables, total_licenses) = tokio::try_join!(
            self.assets.count_all(),
            self.assets.count_by_status(),
            self.consumables.count_all(),
            self.licenses.count_all(),
        )?;

        Ok(DashboardSummary {
            total_assets,
            assets_by_status: by_status
                .into_iter()
                .map(|(status, count)| StatusCount { status, count })
                .collect(),
            total_consumables,
            total_licenses,
        })
    }
}
