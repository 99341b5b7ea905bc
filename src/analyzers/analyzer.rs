use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::aggregate::{breakdown_metrics, summarize};
use crate::analyzers::recommend::recommend;
use crate::analyzers::trends::compute_trends;
use crate::analyzers::types::Analytics;
use crate::record::Record;
use crate::storage::RecordStore;

/// Runs every aggregation over `records` and bundles the results with the
/// records themselves.
pub fn build_analytics(records: Vec<Record>) -> Analytics {
    let summary = summarize(&records);
    let metrics = breakdown_metrics(&records);
    let trends = compute_trends(&records);
    let recommendations = recommend(&records);

    debug!(
        weeks = trends.len(),
        recommendations = recommendations.len(),
        "Analytics computed"
    );

    Analytics {
        summary,
        metrics,
        trends,
        recommendations,
        records,
    }
}

/// Reads the full record set from `store` and builds the dashboard view.
#[tracing::instrument(skip(store))]
pub fn get_analytics<S: RecordStore + ?Sized>(store: &S) -> Result<Analytics> {
    let records = store.records()?;
    info!(records = records.len(), "Building analytics");
    Ok(build_analytics(records))
}
