//! Tax-rate handlers

use axum::extract::{Path, State};
use axum::Json;

use domain_inventory::resolve_rate;

use crate::dto::tax::TaxRateResponse;
use crate::AppState;

/// Resolves the transfer-tax rate for a jurisdiction
///
/// Unknown codes resolve to the configured default rate.
pub async fn get_tax_rate(
    State(state): State<AppState>,
    Path(jurisdiction): Path<String>,
) -> Json<TaxRateResponse> {
    let resolved = resolve_rate(state.engine.table(), &jurisdiction);
    Json(TaxRateResponse {
        jurisdiction: jurisdiction.trim().to_uppercase(),
        rate: resolved.jurisdiction_rate,
        source: resolved.source,
    })
}
