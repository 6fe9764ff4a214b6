//! Inventory handlers

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use tracing::info;

use domain_inventory::{
    classify_asset, InventoryCase, InventoryReport, InventoryValidator, MAX_AMOUNT,
};

use crate::dto::inventory::*;
use crate::{error::ApiError, AppState};

/// Computes a complete inventory
///
/// Every validation error is returned at once; a valid case is handed to the
/// engine unchanged.
pub async fn compute_inventory(
    State(state): State<AppState>,
    Json(case): Json<InventoryCase>,
) -> Result<Json<InventoryReport>, ApiError> {
    let validation = InventoryValidator::validate(&case);
    if !validation.is_valid() {
        let details: Vec<String> = validation.errors.iter().map(|e| e.to_string()).collect();
        return Err(ApiError::InvalidCase {
            message: format!("{} validation error(s)", details.len()),
            details,
        });
    }

    let report = state.engine.run(&case)?;
    info!(
        case = %report.case_id,
        decedents = report.results.len(),
        "Inventory computed via API"
    );
    Ok(Json(report))
}

/// Classifies a single asset under a regime
pub async fn classify(
    Json(request): Json<ClassifyAssetRequest>,
) -> Result<Json<ClassifyAssetResponse>, ApiError> {
    let asset = &request.asset;
    if asset.value.is_negative() {
        return Err(ApiError::BadRequest("Asset value cannot be negative".to_string()));
    }
    if asset.value.amount() > MAX_AMOUNT {
        return Err(ApiError::BadRequest(format!(
            "Asset value above the {} ceiling",
            MAX_AMOUNT
        )));
    }
    if asset.ownership_fraction <= Decimal::ZERO || asset.ownership_fraction > Decimal::ONE {
        return Err(ApiError::BadRequest(format!(
            "Ownership fraction {} outside (0, 1]",
            asset.ownership_fraction
        )));
    }

    let classification = classify_asset(&request.asset, request.regime);
    Ok(Json(ClassifyAssetResponse {
        asset_id: request.asset.id,
        regime: request.regime,
        classification,
        effective_value: request.asset.effective_value(),
    }))
}
