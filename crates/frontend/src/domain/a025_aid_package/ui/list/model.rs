//! API layer for the aid packages page

use super::state::PublishResult;
use crate::shared::api_utils::api_url;
use contracts::domain::a025_aid_package::{
    AidPackageStatus, AidPackages, MedicalNeed, NeedAssignments, SupplierId,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

const AID_PACKAGES_PATH: &str = "/api/a025/aid-packages";
const MEDICAL_NEEDS_PATH: &str = "/api/a025/medical-needs";
const NEED_ASSIGNMENTS_PATH: &str = "/api/a025/need-assignments";

#[derive(Debug, Clone, Serialize)]
struct StatusChangeRequest {
    status: AidPackageStatus,
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_aid_packages() -> Result<AidPackages, String> {
    get_json(AID_PACKAGES_PATH).await
}

pub async fn fetch_medical_needs() -> Result<Vec<MedicalNeed>, String> {
    get_json(MEDICAL_NEEDS_PATH).await
}

pub async fn fetch_need_assignments() -> Result<NeedAssignments, String> {
    get_json(NEED_ASSIGNMENTS_PATH).await
}

pub fn status_path(supplier_id: SupplierId) -> String {
    format!("{}/{}/status", AID_PACKAGES_PATH, supplier_id)
}

/// Publishes the package or saves it as a draft
pub async fn update_status(supplier_id: SupplierId, status: AidPackageStatus) -> PublishResult {
    let body = StatusChangeRequest { status };
    let response = Request::post(&api_url(&status_path(supplier_id)))
        .json(&body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to save aid package {}: {}", supplier_id, e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to save aid package {}: status {}",
            supplier_id,
            response.status()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_path() {
        assert_eq!(status_path(SupplierId(42)), "/api/a025/aid-packages/42/status");
    }
}
