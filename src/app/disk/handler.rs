//! 磁盘处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use super::{
    model::{StoreDataRequest, StoredData},
    service::DiskService,
};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone, Debug)]
pub struct AppState {
    pub disk_service: DiskService,
}

pub async fn store_data(
    State(state): State<AppState>,
    payload: Result<Json<StoreDataRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<StoredData>>, CoreError> {
    let Json(request) = payload.map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;
    let data = state.disk_service.store_data(&request.data).to_owned();
    Ok(Json(ApiResponse::success(StoredData { data })))
}
