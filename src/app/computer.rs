//! 组装根
//!
//! 在这里显式地创建服务并通过构造函数注入依赖，然后把它们挂到路由上。

use std::sync::Arc;

use axum::{
    http::Uri,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app::{
    disk::{handler, DiskService},
    power::{PowerService, PowerSupply},
};
use crate::core::{error::CoreError, middleware::request_logging_middleware};

pub struct ComputerModule {
    disk_service: DiskService,
}

impl ComputerModule {
    /// 默认装配：PowerService -> DiskService
    pub fn new() -> Self {
        Self::with_power(Arc::new(PowerService::new()))
    }

    /// 使用指定的供电实现装配
    pub fn with_power(power: Arc<dyn PowerSupply>) -> Self {
        Self {
            disk_service: DiskService::new(power),
        }
    }

    pub fn disk_service(&self) -> &DiskService {
        &self.disk_service
    }

    pub fn router(&self) -> Router {
        let state = handler::AppState {
            disk_service: self.disk_service.clone(),
        };

        Router::new()
            .route("/disk", post(handler::store_data))
            .route("/health", get(health_check))
            .fallback(not_found)
            .with_state(state)
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TraceLayer::new_for_http())
    }
}

impl Default for ComputerModule {
    fn default() -> Self {
        Self::new()
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("路由不存在: {}", uri.path()))
}
