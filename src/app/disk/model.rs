//! 磁盘数据模型

use serde::{Deserialize, Serialize};

/// `POST /disk` 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDataRequest {
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredData {
    pub data: String,
}
