use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserOrdersQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
