//! Request/response payloads for the engine's HTTP API.

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecuteRequest {
    pub command: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(
        rename = "partitionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub partition_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecuteResponse {
    pub output: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,

    #[serde(default)]
    pub partition_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginReply {
    Accepted(String),
    Rejected(String),
}
