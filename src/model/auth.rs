use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    /// Display name, only used when the bootstrap code creates the first admin.
    pub name: Option<String>,
    pub code: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginCodeIssuedDto {
    pub user_id: i32,
    pub code: String,
    pub expires_in_seconds: u64,
}
