use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub admin: bool,
}

#[derive(Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Serialize, Deserialize)]
pub struct SetAdminDto {
    pub admin: bool,
}

#[derive(Serialize, Deserialize)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
