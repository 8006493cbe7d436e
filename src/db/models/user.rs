use secrecy::SecretBox;
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum UserRole {
    Root,
    Admin,
    Client,
}

impl UserRole {
    /// Brand staff may confirm, cancel and complete appointments.
    #[allow(unused)]
    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Root | UserRole::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "user_status", rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub phone_number: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub last_login_at: Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize, Validate)]
#[allow(unused)]
pub struct NewUser {
    pub brand_id: Uuid,
    #[validate(email)]
    pub email: String,
    pub password: SecretBox<String>,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[allow(unused)]
pub struct UserLogin {
    pub brand_id: Uuid,
    #[validate(email)]
    pub email: String,
    pub password: SecretBox<String>,
}
