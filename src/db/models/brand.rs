use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub business_type_id: Option<Uuid>,
    pub owner_user_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
#[allow(unused)]
pub struct NewBrand {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Slug must not be empty"))]
    pub slug: String,
    pub description: Option<String>,
    pub business_type_id: Option<Uuid>,
    pub owner_user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
#[allow(unused)]
pub struct UpdateBrand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub business_type_id: Option<Uuid>,
    pub is_active: Option<bool>,
}
