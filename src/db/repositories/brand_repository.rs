use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Brand;
use crate::db::DatabaseError;

pub struct BrandRepository;

impl BrandRepository {
    pub async fn get_brand(pool: &PgPool, brand_id: Uuid) -> Result<Brand, DatabaseError> {
        sqlx::query_as::<_, Brand>(
            r#"
            SELECT id, name, slug, description, business_type_id, owner_user_id,
                   is_active, created_at, updated_at
            FROM brands
            WHERE id = $1
            "#,
        )
        .bind(brand_id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)
    }

    pub async fn require_active_brand(
        pool: &PgPool,
        brand_id: Uuid,
    ) -> Result<Brand, DatabaseError> {
        let brand = Self::get_brand(pool, brand_id).await?;
        if !brand.is_active {
            return Err(DatabaseError::InvalidInput(
                "Brand is not active".to_string(),
            ));
        }
        Ok(brand)
    }
}
