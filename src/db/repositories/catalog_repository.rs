use sqlx::PgPool;

use crate::db::models::{BusinessType, Feature, LandingConfig, SubscriptionPlan};
use crate::db::DatabaseError;

pub struct CatalogRepository;

impl CatalogRepository {
    pub async fn list_business_types(pool: &PgPool) -> Result<Vec<BusinessType>, DatabaseError> {
        let rows = sqlx::query_as::<_, BusinessType>(
            r#"
            SELECT id, name, slug, description, is_active, created_at
            FROM business_types
            WHERE is_active
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_features(pool: &PgPool) -> Result<Vec<Feature>, DatabaseError> {
        let rows = sqlx::query_as::<_, Feature>(
            r#"
            SELECT id, key, name, description, is_active, created_at
            FROM features
            WHERE is_active
            ORDER BY name
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_plans(pool: &PgPool) -> Result<Vec<SubscriptionPlan>, DatabaseError> {
        let rows = sqlx::query_as::<_, SubscriptionPlan>(
            r#"
            SELECT id, name, description, price_monthly, currency, status,
                   max_staff_users, max_appointments_per_month, created_at, updated_at
            FROM subscription_plans
            WHERE status = 'active'
            ORDER BY price_monthly
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn landing_config(pool: &PgPool) -> Result<LandingConfig, DatabaseError> {
        let business_types = Self::list_business_types(pool).await?;
        let features = Self::list_features(pool).await?;
        let plans = Self::list_plans(pool).await?;
        Ok(LandingConfig {
            business_types,
            features,
            plans,
        })
    }
}
