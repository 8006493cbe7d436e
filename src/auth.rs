//! Explicit role-based authorization checks.
//!
//! Handlers call these directly with the acting user and the resource they
//! touch; there is no guard middleware or runtime registration.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::db::models::UserRole;
use crate::error::{AppError, AppResult};

/// The authenticated caller, as resolved by the hosting API's auth layer.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
    pub brand_id: Uuid,
    pub role: UserRole,
}

/// Resolves the actor from the identity headers set by the authenticating
/// edge (token verification itself happens upstream of this service).
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_uuid(parts, "x-actor-id")?;
        let brand_id = header_uuid(parts, "x-actor-brand")?;
        let role = match header_str(parts, "x-actor-role")? {
            "root" => UserRole::Root,
            "admin" => UserRole::Admin,
            "client" => UserRole::Client,
            other => {
                return Err(AppError::Authentication(format!(
                    "Unknown actor role: {}",
                    other
                )))
            }
        };

        Ok(Actor {
            user_id,
            brand_id,
            role,
        })
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> AppResult<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Authentication(format!("Missing {} header", name)))
}

fn header_uuid(parts: &Parts, name: &str) -> AppResult<Uuid> {
    header_str(parts, name)?
        .parse()
        .map_err(|_| AppError::Authentication(format!("Malformed {} header", name)))
}

/// Root of the given brand, or a platform admin.
pub fn require_brand_root(actor: &Actor, brand_id: Uuid) -> AppResult<()> {
    match actor.role {
        UserRole::Admin => Ok(()),
        UserRole::Root if actor.brand_id == brand_id => Ok(()),
        _ => Err(AppError::Authorization(
            "Brand owner access required".to_string(),
        )),
    }
}

/// Any staff member of the given brand, or a platform admin.
pub fn require_brand_staff(actor: &Actor, brand_id: Uuid) -> AppResult<()> {
    match actor.role {
        UserRole::Admin => Ok(()),
        UserRole::Root if actor.brand_id == brand_id => Ok(()),
        _ => Err(AppError::Authorization(
            "Brand staff access required".to_string(),
        )),
    }
}

/// The owning client of the resource, brand staff, or a platform admin.
pub fn require_owner_or_staff(
    actor: &Actor,
    brand_id: Uuid,
    resource_owner_id: Uuid,
) -> AppResult<()> {
    if actor.role == UserRole::Client {
        if actor.user_id == resource_owner_id && actor.brand_id == brand_id {
            return Ok(());
        }
        return Err(AppError::Authorization(
            "You may only access your own appointments".to_string(),
        ));
    }
    require_brand_staff(actor, brand_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(role: UserRole, brand_id: Uuid) -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            brand_id,
            role,
        }
    }

    #[test]
    fn root_is_scoped_to_their_own_brand() {
        let brand = Uuid::new_v4();
        let other = Uuid::new_v4();
        let root = actor(UserRole::Root, brand);
        assert!(require_brand_root(&root, brand).is_ok());
        assert!(require_brand_root(&root, other).is_err());
    }

    #[test]
    fn admin_crosses_brand_boundaries() {
        let admin = actor(UserRole::Admin, Uuid::new_v4());
        assert!(require_brand_root(&admin, Uuid::new_v4()).is_ok());
        assert!(require_brand_staff(&admin, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn client_only_reaches_their_own_resources() {
        let brand = Uuid::new_v4();
        let client = actor(UserRole::Client, brand);
        assert!(require_owner_or_staff(&client, brand, client.user_id).is_ok());
        assert!(require_owner_or_staff(&client, brand, Uuid::new_v4()).is_err());
        assert!(require_brand_staff(&client, brand).is_err());
    }
}
