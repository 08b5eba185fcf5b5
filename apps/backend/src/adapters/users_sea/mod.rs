//! SeaORM adapter for the user store.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::adapters::next_updated_at;
use crate::entities::users;

pub mod dto;

pub use dto::{UserChanges, UserCreate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(id).one(conn).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        firstname: Set(dto.firstname),
        lastname: Set(dto.lastname),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

/// Apply a partial update. Returns `Ok(None)` when no row has this id.
pub async fn update_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    changes: UserChanges,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    let Some(model) = users::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let stamp = next_updated_at(model.updated_at);
    let mut active: users::ActiveModel = model.into();

    if let Some(firstname) = changes.firstname {
        active.firstname = Set(firstname);
    }
    if let Some(lastname) = changes.lastname {
        active.lastname = Set(lastname);
    }
    if let Some(email) = changes.email {
        active.email = Set(email);
    }
    if let Some(password_hash) = changes.password_hash {
        active.password_hash = Set(password_hash);
    }
    active.updated_at = Set(stamp);

    active.update(conn).await.map(Some)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let result = users::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = users::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
