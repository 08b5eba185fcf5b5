//! SeaORM adapter for the project store.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::adapters::next_updated_at;
use crate::entities::projects;

pub mod dto;

pub use dto::{ProjectChanges, ProjectCreate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<Option<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find_by_id(id).one(conn).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find()
        .order_by_asc(projects::Column::CreatedAt)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProjectCreate,
) -> Result<projects::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let project_active = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(dto.name),
        description: Set(dto.description),
        created_at: Set(now),
        updated_at: Set(now),
    };

    project_active.insert(conn).await
}

/// Apply a partial update. Returns `Ok(None)` when no row has this id.
pub async fn update_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
    changes: ProjectChanges,
) -> Result<Option<projects::Model>, sea_orm::DbErr> {
    let Some(model) = projects::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };

    let stamp = next_updated_at(model.updated_at);
    let mut active: projects::ActiveModel = model.into();

    if let Some(name) = changes.name {
        active.name = Set(name);
    }
    if let Some(description) = changes.description {
        active.description = Set(Some(description));
    }
    active.updated_at = Set(stamp);

    active.update(conn).await.map(Some)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: Uuid,
) -> Result<u64, sea_orm::DbErr> {
    let result = projects::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
