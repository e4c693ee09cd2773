use chrono::Utc;
use contracts::domain::a003_project_application::aggregate::{
    ApplicationStatus, ProjectApplication, ProjectApplicationId,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_project_application")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub project_ref: String,
    pub company_ref: String,
    pub status: String,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub review_note: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProjectApplication {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        ProjectApplication {
            base: BaseAggregate::with_metadata(
                ProjectApplicationId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            project_ref: Uuid::parse_str(&m.project_ref).unwrap_or_default(),
            company_ref: Uuid::parse_str(&m.company_ref).unwrap_or_default(),
            status: ApplicationStatus::parse(&m.status).unwrap_or_default(),
            submitted_at: m.submitted_at.unwrap_or_else(Utc::now),
            review_note: m.review_note,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active_model(aggregate: &ProjectApplication) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        project_ref: Set(aggregate.project_ref.to_string()),
        company_ref: Set(aggregate.company_ref.to_string()),
        status: Set(aggregate.status.as_str().to_string()),
        submitted_at: Set(Some(aggregate.submitted_at)),
        review_note: Set(aggregate.review_note.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Filters are optional; both given means AND
pub async fn list(
    project_ref: Option<Uuid>,
    company_ref: Option<Uuid>,
) -> anyhow::Result<Vec<ProjectApplication>> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));

    if let Some(project) = project_ref {
        select = select.filter(Column::ProjectRef.eq(project.to_string()));
    }
    if let Some(company) = company_ref {
        select = select.filter(Column::CompanyRef.eq(company.to_string()));
    }

    let items = select
        .order_by_desc(Column::SubmittedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ProjectApplication>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn find_duplicate(project_ref: Uuid, company_ref: Uuid) -> anyhow::Result<bool> {
    let existing = Entity::find()
        .filter(Column::ProjectRef.eq(project_ref.to_string()))
        .filter(Column::CompanyRef.eq(company_ref.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(existing.is_some())
}

pub async fn insert(aggregate: &ProjectApplication) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &ProjectApplication) -> anyhow::Result<()> {
    let mut active = to_active_model(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
