use chrono::Utc;
use contracts::domain::a004_performance_report::aggregate::{
    PerformanceReport, PerformanceReportId,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_performance_report")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub company_ref: String,
    pub year: i32,
    pub quarter: i32,
    pub revenue: i64,
    pub employee_count: i32,
    pub investment: i64,
    pub exports: i64,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PerformanceReport {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        PerformanceReport {
            base: BaseAggregate::with_metadata(
                PerformanceReportId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            company_ref: Uuid::parse_str(&m.company_ref).unwrap_or_default(),
            year: m.year,
            quarter: m.quarter,
            revenue: m.revenue,
            employee_count: m.employee_count,
            investment: m.investment,
            exports: m.exports,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active_model(aggregate: &PerformanceReport) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        company_ref: Set(aggregate.company_ref.to_string()),
        year: Set(aggregate.year),
        quarter: Set(aggregate.quarter),
        revenue: Set(aggregate.revenue),
        employee_count: Set(aggregate.employee_count),
        investment: Set(aggregate.investment),
        exports: Set(aggregate.exports),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list(company_ref: Option<Uuid>) -> anyhow::Result<Vec<PerformanceReport>> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));

    if let Some(company) = company_ref {
        select = select.filter(Column::CompanyRef.eq(company.to_string()));
    }

    let items = select
        .order_by_desc(Column::Year)
        .order_by_desc(Column::Quarter)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<PerformanceReport>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// One report per company per (year, quarter)
pub async fn find_duplicate(company_ref: Uuid, year: i32, quarter: i32) -> anyhow::Result<bool> {
    let existing = Entity::find()
        .filter(Column::CompanyRef.eq(company_ref.to_string()))
        .filter(Column::Year.eq(year))
        .filter(Column::Quarter.eq(quarter))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(existing.is_some())
}

pub async fn insert(aggregate: &PerformanceReport) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active_model(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &PerformanceReport) -> anyhow::Result<()> {
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
