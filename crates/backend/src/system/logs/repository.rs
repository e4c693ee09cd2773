use std::str::FromStr;

use chrono::Utc;
use contracts::system::logs::{
    CreateLogRequest, LogKind, LogLevel, LogQuery, LogRecord, LogSource, PurgeField,
};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sys_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: String,
    pub kind: String,
    pub level: String,
    pub source: String,
    pub layer: String,
    pub message: String,
    pub module: Option<String>,
    pub trace_id: Option<String>,
    pub action: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub user_email: Option<String>,
    pub duration_ms: Option<i64>,
    pub extra_data: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogRecord {
    fn from(m: Model) -> Self {
        LogRecord {
            id: m.id,
            created_at: m
                .created_at
                .parse()
                .unwrap_or_else(|_| Utc::now()),
            kind: LogKind::from_str(&m.kind).unwrap_or(LogKind::General),
            level: LogLevel::from_str(&m.level).unwrap_or(LogLevel::Info),
            source: LogSource::from_str(&m.source).unwrap_or(LogSource::Backend),
            layer: m.layer,
            message: m.message,
            module: m.module,
            trace_id: m.trace_id,
            action: m.action,
            resource_type: m.resource_type,
            resource_id: m.resource_id,
            user_email: m.user_email,
            duration_ms: m.duration_ms,
            extra_data: m
                .extra_data
                .as_deref()
                .and_then(|s| serde_json::from_str(s).ok()),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Newest first, structured filters ANDed server-side, page slice applied
/// in SQL. The viewer always asks for its working set this way.
pub async fn list(kind: LogKind, query: &LogQuery) -> anyhow::Result<Vec<LogRecord>> {
    let mut select = Entity::find().filter(Column::Kind.eq(kind.as_str()));

    if let Some(level) = query.level {
        select = select.filter(Column::Level.eq(level.as_str()));
    }
    if let Some(ref layer) = query.layer {
        if !layer.trim().is_empty() {
            select = select.filter(Column::Layer.eq(layer.as_str()));
        }
    }
    if let Some(source) = query.source {
        select = select.filter(Column::Source.eq(source.as_str()));
    }
    if let Some(ref action) = query.action {
        if !action.trim().is_empty() {
            select = select.filter(Column::Action.eq(action.as_str()));
        }
    }
    if let Some(ref resource_type) = query.resource_type {
        if !resource_type.trim().is_empty() {
            select = select.filter(Column::ResourceType.eq(resource_type.as_str()));
        }
    }
    if let Some(min_ms) = query.min_duration_ms {
        select = select.filter(Column::DurationMs.gte(min_ms));
    }

    let page = query.page.max(1);
    let offset = (page - 1) * query.page_size;

    let records = select
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .offset(offset as u64)
        .limit(query.page_size as u64)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(records)
}

pub async fn insert(request: &CreateLogRequest, source: LogSource) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        created_at: Set(Utc::now().to_rfc3339()),
        kind: Set(request.kind.as_str().to_string()),
        level: Set(request.level.as_str().to_string()),
        source: Set(source.as_str().to_string()),
        layer: Set(request.layer.clone()),
        message: Set(request.message.clone()),
        module: Set(request.module.clone()),
        trace_id: Set(request.trace_id.clone()),
        action: Set(request.action.clone()),
        resource_type: Set(request.resource_type.clone()),
        resource_id: Set(request.resource_id.clone()),
        user_email: Set(request.user_email.clone()),
        duration_ms: Set(request.duration_ms),
        extra_data: Set(request
            .extra_data
            .as_ref()
            .map(|v| v.to_string())),
    };

    let inserted = active.insert(conn()).await?;
    Ok(inserted.id)
}

pub async fn delete_by_id(kind: LogKind, id: i64) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::Kind.eq(kind.as_str()))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// Deletes every record of the stream whose field exactly equals `value`
pub async fn purge_by_field(
    kind: LogKind,
    field: PurgeField,
    value: &str,
) -> anyhow::Result<u64> {
    let column = match field {
        PurgeField::Message => Column::Message,
        PurgeField::Action => Column::Action,
    };

    let result = Entity::delete_many()
        .filter(Column::Kind.eq(kind.as_str()))
        .filter(column.eq(value))
        .exec(conn())
        .await?;

    Ok(result.rows_affected)
}
