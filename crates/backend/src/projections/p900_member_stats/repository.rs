use anyhow::Result;
use contracts::projections::p900_member_stats::{StatsFilter, StatsRow};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement, Value};

use crate::shared::data::db::get_connection;

/// Aggregates quarterly reports per company. Figures are summed over the
/// filtered quarters; employee count is the latest reported value.
pub async fn query(filter: &StatsFilter) -> Result<Vec<StatsRow>> {
    let mut sql = String::from(
        "SELECT c.id AS company_id,
                c.description AS company_name,
                c.industry AS industry,
                c.stage AS stage,
                COALESCE(SUM(r.revenue), 0) AS revenue,
                COALESCE(MAX(r.employee_count), 0) AS employee_count,
                COALESCE(SUM(r.investment), 0) AS investment,
                COALESCE(SUM(r.exports), 0) AS exports,
                COUNT(r.id) AS report_count
         FROM a001_member_company c
         JOIN a004_performance_report r
           ON r.company_ref = c.id AND r.is_deleted = 0
         WHERE c.is_deleted = 0",
    );
    let mut values: Vec<Value> = Vec::new();

    if let Some(year) = filter.year {
        sql.push_str(" AND r.year = ?");
        values.push(year.into());
    }
    if let Some(quarter) = filter.quarter {
        sql.push_str(" AND r.quarter = ?");
        values.push(quarter.into());
    }
    if let Some(ref industry) = filter.industry {
        if !industry.trim().is_empty() {
            sql.push_str(" AND c.industry = ?");
            values.push(industry.clone().into());
        }
    }
    if let Some(ref stage) = filter.stage {
        if !stage.trim().is_empty() {
            sql.push_str(" AND c.stage = ?");
            values.push(stage.clone().into());
        }
    }
    if let Some(ref project) = filter.project {
        if !project.trim().is_empty() {
            sql.push_str(
                " AND c.id IN (SELECT a.company_ref FROM a003_project_application a
                               WHERE a.project_ref = ? AND a.status = 'accepted'
                                 AND a.is_deleted = 0)",
            );
            values.push(project.clone().into());
        }
    }

    sql.push_str(" GROUP BY c.id, c.description, c.industry, c.stage ORDER BY c.description");

    let conn = get_connection();
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            sql,
            values,
        ))
        .await?;

    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        result.push(StatsRow {
            company_id: row.try_get("", "company_id")?,
            company_name: row.try_get("", "company_name")?,
            industry: row.try_get("", "industry")?,
            stage: row.try_get("", "stage")?,
            revenue: row.try_get("", "revenue")?,
            employee_count: row.try_get("", "employee_count")?,
            investment: row.try_get("", "investment")?,
            exports: row.try_get("", "exports")?,
            report_count: row.try_get("", "report_count")?,
        });
    }

    Ok(result)
}
