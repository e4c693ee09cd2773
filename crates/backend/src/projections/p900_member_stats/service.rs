use anyhow::Result;
use contracts::projections::p900_member_stats::{StatsFilter, StatsRow};

use super::repository;

pub async fn list(filter: &StatsFilter) -> Result<Vec<StatsRow>> {
    repository::query(filter).await
}

/// CSV with UTF-8 BOM so spreadsheet apps detect the encoding
pub fn to_csv(rows: &[StatsRow]) -> Result<Vec<u8>> {
    let mut buffer: Vec<u8> = vec![0xEF, 0xBB, 0xBF];
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record([
            "기업명",
            "업종",
            "성장단계",
            "매출액",
            "고용인원",
            "투자유치",
            "수출액",
            "보고서수",
        ])?;
        for row in rows {
            writer.write_record([
                row.company_name.as_str(),
                row.industry.as_str(),
                row.stage.as_str(),
                &row.revenue.to_string(),
                &row.employee_count.to_string(),
                &row.investment.to_string(),
                &row.exports.to_string(),
                &row.report_count.to_string(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> StatsRow {
        StatsRow {
            company_id: "id-1".into(),
            company_name: "테스트기업".into(),
            industry: "IT".into(),
            stage: "early".into(),
            revenue: 1_000_000,
            employee_count: 12,
            investment: 0,
            exports: 0,
            report_count: 4,
        }
    }

    #[test]
    fn test_csv_starts_with_bom() {
        let bytes = to_csv(&[row()]).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let bytes = to_csv(&[row()]).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("기업명"));
        assert!(lines.next().unwrap().contains("테스트기업"));
        assert_eq!(lines.next(), None);
    }
}
