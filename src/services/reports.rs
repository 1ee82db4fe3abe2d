use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::report::{
    EmployeePerformanceRow, ItemPopularityRow, LocationProfitRow, ReportRange,
};
use crate::repository::ReportReader;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by every `GET /api/reports/*` endpoint.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportQuery {
    fn into_range(self) -> ServiceResult<ReportRange> {
        if self.from > self.to {
            return Err(ServiceError::Form(
                "from date must not be after to date".to_string(),
            ));
        }
        Ok(ReportRange {
            from: self.from,
            to: self.to,
        })
    }
}

/// Revenue, utility cost and profit per location over the range.
pub fn location_profit<R>(repo: &R, query: ReportQuery) -> ServiceResult<Vec<LocationProfitRow>>
where
    R: ReportReader + ?Sized,
{
    Ok(repo.location_profit(query.into_range()?)?)
}

/// Units sold and revenue per menu item over the range, most sold first.
pub fn item_popularity<R>(repo: &R, query: ReportQuery) -> ServiceResult<Vec<ItemPopularityRow>>
where
    R: ReportReader + ?Sized,
{
    Ok(repo.item_popularity(query.into_range()?)?)
}

/// Orders handled and revenue per staff member over the range.
pub fn employee_performance<R>(
    repo: &R,
    query: ReportQuery,
) -> ServiceResult<Vec<EmployeePerformanceRow>>
where
    R: ReportReader + ?Sized,
{
    Ok(repo.employee_performance(query.into_range()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::repository::RepositoryResult;

    mock! {
        ReportsRepo {}

        impl ReportReader for ReportsRepo {
            fn location_profit(
                &self,
                range: ReportRange,
            ) -> RepositoryResult<Vec<LocationProfitRow>>;
            fn item_popularity(
                &self,
                range: ReportRange,
            ) -> RepositoryResult<Vec<ItemPopularityRow>>;
            fn employee_performance(
                &self,
                range: ReportRange,
            ) -> RepositoryResult<Vec<EmployeePerformanceRow>>;
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        let repo = MockReportsRepo::new();
        let query = ReportQuery {
            from: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        };

        assert!(matches!(
            location_profit(&repo, query),
            Err(ServiceError::Form(_))
        ));
    }
}
