use diesel::prelude::*;

use crate::domain::analytics::{
    AnalyticsListQuery, AnalyticsMetric as DomainAnalyticsMetric,
    NewAnalyticsMetric as DomainNewAnalyticsMetric,
};
use crate::models::analytics::{
    AnalyticsMetric as DbAnalyticsMetric, NewAnalyticsMetric as DbNewAnalyticsMetric,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AnalyticsReader, AnalyticsWriter, DieselRepository};

impl AnalyticsReader for DieselRepository {
    fn list_metrics(
        &self,
        query: AnalyticsListQuery,
    ) -> RepositoryResult<Vec<DomainAnalyticsMetric>> {
        use crate::schema::analytics;

        let Some(mut conn) = self.read_conn()? else {
            return Ok(Vec::new());
        };

        let mut items = analytics::table
            .filter(analytics::restaurant_id.eq(query.restaurant_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(start) = query.start {
            items = items.filter(analytics::date.ge(start));
        }

        if let Some(end) = query.end {
            items = items.filter(analytics::date.le(end));
        }

        let rows = items
            .order(analytics::date.desc())
            .load::<DbAnalyticsMetric>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl AnalyticsWriter for DieselRepository {
    fn create_metric(
        &self,
        new_metric: &DomainNewAnalyticsMetric,
    ) -> RepositoryResult<DomainAnalyticsMetric> {
        use crate::schema::analytics;

        let mut conn = self.write_conn()?;

        let created = diesel::insert_into(analytics::table)
            .values(&DbNewAnalyticsMetric::from(new_metric))
            .get_result::<DbAnalyticsMetric>(&mut conn)?;

        Ok(created.into())
    }
}
