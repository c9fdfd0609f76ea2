use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::analytics::{
    AnalyticsMetric as DomainAnalyticsMetric, NewAnalyticsMetric as DomainNewAnalyticsMetric,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::analytics)]
pub struct AnalyticsMetric {
    pub id: i32,
    pub restaurant_id: i32,
    pub metric_type: String,
    pub metric_value: i32,
    pub date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::analytics)]
pub struct NewAnalyticsMetric<'a> {
    pub restaurant_id: i32,
    pub metric_type: &'a str,
    pub metric_value: i32,
    pub date: NaiveDateTime,
}

impl From<AnalyticsMetric> for DomainAnalyticsMetric {
    fn from(value: AnalyticsMetric) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            metric_type: value.metric_type,
            metric_value: value.metric_value,
            date: value.date,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewAnalyticsMetric> for NewAnalyticsMetric<'a> {
    fn from(value: &'a DomainNewAnalyticsMetric) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            metric_type: value.metric_type.as_str(),
            metric_value: value.metric_value,
            date: value.date,
        }
    }
}
