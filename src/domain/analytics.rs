use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One recorded metric data point for a restaurant.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyticsMetric {
    /// Unique identifier of the data point.
    pub id: i32,
    /// Restaurant the metric belongs to.
    pub restaurant_id: i32,
    /// Metric family, e.g. "bookings", "chats" or "menu_views".
    pub metric_type: String,
    /// Recorded value.
    pub metric_value: i32,
    /// Day the metric refers to.
    pub date: NaiveDateTime,
    /// Timestamp for when the data point was recorded.
    pub created_at: NaiveDateTime,
}

/// Payload required to record a metric data point.
#[derive(Debug, Clone)]
pub struct NewAnalyticsMetric {
    /// Restaurant the metric belongs to.
    pub restaurant_id: i32,
    /// Metric family.
    pub metric_type: String,
    /// Recorded value.
    pub metric_value: i32,
    /// Day the metric refers to.
    pub date: NaiveDateTime,
}

impl NewAnalyticsMetric {
    pub fn new(
        restaurant_id: i32,
        metric_type: impl Into<String>,
        metric_value: i32,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            restaurant_id,
            metric_type: metric_type.into(),
            metric_value,
            date,
        }
    }
}

/// Query definition used to list metrics for a restaurant, most recent
/// first, optionally bounded to a date range.
#[derive(Debug, Clone)]
pub struct AnalyticsListQuery {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Optional inclusive lower bound on the metric date.
    pub start: Option<NaiveDateTime>,
    /// Optional inclusive upper bound on the metric date.
    pub end: Option<NaiveDateTime>,
}

impl AnalyticsListQuery {
    /// Construct a query that targets all metrics of `restaurant_id`.
    pub fn new(restaurant_id: i32) -> Self {
        Self {
            restaurant_id,
            start: None,
            end: None,
        }
    }

    /// Bound the results to metrics dated at or after `start`.
    pub fn starting(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Bound the results to metrics dated at or before `end`.
    pub fn ending(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }
}
