//! Admin dashboard: headline analytics, chart series and the activity feed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use time::OffsetDateTime;

use crate::mock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    Week,
    Month,
    Quarter,
    Year,
}

impl DateRange {
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
            Self::Year => "Last year",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.as_str() == value).unwrap_or_default()
    }
}

/// Period-over-period growth in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Growth {
    pub users: f32,
    pub projects: f32,
    pub posts: f32,
    pub courses: f32,
}

/// Traffic share per device class in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceShare {
    pub desktop: u8,
    pub mobile: u8,
    pub tablet: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryStat {
    pub country: String,
    pub users: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedKind {
    User,
    Project,
    Report,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedEntry {
    pub kind: FeedKind,
    pub action: String,
    pub details: String,
    pub timestamp: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Analytics {
    pub total_users: u32,
    pub total_projects: u32,
    pub total_posts: u32,
    pub total_courses: u32,
    pub growth: Growth,
    pub daily_active_users: u32,
    pub monthly_active_users: u32,
    pub devices: DeviceShare,
    pub countries: Vec<CountryStat>,
    pub recent_activity: Vec<FeedEntry>,
}

impl Analytics {
    /// Daily over monthly active users, in whole percent.
    #[must_use]
    pub fn stickiness(&self) -> u32 {
        if self.monthly_active_users == 0 {
            return 0;
        }
        self.daily_active_users.saturating_mul(100) / self.monthly_active_users
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    /// One value per series, in series order.
    pub values: Vec<u32>,
}

/// A labelled multi-series bar chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    pub title: String,
    pub series: Vec<String>,
    pub points: Vec<ChartPoint>,
}

impl Chart {
    /// Largest value across every series, at least 1 so it can scale bars.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.points.iter().flat_map(|p| p.values.iter().copied()).max().unwrap_or(0).max(1)
    }

    /// Bar height for `value` as a percentage of the chart maximum.
    #[must_use]
    pub fn percent(&self, value: u32) -> u32 {
        value.saturating_mul(100) / self.max_value()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub range: DateRange,
    pub analytics: Analytics,
    pub charts: Vec<Chart>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { range: DateRange::default(), analytics: mock::admin::analytics(), charts: mock::admin::charts() }
    }
}

impl DashboardState {
    /// Switch the reporting window. The mock figures do not vary by range.
    pub fn select_range(&mut self, value: &str) {
        self.range = DateRange::parse(value);
        log::debug!("dashboard range set to {}", self.range.as_str());
    }
}
