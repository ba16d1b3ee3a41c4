//! Analytics API data transfer objects

use serde::Serialize;
use utoipa::ToSchema;

/// Overall dashboard summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsSummary {
    pub total_bookings: u64,
    pub pending_bookings: u64,
    pub paid_bookings: u64,
    pub cancelled_bookings: u64,
    /// Bookings created today (UTC).
    pub bookings_today: u64,
    /// Paid revenue today in minor currency units.
    pub revenue_today: i64,
    /// Paid revenue this month in minor currency units.
    pub revenue_month: i64,
}

/// Paid revenue attributed to one destination.
#[derive(Debug, Serialize, ToSchema)]
pub struct DestinationRevenue {
    pub destination_id: i32,
    pub destination_name: String,
    /// Number of paid bookings.
    pub paid_bookings: u64,
    /// Total paid revenue in minor currency units.
    pub revenue: i64,
}

/// Revenue by destination response, highest revenue first.
#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueByDestinationResponse {
    pub destinations: Vec<DestinationRevenue>,
    pub total_revenue: i64,
}

/// One day's booking volume.
#[derive(Debug, Serialize, ToSchema)]
pub struct DailyBookings {
    /// ISO date (YYYY-MM-DD, UTC).
    pub date: String,
    pub bookings: u64,
    /// Paid revenue recorded for bookings created that day.
    pub revenue: i64,
}

/// Bookings-per-day response.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingsPerDayResponse {
    /// Look-back window in days.
    pub days: u32,
    pub buckets: Vec<DailyBookings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serialization() {
        let summary = AnalyticsSummary {
            total_bookings: 42,
            pending_bookings: 10,
            paid_bookings: 28,
            cancelled_bookings: 4,
            bookings_today: 6,
            revenue_today: 150_000,
            revenue_month: 2_400_000,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_bookings\":42"));
        assert!(json.contains("\"revenue_month\":2400000"));
    }
}
