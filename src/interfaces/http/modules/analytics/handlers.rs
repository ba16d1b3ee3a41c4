//! Analytics API handlers
//!
//! All endpoints query the booking ledger directly and aggregate in
//! memory; result sets are bounded by the look-back windows.

use std::collections::{BTreeMap, HashMap};

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Datelike, Duration, NaiveTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
};

use super::dto::*;
use crate::domain::BookingStatus;
use crate::infrastructure::database::entities::{booking, destination};
use crate::interfaces::http::common::ApiResponse;

/// Analytics handler state.
#[derive(Clone)]
pub struct AnalyticsState {
    pub db: DatabaseConnection,
}

/// Optional days-back param for bookings-per-day.
#[derive(Debug, serde::Deserialize)]
pub struct DaysParams {
    /// Number of days to look back (default 30).
    pub days: Option<u32>,
}

// ── 1. Summary ─────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/analytics/summary",
    tag = "Analytics",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<AnalyticsSummary>)
    )
)]
pub async fn analytics_summary(
    State(state): State<AnalyticsState>,
) -> Json<ApiResponse<AnalyticsSummary>> {
    let db = &state.db;
    let now = Utc::now();

    let count_status = |status: BookingStatus| {
        booking::Entity::find()
            .filter(booking::Column::Status.eq(status.as_str()))
            .count(db)
    };

    let pending = count_status(BookingStatus::Pending).await.unwrap_or(0);
    let paid = count_status(BookingStatus::Paid).await.unwrap_or(0);
    let cancelled = count_status(BookingStatus::Cancelled).await.unwrap_or(0);

    let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default();
    let today_start = now.date_naive().and_time(midnight).and_utc();
    let month_start = now
        .date_naive()
        .with_day(1)
        .unwrap_or(now.date_naive())
        .and_time(midnight)
        .and_utc();

    let bookings_today = booking::Entity::find()
        .filter(booking::Column::CreatedAt.gte(today_start))
        .count(db)
        .await
        .unwrap_or(0);

    // Revenue over paid rows, bucketed by the time the payment landed.
    let paid_this_month: Vec<booking::Model> = booking::Entity::find()
        .filter(
            Condition::all()
                .add(booking::Column::Status.eq(BookingStatus::Paid.as_str()))
                .add(booking::Column::UpdatedAt.gte(month_start)),
        )
        .all(db)
        .await
        .unwrap_or_default();

    let revenue_month: i64 = paid_this_month.iter().map(|b| b.amount).sum();
    let revenue_today: i64 = paid_this_month
        .iter()
        .filter(|b| b.updated_at >= today_start)
        .map(|b| b.amount)
        .sum();

    Json(ApiResponse::success(AnalyticsSummary {
        total_bookings: pending + paid + cancelled,
        pending_bookings: pending,
        paid_bookings: paid,
        cancelled_bookings: cancelled,
        bookings_today,
        revenue_today,
        revenue_month,
    }))
}

// ── 2. Revenue by destination ──────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/analytics/revenue-by-destination",
    tag = "Analytics",
    responses(
        (status = 200, description = "Paid revenue per destination, highest first",
         body = ApiResponse<RevenueByDestinationResponse>)
    )
)]
pub async fn revenue_by_destination(
    State(state): State<AnalyticsState>,
) -> Json<ApiResponse<RevenueByDestinationResponse>> {
    let db = &state.db;

    let paid: Vec<booking::Model> = booking::Entity::find()
        .filter(booking::Column::Status.eq(BookingStatus::Paid.as_str()))
        .all(db)
        .await
        .unwrap_or_default();

    let destinations: HashMap<i32, String> = destination::Entity::find()
        .all(db)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|d| (d.id, d.name))
        .collect();

    let mut agg: HashMap<i32, (u64, i64)> = HashMap::new();
    for b in &paid {
        let entry = agg.entry(b.destination_id).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += b.amount;
    }

    let mut rows: Vec<DestinationRevenue> = agg
        .into_iter()
        .map(|(id, (count, revenue))| DestinationRevenue {
            destination_id: id,
            destination_name: destinations
                .get(&id)
                .cloned()
                .unwrap_or_else(|| format!("destination {}", id)),
            paid_bookings: count,
            revenue,
        })
        .collect();
    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    let total_revenue = rows.iter().map(|r| r.revenue).sum();
    Json(ApiResponse::success(RevenueByDestinationResponse {
        destinations: rows,
        total_revenue,
    }))
}

// ── 3. Bookings per day ────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/analytics/bookings-per-day",
    tag = "Analytics",
    params(
        ("days" = Option<u32>, Query, description = "Look-back period in days (default 30)")
    ),
    responses(
        (status = 200, description = "Daily booking volume", body = ApiResponse<BookingsPerDayResponse>)
    )
)]
pub async fn bookings_per_day(
    State(state): State<AnalyticsState>,
    Query(params): Query<DaysParams>,
) -> Json<ApiResponse<BookingsPerDayResponse>> {
    let db = &state.db;
    let days = params.days.unwrap_or(30).clamp(1, 365);
    let since = Utc::now() - Duration::days(days as i64);

    let bookings: Vec<booking::Model> = booking::Entity::find()
        .filter(booking::Column::CreatedAt.gte(since))
        .all(db)
        .await
        .unwrap_or_default();

    let mut buckets: BTreeMap<String, (u64, i64)> = BTreeMap::new();
    for b in &bookings {
        let key = b.created_at.format("%Y-%m-%d").to_string();
        let entry = buckets.entry(key).or_insert((0, 0));
        entry.0 += 1;
        if b.status == BookingStatus::Paid.as_str() {
            entry.1 += b.amount;
        }
    }

    Json(ApiResponse::success(BookingsPerDayResponse {
        days,
        buckets: buckets
            .into_iter()
            .map(|(date, (count, revenue))| DailyBookings {
                date,
                bookings: count,
                revenue,
            })
            .collect(),
    }))
}
