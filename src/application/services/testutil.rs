//! Shared fixtures for service tests: an in-memory database with the real
//! migrations applied, plus recording provider stubs.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::application::ports::{CheckoutRequest, CheckoutSession, PaymentGateway, SmsSender};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::SeaOrmRepositoryProvider;

pub async fn test_db() -> DatabaseConnection {
    // One pooled connection: each member of a larger pool would otherwise
    // open its own empty in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.expect("connect test db");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn test_repos() -> Arc<dyn RepositoryProvider> {
    Arc::new(SeaOrmRepositoryProvider::new(test_db().await))
}

/// Give detached tasks (SMS dispatch) a chance to run.
pub async fn drain_tasks() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

/// SMS stub that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingSms {
    sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingSms {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().expect("sms mutex").clone()
    }
}

#[async_trait]
impl SmsSender for RecordingSms {
    async fn send(&self, to: &str, message: &str) -> DomainResult<()> {
        if self.fail {
            return Err(DomainError::Provider("sms down".to_string()));
        }
        self.sent
            .lock()
            .expect("sms mutex")
            .push((to.to_string(), message.to_string()));
        Ok(())
    }
}

/// Payment gateway stub.
pub struct StubGateway {
    pub configured: bool,
    pub url: String,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            configured: true,
            url: "https://pay.example/checkout/abc".to_string(),
        }
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn create_checkout(&self, _request: CheckoutRequest) -> DomainResult<CheckoutSession> {
        Ok(CheckoutSession {
            url: self.url.clone(),
        })
    }
}

/// Seeded reference rows for booking tests.
pub struct Fixture {
    pub bus_id: i32,
    pub destination_id: i32,
    pub pickup_point_id: i32,
    pub referral_id: i32,
}

/// A three-seat bus with one destination (fare 15000), one pickup point
/// and one referral.
pub async fn seed(repos: &Arc<dyn RepositoryProvider>) -> Fixture {
    let bus_type = repos
        .catalog()
        .create_bus_type("Sprinter", 3)
        .await
        .expect("bus type");
    let bus = repos
        .buses()
        .create_with_seats("Bus A", bus_type.id, bus_type.seat_count)
        .await
        .expect("bus");
    let destination = repos
        .catalog()
        .create_destination("Kumasi", 15000)
        .await
        .expect("destination");
    let pickup = repos
        .catalog()
        .create_pickup_point("Main Gate")
        .await
        .expect("pickup point");
    let referral = repos
        .catalog()
        .create_referral("Campus Rep", Some("+233200000099"))
        .await
        .expect("referral");

    Fixture {
        bus_id: bus.id,
        destination_id: destination.id,
        pickup_point_id: pickup.id,
        referral_id: referral.id,
    }
}
