//! # Delivery Rule Repository
//!
//! Database operations for the delivery fee rule.
//!
//! ## Single Active Rule
//! The fee model expects exactly one active delivery rule. The store
//! doesn't enforce that as a constraint; instead `get_active` returns the
//! oldest active row (first created wins) and ignores any extras, and a
//! completely empty table is fine - the engine quotes a zero fee then.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tally_core::types::DeliveryRule;

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw row shape for the delivery_rules table.
#[derive(Debug, sqlx::FromRow)]
struct DeliveryRuleRow {
    id: String,
    base_fee: f64,
    cost_per_km: f64,
    warehouse_lat: f64,
    warehouse_lng: f64,
    description: Option<String>,
}

impl From<DeliveryRuleRow> for DeliveryRule {
    fn from(row: DeliveryRuleRow) -> Self {
        DeliveryRule {
            id: row.id,
            base_fee: row.base_fee,
            cost_per_km: row.cost_per_km,
            warehouse_lat: row.warehouse_lat,
            warehouse_lng: row.warehouse_lng,
            description: row.description,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for delivery rule database operations.
#[derive(Debug, Clone)]
pub struct DeliveryRuleRepository {
    pool: SqlitePool,
}

impl DeliveryRuleRepository {
    /// Creates a new DeliveryRuleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DeliveryRuleRepository { pool }
    }

    /// Returns the active delivery rule, if one exists.
    ///
    /// ## Returns
    /// * `Ok(Some(rule))` - the oldest active rule
    /// * `Ok(None)` - no rule configured; callers degrade to a zero quote
    pub async fn get_active(&self) -> DbResult<Option<DeliveryRule>> {
        let row = sqlx::query_as::<_, DeliveryRuleRow>(
            r#"
            SELECT id, base_fee, cost_per_km, warehouse_lat, warehouse_lng, description
            FROM delivery_rules
            WHERE is_active = 1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        debug!(found = row.is_some(), "Loaded active delivery rule");

        Ok(row.map(DeliveryRule::from))
    }

    /// Inserts a new delivery rule.
    pub async fn insert(&self, rule: &DeliveryRule) -> DbResult<()> {
        debug!(id = %rule.id, "Inserting delivery rule");

        let now: DateTime<Utc> = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO delivery_rules (
                id, base_fee, cost_per_km, warehouse_lat, warehouse_lng,
                description, is_active, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?8)
            "#,
        )
        .bind(&rule.id)
        .bind(rule.base_fee)
        .bind(rule.cost_per_km)
        .bind(rule.warehouse_lat)
        .bind(rule.warehouse_lng)
        .bind(&rule.description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts active delivery rules (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM delivery_rules WHERE is_active = 1")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn jos_rule(id: &str) -> DeliveryRule {
        DeliveryRule {
            id: id.to_string(),
            base_fee: 5.0,
            cost_per_km: 1.0,
            warehouse_lat: 9.9285,
            warehouse_lng: -8.8921,
            description: Some("Jos warehouse".into()),
        }
    }

    #[tokio::test]
    async fn test_empty_table_yields_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.delivery_rules().get_active().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.delivery_rules();

        repo.insert(&jos_rule("d1")).await.unwrap();

        let rule = repo.get_active().await.unwrap().unwrap();
        assert_eq!(rule.id, "d1");
        assert_eq!(rule.base_fee, 5.0);
        assert_eq!(rule.warehouse_lat, 9.9285);
        assert_eq!(rule.description.as_deref(), Some("Jos warehouse"));
    }

    #[tokio::test]
    async fn test_first_created_rule_wins() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.delivery_rules();

        // Same created_at is possible within one test tick, so the id
        // tiebreaker keeps the result deterministic.
        repo.insert(&jos_rule("a-first")).await.unwrap();
        repo.insert(&jos_rule("b-second")).await.unwrap();

        let rule = repo.get_active().await.unwrap().unwrap();
        assert_eq!(rule.id, "a-first");
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
