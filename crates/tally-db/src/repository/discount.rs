//! # Discount Rule Repository
//!
//! Database operations for discount rules.
//!
//! ## Storage Shape
//! Rules live in a small reference table; `required_products` is a JSON
//! text column (a string array) because combos are tiny and only ever
//! read as a whole set.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use tally_core::types::{DiscountKind, DiscountRule};

// =============================================================================
// Row Mapping
// =============================================================================

/// Raw row shape for the discount_rules table.
///
/// Kept separate from the domain type: the row carries storage concerns
/// (kind as free text, products as a JSON column, audit timestamps) that
/// the engine must never see.
#[derive(Debug, sqlx::FromRow)]
struct DiscountRuleRow {
    id: String,
    kind: String,
    threshold: f64,
    rate: f64,
    required_products: Option<String>,
}

impl DiscountRuleRow {
    /// Converts a stored row into the domain rule.
    ///
    /// Unrecognized kind strings map to [`DiscountKind::Unknown`] so the
    /// evaluator can skip them; a malformed products column is a corrupt
    /// row and surfaces as an error.
    fn into_rule(self) -> DbResult<DiscountRule> {
        let kind = match self.kind.as_str() {
            "order_total" => DiscountKind::OrderTotal,
            "product_combo" => DiscountKind::ProductCombo,
            other => {
                warn!(id = %self.id, kind = %other, "Skipping rule of unknown kind");
                DiscountKind::Unknown
            }
        };

        let required_products = match self.required_products.as_deref() {
            None | Some("") => Vec::new(),
            Some(json) => {
                serde_json::from_str::<Vec<String>>(json).map_err(|e| DbError::CorruptRule {
                    id: self.id.clone(),
                    reason: format!("required_products is not a JSON string array: {e}"),
                })?
            }
        };

        Ok(DiscountRule {
            id: self.id,
            kind,
            threshold: self.threshold,
            rate: self.rate,
            required_products,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for discount rule database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = DiscountRuleRepository::new(pool);
/// let rules = repo.list_active().await?;
/// ```
#[derive(Debug, Clone)]
pub struct DiscountRuleRepository {
    pool: SqlitePool,
}

impl DiscountRuleRepository {
    /// Creates a new DiscountRuleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        DiscountRuleRepository { pool }
    }

    /// Lists all active discount rules.
    ///
    /// Evaluation order does not matter (discount rates are summed), so
    /// rows come back in insertion order for stable logs.
    pub async fn list_active(&self) -> DbResult<Vec<DiscountRule>> {
        let rows = sqlx::query_as::<_, DiscountRuleRow>(
            r#"
            SELECT id, kind, threshold, rate, required_products
            FROM discount_rules
            WHERE is_active = 1
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded active discount rules");

        rows.into_iter().map(DiscountRuleRow::into_rule).collect()
    }

    /// Inserts a new discount rule.
    ///
    /// `required_products` is serialized to its JSON column; an empty set
    /// is stored as NULL, mirroring rules for which combos are
    /// meaningless.
    pub async fn insert(&self, rule: &DiscountRule) -> DbResult<()> {
        debug!(id = %rule.id, kind = ?rule.kind, "Inserting discount rule");

        let kind = match rule.kind {
            DiscountKind::OrderTotal => "order_total",
            DiscountKind::ProductCombo => "product_combo",
            DiscountKind::Unknown => {
                return Err(DbError::Internal(
                    "refusing to store a rule of unknown kind".to_string(),
                ))
            }
        };

        let required_products = if rule.required_products.is_empty() {
            None
        } else {
            Some(
                serde_json::to_string(&rule.required_products)
                    .map_err(|e| DbError::Internal(e.to_string()))?,
            )
        };

        let now: DateTime<Utc> = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO discount_rules (
                id, kind, threshold, rate, required_products,
                is_active, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?7)
            "#,
        )
        .bind(&rule.id)
        .bind(kind)
        .bind(rule.threshold)
        .bind(rule.rate)
        .bind(required_products)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts active discount rules (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM discount_rules WHERE is_active = 1")
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
    use crate::repository::generate_rule_id;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_list_round_trip() {
        let db = db().await;
        let repo = db.discount_rules();

        repo.insert(&DiscountRule::order_total(generate_rule_id(), 200.0, 0.05))
            .await
            .unwrap();
        repo.insert(&DiscountRule::product_combo(
            generate_rule_id(),
            0.10,
            vec!["Laptop".into(), "Headphones".into()],
        ))
        .await
        .unwrap();

        let rules = repo.list_active().await.unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].kind, DiscountKind::OrderTotal);
        assert_eq!(rules[0].threshold, 200.0);
        assert_eq!(rules[1].kind, DiscountKind::ProductCombo);
        assert_eq!(
            rules[1].required_products,
            vec!["Laptop".to_string(), "Headphones".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_kind_survives_loading() {
        let db = db().await;

        // A future rule kind written by a newer version of the seeder.
        sqlx::query(
            r#"
            INSERT INTO discount_rules (id, kind, threshold, rate, required_products,
                                        is_active, created_at, updated_at)
            VALUES ('x1', 'flash_sale', 0, 0.5, NULL, 1, '2025-01-01', '2025-01-01')
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let rules = db.discount_rules().list_active().await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind, DiscountKind::Unknown);
    }

    #[tokio::test]
    async fn test_corrupt_products_column_is_an_error() {
        let db = db().await;

        sqlx::query(
            r#"
            INSERT INTO discount_rules (id, kind, threshold, rate, required_products,
                                        is_active, created_at, updated_at)
            VALUES ('x2', 'product_combo', 0, 0.1, 'not json', 1, '2025-01-01', '2025-01-01')
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let err = db.discount_rules().list_active().await.unwrap_err();
        assert!(matches!(err, DbError::CorruptRule { .. }));
    }

    #[tokio::test]
    async fn test_count() {
        let db = db().await;
        let repo = db.discount_rules();

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.insert(&DiscountRule::order_total(generate_rule_id(), 100.0, 0.02))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
