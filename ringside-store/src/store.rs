//! Boxer registry over sqlite

use std::str::FromStr;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::info;

use ringside_core::{Boxer, FightOutcome, FightRecorder, RecordError};

use crate::weight_class::{weight_class, WeightClass};

/// Failures surfaced by the boxer registry
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid boxer: {0}")]
    InvalidBoxer(String),

    #[error("boxer with name {0:?} already exists")]
    DuplicateName(String),

    #[error("boxer with id {0} not found")]
    NotFound(i64),

    #[error("boxer {0:?} not found")]
    NotFoundByName(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Leaderboard ordering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardSort {
    /// Most wins first
    #[default]
    Wins,
    /// Highest win percentage first
    WinPct,
}

/// One leaderboard row: a boxer with at least one fight
#[derive(Clone, Debug, Serialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub weight: i64,
    pub height: i64,
    pub reach: f64,
    pub age: i64,
    pub weight_class: WeightClass,
    pub fights: i64,
    pub wins: i64,
    /// Win percentage, rounded to one decimal place
    pub win_pct: f64,
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS boxers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    weight INTEGER NOT NULL,
    height INTEGER NOT NULL,
    reach REAL NOT NULL,
    age INTEGER NOT NULL,
    fights INTEGER NOT NULL DEFAULT 0,
    wins INTEGER NOT NULL DEFAULT 0
)";

#[derive(sqlx::FromRow)]
struct BoxerRow {
    id: i64,
    name: String,
    weight: i64,
    height: i64,
    reach: f64,
    age: i64,
}

impl From<BoxerRow> for Boxer {
    fn from(row: BoxerRow) -> Self {
        Boxer {
            id: row.id,
            name: row.name,
            weight: row.weight,
            height: row.height,
            reach: row.reach,
            age: row.age,
        }
    }
}

#[derive(sqlx::FromRow)]
struct LeaderboardRow {
    id: i64,
    name: String,
    weight: i64,
    height: i64,
    reach: f64,
    age: i64,
    fights: i64,
    wins: i64,
}

/// sqlite-backed boxer registry.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct BoxerStore {
    pool: SqlitePool,
}

impl BoxerStore {
    /// Open (creating if missing) the database at `url` and ensure the
    /// boxers table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// In-memory database, one connection so every query sees the same
    /// data. Intended for tests.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Register a new boxer with a zeroed fight record.
    pub async fn create_boxer(
        &self,
        name: &str,
        weight: i64,
        height: i64,
        reach: f64,
        age: i64,
    ) -> Result<Boxer, StoreError> {
        let candidate = Boxer {
            id: 0,
            name: name.to_string(),
            weight,
            height,
            reach,
            age,
        };
        if let Some(violation) = candidate.shape_violation() {
            return Err(StoreError::InvalidBoxer(violation));
        }

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM boxers WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let result = sqlx::query(
            "INSERT INTO boxers (name, weight, height, reach, age) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(weight)
        .bind(height)
        .bind(reach)
        .bind(age)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(id, name, weight, "created boxer");

        Ok(Boxer { id, ..candidate })
    }

    /// Permanently remove a boxer.
    pub async fn delete_boxer(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM boxers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        info!(id, "deleted boxer");
        Ok(())
    }

    pub async fn boxer_by_id(&self, id: i64) -> Result<Boxer, StoreError> {
        let row = sqlx::query_as::<_, BoxerRow>(
            "SELECT id, name, weight, height, reach, age FROM boxers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Boxer::from).ok_or(StoreError::NotFound(id))
    }

    pub async fn boxer_by_name(&self, name: &str) -> Result<Boxer, StoreError> {
        let row = sqlx::query_as::<_, BoxerRow>(
            "SELECT id, name, weight, height, reach, age FROM boxers WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Boxer::from)
            .ok_or_else(|| StoreError::NotFoundByName(name.to_string()))
    }

    /// Boxers with at least one fight, best first.
    pub async fn leaderboard(
        &self,
        sort: LeaderboardSort,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let query = match sort {
            LeaderboardSort::Wins => {
                "SELECT id, name, weight, height, reach, age, fights, wins
                 FROM boxers WHERE fights > 0
                 ORDER BY wins DESC"
            }
            LeaderboardSort::WinPct => {
                "SELECT id, name, weight, height, reach, age, fights, wins
                 FROM boxers WHERE fights > 0
                 ORDER BY (wins * 1.0 / fights) DESC"
            }
        };

        let rows = sqlx::query_as::<_, LeaderboardRow>(query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let class = weight_class(row.weight)?;
                let win_pct = (row.wins as f64 / row.fights as f64 * 1000.0).round() / 10.0;
                Ok(LeaderboardEntry {
                    id: row.id,
                    name: row.name,
                    weight: row.weight,
                    height: row.height,
                    reach: row.reach,
                    age: row.age,
                    weight_class: class,
                    fights: row.fights,
                    wins: row.wins,
                    win_pct,
                })
            })
            .collect()
    }

    /// Record a bout outcome: every outcome counts a fight, a win also
    /// counts a win.
    pub async fn update_stats(&self, id: i64, outcome: FightOutcome) -> Result<(), StoreError> {
        let query = match outcome {
            FightOutcome::Win => {
                "UPDATE boxers SET fights = fights + 1, wins = wins + 1 WHERE id = ?"
            }
            FightOutcome::Loss => "UPDATE boxers SET fights = fights + 1 WHERE id = ?",
        };

        let result = sqlx::query(query).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        info!(id, ?outcome, "updated boxer stats");
        Ok(())
    }
}

#[async_trait]
impl FightRecorder for BoxerStore {
    async fn record_outcome(
        &self,
        boxer_id: i64,
        outcome: FightOutcome,
    ) -> Result<(), RecordError> {
        self.update_stats(boxer_id, outcome)
            .await
            .map_err(|err| match err {
                StoreError::NotFound(id) => RecordError::NotFound(id),
                other => RecordError::Backend(other.to_string()),
            })
    }
}
