//! SQLite-backed stores.
//!
//! Players and bosses are stored as JSON documents keyed by id. The
//! leaderboard is a real table so the increment can be a single upsert.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use yokai_domain::{BattleId, Boss, GameDay, Player, UserId};

use crate::infrastructure::ports::{
    BossRepo, LeaderboardEntry, LeaderboardRepo, PlayerRepo, RepoError,
};

/// One pool serving all three repositories.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `db_path` and ensure the schema.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        let store = Self { pool };
        store.init_schema().await?;
        tracing::info!(db_path, "SQLite store ready");
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), RepoError> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS players (
                user_id TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS bosses (
                day TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS leaderboard (
                day TEXT NOT NULL,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                damage INTEGER NOT NULL DEFAULT 0,
                updated_seq INTEGER NOT NULL,
                PRIMARY KEY (day, user_id)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS leaderboard_battles (
                day TEXT NOT NULL,
                battle_id TEXT NOT NULL,
                PRIMARY KEY (day, battle_id)
            )
            "#,
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("init_schema", e))?;
        }
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, RepoError> {
    serde_json::to_string(value).map_err(RepoError::serialization)
}

fn from_json<T: serde::de::DeserializeOwned>(data: &str) -> Result<T, RepoError> {
    serde_json::from_str(data).map_err(RepoError::serialization)
}

// =============================================================================
// Players
// =============================================================================

#[async_trait]
impl PlayerRepo for SqliteStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query("SELECT data FROM players WHERE user_id = ?")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_player", e))?;

        row.map(|row| from_json(&row.get::<String, _>("data")))
            .transpose()
    }

    async fn create(&self, player: &Player) -> Result<(), RepoError> {
        let result = sqlx::query("INSERT OR IGNORE INTO players (user_id, data) VALUES (?, ?)")
            .bind(player.user_id().as_str())
            .bind(to_json(player)?)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("create_player", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::constraint(format!(
                "Player already exists: {}",
                player.user_id()
            )));
        }
        Ok(())
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO players (user_id, data, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(user_id) DO UPDATE SET data = excluded.data, updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(player.user_id().as_str())
        .bind(to_json(player)?)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save_player", e))?;
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM players WHERE user_id = ?")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_player", e))?;
        Ok(())
    }
}

// =============================================================================
// Bosses
// =============================================================================

#[async_trait]
impl BossRepo for SqliteStore {
    async fn get(&self, day: GameDay) -> Result<Option<Boss>, RepoError> {
        let row = sqlx::query("SELECT data FROM bosses WHERE day = ?")
            .bind(day.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_boss", e))?;

        row.map(|row| from_json(&row.get::<String, _>("data")))
            .transpose()
    }

    async fn save(&self, boss: &Boss) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO bosses (day, data, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(day) DO UPDATE SET data = excluded.data, updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(boss.day().to_string())
        .bind(to_json(boss)?)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save_boss", e))?;
        Ok(())
    }

    async fn delete(&self, day: GameDay) -> Result<(), RepoError> {
        sqlx::query("DELETE FROM bosses WHERE day = ?")
            .bind(day.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_boss", e))?;
        Ok(())
    }
}

// =============================================================================
// Leaderboard
// =============================================================================

#[async_trait]
impl LeaderboardRepo for SqliteStore {
    async fn add_damage(
        &self,
        day: GameDay,
        user_id: &UserId,
        name: &str,
        battle_id: BattleId,
        amount: u32,
    ) -> Result<bool, RepoError> {
        let day = day.to_string();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("add_damage", e))?;

        let recorded =
            sqlx::query("INSERT OR IGNORE INTO leaderboard_battles (day, battle_id) VALUES (?, ?)")
                .bind(&day)
                .bind(battle_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(|e| RepoError::database("add_damage", e))?;

        if recorded.rows_affected() == 0 {
            // Already applied; dropping the transaction rolls it back
            return Ok(false);
        }

        if amount > 0 {
            sqlx::query(
                r#"
                INSERT INTO leaderboard (day, user_id, name, damage, updated_seq)
                VALUES (?, ?, ?, ?, (SELECT COALESCE(MAX(updated_seq), 0) + 1 FROM leaderboard))
                ON CONFLICT(day, user_id) DO UPDATE SET
                    damage = damage + excluded.damage,
                    name = excluded.name,
                    updated_seq = excluded.updated_seq
                "#,
            )
            .bind(&day)
            .bind(user_id.as_str())
            .bind(name)
            .bind(i64::from(amount))
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("add_damage", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("add_damage", e))?;
        Ok(true)
    }

    async fn top(&self, day: GameDay, limit: usize) -> Result<Vec<LeaderboardEntry>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, name, damage FROM leaderboard
            WHERE day = ? AND damage > 0
            ORDER BY damage DESC, updated_seq ASC
            LIMIT ?
            "#,
        )
        .bind(day.to_string())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("top", e))?;

        rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let user_id = UserId::new(row.get::<String, _>("user_id"))
                    .map_err(RepoError::serialization)?;
                Ok::<_, RepoError>(LeaderboardEntry {
                    user_id,
                    name: row.get("name"),
                    damage: row.get::<i64, _>("damage").max(0) as u64,
                    rank: i as u32 + 1,
                })
            })
            .collect()
    }

    async fn participants(&self, day: GameDay) -> Result<Vec<UserId>, RepoError> {
        let rows = sqlx::query("SELECT user_id FROM leaderboard WHERE day = ? AND damage > 0")
            .bind(day.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("participants", e))?;

        rows.into_iter()
            .map(|row| {
                UserId::new(row.get::<String, _>("user_id")).map_err(RepoError::serialization)
            })
            .collect()
    }

    async fn participant_count(&self, day: GameDay) -> Result<u32, RepoError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS participants FROM leaderboard WHERE day = ? AND damage > 0",
        )
        .bind(day.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("participant_count", e))?;

        Ok(row.get::<i64, _>("participants").max(0) as u32)
    }

    async fn clear(&self, day: GameDay) -> Result<(), RepoError> {
        let day = day.to_string();
        for statement in [
            "DELETE FROM leaderboard WHERE day = ?",
            "DELETE FROM leaderboard_battles WHERE day = ?",
        ] {
            sqlx::query(statement)
                .bind(&day)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("clear_leaderboard", e))?;
        }
        Ok(())
    }
}
