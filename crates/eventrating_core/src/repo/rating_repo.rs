//! Event rating repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable insert/select APIs over canonical `event_ratings` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The repository never enforces business rules; the rating bound is the
//!   service layer's job.
//! - A duplicate `event_id` insert fails on the storage uniqueness constraint
//!   and propagates as [`RepoError::DuplicateEventId`].
//! - Absence of a row is a normal `Ok(None)` outcome, not an error.

use crate::db::{migrations, DbError};
use crate::model::event_rating::EventRating;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const RATING_SELECT_SQL: &str = "SELECT
    event_id,
    rating,
    comment
FROM event_ratings";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for rating persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    DuplicateEventId(String),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateEventId(event_id) => {
                write!(f, "event `{event_id}` already has a rating")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted rating data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for rating insert/select operations.
pub trait EventRatingRepository {
    /// Inserts one rating row, committing immediately.
    fn add_event_rating(&self, rating: &EventRating) -> RepoResult<()>;
    /// Returns all stored ratings; empty vec when no rows exist.
    fn get_event_ratings(&self) -> RepoResult<Vec<EventRating>>;
    /// Returns the single matching rating, or `None` when absent.
    fn get_event_rating_by_event_id(&self, event_id: &str) -> RepoResult<Option<EventRating>>;
}

/// SQLite-backed rating repository.
pub struct SqliteEventRatingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRatingRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - [`RepoError::UninitializedConnection`] when migrations never ran.
    /// - [`RepoError::MissingRequiredTable`] / [`RepoError::MissingRequiredColumn`]
    ///   when the schema does not match this binary's expectations.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl EventRatingRepository for SqliteEventRatingRepository<'_> {
    fn add_event_rating(&self, rating: &EventRating) -> RepoResult<()> {
        let inserted = self.conn.execute(
            "INSERT INTO event_ratings (event_id, rating, comment)
             VALUES (?1, ?2, ?3);",
            params![
                rating.event_id.as_str(),
                rating.rating,
                rating.comment.as_str(),
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(RepoError::DuplicateEventId(rating.event_id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_event_ratings(&self) -> RepoResult<Vec<EventRating>> {
        let mut stmt = self.conn.prepare(&format!("{RATING_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut ratings = Vec::new();

        while let Some(row) = rows.next()? {
            ratings.push(parse_rating_row(row)?);
        }

        Ok(ratings)
    }

    fn get_event_rating_by_event_id(&self, event_id: &str) -> RepoResult<Option<EventRating>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RATING_SELECT_SQL} WHERE event_id = ?1;"))?;

        let mut rows = stmt.query([event_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_rating_row(row)?));
        }

        Ok(None)
    }
}

fn parse_rating_row(row: &Row<'_>) -> RepoResult<EventRating> {
    let event_id: String = row.get("event_id")?;
    if event_id.is_empty() {
        return Err(RepoError::InvalidData(
            "empty event_id in event_ratings.event_id".to_string(),
        ));
    }

    Ok(EventRating {
        event_id,
        rating: row.get("rating")?,
        comment: row.get("comment")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "event_ratings")? {
        return Err(RepoError::MissingRequiredTable("event_ratings"));
    }

    for column in ["id", "event_id", "rating", "comment"] {
        if !table_has_column(conn, "event_ratings", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "event_ratings",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table_name: &str, column_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM pragma_table_info(?1)
            WHERE name = ?2
        );",
        [table_name, column_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
