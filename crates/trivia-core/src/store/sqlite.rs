//! Question store backed by SQLite.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::{ErrorCode, TriviaError, TriviaResult};
use crate::traits::QuestionStore;
use crate::types::{CategoryId, CategoryRecord, NewQuestion, QuestionId, QuestionRecord};

/// SQLite-based question store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database at `db_path`. `":memory:"` opens a
    /// private in-memory database.
    pub fn new(db_path: impl AsRef<Path>) -> TriviaResult<Self> {
        let conn = if db_path.as_ref().to_str() == Some(":memory:") {
            Connection::open_in_memory()
        } else {
            // Ensure parent directory exists
            if let Some(parent) = db_path.as_ref().parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            Connection::open(db_path.as_ref())
        }
        .map_err(|e| TriviaError::Store {
            message: format!("Failed to open database: {}", e),
            code: ErrorCode::StoreConnectionFailed,
            source: Some(Box::new(e)),
        })?;

        let store = Self {
            conn: Mutex::new(conn),
        };

        store.create_tables()?;

        Ok(store)
    }

    /// Open a private in-memory database.
    pub fn in_memory() -> TriviaResult<Self> {
        Self::new(":memory:")
    }

    fn conn(&self) -> TriviaResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TriviaError::store("SQLite connection lock poisoned"))
    }

    /// Create the tables if they don't exist.
    fn create_tables(&self) -> TriviaResult<()> {
        let conn = self.conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id    INTEGER PRIMARY KEY,
                type  TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS questions (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                question    TEXT NOT NULL,
                answer      TEXT NOT NULL,
                category    INTEGER NOT NULL,
                difficulty  INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
            );

            CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
            "#,
        )?;

        Ok(())
    }
}

fn question_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<QuestionRecord> {
    Ok(QuestionRecord {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: CategoryId(row.get(3)?),
        difficulty: row.get(4)?,
    })
}

fn category_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CategoryRecord> {
    Ok(CategoryRecord {
        id: CategoryId(row.get(0)?),
        kind: row.get(1)?,
    })
}

impl QuestionStore for SqliteStore {
    fn all_questions(&self) -> TriviaResult<Vec<QuestionRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id ASC",
        )?;

        let records = stmt
            .query_map([], question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn all_categories(&self) -> TriviaResult<Vec<CategoryRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id ASC")?;

        let records = stmt
            .query_map([], category_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn get_category(&self, id: CategoryId) -> TriviaResult<Option<CategoryRecord>> {
        let conn = self.conn()?;
        let category = conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id.0],
                category_from_row,
            )
            .optional()?;
        Ok(category)
    }

    fn insert_question(&self, question: NewQuestion) -> TriviaResult<QuestionRecord> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                question.question,
                question.answer,
                question.category.0,
                question.difficulty,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(QuestionRecord::from_new(id, question))
    }

    fn delete_question(&self, id: QuestionId) -> TriviaResult<bool> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    fn insert_category(&self, category: CategoryRecord) -> TriviaResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO categories (id, type) VALUES (?1, ?2)",
            params![category.id.0, category.kind],
        )?;
        Ok(())
    }
}
