//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence-adapter CRUD surface over the `todos` table:
//!   create (assign id), read-all, update, delete.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Identifiers are assigned here, on first save, and never reused.
//! - `created` is written once at insert and never updated afterwards.
//! - Read-all returns rows ordered by `created` ascending, with insertion
//!   order breaking ties.

use crate::db::{migrations::latest_version, DbError};
use crate::model::todo::{NewTodo, Todo, TodoId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TODO_SELECT_SQL: &str = "SELECT id, title, completed, created FROM todos";

const REQUIRED_COLUMNS: &[&str] = &["id", "title", "completed", "created"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for todo persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(TodoId),
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
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
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

/// Persistence-adapter interface for todo records.
///
/// One record per todo, keyed by identifier. The adapter assigns identifiers
/// on `create_todo`; every other operation addresses an existing record.
pub trait TodoRepository {
    /// Assigns a fresh identifier to the draft and inserts the record.
    fn create_todo(&self, draft: &NewTodo) -> RepoResult<Todo>;
    /// Rewrites the mutable fields of an existing record.
    fn update_todo(&self, todo: &Todo) -> RepoResult<()>;
    /// Reads one record by identifier.
    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    /// Reads every record, ordered by `created` ascending (stable on ties).
    fn list_todos(&self) -> RepoResult<Vec<Todo>>;
    /// Removes one record permanently.
    fn delete_todo(&self, id: TodoId) -> RepoResult<()>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// Rejects connections that skipped `db::open_db` bootstrap: unmigrated
    /// schema version, missing `todos` table, or missing required columns.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn create_todo(&self, draft: &NewTodo) -> RepoResult<Todo> {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            completed: draft.completed,
            created: draft.created,
        };

        self.conn.execute(
            "INSERT INTO todos (id, title, completed, created) VALUES (?1, ?2, ?3, ?4);",
            params![
                todo.id.to_string(),
                todo.title.as_str(),
                bool_to_int(todo.completed),
                todo.created,
            ],
        )?;

        Ok(todo)
    }

    fn update_todo(&self, todo: &Todo) -> RepoResult<()> {
        // `created` is intentionally absent from the SET list.
        let changed = self.conn.execute(
            "UPDATE todos SET title = ?1, completed = ?2 WHERE id = ?3;",
            params![
                todo.title.as_str(),
                bool_to_int(todo.completed),
                todo.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(todo.id));
        }

        Ok(())
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        // rowid keeps equal `created` values in insertion order.
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} ORDER BY created ASC, rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();
        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }

    fn delete_todo(&self, id: TodoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version: latest_version(),
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'todos'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable("todos"));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('todos');")?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(0)?);
    }

    for column in REQUIRED_COLUMNS {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: "todos",
                column,
            });
        }
    }

    Ok(())
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid id value `{id_text}` in todos.id")))?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    Ok(Todo {
        id,
        title: row.get("title")?,
        completed,
        created: row.get("created")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
