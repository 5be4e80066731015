//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use stockroom_core::{
  contract,
  fields::{FieldValue, Fields},
  record::Record,
  store::{Filter, RecordStore},
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Row and value mapping ───────────────────────────────────────────────────

fn to_sql_value(value: &FieldValue) -> rusqlite::types::Value {
  match value {
    FieldValue::Null => rusqlite::types::Value::Null,
    FieldValue::Integer(i) => rusqlite::types::Value::Integer(*i),
    FieldValue::Text(t) => rusqlite::types::Value::Text(t.clone()),
  }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
  Ok(Record {
    id:             row.get(0)?,
    name:           row.get(1)?,
    price:          row.get(2)?,
    quantity:       row.get(3)?,
    supplier_name:  row.get(4)?,
    supplier_phone: row.get(5)?,
  })
}

/// Field-set keys become SQL column names; reject anything the table does
/// not have before it is interpolated into a statement.
fn check_columns(fields: &Fields) -> Result<()> {
  for (column, _) in fields.iter() {
    if !contract::is_column(column) {
      return Err(Error::UnknownColumn(column.to_owned()));
    }
  }
  Ok(())
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// The inventory store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  /// Idempotent across calls on the same file.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::Unavailable)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::Unavailable)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(Error::Unavailable)
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn select(
    &self,
    filter: Option<Filter>,
    order: Option<String>,
  ) -> Result<Vec<Record>> {
    let rows = self
      .conn
      .call(move |conn| {
        let mut sql = format!(
          "SELECT id, name, price, quantity, supplier_name, supplier_phone
           FROM {}",
          contract::TABLE_NAME
        );

        let params: Vec<rusqlite::types::Value> = match &filter {
          Some(f) => {
            sql.push_str(" WHERE ");
            sql.push_str(&f.clause);
            f.params.iter().map(to_sql_value).collect()
          }
          None => vec![],
        };

        if let Some(order) = &order {
          sql.push_str(" ORDER BY ");
          sql.push_str(order);
        }

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), row_to_record)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(rows)
  }

  async fn insert(&self, fields: Fields) -> Result<i64> {
    check_columns(&fields)?;

    let id = self
      .conn
      .call(move |conn| {
        if fields.is_empty() {
          // The NOT NULL columns make this fail; kept so an empty insert
          // surfaces as a constraint violation rather than a silent no-op.
          conn.execute(
            &format!("INSERT INTO {} DEFAULT VALUES", contract::TABLE_NAME),
            [],
          )?;
          return Ok(conn.last_insert_rowid());
        }

        let columns: Vec<&str> = fields.iter().map(|(c, _)| c).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
          "INSERT INTO {} ({}) VALUES ({})",
          contract::TABLE_NAME,
          columns.join(", "),
          placeholders
        );

        let params: Vec<rusqlite::types::Value> =
          fields.iter().map(|(_, v)| to_sql_value(v)).collect();

        conn.execute(&sql, rusqlite::params_from_iter(params))?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(id)
  }

  async fn update(&self, fields: Fields, filter: Option<Filter>) -> Result<usize> {
    check_columns(&fields)?;

    if fields.is_empty() {
      return Ok(0);
    }

    let count = self
      .conn
      .call(move |conn| {
        let assignments: Vec<String> =
          fields.iter().map(|(c, _)| format!("{c} = ?")).collect();
        let mut sql = format!(
          "UPDATE {} SET {}",
          contract::TABLE_NAME,
          assignments.join(", ")
        );

        let mut params: Vec<rusqlite::types::Value> =
          fields.iter().map(|(_, v)| to_sql_value(v)).collect();

        if let Some(f) = &filter {
          sql.push_str(" WHERE ");
          sql.push_str(&f.clause);
          params.extend(f.params.iter().map(to_sql_value));
        }

        let count = conn.execute(&sql, rusqlite::params_from_iter(params))?;
        Ok(count)
      })
      .await?;

    Ok(count)
  }

  async fn delete(&self, filter: Option<Filter>) -> Result<usize> {
    let count = self
      .conn
      .call(move |conn| {
        let mut sql = format!("DELETE FROM {}", contract::TABLE_NAME);

        let params: Vec<rusqlite::types::Value> = match &filter {
          Some(f) => {
            sql.push_str(" WHERE ");
            sql.push_str(&f.clause);
            f.params.iter().map(to_sql_value).collect()
          }
          None => vec![],
        };

        let count = conn.execute(&sql, rusqlite::params_from_iter(params))?;
        Ok(count)
      })
      .await?;

    Ok(count)
  }
}
