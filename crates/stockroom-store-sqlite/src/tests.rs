//! Integration tests for `SqliteStore` against an in-memory database.

use stockroom_core::{
  contract,
  fields::{FieldValue, Fields},
  store::{Filter, RecordStore},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn pencil() -> Fields {
  Fields::new()
    .text(contract::COLUMN_NAME, "Pencil HB")
    .integer(contract::COLUMN_PRICE, 40)
    .integer(contract::COLUMN_QUANTITY, 12)
    .text(contract::COLUMN_SUPPLIER_NAME, "Graphite & Co")
    .text(contract::COLUMN_SUPPLIER_PHONE, "+1-555-0134")
}

fn eraser() -> Fields {
  Fields::new()
    .text(contract::COLUMN_NAME, "Eraser")
    .integer(contract::COLUMN_PRICE, 15)
    .integer(contract::COLUMN_QUANTITY, 3)
    .text(contract::COLUMN_SUPPLIER_NAME, "Rubber Works")
    .text(contract::COLUMN_SUPPLIER_PHONE, "+1-555-0178")
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_fresh_ids() {
  let s = store().await;

  let first = s.insert(pencil()).await.unwrap();
  let second = s.insert(eraser()).await.unwrap();

  assert_ne!(first, second);
}

#[tokio::test]
async fn insert_and_select_round_trip() {
  let s = store().await;
  let id = s.insert(pencil()).await.unwrap();

  let rows = s.select(None, None).await.unwrap();
  assert_eq!(rows.len(), 1);

  let row = &rows[0];
  assert_eq!(row.id, id);
  assert_eq!(row.name, "Pencil HB");
  assert_eq!(row.price, 40);
  assert_eq!(row.quantity, 12);
  assert_eq!(row.supplier_name, "Graphite & Co");
  assert_eq!(row.supplier_phone, "+1-555-0134");
}

#[tokio::test]
async fn quantity_defaults_to_zero() {
  let s = store().await;

  let fields = Fields::new()
    .text(contract::COLUMN_NAME, "Ruler")
    .integer(contract::COLUMN_PRICE, 99)
    .text(contract::COLUMN_SUPPLIER_NAME, "Straight Edge Ltd")
    .text(contract::COLUMN_SUPPLIER_PHONE, "+1-555-0100");
  s.insert(fields).await.unwrap();

  let rows = s.select(None, None).await.unwrap();
  assert_eq!(rows[0].quantity, 0);
}

#[tokio::test]
async fn insert_without_required_column_is_a_database_error() {
  let s = store().await;

  // supplier_name is NOT NULL with no default.
  let fields = Fields::new()
    .text(contract::COLUMN_NAME, "Stapler")
    .integer(contract::COLUMN_PRICE, 300)
    .text(contract::COLUMN_SUPPLIER_PHONE, "+1-555-0199");

  let err = s.insert(fields).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert!(s.select(None, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_column_is_rejected_before_sql() {
  let s = store().await;

  let err = s
    .insert(pencil().text("colour", "blue"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::UnknownColumn(c) if c == "colour"));

  let err = s
    .update(Fields::new().integer("weight", 1), None)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::UnknownColumn(c) if c == "weight"));
}

// ─── Select ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn select_with_filter() {
  let s = store().await;
  s.insert(pencil()).await.unwrap();
  let eraser_id = s.insert(eraser()).await.unwrap();

  let rows = s
    .select(Some(Filter::by_id(eraser_id)), None)
    .await
    .unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].name, "Eraser");

  let cheap = s
    .select(
      Some(Filter::new(
        "price < ?",
        vec![FieldValue::Integer(20)],
      )),
      None,
    )
    .await
    .unwrap();
  assert_eq!(cheap.len(), 1);
  assert_eq!(cheap[0].id, eraser_id);
}

#[tokio::test]
async fn select_with_order() {
  let s = store().await;
  s.insert(pencil()).await.unwrap();
  s.insert(eraser()).await.unwrap();

  let rows = s
    .select(None, Some("price DESC".to_owned()))
    .await
    .unwrap();
  assert_eq!(rows[0].name, "Pencil HB");
  assert_eq!(rows[1].name, "Eraser");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_by_filter_touches_only_matching_rows() {
  let s = store().await;
  let pencil_id = s.insert(pencil()).await.unwrap();
  s.insert(eraser()).await.unwrap();

  let count = s
    .update(
      Fields::new().integer(contract::COLUMN_QUANTITY, 99),
      Some(Filter::by_id(pencil_id)),
    )
    .await
    .unwrap();
  assert_eq!(count, 1);

  let rows = s.select(None, None).await.unwrap();
  let pencil_row = rows.iter().find(|r| r.id == pencil_id).unwrap();
  let other = rows.iter().find(|r| r.id != pencil_id).unwrap();
  assert_eq!(pencil_row.quantity, 99);
  assert_eq!(other.quantity, 3);
}

#[tokio::test]
async fn update_without_filter_touches_all_rows() {
  let s = store().await;
  s.insert(pencil()).await.unwrap();
  s.insert(eraser()).await.unwrap();

  let count = s
    .update(Fields::new().integer(contract::COLUMN_PRICE, 1), None)
    .await
    .unwrap();
  assert_eq!(count, 2);
  assert!(
    s.select(None, None)
      .await
      .unwrap()
      .iter()
      .all(|r| r.price == 1)
  );
}

#[tokio::test]
async fn update_with_empty_fields_is_a_no_op() {
  let s = store().await;
  s.insert(pencil()).await.unwrap();

  let count = s.update(Fields::new(), None).await.unwrap();
  assert_eq!(count, 0);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_by_filter() {
  let s = store().await;
  let pencil_id = s.insert(pencil()).await.unwrap();
  s.insert(eraser()).await.unwrap();

  let count = s.delete(Some(Filter::by_id(pencil_id))).await.unwrap();
  assert_eq!(count, 1);

  let rows = s.select(None, None).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].name, "Eraser");
}

#[tokio::test]
async fn delete_without_filter_wipes_the_table() {
  let s = store().await;
  s.insert(pencil()).await.unwrap();
  s.insert(eraser()).await.unwrap();

  let count = s.delete(None).await.unwrap();
  assert_eq!(count, 2);
  assert!(s.select(None, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_matching_nothing_returns_zero() {
  let s = store().await;
  s.insert(pencil()).await.unwrap();

  let count = s.delete(Some(Filter::by_id(9999))).await.unwrap();
  assert_eq!(count, 0);
  assert_eq!(s.select(None, None).await.unwrap().len(), 1);
}
