//! Shared constants for the records table and its resource identifiers.
//!
//! Everything the presentation layer and the storage layer agree on by name
//! lives here: column names, the identifier scheme, the type strings, and
//! the quantity limits the UI applies on its side.

/// URI scheme of every resource this workspace serves.
pub const SCHEME: &str = "stockroom";

/// Authority segment of every resource identifier.
pub const AUTHORITY: &str = "inventory";

/// Path segment addressing the records collection.
pub const PATH_RECORDS: &str = "records";

/// Canonical collection identifier.
pub const COLLECTION_URI: &str = "stockroom://inventory/records";

pub const TABLE_NAME: &str = "records";

pub const COLUMN_ID: &str = "id";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_PRICE: &str = "price";
pub const COLUMN_QUANTITY: &str = "quantity";
pub const COLUMN_SUPPLIER_NAME: &str = "supplier_name";
pub const COLUMN_SUPPLIER_PHONE: &str = "supplier_phone";

/// All persisted columns, in table order.
pub const COLUMNS: [&str; 6] = [
  COLUMN_ID,
  COLUMN_NAME,
  COLUMN_PRICE,
  COLUMN_QUANTITY,
  COLUMN_SUPPLIER_NAME,
  COLUMN_SUPPLIER_PHONE,
];

/// Descriptive type string for the collection identifier.
pub const CONTENT_LIST_TYPE: &str = "vnd.stockroom.cursor.dir/inventory/records";

/// Descriptive type string for a single-item identifier.
pub const CONTENT_ITEM_TYPE: &str = "vnd.stockroom.cursor.item/inventory/records";

/// Lowest quantity the presentation layer will accept. Storage and the
/// provider do not enforce this.
pub const QUANTITY_FLOOR: i64 = 0;

/// Highest quantity the presentation layer will accept. Storage and the
/// provider do not enforce this.
pub const QUANTITY_CEILING: i64 = 500;

/// Unit step for the sale/receive quantity adjustments in the UI.
pub const QUANTITY_STEP: i64 = 1;

/// True if `name` is a persisted column of the records table.
pub fn is_column(name: &str) -> bool { COLUMNS.contains(&name) }
