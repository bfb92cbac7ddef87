pub mod friendly_columns;
pub mod friendly_ids;
