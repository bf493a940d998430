//! Request Combiner Common Library
//!
//! CLIとテストで共有される型とユーティリティ

pub mod types;
pub mod validate;

pub use types::{RequestRecord, RowPair, SheetRows, REQUEST_HEADER};
pub use validate::is_valid_id;
