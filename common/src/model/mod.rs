pub mod cell;
pub mod column;
pub mod row;
pub mod session;

pub use cell::CellValue;
pub use column::{Column, ColumnId, EMPTY_HEADER};
pub use row::Row;
pub use session::{Session, Step};
