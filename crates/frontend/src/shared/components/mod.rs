pub mod pagination_controls;
pub mod row_menu;

pub use pagination_controls::PaginationControls;
pub use row_menu::{MenuItem, RowMenu};
