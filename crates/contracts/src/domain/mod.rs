pub mod a001_category;
pub mod a002_book;
pub mod a003_order;
pub mod a004_user;
