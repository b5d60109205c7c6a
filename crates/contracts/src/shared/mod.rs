pub mod paging;
pub mod validation;
