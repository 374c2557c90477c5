pub mod pagination;
pub mod sort;
pub mod validate;
