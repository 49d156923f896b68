pub mod field;
pub mod record;
pub mod section;
