pub mod cardiopulmonary;
pub mod common;
pub mod paediatric;
