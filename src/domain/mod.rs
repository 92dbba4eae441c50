pub mod plan;
pub mod types;
pub mod validate;
