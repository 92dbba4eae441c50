pub mod orders;
pub mod sqlx;
pub mod vehicles;
