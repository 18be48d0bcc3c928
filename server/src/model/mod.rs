pub mod browse;
pub mod recipe;
