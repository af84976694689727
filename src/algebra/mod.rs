pub mod euclid;
pub mod field;
