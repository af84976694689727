pub mod cache;
pub mod finite;
pub mod integers;
pub mod poly;
pub mod reals;
