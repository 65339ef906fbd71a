pub mod basics;
pub mod shift;
pub mod sql;
