pub mod error;
pub mod spec;
pub mod unit;
pub mod validate;
