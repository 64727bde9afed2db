pub mod catalog;
pub mod error;
pub mod output;
pub mod query;
pub mod select;
pub mod star;
