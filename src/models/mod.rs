pub mod error;
pub mod selection;
pub mod skip;
