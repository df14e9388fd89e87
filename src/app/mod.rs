//! Application boundary

pub mod options;
pub mod run;
