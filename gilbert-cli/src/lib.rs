//! Library surface of the gilbert experiment driver.

pub mod cli;
pub mod logging;
