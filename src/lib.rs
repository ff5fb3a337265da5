pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod output;
pub mod scanner;

pub use error::{Result, SlocScanError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_READ_ERRORS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
