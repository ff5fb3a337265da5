mod classify;
mod scan;

pub use classify::{LineResult, classify};
pub use scan::{count_reader, count_source};
