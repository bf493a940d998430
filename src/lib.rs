pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod scanner;

pub use request_combiner_common as common;
