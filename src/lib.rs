pub mod analyzers;
pub mod config;
pub mod dates;
pub mod error;
pub mod import;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod record;
pub mod scoring;
pub mod storage;
