pub mod analyzers;
pub mod chart;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod stats;
pub mod table;
