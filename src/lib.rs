pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod generated;
pub mod mutation;
pub mod sitemask;
pub mod spectrum;
pub mod stats;
pub mod tree;
