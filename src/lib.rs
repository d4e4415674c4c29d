pub mod command;
pub mod config;
pub mod lifecycle;
pub mod parser;
