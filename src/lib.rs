pub mod cli;
pub mod core;
pub mod env;
pub mod launcher;
