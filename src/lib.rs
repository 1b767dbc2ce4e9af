//! tour-command - Natural-language commands for a tour operator back office

pub mod command;
pub mod core;
pub mod directory;
pub mod llm;
