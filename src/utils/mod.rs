// src/utils/mod.rs

pub mod command;
pub mod error;
pub mod file;
pub mod locale;
pub mod logger;
pub mod path;
