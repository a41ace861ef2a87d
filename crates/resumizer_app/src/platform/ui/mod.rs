pub mod commands;
pub mod console;
pub mod constants;
pub mod layout;
pub mod render;
