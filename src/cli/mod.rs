pub mod args;
pub mod clipboard;
pub mod display;
