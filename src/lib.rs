pub mod calc;
pub mod config;
pub mod input;
pub mod menu;
