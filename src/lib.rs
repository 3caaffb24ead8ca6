pub mod app;
pub mod cli;
pub mod error;
pub mod headless;
pub mod render;
pub mod replay;
pub mod surface;
pub mod types;
pub mod utils;
pub mod validate;
