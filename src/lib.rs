pub mod aggregate;
pub mod cli;
pub mod error;
pub mod format;
pub mod github;
pub mod input;
pub mod model;
pub mod render;
pub mod score;
