pub mod output;
pub mod runner;

pub use output::{render, OutputFormat};
pub use runner::{DrawRunner, RunReport};
