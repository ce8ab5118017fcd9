pub mod check;
pub mod formats;
pub mod generate;
pub mod named;
pub mod run_common;
pub mod spec_loader;
