pub mod args;
pub mod console;
pub mod error;
pub mod filter;
pub mod loader;
pub mod pager;
pub mod report;
pub mod selector;
pub mod session;
pub mod stats;
pub mod trip;
pub mod utils;

#[cfg(test)]
mod fixtures;

pub use args::Args;
pub use console::Console;
pub use error::{BikeshareError, Result};
pub use filter::{City, FilterSpec, Month};
pub use loader::{load_data, Dataset};
pub use session::run_session;
