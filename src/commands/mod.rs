pub mod config;
pub mod list;
pub mod range;

pub use config::*;
pub use list::*;
pub use range::*;
