pub mod config;
pub mod deadline;
pub mod error;
pub mod holiday;

pub use config::*;
pub use deadline::*;
pub use error::*;
pub use holiday::*;
