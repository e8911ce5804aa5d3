pub mod aggregator;
pub mod entities;
pub mod matcher;
pub mod ports;
pub mod prompt;
pub mod services;

pub use entities::*;
pub use ports::*;
