pub mod ports;
pub mod recovery;

pub use ports::*;
pub use recovery::{JsonShape, recover_json};
