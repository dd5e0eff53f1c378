pub mod clock;
pub mod complaint;
pub mod config;

pub use clock::{Clock, ManualClock, SystemClock};
pub use complaint::*;
pub use config::Config;
