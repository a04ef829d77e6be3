pub mod buffer;
pub mod config;
pub mod divide;
pub mod error;
pub mod greeter;
pub mod hash;
pub mod hazard;

pub use buffer::{OverreadPolicy, Region, print_buffer, read_buffer};
pub use config::{Config, Guard};
pub use divide::{Divisible, ZeroDivisorPolicy, checked_divide, divide_with, safe_divide};
pub use error::{Error, Result};
pub use greeter::Greeter;
pub use hash::{RollingHash, byte_hash, string_hash};
pub use hazard::{Hazard, Severity};
