#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod alphabet;
mod bounded;
mod candidate;
mod enumerate;
mod filter;
mod report;

pub use self::alphabet::*;
pub use self::bounded::*;
pub use self::candidate::*;
pub use self::enumerate::*;
pub use self::filter::*;
pub use self::report::*;
