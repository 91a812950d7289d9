//! Safe SQL builder: identifiers from code only, values as parameters.

mod builder;
pub use builder::*;
