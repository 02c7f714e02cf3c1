//! Page components.

mod bio;

pub use bio::Bio;
