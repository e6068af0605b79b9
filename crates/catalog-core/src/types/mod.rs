//! Value types shared across the workspace

pub mod value;

pub use value::Value;
