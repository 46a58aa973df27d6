mod bounded_path;

pub use bounded_path::*;
