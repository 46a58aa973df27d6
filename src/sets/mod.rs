//! Specialized data structures for graph traversal.
//!
//! # Submodules
//!
//! - [`visited`]: mark-and-test structures recording already-expanded
//!   vertices, used to keep traversals from looping on cyclic graphs

pub mod visited;
