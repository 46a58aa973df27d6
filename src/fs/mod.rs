mod graph_file;

pub use graph_file::*;
