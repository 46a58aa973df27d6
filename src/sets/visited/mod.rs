mod bitmap_set;
mod index_set;
mod visited_set;

pub use bitmap_set::*;
pub use index_set::*;
pub use visited_set::*;
