/// Mark-and-test record of the vertices a traversal has already expanded.
pub trait VisitedSet {
    fn is_visited(&self, i: usize) -> bool;
    fn visit(&mut self, i: usize);
}
