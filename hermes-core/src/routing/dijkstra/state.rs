use std::cmp::Ordering;

#[derive(Copy, Clone, PartialEq)]
pub(super) struct State<'a> {
    pub(super) cost: f64,
    pub(super) node: &'a str,
}

// Costs are normalized before relaxation, so `total_cmp` never sees NaN
impl Eq for State<'_> {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap)
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
