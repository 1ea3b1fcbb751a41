use super::grid::Coordinate;
use std::collections::HashMap;

/// Predecessor links recorded during one search, replayed into an
/// ordered start-to-finish route.
pub struct PathBuilder {
    node_origins: HashMap<Coordinate, Coordinate>,
}

impl PathBuilder {
    pub fn new() -> PathBuilder {
        PathBuilder {
            node_origins: HashMap::new(),
        }
    }

    pub fn record_origin(&mut self, node: Coordinate, origin: Coordinate) {
        self.node_origins.insert(node, origin);
    }

    /// Walks backward from `goal` to `start` and reverses the chain.
    /// Panics if the chain breaks or exceeds `max_len` links; the engine
    /// only calls this after reaching the goal, so either means the
    /// predecessor map is corrupted.
    pub fn build(&self, start: Coordinate, goal: Coordinate, max_len: usize) -> Vec<Coordinate> {
        let mut output = vec![goal];
        let mut node = goal;

        while node != start {
            assert!(
                output.len() <= max_len,
                "predecessor chain did not reach the start cell"
            );
            node = match self.node_origins.get(&node) {
                Some(origin) => *origin,
                None => panic!("predecessor chain broken at ({}, {})", node.0, node.1),
            };
            output.push(node);
        }

        output.reverse();
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_path() {
        let mut builder = PathBuilder::new();
        builder.record_origin((4, 4), (3, 3));
        builder.record_origin((3, 3), (2, 2));
        builder.record_origin((2, 2), (1, 1));

        assert_eq!(
            vec![(1, 1), (2, 2), (3, 3), (4, 4)],
            builder.build((1, 1), (4, 4), 25)
        );
    }

    #[test]
    fn it_builds_the_trivial_path() {
        let builder = PathBuilder::new();
        assert_eq!(vec![(2, 2)], builder.build((2, 2), (2, 2), 9));
    }

    #[test]
    #[should_panic(expected = "predecessor chain broken")]
    fn it_panics_on_a_broken_chain() {
        let builder = PathBuilder::new();
        builder.build((0, 0), (4, 4), 25);
    }

    #[test]
    #[should_panic(expected = "did not reach the start cell")]
    fn it_panics_on_a_cyclic_chain() {
        let mut builder = PathBuilder::new();
        builder.record_origin((1, 1), (2, 2));
        builder.record_origin((2, 2), (1, 1));
        builder.build((0, 0), (1, 1), 4);
    }
}
