use super::direction::Direction;
use super::grid::{Coordinate, Grid};
use super::path_builder::PathBuilder;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Priority of an open-set entry: f-score first, then coordinate order
/// so that ties pop in a fixed, reproducible order.
type Priority = Reverse<(usize, Coordinate)>;

/// A* over the implicit graph whose edges are slide moves. Every slide
/// costs 1 regardless of how many cells it crosses. All search state
/// lives in this struct and is discarded with it; the grid is never
/// mutated.
pub struct PathFinder {
    path_builder: PathBuilder,
    heap: KeyedPriorityQueue<Coordinate, Priority>,
    g_score: HashMap<Coordinate, usize>,
    closed: HashSet<Coordinate>,
    grid: Grid,
}

impl PathFinder {
    pub fn new(grid: Grid) -> PathFinder {
        PathFinder {
            grid,
            path_builder: PathBuilder::new(),
            // set to min-heap
            heap: KeyedPriorityQueue::new(),
            g_score: HashMap::new(),
            closed: HashSet::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the shortest slide-move route from the grid's start to its
    /// finish, both inclusive. An empty vector means the finish is
    /// unreachable, which is a normal outcome, not a failure.
    pub fn find_shortest_path(&mut self) -> Vec<Coordinate> {
        let start = self.grid.start();
        let finish = self.grid.finish();

        if start == finish {
            return vec![start];
        }

        // bootstrapping
        self.g_score.insert(start, 0);
        self.heap
            .push(start, Reverse((self.grid.heuristic(start), start)));

        while let Some((current, _)) = self.heap.pop() {
            if current == finish {
                return self
                    .path_builder
                    .build(start, current, self.grid.cell_count());
            }

            self.closed.insert(current);
            let current_cost = self.g_score[&current];

            // explore slide destinations
            for direction in Direction::all_directions() {
                let next = self.grid.slide(current, *direction);
                if next == current || self.closed.contains(&next) || !self.grid.is_passable(next) {
                    continue;
                }

                let tentative_cost = current_cost + 1;
                // unseen nodes count as infinitely far away
                let previous_cost = self.g_score.get(&next).copied().unwrap_or(usize::MAX);

                // attempt relaxation
                if tentative_cost < previous_cost {
                    self.path_builder.record_origin(next, current);
                    self.g_score.insert(next, tentative_cost);
                    let priority = tentative_cost + self.grid.heuristic(next);
                    // push inserts or lowers the key, so stale entries
                    // never survive in the heap
                    self.heap.push(next, Reverse((priority, next)));
                }
            }
        }

        Vec::new()
    }
}
