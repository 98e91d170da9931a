//! Locations, directions and the adjacency graph they form.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Capability trait for location coordinates.
///
/// Any hashable key can index a layout, as long as it knows how to offset
/// itself by a direction delta and how to negate a delta (negation is what
/// derives the reciprocal of each direction). Grid puzzles use
/// [`GridCoord`]; non-grid topologies implement this for their own key
/// type.
pub trait Coord: Clone + Eq + Hash + fmt::Debug + 'static {
    /// The offset type a [`Direction`] names.
    type Delta: Clone + Eq + Hash + fmt::Debug;

    /// The coordinate reached by moving along `delta`.
    fn offset(&self, delta: &Self::Delta) -> Self;

    /// The delta pointing the opposite way.
    fn negate(delta: &Self::Delta) -> Self::Delta;
}

/// Square-grid coordinates: `(x, y)`, `y` growing southward.
pub type GridCoord = (i32, i32);

impl Coord for GridCoord {
    type Delta = (i32, i32);

    fn offset(&self, delta: &Self::Delta) -> Self {
        (self.0 + delta.0, self.1 + delta.1)
    }

    fn negate(delta: &Self::Delta) -> Self::Delta {
        (-delta.0, -delta.1)
    }
}

/// A named edge relation between locations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Direction(String);

impl Direction {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four cardinal directions in clockwise order, the canonical
/// orientation of a square piece.
pub fn compass() -> [Direction; 4] {
    ["n", "e", "s", "w"].map(Direction::new)
}

/// Direction-to-delta table for a four-neighbour square grid.
pub fn grid_directions() -> Vec<(Direction, (i32, i32))> {
    vec![
        (Direction::new("n"), (0, -1)),
        (Direction::new("e"), (1, 0)),
        (Direction::new("s"), (0, 1)),
        (Direction::new("w"), (-1, 0)),
    ]
}

/// One node of the adjacency graph.
///
/// Built once by [`Layout`]; neighbor links never change afterwards. A
/// direction with no link is a boundary edge.
#[derive(Debug, Clone)]
pub struct Location<C: Coord> {
    coord: C,
    links: Vec<(Direction, C)>,
}

impl<C: Coord> Location<C> {
    pub fn coord(&self) -> &C {
        &self.coord
    }

    /// The neighboring coordinate in `direction`, if one is linked.
    pub fn neighbor(&self, direction: &Direction) -> Option<&C> {
        self.links
            .iter()
            .find(|(d, _)| d == direction)
            .map(|(_, c)| c)
    }

    /// Coordinates of every linked neighbor, in direction declaration order.
    pub fn neighbors(&self) -> impl Iterator<Item = &C> {
        self.links.iter().map(|(_, c)| c)
    }

    /// The directions that actually carry a link.
    pub fn linked_directions(&self) -> impl Iterator<Item = &Direction> {
        self.links.iter().map(|(d, _)| d)
    }
}

/// The adjacency graph over locations, keyed by coordinate.
///
/// Construction wires every location to its neighbors (coordinate plus
/// direction delta, when that coordinate is part of the layout) and
/// derives the reciprocal of each direction by delta negation. Location
/// iteration order is the coordinate insertion order (row-major for
/// grids), which is what makes the solver's `Ordered` mode deterministic.
#[derive(Debug, Clone)]
pub struct Layout<C: Coord> {
    coords: Vec<C>,
    locations: HashMap<C, Location<C>>,
    directions: Vec<(Direction, C::Delta)>,
    pairs: HashMap<Direction, Direction>,
    inner_edges: usize,
}

impl<C: Coord> Layout<C> {
    pub fn new(
        coords: impl IntoIterator<Item = C>,
        directions: impl IntoIterator<Item = (Direction, C::Delta)>,
    ) -> Self {
        let directions: Vec<(Direction, C::Delta)> = directions.into_iter().collect();

        let mut ordered = Vec::new();
        let mut locations: HashMap<C, Location<C>> = HashMap::new();
        for coord in coords {
            if locations.contains_key(&coord) {
                continue;
            }
            locations.insert(
                coord.clone(),
                Location {
                    coord: coord.clone(),
                    links: Vec::new(),
                },
            );
            ordered.push(coord);
        }

        // A direction's reciprocal is whichever direction carries the
        // negated delta; directions without one stay unpaired.
        let mut pairs = HashMap::new();
        for (direction, delta) in &directions {
            let negated = C::negate(delta);
            if let Some((paired, _)) = directions.iter().find(|(_, d)| *d == negated) {
                pairs.insert(direction.clone(), paired.clone());
            }
        }

        let mut inner_edges = 0;
        for coord in &ordered {
            let mut links = Vec::new();
            for (direction, delta) in &directions {
                let dest = coord.offset(delta);
                if locations.contains_key(&dest) {
                    links.push((direction.clone(), dest));
                    inner_edges += 1;
                }
            }
            if let Some(location) = locations.get_mut(coord) {
                location.links = links;
            }
        }

        Self {
            coords: ordered,
            locations,
            directions,
            pairs,
            inner_edges,
        }
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates in insertion order.
    pub fn coords(&self) -> &[C] {
        &self.coords
    }

    pub fn location(&self, coord: &C) -> Option<&Location<C>> {
        self.locations.get(coord)
    }

    /// Locations in coordinate insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &Location<C>> {
        self.coords.iter().filter_map(|c| self.locations.get(c))
    }

    /// Declared directions, in declaration order.
    pub fn directions(&self) -> impl Iterator<Item = &Direction> {
        self.directions.iter().map(|(d, _)| d)
    }

    /// The reciprocal of `direction`, if its negated delta is declared.
    pub fn paired(&self, direction: &Direction) -> Option<&Direction> {
        self.pairs.get(direction)
    }

    /// The coordinate neighboring `coord` in `direction`, if linked.
    pub fn neighbor(&self, coord: &C, direction: &Direction) -> Option<&C> {
        self.locations
            .get(coord)
            .and_then(|location| location.neighbor(direction))
    }

    /// Total count of directed neighbor links. Feeds the rarity threshold:
    /// a symbol that cannot fill its share of interior edges is presumed
    /// to belong on a boundary.
    pub fn inner_edges(&self) -> usize {
        self.inner_edges
    }
}

impl Layout<GridCoord> {
    /// A `rows` x `cols` grid with the default four-neighbour direction map.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let coords = (0..rows as i32).flat_map(|y| (0..cols as i32).map(move |x| (x, y)));
        Self::new(coords, grid_directions())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{compass, grid_directions, Coord, Direction, GridCoord, Layout};

    fn two_by_one() -> Layout<GridCoord> {
        Layout::new(
            [(0, 0), (1, 0)],
            [
                (Direction::new("e"), (1, 0)),
                (Direction::new("w"), (-1, 0)),
            ],
        )
    }

    // Four coordinates linked only along the diagonals.
    fn diagonal() -> Layout<GridCoord> {
        Layout::new(
            [(0, 0), (-1, -1), (1, -1), (0, -2)],
            [
                (Direction::new("nw"), (-1, 1)),
                (Direction::new("ne"), (1, 1)),
                (Direction::new("se"), (1, -1)),
                (Direction::new("sw"), (-1, -1)),
            ],
        )
    }

    #[test]
    fn test_grid_links_and_boundaries() {
        let layout = Layout::grid(3, 3);
        assert_eq!(layout.len(), 9);
        assert_eq!(layout.coords()[0], (0, 0));

        let north = Direction::new("n");
        let south = Direction::new("s");
        assert_eq!(layout.neighbor(&(0, 0), &south), Some(&(0, 1)));
        assert_eq!(layout.neighbor(&(0, 0), &north), None);

        // only the center location has all four neighbors
        let full: Vec<_> = layout
            .locations()
            .filter(|location| location.neighbors().count() == 4)
            .collect();
        assert_eq!(full.len(), 1);
        assert_eq!(full[0].coord(), &(1, 1));
    }

    #[test]
    fn test_inner_edges() {
        assert_eq!(two_by_one().inner_edges(), 2);
        assert_eq!(diagonal().inner_edges(), 8);
        assert_eq!(Layout::grid(3, 3).inner_edges(), 24);
    }

    #[test]
    fn test_pairing_is_involutive() {
        let layout = Layout::grid(2, 2);
        for direction in layout.directions() {
            let paired = layout.paired(direction).unwrap();
            assert_eq!(layout.paired(paired), Some(direction));
        }
        assert_eq!(
            diagonal().paired(&Direction::new("ne")),
            Some(&Direction::new("sw"))
        );
    }

    #[test]
    fn test_unpaired_directions_pair_to_nothing() {
        // "up" has no negated counterpart; that is legal, it simply never pairs
        let layout: Layout<GridCoord> = Layout::new(
            [(0, 0), (0, 1)],
            [
                (Direction::new("up"), (0, 1)),
                (Direction::new("e"), (1, 0)),
                (Direction::new("w"), (-1, 0)),
            ],
        );
        assert_eq!(layout.paired(&Direction::new("up")), None);
        assert_eq!(
            layout.paired(&Direction::new("e")),
            Some(&Direction::new("w"))
        );
        assert_eq!(layout.inner_edges(), 1);
    }

    #[test]
    fn test_location_neighbor_queries() {
        let layout = two_by_one();
        let east = Direction::new("e");
        let west = Direction::new("w");

        let left = layout.location(&(0, 0)).unwrap();
        assert_eq!(left.neighbor(&east), Some(&(1, 0)));
        assert_eq!(left.neighbor(&west), None);
        assert_eq!(left.neighbors().collect::<Vec<_>>(), vec![&(1, 0)]);
        assert_eq!(left.linked_directions().collect::<Vec<_>>(), vec![&east]);

        let right = layout.location(&(1, 0)).unwrap();
        assert_eq!(right.neighbor(&west), Some(&(0, 0)));
        assert_eq!(right.neighbor(&east), None);
    }

    #[test]
    fn test_ring_topology() {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        struct Station(u8);

        impl Coord for Station {
            type Delta = i8;

            fn offset(&self, delta: &Self::Delta) -> Self {
                Station((i8::try_from(self.0).unwrap() + delta).rem_euclid(4) as u8)
            }

            fn negate(delta: &Self::Delta) -> Self::Delta {
                -delta
            }
        }

        let clockwise = Direction::new("cw");
        let counter = Direction::new("ccw");
        let layout = Layout::new(
            (0u8..4).map(Station),
            [(clockwise.clone(), 1), (counter.clone(), -1)],
        );

        assert_eq!(layout.paired(&clockwise), Some(&counter));
        assert_eq!(layout.inner_edges(), 8);
        for location in layout.locations() {
            assert_eq!(location.neighbors().count(), 2);
        }
        assert_eq!(layout.neighbor(&Station(3), &clockwise), Some(&Station(0)));
    }

    #[test]
    fn test_duplicate_coords_collapse() {
        let layout: Layout<GridCoord> = Layout::new([(0, 0), (0, 0), (1, 0)], grid_directions());
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn test_compass_order() {
        let names: Vec<_> = compass().iter().map(|d| d.name().to_string()).collect();
        assert_eq!(names, vec!["n", "e", "s", "w"]);
        let declared: HashSet<_> = grid_directions().into_iter().map(|(d, _)| d).collect();
        assert_eq!(declared.len(), 4);
    }

    #[cfg(test)]
    mod prop_tests {
        use proptest::prelude::*;

        use super::Layout;

        proptest! {
            #[test]
            fn grid_inner_edges_match_formula(rows in 1usize..7, cols in 1usize..7) {
                // directed links: every undirected interior edge counts twice
                let layout = Layout::grid(rows, cols);
                prop_assert_eq!(layout.inner_edges(), 2 * (2 * rows * cols - rows - cols));
            }

            #[test]
            fn grid_pairing_is_involutive(rows in 1usize..5, cols in 1usize..5) {
                let layout = Layout::grid(rows, cols);
                for direction in layout.directions() {
                    let paired = layout.paired(direction).unwrap();
                    prop_assert_eq!(layout.paired(paired), Some(direction));
                }
            }
        }
    }
}
