/*!
Ordered graphs and 2-colorings of ordered graphs.

An [OrderedGraph] has vertices `1..=m`, in that order, and a set of (uncolored) edges.
Ordered graphs are used for the two forbidden patterns, and are monochromatic by construction.

A [Coloring] has vertices `1..=n` and assigns a [Color] to each of its edges.
A coloring decoded from a backend need not be complete.

Both have a text form of comma separated edges:

```rust
# use ordered_ramsey::structures::graph::{Color, Coloring, OrderedGraph};
let path = OrderedGraph::parse(None, "1 2, 2 3").unwrap();
assert_eq!(path.order(), 3);

let coloring = "1 2 r, 1 3 b, 2 3 r".parse::<Coloring>().unwrap();
assert_eq!(coloring.color_of_pair(1, 3), Some(Color::Blue));
assert_eq!(coloring.to_string(), "1 2 r,1 3 b,2 3 r");

// The red edges form an (ordered) copy of the path on 1, 2, 3.
assert_eq!(coloring.monochromatic_copy(&path, Color::Red), Some(0b111));
assert_eq!(coloring.monochromatic_copy(&path, Color::Blue), None);
```
*/

use std::{
    collections::{btree_map::Entry, BTreeMap, BTreeSet},
    str::FromStr,
};

use crate::{
    generic::subsets::{self, KSubsets, SubsetMask},
    structures::edge::{Edge, Vertex},
    types::err::{self},
};

/// The two colors of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// The other color.
    pub fn opposite(&self) -> Color {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "r"),
            Self::Blue => write!(f, "b"),
        }
    }
}

impl FromStr for Color {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" | "red" => Ok(Self::Red),
            "b" | "blue" => Ok(Self::Blue),
            unknown => Err(err::ParseError::Color(unknown.to_string())),
        }
    }
}

/// An ordered graph on vertices `1..=order`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedGraph {
    order: Vertex,
    edges: BTreeSet<Edge>,
}

impl OrderedGraph {
    /// The edgeless graph on `order` vertices.
    pub fn new(order: Vertex) -> Self {
        OrderedGraph {
            order,
            edges: BTreeSet::default(),
        }
    }

    /// The graph on `order` vertices with the given edges, in either orientation.
    pub fn from_edges(
        order: Vertex,
        edges: impl IntoIterator<Item = (Vertex, Vertex)>,
    ) -> Result<Self, err::GraphError> {
        let mut graph = OrderedGraph::new(order);
        for (i, j) in edges {
            graph.add_edge(i, j)?;
        }
        Ok(graph)
    }

    /// The complete graph on `order` vertices.
    pub fn complete(order: Vertex) -> Self {
        OrderedGraph {
            order,
            edges: crate::structures::edge::complete_edges(order).collect(),
        }
    }

    /// Parses a comma separated list of edges `"i j, i j, …"`.
    ///
    /// If no order is given, the order is the largest vertex mentioned.
    /// Empty or whitespace-only input is the edgeless graph.
    pub fn parse(order: Option<Vertex>, text: &str) -> Result<Self, err::ErrorKind> {
        let mut pairs = Vec::default();

        if !text.trim().is_empty() {
            for (index, item) in text.split(',').enumerate() {
                let mut tokens = item.split_whitespace();
                let (Some(i), Some(j), None) = (tokens.next(), tokens.next(), tokens.next()) else {
                    return Err(err::ErrorKind::from(err::ParseError::Edge(index)));
                };
                let (Ok(i), Ok(j)) = (i.parse::<Vertex>(), j.parse::<Vertex>()) else {
                    return Err(err::ErrorKind::from(err::ParseError::Edge(index)));
                };
                pairs.push((i, j));
            }
        }

        let order = match order {
            Some(order) => order,
            None => pairs.iter().map(|(i, j)| *i.max(j)).max().unwrap_or(0),
        };

        Ok(OrderedGraph::from_edges(order, pairs)?)
    }

    /// Adds the edge between `i` and `j`.
    pub fn add_edge(&mut self, i: Vertex, j: Vertex) -> Result<(), err::GraphError> {
        let edge = Edge::new(i, j)?;
        for vertex in [i, j] {
            if vertex < 1 || vertex > self.order {
                return Err(err::GraphError::OutOfRange(vertex, self.order));
            }
        }
        match self.edges.insert(edge) {
            true => Ok(()),
            false => Err(err::GraphError::DuplicateEdge(edge.low(), edge.high())),
        }
    }

    /// The number of vertices.
    pub fn order(&self) -> Vertex {
        self.order
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_edgeless(&self) -> bool {
        self.edges.is_empty()
    }

    /// The edges, in lexicographic order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }
}

impl std::fmt::Display for OrderedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges = self.edges.iter().map(|edge| edge.to_string()).collect::<Vec<_>>();
        write!(f, "{}", edges.join(","))
    }
}

/// An assignment of colors to (some) edges of an ordered graph on vertices `1..=order`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    order: Vertex,
    colors: BTreeMap<Edge, Color>,
}

impl Coloring {
    /// The coloring of no edges on `order` vertices.
    pub fn new(order: Vertex) -> Self {
        Coloring {
            order,
            colors: BTreeMap::default(),
        }
    }

    /// Adds an edge with the given color.
    pub fn insert(&mut self, edge: Edge, color: Color) -> Result<(), err::GraphError> {
        for vertex in [edge.low(), edge.high()] {
            if vertex < 1 || vertex > self.order {
                return Err(err::GraphError::OutOfRange(vertex, self.order));
            }
        }
        match self.colors.entry(edge) {
            Entry::Occupied(_) => Err(err::GraphError::DuplicateEdge(edge.low(), edge.high())),
            Entry::Vacant(entry) => {
                entry.insert(color);
                Ok(())
            }
        }
    }

    /// Parses a comma separated list of colored edges `"i j c, i j c, …"`, with `c` one of `r` or `b`.
    ///
    /// If no order is given, the order is the largest vertex mentioned.
    pub fn parse(order: Option<Vertex>, text: &str) -> Result<Self, err::ErrorKind> {
        let items = parse_colored_edges(text)?;
        let order = match order {
            Some(order) => order,
            None => items.iter().map(|(edge, _)| edge.high()).max().unwrap_or(0),
        };

        let mut coloring = Coloring::new(order);
        for (edge, color) in items {
            coloring.insert(edge, color)?;
        }
        Ok(coloring)
    }

    pub fn order(&self) -> Vertex {
        self.order
    }

    pub fn color_of(&self, edge: &Edge) -> Option<Color> {
        self.colors.get(edge).copied()
    }

    /// The color of the edge between `i` and `j`, if present.
    pub fn color_of_pair(&self, i: Vertex, j: Vertex) -> Option<Color> {
        Edge::new(i, j).ok().and_then(|edge| self.color_of(&edge))
    }

    /// The number of colored edges.
    pub fn edge_count(&self) -> usize {
        self.colors.len()
    }

    /// Whether every edge on the vertices of the coloring has a color.
    pub fn is_complete(&self) -> bool {
        let order = self.order as usize;
        self.colors.len() == order * order.saturating_sub(1) / 2
    }

    /// Pairs of edges and colors, in lexicographic order of edge.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, Color)> + '_ {
        self.colors.iter().map(|(edge, color)| (*edge, *color))
    }

    /// The edges with the given color.
    pub fn edges_of(&self, color: Color) -> impl Iterator<Item = Edge> + '_ {
        self.iter()
            .filter(move |(_, edge_color)| *edge_color == color)
            .map(|(edge, _)| edge)
    }

    /// The first subset of vertices (in the order of [KSubsets]) on which the pattern appears with every edge of the given color, if any.
    ///
    /// The `k`-th lowest member of the subset plays the part of vertex `k` of the pattern.
    pub fn monochromatic_copy(&self, pattern: &OrderedGraph, color: Color) -> Option<SubsetMask> {
        let masks = KSubsets::new(self.order, pattern.order()).ok()?;

        'mask_loop: for mask in masks {
            let labels = subsets::members(mask).collect::<Vec<_>>();
            for edge in pattern.edges() {
                let image = Edge::new(
                    labels[(edge.low() - 1) as usize],
                    labels[(edge.high() - 1) as usize],
                );
                match image {
                    Ok(image) if self.color_of(&image) == Some(color) => {}
                    _ => continue 'mask_loop,
                }
            }
            return Some(mask);
        }

        None
    }

    /// Whether the coloring has no red copy of `red` and no blue copy of `blue`.
    pub fn avoids(&self, red: &OrderedGraph, blue: &OrderedGraph) -> bool {
        self.monochromatic_copy(red, Color::Red).is_none()
            && self.monochromatic_copy(blue, Color::Blue).is_none()
    }
}

impl std::fmt::Display for Coloring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self
            .colors
            .iter()
            .map(|(edge, color)| format!("{edge} {color}"))
            .collect::<Vec<_>>();
        write!(f, "{}", items.join(","))
    }
}

impl FromStr for Coloring {
    type Err = err::ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coloring::parse(None, s)
    }
}

/// Parses `"i j c, i j c, …"` to a list of edges and colors, with no check on the order of any graph.
///
/// Empty or whitespace-only input is an empty list.
/// The index of the first malformed item is returned on failure.
pub fn parse_colored_edges(text: &str) -> Result<Vec<(Edge, Color)>, err::ParseError> {
    let mut items = Vec::default();

    if text.trim().is_empty() {
        return Ok(items);
    }

    for (index, item) in text.split(',').enumerate() {
        let tokens = item.split_whitespace().collect::<Vec<_>>();
        let [i, j, color] = tokens.as_slice() else {
            return Err(err::ParseError::Condition(index));
        };

        let (Ok(i), Ok(j)) = (i.parse::<Vertex>(), j.parse::<Vertex>()) else {
            return Err(err::ParseError::Condition(index));
        };
        let Ok(edge) = Edge::new(i, j) else {
            return Err(err::ParseError::Condition(index));
        };
        let Ok(color) = color.parse::<Color>() else {
            return Err(err::ParseError::Condition(index));
        };

        items.push((edge, color));
    }

    Ok(items)
}
