//! Key structures, such as literals, clauses, and ordered graphs.
//!
//! Literals and clauses are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! # Other structures without a trait
//! - [Edges](edge::Edge), whose numbering as variables is fixed by the order of the target graph.
//! - [Formulas](formula::Formula) and [assignments](assignment::Assignment).
//! - [Ordered graphs](graph::OrderedGraph), used for the forbidden patterns, and [colorings](graph::Coloring).

pub mod assignment;
pub mod clause;
pub mod edge;
pub mod formula;
pub mod graph;
pub mod literal;
