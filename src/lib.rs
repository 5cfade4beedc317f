//! A library for searching for 2-colorings of complete ordered graphs which avoid monochromatic copies of given ordered graphs.
//!
//! Given a target order `n`, a red ordered graph, and a blue ordered graph, a coloring of the edges of the complete ordered graph on `n` vertices is *avoiding* if no order-preserving embedding of the red graph has every edge red, and no order-preserving embedding of the blue graph has every edge blue.
//! The least `n` for which no avoiding coloring exists is the ordered Ramsey number of the pair.
//!
//! ordered_ramsey encodes the search for avoiding colorings as a formula in conjunctive normal form, and enumerates the models of the formula through repeated calls to a SAT solver, blocking each model once found.
//!
//! # Orientation
//!
//! - A [Problem](builder::Problem) pairs an order with two forbidden [ordered graphs](structures::graph::OrderedGraph), and optionally reflective symmetry and [forced edges](builder::conditions::ForcedEdge).
//! - The [builder] turns a problem into a [formula](structures::formula::Formula) over [edge variables](structures::edge), with true read as blue.
//! - An [enumerator] owns a formula and a [backend], and returns a fresh [coloring](structures::graph::Coloring) on each call to [next](enumerator::Enumerator::next) until none remain.
//! - Backends are either an [external solver](backend::external) (minisat, glucose, or any executable following their conventions), reached through the [DIMACS](dimacs) format, or the in-process [CDCL](backend::cdcl) solver.
//! - [dispatch] runs an enumerator on a dedicated thread, and [cancellation](generic::cancel) stops an enumeration from outside.
//!
//! # Example
//!
//! The diagonal ordered Ramsey number of the triangle is six, as for unordered graphs.
//!
//! ```rust
//! # use ordered_ramsey::backend::cdcl::Cdcl;
//! # use ordered_ramsey::builder::Problem;
//! # use ordered_ramsey::enumerator::{Enumerator, Step};
//! # use ordered_ramsey::structures::graph::OrderedGraph;
//! let triangle = OrderedGraph::complete(3);
//!
//! let five = Problem::diagonal(5, triangle.clone());
//! let mut enumerator = Enumerator::from_problem(&five, Cdcl::default()).unwrap();
//! assert!(matches!(enumerator.next(), Ok(Step::Found(_))));
//!
//! let six = Problem::diagonal(6, triangle);
//! let mut enumerator = Enumerator::from_problem(&six, Cdcl::default()).unwrap();
//! assert_eq!(enumerator.next(), Ok(Step::Exhausted));
//! ```
//!
//! # Logs
//!
//! Logs are made through the [log](https://docs.rs/log/latest/log/) facade, with the targets listed in [misc::log::targets].
//! No logger is provided by the library.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::match_bool)]

pub mod backend;
pub mod builder;
pub mod config;
pub mod dimacs;
pub mod dispatch;
pub mod enumerator;
pub mod generic;
pub mod misc;
pub mod structures;
pub mod types;
