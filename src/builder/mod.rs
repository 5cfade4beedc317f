/*!
Tools for building the formula of an ordered Ramsey problem.

A [Problem] is a target order `n`, a red and a blue forbidden [OrderedGraph], and optional constraints.
Models of the formula of a problem are exactly the 2-colorings of the complete ordered graph on `n` vertices with no red (order-preserving) copy of the red pattern, no blue copy of the blue pattern, and which satisfy the constraints.

The formula is built from:
1. For every subset of `|red|` vertices, a [pattern clause](pattern::pattern_clause) against the red pattern.
2. For every subset of `|blue|` vertices, an inverted pattern clause against the blue pattern.
3. For every [forced edge](conditions::ForcedEdge), a unit clause.
4. If symmetry is enforced, two clauses for every edge which is not its own reflection, requiring the edge and its reflection take opposite values.

```rust
# use ordered_ramsey::builder::Problem;
# use ordered_ramsey::structures::graph::OrderedGraph;
let triangle = OrderedGraph::complete(3);
let formula = Problem::diagonal(3, triangle).formula().unwrap();

assert_eq!(formula.clauses(), &[vec![1, 2, 5], vec![-1, -2, -5]]);
```
*/

pub mod conditions;
pub mod pattern;

use conditions::ForcedEdge;

use crate::{
    generic::subsets::{binomial, KSubsets, MAX_ORDER},
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        edge::{self, Vertex},
        formula::Formula,
        graph::OrderedGraph,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// An ordered Ramsey avoidance problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    order: Vertex,
    red: OrderedGraph,
    blue: OrderedGraph,
    symmetric: bool,
    forced: Vec<ForcedEdge>,
}

impl Problem {
    /// Colorings of `order` vertices avoiding a red `red` and a blue `blue`.
    pub fn new(order: Vertex, red: OrderedGraph, blue: OrderedGraph) -> Self {
        Problem {
            order,
            red,
            blue,
            symmetric: false,
            forced: Vec::default(),
        }
    }

    /// The diagonal case, with the same pattern forbidden in both colors.
    pub fn diagonal(order: Vertex, pattern: OrderedGraph) -> Self {
        Problem::new(order, pattern.clone(), pattern)
    }

    /// Requires (or not) that an edge and its reflection about the midpoint of the vertex sequence have opposite colors.
    pub fn with_symmetry(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Adds forced edges to the problem.
    pub fn with_forced_edges(mut self, forced: impl IntoIterator<Item = ForcedEdge>) -> Self {
        self.forced.extend(forced);
        self
    }

    pub fn order(&self) -> Vertex {
        self.order
    }

    pub fn red(&self) -> &OrderedGraph {
        &self.red
    }

    pub fn blue(&self) -> &OrderedGraph {
        &self.blue
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    pub fn forced_edges(&self) -> &[ForcedEdge] {
        &self.forced
    }

    /// Checks the problem makes sense, before any clause is built.
    pub fn validate(&self) -> Result<(), err::ErrorKind> {
        if self.order > MAX_ORDER {
            return Err(err::ErrorKind::from(err::ModelError::OrderTooLarge(self.order)));
        }

        for pattern in [&self.red, &self.blue] {
            if pattern.order() > self.order {
                return Err(err::ErrorKind::from(err::ModelError::PatternTooLarge {
                    pattern: pattern.order(),
                    order: self.order,
                }));
            }
            if pattern.is_edgeless() {
                return Err(err::ErrorKind::from(err::ModelError::EdgelessPattern));
            }
        }

        for forced in &self.forced {
            forced.check_range(self.order)?;
        }

        Ok(())
    }

    /// The number of clauses of the formula of the problem.
    pub fn clause_count(&self) -> u128 {
        let n = self.order;
        let mut count = binomial(n, self.red.order()) + binomial(n, self.blue.order());
        count += self.forced.len() as u128;
        if self.symmetric {
            count += 2 * (binomial(n, 2) - (n / 2) as u128);
        }
        count
    }

    /// Builds the formula of the problem.
    ///
    /// Either the complete formula is returned, or the first error found.
    pub fn formula(&self) -> Result<Formula, err::ErrorKind> {
        self.validate()?;

        let n = self.order;
        log::info!(target: targets::ENCODING, "Building formula for order {n}, expecting {} clauses", self.clause_count());

        let mut formula = Formula::default();

        for mask in KSubsets::new(n, self.red.order())? {
            formula.add_clause(pattern::pattern_clause(mask, &self.red, n, false)?);
        }
        log::debug!(target: targets::ENCODING, "Red pattern clauses: {}", formula.clause_count());

        for mask in KSubsets::new(n, self.blue.order())? {
            formula.add_clause(pattern::pattern_clause(mask, &self.blue, n, true)?);
        }
        log::debug!(target: targets::ENCODING, "Pattern clauses: {}", formula.clause_count());

        for forced in &self.forced {
            log::trace!(target: targets::ENCODING, "Forced edge: {forced}");
            formula.add_clause(forced.clause(n)?);
        }

        if self.symmetric {
            formula.extend(symmetry_clauses(n)?);
        }

        log::info!(target: targets::ENCODING, "Built {} clauses over {} variables", formula.clause_count(), formula.variables().len());
        Ok(formula)
    }
}

/// Builds the formula of a problem, from its parts.
pub fn build(
    order: Vertex,
    red: &OrderedGraph,
    blue: &OrderedGraph,
    enforce_symmetry: bool,
    forced: &[ForcedEdge],
) -> Result<Formula, err::ErrorKind> {
    Problem::new(order, red.clone(), blue.clone())
        .with_symmetry(enforce_symmetry)
        .with_forced_edges(forced.iter().copied())
        .formula()
}

/// The clauses requiring each edge `(i, j)` on `order` vertices and its reflection `(n + 1 - j, n + 1 - i)` take opposite values.
///
/// Each edge which is not its own reflection contributes the pair `[e, s]`, `[-e, -s]`, and so each reflected pair is constrained twice over.
pub fn symmetry_clauses(order: Vertex) -> Result<Vec<CClause>, err::CodecError> {
    let mut clauses = Vec::default();

    for an_edge in edge::complete_edges(order) {
        if an_edge.is_self_reflective(order) {
            continue;
        }
        let e = an_edge.variable(order)? as IntLiteral;
        let s = an_edge.reflect(order).variable(order)? as IntLiteral;

        clauses.push(vec![e, s]);
        clauses.push(vec![e.negate(), s.negate()]);
    }

    Ok(clauses)
}
