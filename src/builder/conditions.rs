/*!
Forced edges, i.e. edges whose color is fixed ahead of a search.

Each forced edge contributes a unit clause, and so may make a problem unsatisfiable (and lower the resulting Ramsey number).

The text form is a comma separated list `"i j c, i j c, …"` with `c` one of `r` or `b`:

```rust
# use ordered_ramsey::builder::conditions::parse_conditions;
# use ordered_ramsey::structures::graph::Color;
let forced = parse_conditions("1 4 r, 3 5 b", 5).unwrap();
assert_eq!(forced.len(), 2);
assert_eq!(forced[1].color(), Color::Blue);

assert!(parse_conditions("", 5).unwrap().is_empty());
assert!(parse_conditions("1 6 r", 5).is_err());
```
*/

use crate::{
    structures::{
        clause::CClause,
        edge::{Edge, Vertex},
        graph::{self, Color},
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// An edge paired with the color it is required to have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ForcedEdge {
    edge: Edge,
    color: Color,
}

impl ForcedEdge {
    pub fn new(i: Vertex, j: Vertex, color: Color) -> Result<Self, err::GraphError> {
        Ok(ForcedEdge {
            edge: Edge::new(i, j)?,
            color,
        })
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Checks the edge lies within a graph on `order` vertices.
    pub fn check_range(&self, order: Vertex) -> Result<(), err::ModelError> {
        let (low, high) = self.edge.pair();
        match low >= 1 && high <= order {
            true => Ok(()),
            false => Err(err::ModelError::ForcedEdgeOutOfRange(low, high)),
        }
    }

    /// The unit clause requiring the color of the edge on a graph of `order` vertices.
    pub fn clause(&self, order: Vertex) -> Result<CClause, err::ErrorKind> {
        self.check_range(order)?;
        let variable = self.edge.variable(order)?;
        Ok(vec![IntLiteral::of_color(variable, self.color)])
    }
}

impl std::fmt::Display for ForcedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.edge, self.color)
    }
}

/// Parses forced edges for a graph on `order` vertices.
///
/// Empty or whitespace-only text is no conditions.
pub fn parse_conditions(text: &str, order: Vertex) -> Result<Vec<ForcedEdge>, err::ErrorKind> {
    let mut conditions = Vec::default();
    for (edge, color) in graph::parse_colored_edges(text)? {
        let forced = ForcedEdge { edge, color };
        forced.check_range(order)?;
        conditions.push(forced);
    }
    Ok(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_nothing() {
        assert_eq!(parse_conditions("  \n ", 4), Ok(vec![]));
    }

    #[test]
    fn range() {
        assert_eq!(
            parse_conditions("1 2 r, 0 3 b", 4),
            Err(err::ErrorKind::Model(err::ModelError::ForcedEdgeOutOfRange(0, 3)))
        );
        assert_eq!(
            parse_conditions("1 2 r, 1 2 x", 4),
            Err(err::ErrorKind::Parse(err::ParseError::Condition(1)))
        );
    }

    #[test]
    fn unit_clauses() {
        let red = ForcedEdge::new(2, 1, Color::Red).unwrap();
        assert_eq!(red.clause(4), Ok(vec![-1]));

        let blue = ForcedEdge::new(3, 4, Color::Blue).unwrap();
        assert_eq!(blue.clause(4), Ok(vec![11]));
        assert_eq!(blue.to_string(), "3 4 b");

        assert_eq!(
            blue.clause(3),
            Err(err::ErrorKind::Model(err::ModelError::ForcedEdgeOutOfRange(3, 4)))
        );
    }
}
