/*!
The clause forbidding a monochromatic copy of a pattern on one subset of vertices.

The members of the subset, from lowest to highest, are relabelled `1..=m` and so take the part of the vertices of the pattern in order.
As the relabelling preserves order, only order-preserving copies of the pattern are considered, which is what distinguishes ordered Ramsey problems.

For each edge of the pattern the literal of the relabelled edge is collected, and the clause is the disjunction of these literals.
- Positive literals state 'not every edge of this copy is red' (a red pattern).
- Inverted (negative) literals state 'not every edge of this copy is blue' (a blue pattern).

```rust
# use ordered_ramsey::builder::pattern::pattern_clause;
# use ordered_ramsey::structures::graph::OrderedGraph;
let path = OrderedGraph::from_edges(3, [(1, 2), (2, 3)]).unwrap();

// Vertices 2, 4 and 5 of a graph on 5 vertices take the part of 1, 2 and 3.
let clause = pattern_clause(0b11010, &path, 5, false).unwrap();
// The edges (2, 4) and (4, 5).
assert_eq!(clause, vec![8, 19]);

let clause = pattern_clause(0b11010, &path, 5, true).unwrap();
assert_eq!(clause, vec![-8, -19]);
```
*/

use crate::{
    generic::subsets::{self, SubsetMask},
    structures::{
        clause::CClause,
        edge::{self, Vertex},
        graph::OrderedGraph,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// The clause over edges of the graph on `order` vertices induced by `mask` which is false exactly when `pattern` appears on the mask in a single color.
///
/// The color is red, unless `invert` is set, in which case the color is blue.
pub fn pattern_clause(
    mask: SubsetMask,
    pattern: &OrderedGraph,
    order: Vertex,
    invert: bool,
) -> Result<CClause, err::ErrorKind> {
    let mask_size = mask.count_ones();
    if mask_size != pattern.order() {
        return Err(err::ErrorKind::from(err::ModelError::MaskMismatch {
            mask_size,
            pattern: pattern.order(),
        }));
    }

    let labels = subsets::members(mask).collect::<Vec<Vertex>>();

    let mut clause = CClause::with_capacity(pattern.edge_count());
    for pattern_edge in pattern.edges() {
        let u = labels[(pattern_edge.low() - 1) as usize];
        let v = labels[(pattern_edge.high() - 1) as usize];
        if u == v {
            return Err(err::ErrorKind::from(err::ModelError::SelfLoop(u)));
        }

        let variable = edge::encode(u, v, order)?;
        clause.push(IntLiteral::new(variable, !invert));
    }

    Ok(clause)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch() {
        let path = OrderedGraph::from_edges(3, [(1, 2), (2, 3)]).unwrap();
        assert_eq!(
            pattern_clause(0b1111, &path, 5, false),
            Err(err::ErrorKind::Model(err::ModelError::MaskMismatch {
                mask_size: 4,
                pattern: 3
            }))
        );
    }

    #[test]
    fn outside_target() {
        let edge = OrderedGraph::from_edges(2, [(1, 2)]).unwrap();
        assert_eq!(
            pattern_clause(0b1001, &edge, 3, false),
            Err(err::ErrorKind::Codec(err::CodecError::VertexOutOfRange(4, 3)))
        );
    }

    #[test]
    fn order_preserved() {
        // A single edge from the first to the last vertex of a pattern is placed between the extremes of the subset.
        let spread = OrderedGraph::from_edges(3, [(1, 3)]).unwrap();
        let clause = pattern_clause(0b10101, &spread, 5, false).unwrap();
        assert_eq!(clause, vec![edge::encode(1, 5, 5).unwrap() as IntLiteral]);
    }
}
