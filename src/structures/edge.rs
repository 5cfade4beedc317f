/*!
Edges of an ordered graph on `n` vertices, and their numbering as variables.

An edge `(i, j)` with `1 ≤ i < j ≤ n` is numbered `(i - 1) * n + (j - 1)`.
The numbering is not dense --- not every integer below `n²` is an edge --- though it is invertible given `n`: `i = ⌈v / n⌉` and `j = (v mod n) + 1`.
As `j ≥ 2`, no edge is numbered `0`, and so every edge variable is also a valid DIMACS atom.

```rust
# use ordered_ramsey::structures::edge::{decode, encode};
assert_eq!(encode(2, 4, 5), Ok(8));
assert_eq!(encode(4, 2, 5), Ok(8));
assert_eq!(decode(8, 5), Ok((2, 4)));
```

Arithmetic is on [u32], which is ample for any order permitted by a [SubsetMask](crate::generic::subsets::SubsetMask).
*/

use crate::types::err::{self};

/// A vertex of an ordered graph, from `1`.
pub type Vertex = u32;

/// The variable associated with an edge.
pub type EdgeVariable = u32;

/// Returns the variable of the edge `(i, j)` on `n` vertices.
pub fn encode(i: Vertex, j: Vertex, n: Vertex) -> Result<EdgeVariable, err::CodecError> {
    if i == j {
        return Err(err::CodecError::EqualVertices(i));
    }
    for vertex in [i, j] {
        if vertex < 1 || vertex > n {
            return Err(err::CodecError::VertexOutOfRange(vertex, n));
        }
    }

    let (i, j) = if i < j { (i, j) } else { (j, i) };
    Ok((i - 1) * n + (j - 1))
}

/// Returns the edge `(i, j)`, with `i < j`, of a variable on `n` vertices.
pub fn decode(variable: EdgeVariable, n: Vertex) -> Result<(Vertex, Vertex), err::CodecError> {
    if n == 0 {
        return Err(err::CodecError::InvalidVariable(variable, n));
    }

    let i = variable.div_ceil(n);
    let j = (variable % n) + 1;

    match 1 <= i && i < j && j <= n {
        true => Ok((i, j)),
        false => Err(err::CodecError::InvalidVariable(variable, n)),
    }
}

/// An undirected edge, stored with the lower vertex first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    low: Vertex,
    high: Vertex,
}

impl Edge {
    /// The edge between `i` and `j`, in either order.
    pub fn new(i: Vertex, j: Vertex) -> Result<Self, err::GraphError> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Ok(Edge { low: i, high: j }),
            std::cmp::Ordering::Greater => Ok(Edge { low: j, high: i }),
            std::cmp::Ordering::Equal => Err(err::GraphError::SelfLoop(i)),
        }
    }

    /// The edge of some variable on `n` vertices.
    pub fn from_variable(variable: EdgeVariable, n: Vertex) -> Result<Self, err::CodecError> {
        let (low, high) = decode(variable, n)?;
        Ok(Edge { low, high })
    }

    pub fn low(&self) -> Vertex {
        self.low
    }

    pub fn high(&self) -> Vertex {
        self.high
    }

    pub fn pair(&self) -> (Vertex, Vertex) {
        (self.low, self.high)
    }

    /// The variable of the edge on `n` vertices.
    pub fn variable(&self, n: Vertex) -> Result<EdgeVariable, err::CodecError> {
        encode(self.low, self.high, n)
    }

    /// The image of the edge under the reflection `x ↦ n + 1 - x`.
    ///
    /// The edge must lie within `1..=n`.
    pub fn reflect(&self, n: Vertex) -> Edge {
        Edge {
            low: n + 1 - self.high,
            high: n + 1 - self.low,
        }
    }

    /// Whether the edge is its own reflection on `n` vertices.
    pub fn is_self_reflective(&self, n: Vertex) -> bool {
        self.low + self.high == n + 1
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.low, self.high)
    }
}

/// All edges on `n` vertices, in lexicographic order.
pub fn complete_edges(n: Vertex) -> impl Iterator<Item = Edge> {
    (1..=n).flat_map(move |low| ((low + 1)..=n).map(move |high| Edge { low, high }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for n in 2..=24 {
            for i in 1..=n {
                for j in (i + 1)..=n {
                    let variable = encode(i, j, n).unwrap();
                    assert_eq!(decode(variable, n), Ok((i, j)));
                }
            }
        }
    }

    #[test]
    fn injective() {
        let n = 11;
        let mut variables = complete_edges(n)
            .map(|edge| edge.variable(n).unwrap())
            .collect::<Vec<_>>();
        let count = variables.len();
        variables.sort_unstable();
        variables.dedup();
        assert_eq!(variables.len(), count);
        assert_eq!(count as u32, n * (n - 1) / 2);
    }

    #[test]
    fn codec_errors() {
        assert_eq!(encode(3, 3, 5), Err(err::CodecError::EqualVertices(3)));
        assert_eq!(encode(0, 3, 5), Err(err::CodecError::VertexOutOfRange(0, 5)));
        assert_eq!(encode(2, 6, 5), Err(err::CodecError::VertexOutOfRange(6, 5)));

        // 0 would be (0, 1), and multiples of n would be (k, 1).
        assert_eq!(decode(0, 5), Err(err::CodecError::InvalidVariable(0, 5)));
        assert_eq!(decode(10, 5), Err(err::CodecError::InvalidVariable(10, 5)));
        // (3, 2) is not in canonical order.
        assert_eq!(decode(11, 5), Err(err::CodecError::InvalidVariable(11, 5)));
        assert_eq!(decode(4, 0), Err(err::CodecError::InvalidVariable(4, 0)));
    }

    #[test]
    fn reflection() {
        let n = 6;
        let edge = Edge::new(1, 3).unwrap();
        assert_eq!(edge.reflect(n), Edge::new(4, 6).unwrap());
        assert_eq!(edge.reflect(n).reflect(n), edge);
        assert!(Edge::new(2, 5).unwrap().is_self_reflective(n));
        assert_eq!(
            complete_edges(n).filter(|e| e.is_self_reflective(n)).count(),
            (n / 2) as usize
        );
    }

    #[test]
    fn normalised() {
        assert_eq!(Edge::new(5, 2).unwrap().pair(), (2, 5));
        assert_eq!(Edge::new(4, 4), Err(err::GraphError::SelfLoop(4)));
    }
}
