//! Reading a coloring from an assignment.

use crate::{
    structures::{
        assignment::Assignment,
        edge::{Edge, Vertex},
        graph::{Color, Coloring},
    },
    types::err::{self},
};

/// The coloring of an assignment over the edge variables of a graph on `order` vertices.
///
/// Each variable with a value contributes its edge, blue if true and red if false.
/// Variables without a value contribute nothing, and so the coloring need not be complete.
///
/// ```rust
/// # use ordered_ramsey::enumerator::decode::decode;
/// # use ordered_ramsey::structures::assignment::Assignment;
/// let literals: [i32; 2] = [1, -5];
/// let assignment = literals.into_iter().collect::<Assignment>();
/// let coloring = decode(3, &assignment).unwrap();
///
/// assert_eq!(coloring.to_string(), "1 2 b,2 3 r");
/// assert_eq!(coloring.color_of_pair(1, 3), None);
/// ```
pub fn decode(order: Vertex, assignment: &Assignment) -> Result<Coloring, err::ErrorKind> {
    let mut coloring = Coloring::new(order);

    for (variable, value) in assignment.iter() {
        let edge = Edge::from_variable(variable, order)?;
        let color = match value {
            true => Color::Blue,
            false => Color::Red,
        };
        coloring.insert(edge, color)?;
    }

    Ok(coloring)
}
