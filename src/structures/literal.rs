/*!
Literals are edge variables paired with a (boolean) polarity.

The polarity of a literal is read as a color: a literal is true exactly when its edge is blue, and so the negation of a literal states that its edge is red.

The representation is an integer, with the sign of the integer indicating the polarity of the literal, as in the DIMACS format.

```rust
# use ordered_ramsey::structures::literal::{IntLiteral, Literal};
let literal = IntLiteral::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.variable(), 79);
assert!(!literal.negate().polarity());
```
*/

use crate::structures::{edge::EdgeVariable, graph::Color};

/// Something which has methods for returning a variable and a polarity.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing a variable with a boolean.
    fn new(variable: EdgeVariable, polarity: bool) -> Self;

    /// The literal asserting the edge of the variable has the given color.
    fn of_color(variable: EdgeVariable, color: Color) -> Self {
        Self::new(variable, color == Color::Blue)
    }

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The variable of the literal.
    fn variable(&self) -> EdgeVariable;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The color the literal asserts of its edge.
    fn color(&self) -> Color {
        match self.polarity() {
            true => Color::Blue,
            false => Color::Red,
        }
    }

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(variable: EdgeVariable, polarity: bool) -> Self {
        match polarity {
            true => variable as IntLiteral,
            false => -(variable as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn variable(&self) -> EdgeVariable {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert_eq!(IntLiteral::of_color(7, Color::Blue), 7);
        assert_eq!(IntLiteral::of_color(7, Color::Red), -7);
        assert_eq!((-7 as IntLiteral).color(), Color::Red);
        assert_eq!((7 as IntLiteral).negate().variable(), 7);
    }
}
