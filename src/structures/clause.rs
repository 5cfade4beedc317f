/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.

The canonical representation of a clause is as a vector of literals.

```rust
# use ordered_ramsey::structures::assignment::Assignment;
# use ordered_ramsey::structures::clause::Clause;
let clause = vec![1, -2, 3];

assert_eq!(clause.size(), 3);
assert_eq!(clause.as_dimacs(true), "1 -2 3 0");

let mut assignment = Assignment::default();
assignment.set(1, false);
assignment.set(2, true);
assignment.set(3, false);
assert!(!clause.satisfied_on(&assignment));

assignment.set(2, false);
assert!(clause.satisfied_on(&assignment));
```

- The empty clause is always false (never true).
- Single literals are identified with the clause containing that literal (aka. a 'unit' clause).
*/

use crate::structures::{
    assignment::Assignment,
    edge::EdgeVariable,
    literal::{IntLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order of addition.
    fn literals(&self) -> impl Iterator<Item = &IntLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all variables in the clause.
    fn variables(&self) -> impl Iterator<Item = EdgeVariable> {
        self.literals().map(|literal| literal.variable())
    }

    /// Whether some literal of the clause is true on the assignment.
    ///
    /// Variables without a value on the assignment make no literal true.
    fn satisfied_on(&self, assignment: &Assignment) -> bool {
        self.literals()
            .any(|literal| assignment.value_of(literal.variable()) == Some(literal.polarity()))
    }
}

/// The canonical implementation of a clause.
pub type CClause = Vec<IntLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(literal.to_string().as_str());
            the_string.push(' ');
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &IntLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimacs() {
        let clause: CClause = vec![4, -9];
        assert_eq!(clause.as_dimacs(false), "4 -9");
        assert_eq!(clause.as_dimacs(true), "4 -9 0");

        let empty: CClause = vec![];
        assert_eq!(empty.as_dimacs(true), "0");
        assert!(!empty.satisfied_on(&Assignment::default()));
    }
}
