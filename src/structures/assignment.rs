/*!
Assignments of values to (edge) variables, as returned by a [backend](crate::backend).

True is read as blue and false as red.
An assignment need not be total, as a backend may omit variables whose value does not matter.
*/

use std::collections::BTreeMap;

use crate::structures::{
    clause::CClause,
    edge::EdgeVariable,
    literal::{IntLiteral, Literal},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<EdgeVariable, bool>,
}

impl Assignment {
    /// Sets the value of a variable, returning any previous value.
    pub fn set(&mut self, variable: EdgeVariable, value: bool) -> Option<bool> {
        self.values.insert(variable, value)
    }

    pub fn value_of(&self, variable: EdgeVariable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    /// The number of variables with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pairs of variables and values, in increasing order of variable.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeVariable, bool)> + '_ {
        self.values.iter().map(|(variable, value)| (*variable, *value))
    }

    /// The assignment as literals, each true on the assignment.
    pub fn literals(&self) -> impl Iterator<Item = IntLiteral> + '_ {
        self.iter()
            .map(|(variable, value)| IntLiteral::new(variable, value))
    }

    /// The clause false on exactly this assignment, of each variable with its opposite value.
    ///
    /// Adding the clause to a formula removes the assignment (and any extension of it) from the models of the formula.
    pub fn blocking_clause(&self) -> CClause {
        self.literals().map(|literal| literal.negate()).collect()
    }
}

impl FromIterator<(EdgeVariable, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (EdgeVariable, bool)>>(iter: T) -> Self {
        Assignment {
            values: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<IntLiteral> for Assignment {
    fn from_iter<T: IntoIterator<Item = IntLiteral>>(iter: T) -> Self {
        iter.into_iter()
            .map(|literal| (literal.variable(), literal.polarity()))
            .collect()
    }
}
