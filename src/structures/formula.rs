/*!
A formula in conjunctive normal form, as an ordered collection of clauses.

Clauses are only ever added to a formula, never removed, and in the order of addition.
*/

use std::collections::BTreeSet;

use crate::structures::{
    assignment::Assignment,
    clause::{CClause, Clause},
    edge::EdgeVariable,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<CClause>,
}

impl Formula {
    pub fn add_clause(&mut self, clause: CClause) {
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The distinct variables of the formula, in increasing order.
    pub fn variables(&self) -> BTreeSet<EdgeVariable> {
        self.clauses.iter().flat_map(|clause| clause.variables()).collect()
    }

    /// Whether every clause of the formula is satisfied on the assignment.
    pub fn satisfied_on(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|clause| clause.satisfied_on(assignment))
    }
}

impl Extend<CClause> for Formula {
    fn extend<T: IntoIterator<Item = CClause>>(&mut self, iter: T) {
        self.clauses.extend(iter)
    }
}

impl FromIterator<CClause> for Formula {
    fn from_iter<T: IntoIterator<Item = CClause>>(iter: T) -> Self {
        Formula {
            clauses: iter.into_iter().collect(),
        }
    }
}
