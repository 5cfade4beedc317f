/*!
Backends decide the satisfiability of a formula, and return a model when one exists.

A backend is used for one round of [enumeration](crate::enumerator) at a time, and is expected to poll the [CancelToken] it is given while running.

Two backends are provided:
- [ExternalSolver](external::ExternalSolver), which writes the formula to a file and calls a DIMACS solver such as minisat or glucose.
- [Cdcl](cdcl::Cdcl), an in-process clause learning solver, used when no external solver is available.
*/

pub mod cdcl;
pub mod external;

use crate::{
    generic::cancel::CancelToken,
    structures::{assignment::Assignment, formula::Formula},
    types::err::{self},
};

/// The outcome of a call to a backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The formula is satisfiable, with the given model.
    Satisfiable(Assignment),

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The backend gave up, e.g. on a time limit.
    Unknown,
}

/// Something able to decide the satisfiability of a formula.
pub trait Backend {
    /// Decides the satisfiability of `formula`.
    ///
    /// Returns [ErrorKind::Cancelled](err::ErrorKind::Cancelled) if `cancel` was set before a result was known.
    fn solve(&mut self, formula: &Formula, cancel: &CancelToken) -> Result<Outcome, err::ErrorKind>;

    /// A short name, for logs.
    fn name(&self) -> String;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn solve(&mut self, formula: &Formula, cancel: &CancelToken) -> Result<Outcome, err::ErrorKind> {
        (**self).solve(formula, cancel)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
