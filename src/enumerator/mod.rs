/*!
An enumerator of the colorings of a problem, through repeated calls to a [Backend].

An [Enumerator] owns a formula, and each call to [next](Enumerator::next):
1. Calls the backend on the formula.
2. If the formula is satisfiable, [decodes](decode::decode) the model to a coloring and adds the [blocking clause](crate::structures::assignment::Assignment::blocking_clause) of the model to the formula.
3. Otherwise, notes the enumeration is exhausted.

As a model is blocked once found, no coloring is returned twice.
A backend which gives up (e.g. on a time limit) ends the enumeration as though the formula were unsatisfiable, though the [Exhaustion] noted is [GaveUp](Exhaustion::GaveUp) rather than [Unsatisfiable](Exhaustion::Unsatisfiable).

# Example
```rust
# use ordered_ramsey::backend::cdcl::Cdcl;
# use ordered_ramsey::builder::Problem;
# use ordered_ramsey::enumerator::{Enumerator, Step};
# use ordered_ramsey::structures::graph::OrderedGraph;
let triangle = OrderedGraph::complete(3);
let problem = Problem::diagonal(5, triangle.clone());
let mut enumerator = Enumerator::from_problem(&problem, Cdcl::default()).unwrap();

let mut count = 0;
while let Step::Found(coloring) = enumerator.next().unwrap() {
    assert!(coloring.avoids(&triangle, &triangle));
    count += 1;
}
assert!(count > 0);
assert_eq!(enumerator.next(), Ok(Step::Exhausted));
```

# States

Each enumerator begins [Active](EnumeratorState::Active).
- On an unsatisfiable (or unknown) round the enumerator moves to [Exhausted](EnumeratorState::Exhausted), and the backend is not called again.
  The [exhaustion](Enumerator::exhaustion) notes which.
- On a cancelled round the enumerator moves to [Cancelled](EnumeratorState::Cancelled), and every later call to `next` is an error.
- On any other error the state and formula are untouched, and `next` may be called again.
*/

mod counters;
pub use counters::Counters;
pub mod decode;

use std::time::Instant;

use crate::{
    backend::{Backend, Outcome},
    builder::Problem,
    config::Config,
    generic::cancel::CancelToken,
    misc::log::targets::{self},
    structures::{edge::Vertex, formula::Formula, graph::Coloring},
    types::err::{self},
};

/// The state of an enumerator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumeratorState {
    /// Further colorings may exist.
    Active,

    /// No further rounds are made, see [Enumerator::exhaustion].
    Exhausted,

    /// A round was cancelled, and the enumerator should be discarded.
    Cancelled,
}

impl std::fmt::Display for EnumeratorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Why an enumerator is exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exhaustion {
    /// The backend found the formula unsatisfiable, and so every coloring has been found.
    Unsatisfiable,

    /// The backend gave up, and further colorings may exist.
    GaveUp,
}

impl std::fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::GaveUp => write!(f, "GaveUp"),
        }
    }
}

/// The result of a (successful) round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Found(Coloring),
    Exhausted,
}

pub struct Enumerator<B: Backend> {
    order: Vertex,
    formula: Formula,
    backend: B,
    state: EnumeratorState,
    exhaustion: Option<Exhaustion>,
    cancel: CancelToken,
    counters: Counters,
}

impl<B: Backend> Enumerator<B> {
    /// An enumerator over the models of `formula`, read as colorings on `order` vertices.
    pub fn new(order: Vertex, formula: Formula, backend: B) -> Self {
        Enumerator {
            order,
            formula,
            backend,
            state: EnumeratorState::Active,
            exhaustion: None,
            cancel: CancelToken::default(),
            counters: Counters::default(),
        }
    }

    /// An enumerator over the colorings of a problem.
    pub fn from_problem(problem: &Problem, backend: B) -> Result<Self, err::ErrorKind> {
        Ok(Enumerator::new(problem.order(), problem.formula()?, backend))
    }

    /// Replaces the cancel token of the enumerator.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// A handle to the cancel token of the enumerator, for use from some other thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn order(&self) -> Vertex {
        self.order
    }

    /// The current formula, including any blocking clauses.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn state(&self) -> EnumeratorState {
        self.state
    }

    /// Why the enumerator is exhausted, if exhausted.
    pub fn exhaustion(&self) -> Option<Exhaustion> {
        self.exhaustion
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The next coloring, or exhaustion.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Step, err::ErrorKind> {
        match self.state {
            EnumeratorState::Active => {}
            EnumeratorState::Exhausted => return Ok(Step::Exhausted),
            EnumeratorState::Cancelled => return Err(err::ErrorKind::from(err::StateError::Cancelled)),
        }

        if self.cancel.is_cancelled() {
            self.state = EnumeratorState::Cancelled;
            return Err(err::ErrorKind::Cancelled);
        }

        self.counters.rounds += 1;
        let round = self.counters.rounds;
        log::trace!(target: targets::ENUMERATION, "Round {round} on {} clauses with {}", self.formula.clause_count(), self.backend.name());

        let start = Instant::now();
        let outcome = self.backend.solve(&self.formula, &self.cancel);
        self.counters.backend_time += start.elapsed();

        match outcome {
            Err(err::ErrorKind::Cancelled) => {
                log::info!(target: targets::ENUMERATION, "Round {round} cancelled");
                self.state = EnumeratorState::Cancelled;
                Err(err::ErrorKind::Cancelled)
            }

            Err(e) => {
                log::info!(target: targets::ENUMERATION, "Round {round} failed: {e}");
                Err(e)
            }

            Ok(Outcome::Unsatisfiable) => {
                log::info!(target: targets::ENUMERATION, "Exhausted after {} colorings", self.counters.found);
                self.state = EnumeratorState::Exhausted;
                self.exhaustion = Some(Exhaustion::Unsatisfiable);
                Ok(Step::Exhausted)
            }

            Ok(Outcome::Unknown) => {
                log::info!(target: targets::ENUMERATION, "{} gave up after {} colorings", self.backend.name(), self.counters.found);
                self.state = EnumeratorState::Exhausted;
                self.exhaustion = Some(Exhaustion::GaveUp);
                Ok(Step::Exhausted)
            }

            Ok(Outcome::Satisfiable(model)) => {
                let coloring = decode::decode(self.order, &model)?;
                self.formula.add_clause(model.blocking_clause());
                self.counters.found += 1;
                log::debug!(target: targets::ENUMERATION, "Round {round} found: {coloring}");
                Ok(Step::Found(coloring))
            }
        }
    }

    /// An iterator over the remaining colorings.
    ///
    /// The iterator ends on exhaustion, or after the first error.
    pub fn colorings(&mut self) -> Colorings<'_, B> {
        Colorings {
            enumerator: self,
            done: false,
        }
    }
}

impl Enumerator<Box<dyn Backend + Send>> {
    /// An enumerator over the colorings of a problem, with the backend of a config.
    pub fn from_config(problem: &Problem, config: &Config) -> Result<Self, err::ErrorKind> {
        Enumerator::from_problem(problem, config.backend())
    }
}

/// An iterator over the colorings of an [Enumerator].
pub struct Colorings<'e, B: Backend> {
    enumerator: &'e mut Enumerator<B>,
    done: bool,
}

impl<B: Backend> Iterator for Colorings<'_, B> {
    type Item = Result<Coloring, err::ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.enumerator.next() {
            Ok(Step::Found(coloring)) => Some(Ok(coloring)),
            Ok(Step::Exhausted) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::assignment::Assignment;

    /// A backend which returns the given outcomes, in order.
    struct Scripted {
        outcomes: Vec<Result<Outcome, err::ErrorKind>>,
        calls: usize,
    }

    impl Backend for Scripted {
        fn solve(&mut self, _: &Formula, _: &CancelToken) -> Result<Outcome, err::ErrorKind> {
            self.calls += 1;
            match self.outcomes.is_empty() {
                true => panic!("called after the script ended"),
                false => self.outcomes.remove(0),
            }
        }

        fn name(&self) -> String {
            "scripted".to_string()
        }
    }

    fn scripted(outcomes: Vec<Result<Outcome, err::ErrorKind>>) -> Enumerator<Scripted> {
        let formula = [vec![1, 2, 5], vec![-1, -2, -5]].into_iter().collect();
        Enumerator::new(3, formula, Scripted { outcomes, calls: 0 })
    }

    fn model(pairs: &[(u32, bool)]) -> Outcome {
        Outcome::Satisfiable(pairs.iter().copied().collect::<Assignment>())
    }

    #[test]
    fn exhaustion_is_permanent() {
        let mut enumerator = scripted(vec![
            Ok(model(&[(1, true), (2, false), (5, false)])),
            Ok(Outcome::Unknown),
        ]);

        assert!(matches!(enumerator.next(), Ok(Step::Found(_))));
        assert_eq!(enumerator.formula().clause_count(), 3);
        assert_eq!(enumerator.formula().clauses()[2], vec![-1, 2, 5]);

        for _ in 0..3 {
            assert_eq!(enumerator.next(), Ok(Step::Exhausted));
        }
        assert_eq!(enumerator.backend().calls, 2);
        assert_eq!(enumerator.state(), EnumeratorState::Exhausted);
        assert_eq!(enumerator.exhaustion(), Some(Exhaustion::GaveUp));
        assert_eq!(enumerator.counters().found, 1);
    }

    #[test]
    fn errors_leave_the_formula() {
        let mut enumerator = scripted(vec![
            Err(err::ErrorKind::from(err::BackendError::Terminated)),
            Ok(Outcome::Unsatisfiable),
        ]);

        assert_eq!(
            enumerator.next(),
            Err(err::ErrorKind::Backend(err::BackendError::Terminated))
        );
        assert_eq!(enumerator.formula().clause_count(), 2);
        assert_eq!(enumerator.state(), EnumeratorState::Active);
        assert_eq!(enumerator.exhaustion(), None);
        assert_eq!(enumerator.next(), Ok(Step::Exhausted));
        assert_eq!(enumerator.exhaustion(), Some(Exhaustion::Unsatisfiable));
    }

    #[test]
    fn cancellation_is_terminal() {
        let mut enumerator = scripted(vec![Err(err::ErrorKind::Cancelled)]);

        assert_eq!(enumerator.next(), Err(err::ErrorKind::Cancelled));
        assert_eq!(enumerator.state(), EnumeratorState::Cancelled);
        assert_eq!(
            enumerator.next(),
            Err(err::ErrorKind::State(err::StateError::Cancelled))
        );

        let mut cancelled = scripted(vec![]);
        cancelled.cancel_token().cancel();
        assert_eq!(cancelled.next(), Err(err::ErrorKind::Cancelled));
        assert_eq!(cancelled.backend().calls, 0);
    }
}
