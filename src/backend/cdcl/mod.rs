/*!
An in-process conflict-driven clause learning solver.

Each call to [solve](Backend::solve) runs a fresh search over the formula:
- Clauses are watched on two literals, and binary clauses are kept on a separate list ([watches]).
- On a conflict, a clause is learnt from the first unique implication point and the search backjumps to the level at which the clause asserts ([analysis]).
- Decisions are made on the variable of greatest activity, with the value the variable last held (initially false, read as red).
- The search restarts after a count of conflicts following the [Luby sequence](crate::generic::luby), scaled by [Cdcl::restart_unit].

The cancel token is checked before each round of propagation.

```rust
# use ordered_ramsey::backend::{cdcl::Cdcl, Backend, Outcome};
# use ordered_ramsey::generic::cancel::CancelToken;
# use ordered_ramsey::structures::formula::Formula;
let formula = [vec![1, 2], vec![-1], vec![-2, 3]].into_iter().collect::<Formula>();

match Cdcl::default().solve(&formula, &CancelToken::default()) {
    Ok(Outcome::Satisfiable(model)) => assert!(formula.satisfied_on(&model)),
    _ => panic!(),
}
```
*/

mod analysis;
mod watches;

use std::collections::HashMap;

use watches::Watches;

use crate::{
    backend::{Backend, Outcome},
    generic::{cancel::CancelToken, index_heap::IndexHeap, luby::Luby},
    misc::log::targets::{self},
    structures::{
        assignment::Assignment,
        clause::Clause,
        edge::EdgeVariable,
        formula::Formula,
        literal::Literal,
    },
    types::err::{self},
};

/// A literal over the dense indices of a search, as twice the index plus one if the polarity is true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct SearchLiteral(usize);

impl SearchLiteral {
    fn new(index: usize, polarity: bool) -> Self {
        SearchLiteral(2 * index + polarity as usize)
    }

    fn index(&self) -> usize {
        self.0 >> 1
    }

    fn polarity(&self) -> bool {
        self.0 & 1 == 1
    }

    fn negate(&self) -> Self {
        SearchLiteral(self.0 ^ 1)
    }

    /// The position of the literal on a watch list.
    fn code(&self) -> usize {
        self.0
    }
}

/// The value of `literal` on `values`, if any.
fn value_of(values: &[Option<bool>], literal: SearchLiteral) -> Option<bool> {
    values[literal.index()].map(|value| value == literal.polarity())
}

/// The state of a single search.
struct Search {
    /// Original clauses of two or more literals, followed by learnt clauses.
    clauses: Vec<Vec<SearchLiteral>>,
    watches: Watches,

    values: Vec<Option<bool>>,
    levels: Vec<usize>,
    /// The key of the clause which asserted a value, if any.
    reasons: Vec<Option<usize>>,
    /// The value each variable last held.
    phases: Vec<bool>,

    trail: Vec<SearchLiteral>,
    /// The length of the trail when each decision was made.
    level_starts: Vec<usize>,
    /// The position of the first literal on the trail yet to be propagated.
    queue_head: usize,

    activity: IndexHeap<f64>,
    bump: f64,
    decay: f64,
    /// Scratch space for analysis, clear between conflicts.
    seen: Vec<bool>,
}

impl Search {
    fn new(variable_count: usize, decay: f64) -> Self {
        let mut activity = IndexHeap::default();
        for index in 0..variable_count {
            activity.add(index, 0.0);
            activity.activate(index);
        }

        Search {
            clauses: Vec::default(),
            watches: Watches::new(2 * variable_count),
            values: vec![None; variable_count],
            levels: vec![0; variable_count],
            reasons: vec![None; variable_count],
            phases: vec![false; variable_count],
            trail: Vec::with_capacity(variable_count),
            level_starts: Vec::default(),
            queue_head: 0,
            activity,
            bump: 1.0,
            decay,
            seen: vec![false; variable_count],
        }
    }

    fn level(&self) -> usize {
        self.level_starts.len()
    }

    fn assign(&mut self, literal: SearchLiteral, reason: Option<usize>) {
        let index = literal.index();
        self.values[index] = Some(literal.polarity());
        self.levels[index] = self.level();
        self.reasons[index] = reason;
        self.trail.push(literal);
    }

    /// Adds an original clause, before any decision.
    ///
    /// Returns false if the clause conflicts with the units added so far.
    fn add_clause(&mut self, mut literals: Vec<SearchLiteral>) -> bool {
        literals.sort_unstable();
        literals.dedup();

        // After sorting, a literal and its negation are adjacent.
        if literals.windows(2).any(|pair| pair[0].index() == pair[1].index()) {
            return true;
        }

        match literals.as_slice() {
            [] => false,

            [unit] => match value_of(&self.values, *unit) {
                Some(value) => value,
                None => {
                    self.assign(*unit, None);
                    true
                }
            },

            _ => {
                let key = self.clauses.len();
                self.watches.watch(key, &literals);
                self.clauses.push(literals);
                true
            }
        }
    }

    /// Adds a learnt clause, and asserts the first literal of the clause.
    fn learn(&mut self, clause: Vec<SearchLiteral>) {
        let Some(asserted) = clause.first().copied() else {
            return;
        };

        match clause.len() {
            1 => self.assign(asserted, None),
            _ => {
                let key = self.clauses.len();
                self.watches.watch(key, &clause);
                self.clauses.push(clause);
                self.assign(asserted, Some(key));
            }
        }
    }

    /// Removes every assignment made after `level`, saving the value of each variable.
    fn backjump(&mut self, level: usize) {
        let Some(start) = self.level_starts.get(level).copied() else {
            return;
        };

        for literal in self.trail.drain(start..) {
            let index = literal.index();
            self.phases[index] = literal.polarity();
            self.values[index] = None;
            self.reasons[index] = None;
            self.activity.activate(index);
        }

        self.level_starts.truncate(level);
        self.queue_head = self.trail.len();
    }

    /// Makes a decision, returning false if every variable has a value.
    fn decide(&mut self) -> bool {
        while let Some(index) = self.activity.pop_max() {
            if self.values[index].is_none() {
                self.level_starts.push(self.trail.len());
                self.assign(SearchLiteral::new(index, self.phases[index]), None);
                return true;
            }
        }
        false
    }

    fn bump_activity(&mut self, index: usize) {
        let bump = self.bump;
        self.activity.apply_to_value_at(index, |activity| activity + bump);

        if *self.activity.value_at(index) > 1e100 {
            self.activity.apply_to_all(|activity| activity * 1e-100);
            self.bump *= 1e-100;
        }
    }

    fn decay_activity(&mut self) {
        self.bump /= self.decay;
    }
}

/// The in-process backend.
#[derive(Clone, Debug)]
pub struct Cdcl {
    /// The count of conflicts before a restart, scaled by the Luby sequence.
    pub restart_unit: u64,

    /// The factor by which activity decays after each conflict.
    pub decay: f64,

    /// Decisions made over every call.
    decisions: usize,

    /// Conflicts found over every call.
    conflicts: usize,
}

impl Default for Cdcl {
    fn default() -> Self {
        Cdcl {
            restart_unit: 100,
            decay: 0.95,
            decisions: 0,
            conflicts: 0,
        }
    }
}

impl Cdcl {
    pub fn decisions(&self) -> usize {
        self.decisions
    }

    pub fn conflicts(&self) -> usize {
        self.conflicts
    }
}

impl Backend for Cdcl {
    fn solve(&mut self, formula: &Formula, cancel: &CancelToken) -> Result<Outcome, err::ErrorKind> {
        let variables = formula.variables().into_iter().collect::<Vec<EdgeVariable>>();
        let index_of = variables
            .iter()
            .enumerate()
            .map(|(index, variable)| (*variable, index))
            .collect::<HashMap<_, _>>();

        let mut search = Search::new(variables.len(), self.decay);

        for clause in formula.clauses() {
            let mut literals = Vec::with_capacity(clause.size());
            for literal in clause.literals() {
                match index_of.get(&literal.variable()) {
                    Some(index) => literals.push(SearchLiteral::new(*index, literal.polarity())),
                    None => {
                        return Err(err::ErrorKind::from(err::BackendError::UnknownVariable(
                            literal.as_int(),
                        )))
                    }
                }
            }

            if !search.add_clause(literals) {
                log::debug!(target: targets::BACKEND, "Unsatisfiable on the original clauses");
                return Ok(Outcome::Unsatisfiable);
            }
        }

        let mut restarts = Luby::default();
        let mut budget = self.restart_unit * restarts.next().unwrap_or(1);

        loop {
            if cancel.is_cancelled() {
                return Err(err::ErrorKind::Cancelled);
            }

            match search.propagate() {
                Some(key) => {
                    self.conflicts += 1;
                    if search.level() == 0 {
                        log::debug!(target: targets::BACKEND, "Unsatisfiable, {} conflicts in total", self.conflicts);
                        return Ok(Outcome::Unsatisfiable);
                    }

                    let (clause, level) = search.analyse(key);
                    search.backjump(level);
                    search.learn(clause);
                    search.decay_activity();
                    budget = budget.saturating_sub(1);
                }

                None if budget == 0 => {
                    log::trace!(target: targets::BACKEND, "Restart after {} conflicts", self.conflicts);
                    search.backjump(0);
                    budget = self.restart_unit * restarts.next().unwrap_or(1);
                }

                None => match search.decide() {
                    true => self.decisions += 1,

                    false => {
                        let model = variables
                            .iter()
                            .zip(&search.values)
                            .map(|(variable, value)| (*variable, value.unwrap_or(false)))
                            .collect::<Assignment>();
                        log::debug!(target: targets::BACKEND, "Satisfiable, {} decisions and {} conflicts in total", self.decisions, self.conflicts);
                        return Ok(Outcome::Satisfiable(model));
                    }
                },
            }
        }
    }

    fn name(&self) -> String {
        "cdcl".to_string()
    }
}
