/*!
Conflict analysis.

A conflicting clause is resolved against the reasons of its literals, in reverse trail order, until only one literal of the current level remains.
That literal is the first unique implication point, and the resolvent (with the literal negated) is learnt.
The resolvent is false on the trail, and after backjumping to the greatest level among its other literals it asserts the negated implication point.

Each variable met during analysis has its activity bumped.
*/

use super::{Search, SearchLiteral};

impl Search {
    /// Analyses the conflict on the clause at `key`, at some level above zero.
    ///
    /// Returns the learnt clause, with the asserted literal first and (for clauses of two or more literals) a literal of the backjump level second, together with the backjump level.
    pub(super) fn analyse(&mut self, key: usize) -> (Vec<SearchLiteral>, usize) {
        let level = self.level();
        let mut learnt = vec![SearchLiteral::default()];
        let mut pending = 0;
        let mut trail_position = self.trail.len();
        let mut resolved: Option<SearchLiteral> = None;
        let mut reason = Some(key);

        loop {
            if let Some(key) = reason {
                for position in 0..self.clauses[key].len() {
                    let literal = self.clauses[key][position];
                    let index = literal.index();
                    if Some(literal) == resolved || self.seen[index] || self.levels[index] == 0 {
                        continue;
                    }

                    self.seen[index] = true;
                    self.bump_activity(index);
                    match self.levels[index] == level {
                        true => pending += 1,
                        false => learnt.push(literal),
                    }
                }
            }

            let literal = loop {
                trail_position -= 1;
                let literal = self.trail[trail_position];
                if self.seen[literal.index()] {
                    break literal;
                }
            };

            self.seen[literal.index()] = false;
            pending -= 1;

            if pending == 0 {
                learnt[0] = literal.negate();
                break;
            }

            reason = self.reasons[literal.index()];
            resolved = Some(literal);
        }

        for literal in &learnt[1..] {
            self.seen[literal.index()] = false;
        }

        let backjump_level = match learnt.len() {
            1 => 0,
            _ => {
                let mut deepest = 1;
                for position in 2..learnt.len() {
                    if self.levels[learnt[position].index()] > self.levels[learnt[deepest].index()] {
                        deepest = position;
                    }
                }
                learnt.swap(1, deepest);
                self.levels[learnt[1].index()]
            }
        };

        (learnt, backjump_level)
    }
}
