/*!
Watch lists, and boolean constraint propagation through them.

Each clause of two or more literals is watched by the literals at its first two positions, and so long as neither watched literal is false the clause can neither be unit nor conflict.
When a watched literal becomes false, the clause is visited and some other literal which is not false takes its place.
If no such literal exists the clause asserts its other watched literal, or is a conflict.

Binary clauses are watched on a list of their own, together with the other literal, so propagation through a binary clause never reads the clause.
*/

use super::{value_of, Search, SearchLiteral};

/// A watch on a binary clause, noting the other literal of the clause.
#[derive(Clone, Copy, Debug)]
pub(super) struct BinaryWatch {
    other: SearchLiteral,
    key: usize,
}

#[derive(Debug, Default)]
pub(super) struct Watches {
    /// Binary watches, by literal code.
    binary: Vec<Vec<BinaryWatch>>,
    /// Keys of the long clauses watched by a literal, by literal code.
    long: Vec<Vec<usize>>,
}

impl Watches {
    pub(super) fn new(literal_count: usize) -> Self {
        Watches {
            binary: vec![Vec::default(); literal_count],
            long: vec![Vec::default(); literal_count],
        }
    }

    /// Watches the first two literals of `clause`, stored at `key`.
    pub(super) fn watch(&mut self, key: usize, clause: &[SearchLiteral]) {
        match clause {
            [a, b] => {
                self.binary[a.code()].push(BinaryWatch { other: *b, key });
                self.binary[b.code()].push(BinaryWatch { other: *a, key });
            }

            [a, b, ..] => {
                self.long[a.code()].push(key);
                self.long[b.code()].push(key);
            }

            _ => {}
        }
    }
}

impl Search {
    /// Propagates every assignment on the trail yet to be propagated.
    ///
    /// Returns the key of a conflicting clause, if one was found.
    pub(super) fn propagate(&mut self) -> Option<usize> {
        while let Some(literal) = self.trail.get(self.queue_head).copied() {
            self.queue_head += 1;
            let falsified = literal.negate();

            for position in 0..self.watches.binary[falsified.code()].len() {
                let watch = self.watches.binary[falsified.code()][position];
                match value_of(&self.values, watch.other) {
                    None => self.assign(watch.other, Some(watch.key)),
                    Some(false) => return Some(watch.key),
                    Some(true) => {}
                }
            }

            if let Some(key) = self.propagate_long(falsified) {
                return Some(key);
            }
        }

        None
    }

    fn propagate_long(&mut self, falsified: SearchLiteral) -> Option<usize> {
        let mut list = std::mem::take(&mut self.watches.long[falsified.code()]);
        let mut position = 0;
        let mut conflict = None;

        while position < list.len() {
            let key = list[position];
            let clause = &mut self.clauses[key];

            if clause[0] == falsified {
                clause.swap(0, 1);
            }
            let other = clause[0];

            if value_of(&self.values, other) == Some(true) {
                position += 1;
                continue;
            }

            let replacement = (2..clause.len()).find(|k| value_of(&self.values, clause[*k]) != Some(false));

            match replacement {
                Some(k) => {
                    clause.swap(1, k);
                    self.watches.long[clause[1].code()].push(key);
                    list.swap_remove(position);
                }

                None => match value_of(&self.values, other) {
                    None => {
                        self.assign(other, Some(key));
                        position += 1;
                    }

                    _ => {
                        conflict = Some(key);
                        break;
                    }
                },
            }
        }

        self.watches.long[falsified.code()] = list;
        conflict
    }
}
