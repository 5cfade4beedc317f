/*!
Exchange of formulas and models with external solvers, in the DIMACS format.

Edge variables are not dense, and so before a formula is written the variables are renumbered to `1..=k`, in order of first appearance.
The [Renumbering] is kept to translate a model read back from the solver to edge variables.

```rust
# use ordered_ramsey::dimacs::{read_model, write_formula};
# use ordered_ramsey::structures::formula::Formula;
let formula = [vec![1, 2, 5], vec![-1, -2, -5]].into_iter().collect::<Formula>();

let mut dimacs = vec![];
let renumbering = write_formula(&formula, &mut dimacs).unwrap();
assert_eq!(String::from_utf8(dimacs).unwrap(), "p cnf 3 2\n1 2 3 0\n-1 -2 -3 0\n");

let model = read_model("SAT\n1 -2 3 0\n".as_bytes(), &renumbering).unwrap().unwrap();
assert_eq!(model.value_of(5), Some(true));
assert_eq!(model.value_of(2), Some(false));
```
*/

use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use crate::{
    structures::{
        assignment::Assignment,
        clause::Clause,
        edge::EdgeVariable,
        formula::Formula,
        literal::{IntLiteral, Literal},
    },
    types::err::{self},
};

/// Status tokens written by solvers alongside (or in place of) a model.
const STATUS_TOKENS: [&str; 4] = ["SAT", "UNSAT", "SATISFIABLE", "UNSATISFIABLE"];

/// A bijection between the edge variables of a formula and `1..=k`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Renumbering {
    /// The edge variable of `d` at index `d - 1`.
    edge_variables: Vec<EdgeVariable>,

    /// The dense variable of an edge variable.
    dense: HashMap<EdgeVariable, u32>,
}

impl Renumbering {
    /// The renumbering of a formula, by first appearance of each variable.
    pub fn of_formula(formula: &Formula) -> Self {
        let mut renumbering = Renumbering::default();
        for clause in formula.clauses() {
            for variable in clause.variables() {
                renumbering.insert(variable);
            }
        }
        renumbering
    }

    fn insert(&mut self, variable: EdgeVariable) -> u32 {
        match self.dense.get(&variable) {
            Some(dense) => *dense,
            None => {
                self.edge_variables.push(variable);
                let dense = self.edge_variables.len() as u32;
                self.dense.insert(variable, dense);
                dense
            }
        }
    }

    /// The number of variables, i.e. `k`.
    pub fn count(&self) -> usize {
        self.edge_variables.len()
    }

    pub fn dense_of(&self, variable: EdgeVariable) -> Option<u32> {
        self.dense.get(&variable).copied()
    }

    pub fn edge_variable_of(&self, dense: u32) -> Option<EdgeVariable> {
        let index = (dense as usize).checked_sub(1)?;
        self.edge_variables.get(index).copied()
    }

    /// The literal over dense variables corresponding to a literal over edge variables.
    pub fn dense_literal(&self, literal: IntLiteral) -> Option<IntLiteral> {
        self.dense_of(literal.variable())
            .map(|dense| IntLiteral::new(dense, literal.polarity()))
    }
}

/// Writes a formula in DIMACS form, returning the renumbering used.
pub fn write_formula(
    formula: &Formula,
    mut writer: impl Write,
) -> Result<Renumbering, std::io::Error> {
    let renumbering = Renumbering::of_formula(formula);

    writeln!(writer, "p cnf {} {}", renumbering.count(), formula.clause_count())?;

    for clause in formula.clauses() {
        let dense_clause = clause
            .literals()
            .filter_map(|literal| renumbering.dense_literal(*literal))
            .collect::<Vec<_>>();
        writeln!(writer, "{}", dense_clause.as_dimacs(true))?;
    }
    writer.flush()?;

    Ok(renumbering)
}

/// Reads a model written by a solver, over edge variables.
///
/// Status tokens are skipped, as are comment lines (`c …`) and the `v` prefix of competition style output.
/// Returns `None` if the output contains no literals.
pub fn read_model(
    reader: impl BufRead,
    renumbering: &Renumbering,
) -> Result<Option<Assignment>, err::ErrorKind> {
    let mut assignment = Assignment::default();
    let mut literal_seen = false;

    for line in reader.lines() {
        let line = line.map_err(err::BackendError::from)?;

        let mut tokens = line.split_whitespace().peekable();
        match tokens.peek() {
            Some(&"c") | None => continue,
            Some(&"s") | Some(&"v") => {
                tokens.next();
            }
            Some(_) => {}
        }

        for token in tokens {
            if STATUS_TOKENS.contains(&token) || token == "0" {
                continue;
            }

            let Ok(dense) = token.parse::<IntLiteral>() else {
                return Err(err::ErrorKind::from(err::ParseError::Literal(token.to_string())));
            };

            let Some(variable) = renumbering.edge_variable_of(dense.variable()) else {
                return Err(err::ErrorKind::from(err::BackendError::UnknownVariable(
                    dense.as_int(),
                )));
            };

            assignment.set(variable, dense.polarity());
            literal_seen = true;
        }
    }

    match literal_seen {
        true => Ok(Some(assignment)),
        false => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_appearance() {
        let formula = [vec![40, -7], vec![7, 12, -40]]
            .into_iter()
            .collect::<Formula>();
        let renumbering = Renumbering::of_formula(&formula);

        assert_eq!(renumbering.count(), 3);
        assert_eq!(renumbering.dense_of(40), Some(1));
        assert_eq!(renumbering.dense_of(7), Some(2));
        assert_eq!(renumbering.dense_of(12), Some(3));
        assert_eq!(renumbering.edge_variable_of(0), None);
        assert_eq!(renumbering.edge_variable_of(4), None);
        assert_eq!(renumbering.dense_literal(-12), Some(-3));
    }

    #[test]
    fn models() {
        let formula = [vec![40, -7], vec![7, 12]].into_iter().collect::<Formula>();
        let renumbering = Renumbering::of_formula(&formula);

        assert_eq!(read_model("UNSAT\n".as_bytes(), &renumbering), Ok(None));

        let model = read_model("s SATISFIABLE\nv -1 2\nv 3 0\n".as_bytes(), &renumbering)
            .unwrap()
            .unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(model.value_of(40), Some(false));
        assert_eq!(model.value_of(7), Some(true));

        assert_eq!(
            read_model("SAT\n1 -4 0\n".as_bytes(), &renumbering),
            Err(err::ErrorKind::Backend(err::BackendError::UnknownVariable(-4)))
        );
        assert_eq!(
            read_model("SAT\n1 x 0\n".as_bytes(), &renumbering),
            Err(err::ErrorKind::Parse(err::ParseError::Literal("x".to_string())))
        );
    }
}
