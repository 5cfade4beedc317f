use std::str::FromStr;

use crate::types::err::{self};

/// The solver used to decide each round of an enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Solver {
    /// The `minisat` executable.
    #[default]
    Minisat,

    /// The `glucose` executable.
    Glucose,

    /// The in-process [Cdcl](crate::backend::cdcl::Cdcl) backend.
    Internal,

    /// Some other executable, called as `<executable> <input.cnf> <output>`.
    Other(String),
}

impl Solver {
    /// The executable of the solver, if external.
    pub fn executable(&self) -> Option<&str> {
        match self {
            Self::Minisat => Some("minisat"),
            Self::Glucose => Some("glucose"),
            Self::Internal => None,
            Self::Other(executable) => Some(executable),
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minisat => write!(f, "minisat"),
            Self::Glucose => write!(f, "glucose"),
            Self::Internal => write!(f, "internal"),
            Self::Other(executable) => write!(f, "{executable}"),
        }
    }
}

impl FromStr for Solver {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(err::ParseError::Solver),

            "minisat" => Ok(Self::Minisat),

            "glucose" => Ok(Self::Glucose),

            "internal" | "cdcl" => Ok(Self::Internal),

            executable => Ok(Self::Other(executable.to_string())),
        }
    }
}
