/*!
Configuration of an enumeration.

The configuration is limited to the backend: which solver is used, how its exit statuses are read, and how long a single round may take.
The problem itself (orders, patterns, constraints) is given by a [Problem](crate::builder::Problem).

```rust
# use ordered_ramsey::backend::Backend;
# use ordered_ramsey::config::{Config, Solver};
let mut config = Config::default();
assert_eq!(config.solver, Solver::Minisat);

config.solver = "internal".parse().unwrap();
assert_eq!(config.backend().name(), "cdcl");
```
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

mod solver;
pub use solver::Solver;

use crate::backend::{cdcl::Cdcl, external::ExternalSolver, Backend};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The solver to use.
    pub solver: Solver,

    /// The exit status of an external solver on a satisfiable formula.
    pub satisfiable_status: ConfigOption<i32>,

    /// The exit status of an external solver on an unsatisfiable formula.
    ///
    /// Any other exit status is read as the solver giving up.
    pub unsatisfiable_status: ConfigOption<i32>,

    /// The time limit for a single round, with zero for no limit.
    pub time_limit: ConfigOption<Duration>,

    /// The interval between checks on a running external solver.
    pub poll_interval: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            solver: Solver::default(),

            satisfiable_status: ConfigOption {
                name: "satisfiable_status",
                min: 0,
                max: 255,
                value: 10,
            },

            unsatisfiable_status: ConfigOption {
                name: "unsatisfiable_status",
                min: 0,
                max: 255,
                value: 20,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            poll_interval: ConfigOption {
                name: "poll_interval",
                min: Duration::from_millis(1),
                max: Duration::from_secs(1),
                value: Duration::from_millis(10),
            },
        }
    }
}

impl Config {
    /// The time limit of a round, if any.
    pub fn round_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }

    /// The backend of the configured solver.
    pub fn backend(&self) -> Box<dyn Backend + Send> {
        match self.solver.executable() {
            None => Box::new(Cdcl::default()),
            Some(executable) => Box::new(
                ExternalSolver::new(executable)
                    .with_statuses(self.satisfiable_status.value, self.unsatisfiable_status.value)
                    .with_time_limit(self.round_limit())
                    .with_poll_interval(self.poll_interval.value),
            ),
        }
    }
}
