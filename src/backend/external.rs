/*!
A backend which calls an external solver executable.

The solver is called as `<executable> [arguments…] <input.cnf> <output>`, following the minisat convention (also followed by glucose).
Exit statuses are read as:
- The satisfiable status (10 by default), with a model written to the output file.
- The unsatisfiable status (20 by default).
- Any other status, as the solver giving up.

A solver which cannot be started, or which terminates without an exit status (e.g. killed by a signal) is an error.

While the solver runs the process is polled, and killed if the cancel token is set or the time limit (if any) passes.
*/

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    process::{Child, Command, Stdio},
    time::{Duration, Instant},
};

use crate::{
    backend::{Backend, Outcome},
    dimacs,
    generic::cancel::CancelToken,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalSolver {
    executable: String,
    arguments: Vec<String>,
    satisfiable_status: i32,
    unsatisfiable_status: i32,
    time_limit: Option<Duration>,
    poll_interval: Duration,
}

impl ExternalSolver {
    /// A solver called through `executable`, with the minisat exit statuses and no time limit.
    pub fn new(executable: impl Into<String>) -> Self {
        ExternalSolver {
            executable: executable.into(),
            arguments: Vec::default(),
            satisfiable_status: 10,
            unsatisfiable_status: 20,
            time_limit: None,
            poll_interval: Duration::from_millis(10),
        }
    }

    /// Arguments passed to the solver ahead of the input and output files.
    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.arguments = arguments.into_iter().map(|argument| argument.into()).collect();
        self
    }

    pub fn with_statuses(mut self, satisfiable: i32, unsatisfiable: i32) -> Self {
        self.satisfiable_status = satisfiable;
        self.unsatisfiable_status = unsatisfiable;
        self
    }

    /// A limit on the time of a single call, with `None` for no limit.
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    fn spawn(
        &self,
        input: &tempfile::NamedTempFile,
        output: &tempfile::NamedTempFile,
    ) -> Result<Child, err::BackendError> {
        Command::new(&self.executable)
            .args(&self.arguments)
            .arg(input.path())
            .arg(output.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| err::BackendError::Spawn(format!("{}: {e}", self.executable)))
    }
}

/// Kills a child process, and waits for it, ignoring a child which has already exited.
fn stop(child: &mut Child) -> Result<(), err::BackendError> {
    match child.kill() {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {}
        Err(e) => return Err(err::BackendError::from(e)),
    }
    child.wait()?;
    Ok(())
}

impl Backend for ExternalSolver {
    fn solve(&mut self, formula: &Formula, cancel: &CancelToken) -> Result<Outcome, err::ErrorKind> {
        if cancel.is_cancelled() {
            return Err(err::ErrorKind::Cancelled);
        }

        let mut input = tempfile::NamedTempFile::new().map_err(err::BackendError::from)?;
        let output = tempfile::NamedTempFile::new().map_err(err::BackendError::from)?;

        let renumbering = dimacs::write_formula(formula, BufWriter::new(input.as_file_mut()))
            .map_err(err::BackendError::from)?;
        log::debug!(target: targets::BACKEND, "Wrote {} clauses over {} variables to {:?}", formula.clause_count(), renumbering.count(), input.path());

        let start = Instant::now();
        let mut child = self.spawn(&input, &output)?;
        log::trace!(target: targets::BACKEND, "Started {} (pid {})", self.executable, child.id());

        let status = loop {
            if let Some(status) = child.try_wait().map_err(err::BackendError::from)? {
                break status;
            }

            if cancel.is_cancelled() {
                log::info!(target: targets::BACKEND, "Cancelled, stopping {}", self.executable);
                stop(&mut child)?;
                return Err(err::ErrorKind::Cancelled);
            }

            if let Some(limit) = self.time_limit {
                if start.elapsed() >= limit {
                    log::info!(target: targets::BACKEND, "Time limit of {limit:?} reached, stopping {}", self.executable);
                    stop(&mut child)?;
                    return Ok(Outcome::Unknown);
                }
            }

            std::thread::sleep(self.poll_interval);
        };

        log::debug!(target: targets::BACKEND, "{} exited with {status} after {:?}", self.executable, start.elapsed());

        match status.code() {
            None => Err(err::ErrorKind::from(err::BackendError::Terminated)),

            Some(code) if code == self.satisfiable_status => {
                let file = File::open(output.path()).map_err(err::BackendError::from)?;
                match dimacs::read_model(BufReader::new(file), &renumbering)? {
                    Some(model) => Ok(Outcome::Satisfiable(model)),
                    None => Err(err::ErrorKind::from(err::BackendError::MissingModel)),
                }
            }

            Some(code) if code == self.unsatisfiable_status => Ok(Outcome::Unsatisfiable),

            Some(code) => {
                log::info!(target: targets::BACKEND, "{} gave up with status {code}", self.executable);
                Ok(Outcome::Unknown)
            }
        }
    }

    fn name(&self) -> String {
        self.executable.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable() {
        let mut solver = ExternalSolver::new("./no-such-solver-executable");
        let formula = [vec![1, 2]].into_iter().collect::<Formula>();

        match solver.solve(&formula, &CancelToken::default()) {
            Err(err::ErrorKind::Backend(err::BackendError::Spawn(_))) => {}
            otherwise => panic!("{otherwise:?}"),
        }
    }

    #[test]
    fn cancelled_before_start() {
        let mut solver = ExternalSolver::new("./no-such-solver-executable");
        let formula = [vec![1, 2]].into_iter().collect::<Formula>();
        let cancel = CancelToken::default();
        cancel.cancel();

        assert_eq!(solver.solve(&formula, &cancel), Err(err::ErrorKind::Cancelled));
    }
}
