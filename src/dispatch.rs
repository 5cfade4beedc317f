/*!
Running an enumeration on a dedicated thread.

[spawn] moves an [Enumerator] to a fresh thread, and sends each coloring found over a channel as a [Dispatch].
The final dispatch of every session is exactly one of [Exhausted](Dispatch::Exhausted), [Stopped](Dispatch::Stopped) or [Error](Dispatch::Error).

The thread returns the enumerator when done, and so [counters](Enumerator::counters) may be read after a join.
To stop a session early, cancel the [token](Enumerator::cancel_token) of the enumerator before it is spawned, or drop the receiver.

```rust
# use crossbeam::channel::unbounded;
# use ordered_ramsey::backend::cdcl::Cdcl;
# use ordered_ramsey::builder::Problem;
# use ordered_ramsey::dispatch::{self, Dispatch};
# use ordered_ramsey::enumerator::Enumerator;
# use ordered_ramsey::structures::graph::OrderedGraph;
let problem = Problem::diagonal(5, OrderedGraph::complete(3));
let enumerator = Enumerator::from_problem(&problem, Cdcl::default()).unwrap();

let (tx, rx) = unbounded();
let handle = dispatch::spawn(enumerator, tx, Some(2));

let dispatches = rx.iter().collect::<Vec<_>>();
assert_eq!(dispatches.len(), 3);
assert_eq!(dispatches[2], Dispatch::Stopped);
assert_eq!(handle.join().unwrap().counters().found, 2);
```
*/

use std::thread::{self, JoinHandle};

use crossbeam::channel::Sender;

use crate::{
    backend::Backend,
    enumerator::{Enumerator, Step},
    misc::log::targets::{self},
    structures::graph::Coloring,
    types::err::{self},
};

/// A message from an enumeration session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A coloring found.
    Coloring(Coloring),

    /// No further colorings exist.
    Exhausted,

    /// The session ended before exhaustion, on a limit or on cancellation.
    Stopped,

    /// The session ended on an error.
    Error(err::ErrorKind),
}

/// Runs `enumerator` on a fresh thread, sending at most `limit` colorings (all, if `None`) to `sender`.
pub fn spawn<B>(
    mut enumerator: Enumerator<B>,
    sender: Sender<Dispatch>,
    limit: Option<usize>,
) -> JoinHandle<Enumerator<B>>
where
    B: Backend + Send + 'static,
{
    thread::spawn(move || {
        let mut sent = 0;

        let last = loop {
            if limit.is_some_and(|limit| sent >= limit) {
                log::info!(target: targets::DISPATCH, "Limit of {sent} colorings reached");
                break Dispatch::Stopped;
            }

            match enumerator.next() {
                Ok(Step::Found(coloring)) => {
                    if sender.send(Dispatch::Coloring(coloring)).is_err() {
                        log::info!(target: targets::DISPATCH, "Receiver dropped after {sent} colorings");
                        return enumerator;
                    }
                    sent += 1;
                }

                Ok(Step::Exhausted) => break Dispatch::Exhausted,

                Err(err::ErrorKind::Cancelled) | Err(err::ErrorKind::State(err::StateError::Cancelled)) => {
                    log::info!(target: targets::DISPATCH, "Cancelled after {sent} colorings");
                    break Dispatch::Stopped;
                }

                Err(e) => break Dispatch::Error(e),
            }
        };

        let _ = sender.send(last);
        enumerator
    })
}
