/*!
A token for cancelling an enumeration from outside of the thread running it.

Clones share a flag, and once cancelled a token stays cancelled.

```rust
# use ordered_ramsey::generic::cancel::CancelToken;
let token = CancelToken::default();
let remote = token.clone();

assert!(!token.is_cancelled());
remote.cancel();
assert!(token.is_cancelled());
```
*/

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Requests cancellation of any work polling the token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
