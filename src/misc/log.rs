/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, always with one of the targets below.

Note, no log implementation is provided.
The CLI uses [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, e.g. `RUST_LOG=enumeration=debug`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [building](crate::builder) a formula.
    pub const ENCODING: &str = "encoding";

    /// Logs related to the rounds of an [enumerator](crate::enumerator).
    pub const ENUMERATION: &str = "enumeration";

    /// Logs related to [backends](crate::backend) and the DIMACS exchange.
    pub const BACKEND: &str = "backend";

    /// Logs related to [worker sessions](crate::dispatch).
    pub const DISPATCH: &str = "dispatch";
}
