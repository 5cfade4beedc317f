//! Error types used in the library.
//!
//! - Modelling errors are found while building a formula, and abort the build entirely.
//! - Codec errors are found when translating between edges and variables.
//! - Backend errors are found during a round of enumeration, and leave the formula of the enumerator untouched.
//!
//! Exhaustion of an enumeration is not an error, and is reported through [Step](crate::enumerator::Step).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::edge::{EdgeVariable, Vertex};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Backend(BackendError),
    Codec(CodecError),
    Config(ConfigError),
    Graph(GraphError),
    Model(ModelError),
    Parse(ParseError),
    State(StateError),
    Subset(SubsetError),

    /// A round was interrupted through a [CancelToken](crate::generic::cancel::CancelToken).
    Cancelled,
}

/// Errors when the external solver could not be used.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BackendError {
    /// The solver executable could not be started.
    Spawn(String),

    /// The solver terminated without an exit status, e.g. on a signal.
    Terminated,

    /// Some failure reading or writing the files exchanged with the solver.
    Io(String),

    /// The solver reported a satisfiable formula, though no model could be read.
    MissingModel,

    /// The model returned by the solver mentions a variable absent from the formula.
    UnknownVariable(isize),
}

impl From<BackendError> for ErrorKind {
    fn from(e: BackendError) -> Self {
        ErrorKind::Backend(e)
    }
}

impl From<std::io::Error> for BackendError {
    fn from(e: std::io::Error) -> Self {
        BackendError::Io(e.to_string())
    }
}

/// Errors when translating between edges and variables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodecError {
    /// An edge from a vertex to itself.
    EqualVertices(Vertex),

    /// A vertex outside of `1..=n`.
    VertexOutOfRange(Vertex, Vertex),

    /// A variable which does not correspond to any edge on `n` vertices.
    InvalidVariable(EdgeVariable, Vertex),
}

impl From<CodecError> for ErrorKind {
    fn from(e: CodecError) -> Self {
        ErrorKind::Codec(e)
    }
}

/// Errors when constructing a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// An edge from a vertex to itself.
    SelfLoop(Vertex),

    /// An edge touching a vertex outside of the graph.
    OutOfRange(Vertex, Vertex),

    /// The edge is already present.
    DuplicateEdge(Vertex, Vertex),
}

impl From<GraphError> for ErrorKind {
    fn from(e: GraphError) -> Self {
        ErrorKind::Graph(e)
    }
}

/// Errors in the statement of a problem, found when building a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModelError {
    /// A forbidden pattern has more vertices than the target graph.
    PatternTooLarge { pattern: Vertex, order: Vertex },

    /// A forbidden pattern without edges, which no coloring avoids.
    EdgelessPattern,

    /// A forced edge touches a vertex outside of the target graph.
    ForcedEdgeOutOfRange(Vertex, Vertex),

    /// Relabelling a pattern produced an edge from a vertex to itself.
    SelfLoop(Vertex),

    /// A subset mask whose size differs from the order of the pattern it was paired with.
    MaskMismatch { mask_size: u32, pattern: Vertex },

    /// The target graph is too large to index subsets with a mask.
    OrderTooLarge(Vertex),
}

impl From<ModelError> for ErrorKind {
    fn from(e: ModelError) -> Self {
        ErrorKind::Model(e)
    }
}

/// Errors when configuring an enumeration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of an option, with the bounds.
    OutOfBounds {
        option: &'static str,
        min: String,
        max: String,
    },
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A forced edge item, by index in the comma separated list.
    Condition(usize),

    /// An edge item of a pattern, by index in the comma separated list.
    Edge(usize),

    /// A color other than `r`, `b`, `red` or `blue`.
    Color(String),

    /// A token of some solver output which is not a literal.
    Literal(String),

    /// A solver name which is empty.
    Solver,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The enumerator was cancelled during some earlier round, and should be discarded.
    Cancelled,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Errors when enumerating subsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubsetError {
    /// More elements requested than are available.
    TooMany { k: u32, n: u32 },

    /// The ground set does not fit in a mask.
    GroundTooLarge(u32),
}

impl From<SubsetError> for ErrorKind {
    fn from(e: SubsetError) -> Self {
        ErrorKind::Subset(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(e) => match e {
                BackendError::Spawn(s) => write!(f, "the solver could not be started: {s}"),
                BackendError::Terminated => write!(f, "the solver terminated abnormally"),
                BackendError::Io(s) => write!(f, "solver exchange failed: {s}"),
                BackendError::MissingModel => write!(f, "the solver reported a model, but none was found"),
                BackendError::UnknownVariable(v) => write!(f, "the solver returned unknown variable {v}"),
            },

            Self::Codec(e) => match e {
                CodecError::EqualVertices(v) => write!(f, "edge {v} {v} is a self-loop"),
                CodecError::VertexOutOfRange(v, n) => write!(f, "vertex {v} is outside of 1..={n}"),
                CodecError::InvalidVariable(v, n) => write!(f, "variable {v} is not an edge on {n} vertices"),
            },

            Self::Config(ConfigError::OutOfBounds { option, min, max }) => {
                write!(f, "{option} must be between {min} and {max}")
            }

            Self::Graph(e) => match e {
                GraphError::SelfLoop(v) => write!(f, "edge {v} {v} is a self-loop"),
                GraphError::OutOfRange(v, m) => write!(f, "vertex {v} is outside of 1..={m}"),
                GraphError::DuplicateEdge(i, j) => write!(f, "edge {i} {j} appears twice"),
            },

            Self::Model(e) => match e {
                ModelError::PatternTooLarge { pattern, order } => write!(
                    f,
                    "a forbidden graph on {pattern} vertices does not fit in {order} vertices, choose a larger order"
                ),
                ModelError::EdgelessPattern => write!(f, "both forbidden graphs need at least one edge"),
                ModelError::ForcedEdgeOutOfRange(i, j) => {
                    write!(f, "forced edge {i} {j} is outside of the target graph")
                }
                ModelError::SelfLoop(v) => write!(f, "forbidden graph has a self-loop at {v}"),
                ModelError::MaskMismatch { mask_size, pattern } => write!(
                    f,
                    "a subset of {mask_size} vertices cannot host a graph on {pattern} vertices"
                ),
                ModelError::OrderTooLarge(n) => write!(f, "order {n} is too large"),
            },

            Self::Parse(e) => match e {
                ParseError::Condition(i) => write!(
                    f,
                    "forced edge {} is malformed, write conditions as \"1 4 r, 3 5 b\"",
                    i + 1
                ),
                ParseError::Edge(i) => write!(
                    f,
                    "edge {} is malformed, write edges as \"1 2, 2 3\"",
                    i + 1
                ),
                ParseError::Color(s) => write!(f, "unrecognised color '{s}', use 'r' or 'b'"),
                ParseError::Literal(s) => write!(f, "unrecognised literal '{s}' in solver output"),
                ParseError::Solver => write!(f, "a solver name is required"),
            },

            Self::State(StateError::Cancelled) => {
                write!(f, "the enumeration was cancelled and cannot be resumed")
            }

            Self::Subset(e) => match e {
                SubsetError::TooMany { k, n } => write!(f, "no subsets of size {k} among {n} elements"),
                SubsetError::GroundTooLarge(n) => write!(f, "{n} elements do not fit in a mask"),
            },

            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::error::Error for ErrorKind {}
