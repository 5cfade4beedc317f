use clap::{value_parser, Arg, ArgAction, Command};

use ordered_ramsey::generic::subsets::MAX_ORDER;

pub fn cli() -> Command {
    Command::new("ramsey_cli")
        .about("Enumerates 2-colorings of a complete ordered graph with no red copy of one ordered graph and no blue copy of another")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("order")
            .short('n')
            .long("order")
            .value_parser(value_parser!(u32).range(2..=MAX_ORDER as i64))
            .required(true)
            .num_args(1)
            .help("The number of vertices of the complete ordered graph to color."))

        .arg(Arg::new("red")
            .short('r')
            .long("red")
            .value_parser(value_parser!(String))
            .required(true)
            .num_args(1)
            .help("The edges of the ordered graph forbidden in red.")
            .long_help("The edges of the ordered graph forbidden in red, as a comma separated list.
For example, \"1 2, 2 3, 1 3\" for the triangle.

Unless --red-order is given the vertices are 1 to the largest vertex mentioned."))

        .arg(Arg::new("blue")
            .short('b')
            .long("blue")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help("The edges of the ordered graph forbidden in blue.")
            .long_help("The edges of the ordered graph forbidden in blue, in the same form as --red.
Default: the red graph."))

        .arg(Arg::new("red_order")
            .long("red-order")
            .value_parser(value_parser!(u32).range(2..=MAX_ORDER as i64))
            .required(false)
            .num_args(1)
            .help("The number of vertices of the red graph, when larger than the largest vertex of an edge."))

        .arg(Arg::new("blue_order")
            .long("blue-order")
            .value_parser(value_parser!(u32).range(2..=MAX_ORDER as i64))
            .required(false)
            .num_args(1)
            .help("The number of vertices of the blue graph, when larger than the largest vertex of an edge."))

        .arg(Arg::new("symmetric")
            .short('s')
            .long("symmetric")
            .action(ArgAction::SetTrue)
            .help("Require an edge i j and its reflection n+1-j n+1-i to have opposite colors."))

        .arg(Arg::new("conditions")
            .short('c')
            .long("conditions")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help("Edges with a fixed color, e.g. \"1 4 r, 3 5 b\"."))

        .arg(Arg::new("solver")
            .long("solver")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help("The solver to use.")
            .long_help("The solver to use: minisat, glucose, internal, or the path of an executable.
Default: minisat

An executable is called as <solver> <input.cnf> <output>, and should exit with 10 on a satisfiable formula (writing a model to <output>) and with 20 on an unsatisfiable formula."))

        .arg(Arg::new("limit")
            .short('l')
            .long("limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Stop after this many colorings."))

        .arg(Arg::new("time_limit")
            .short('t')
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("A time limit, in seconds, for each call to the solver.")
            .long_help("A time limit, in seconds, for each call to the solver.
Default: 0, for no limit.

A solver which reaches the limit is stopped, and the enumeration ends with a note that the solver gave up."))

        .arg(Arg::new("sat_status")
            .long("sat-status")
            .value_parser(value_parser!(i32))
            .required(false)
            .num_args(1)
            .help("The exit status of the solver on a satisfiable formula.")
            .long_help("The exit status of the solver on a satisfiable formula, from 0 to 255.
Default: 10"))

        .arg(Arg::new("unsat_status")
            .long("unsat-status")
            .value_parser(value_parser!(i32))
            .required(false)
            .num_args(1)
            .help("The exit status of the solver on an unsatisfiable formula.")
            .long_help("The exit status of the solver on an unsatisfiable formula, from 0 to 255.
Default: 20

Any exit status other than the satisfiable and unsatisfiable statuses is read as the solver giving up."))

        .arg(Arg::new("poll_interval")
            .long("poll-interval")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The interval, in milliseconds, between checks on a running solver.")
            .long_help("The interval, in milliseconds, between checks on a running solver, from 1 to 1000.
Default: 10"))

        .arg(Arg::new("verify")
            .long("verify")
            .action(ArgAction::SetTrue)
            .help("Check each coloring found avoids both graphs and respects every condition."))

        .arg(Arg::new("dimacs")
            .long("dimacs")
            .action(ArgAction::SetTrue)
            .help("Write the formula in DIMACS form, rather than enumerating colorings."))
}
