use std::time::Duration;

use clap::ArgMatches;

use ordered_ramsey::{
    builder::{conditions::parse_conditions, Problem},
    config::{Config, Solver},
    structures::graph::OrderedGraph,
    types::err::{self},
};

pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ErrorKind> {
    let mut the_config = Config::default();

    if let Ok(Some(solver)) = args.try_get_one::<String>("solver") {
        the_config.solver = solver.parse::<Solver>()?
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.time_limit.try_set(Duration::from_secs(*secs))?
    };

    if let Ok(Some(status)) = args.try_get_one::<i32>("sat_status") {
        the_config.satisfiable_status.try_set(*status)?
    };

    if let Ok(Some(status)) = args.try_get_one::<i32>("unsat_status") {
        the_config.unsatisfiable_status.try_set(*status)?
    };

    if let Ok(Some(millis)) = args.try_get_one::<u64>("poll_interval") {
        the_config.poll_interval.try_set(Duration::from_millis(*millis))?
    };

    Ok(the_config)
}

pub fn problem_from_args(args: &ArgMatches) -> Result<Problem, err::ErrorKind> {
    let order = match args.try_get_one::<u32>("order") {
        Ok(Some(order)) => *order,
        _ => 0,
    };

    let red_order = args.try_get_one::<u32>("red_order").ok().flatten().copied();
    let red_text = match args.try_get_one::<String>("red") {
        Ok(Some(text)) => text.as_str(),
        _ => "",
    };
    let red = OrderedGraph::parse(red_order, red_text)?;

    let blue = match args.try_get_one::<String>("blue") {
        Ok(Some(text)) => {
            let blue_order = args.try_get_one::<u32>("blue_order").ok().flatten().copied();
            OrderedGraph::parse(blue_order, text)?
        }
        _ => red.clone(),
    };

    let forced = match args.try_get_one::<String>("conditions") {
        Ok(Some(text)) => parse_conditions(text, order)?,
        _ => Vec::default(),
    };

    let symmetric = args.get_flag("symmetric");

    Ok(Problem::new(order, red, blue)
        .with_symmetry(symmetric)
        .with_forced_edges(forced))
}
