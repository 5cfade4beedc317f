#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use crossbeam::channel::unbounded;

use ordered_ramsey::{
    builder::Problem,
    dimacs,
    dispatch::{self, Dispatch},
    enumerator::{Enumerator, Exhaustion},
    structures::graph::{Color, Coloring},
};

mod parse;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let problem = match parse::config::problem_from_args(&matches) {
        Ok(problem) => problem,
        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    };

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    };

    if matches.get_flag("dimacs") {
        let written = problem
            .formula()
            .map_err(|e| e.to_string())
            .and_then(|formula| {
                dimacs::write_formula(&formula, std::io::stdout().lock()).map_err(|e| e.to_string())
            });
        match written {
            Ok(_) => std::process::exit(0),
            Err(e) => {
                println!("c Error: {e}");
                std::process::exit(1);
            }
        }
    }

    println!("c Order:     {}", problem.order());
    println!("c Red:       {} ({} vertices)", problem.red(), problem.red().order());
    println!("c Blue:      {} ({} vertices)", problem.blue(), problem.blue().order());
    if problem.is_symmetric() {
        println!("c Symmetric");
    }
    for forced in problem.forced_edges() {
        println!("c Forced:    {forced}");
    }
    println!("c Solver:    {}", config.solver);

    let enumerator = match Enumerator::from_config(&problem, &config) {
        Ok(enumerator) => enumerator,
        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    };
    println!("c Clauses:   {}", enumerator.formula().clause_count());

    let limit = matches.try_get_one::<usize>("limit").ok().flatten().copied();
    let verify = matches.get_flag("verify");

    let (tx, rx) = unbounded::<Dispatch>();
    let handle = dispatch::spawn(enumerator, tx, limit);

    let mut found = 0;
    let mut failed = false;
    let mut exhausted = false;

    for dispatch in rx {
        match dispatch {
            Dispatch::Coloring(coloring) => {
                found += 1;
                if verify {
                    report_violations(found, &coloring, &problem);
                }
                println!("v {coloring}");
            }

            Dispatch::Exhausted => exhausted = true,

            Dispatch::Stopped => println!("s STOPPED"),

            Dispatch::Error(e) => {
                println!("c Error: {e}");
                failed = true;
            }
        }
    }

    let mut gave_up = false;

    match handle.join() {
        Ok(enumerator) => {
            gave_up = enumerator.exhaustion() == Some(Exhaustion::GaveUp);
            if exhausted {
                match gave_up {
                    true => {
                        println!("c The solver gave up, and further colorings may exist");
                        println!("s STOPPED");
                    }
                    false => println!("s EXHAUSTED"),
                }
            }

            let counters = enumerator.counters();
            println!("c Colorings: {}", counters.found);
            println!("c Rounds:    {}", counters.rounds);
            println!("c Time:      {:.2?}", counters.backend_time);
        }
        Err(_) => {
            println!("c Error: the enumeration thread panicked");
            failed = true;
        }
    }

    std::process::exit(exit_code(failed, gave_up, found))
}

/// 1 on an error, 10 if some coloring was found, 20 if no coloring exists, and otherwise 0.
fn exit_code(failed: bool, gave_up: bool, found: usize) -> i32 {
    match (failed, gave_up, found) {
        (true, _, _) => 1,
        (false, _, 1..) => 10,
        (false, false, 0) => 20,
        (false, true, 0) => 0,
    }
}

/// Notes any way in which the `index`-th coloring fails to be a solution of the problem.
fn report_violations(index: usize, coloring: &Coloring, problem: &Problem) {
    if let Some(mask) = coloring.monochromatic_copy(problem.red(), Color::Red) {
        println!("c Coloring {index} has a red copy of the red graph on {mask:#b}");
    }
    if let Some(mask) = coloring.monochromatic_copy(problem.blue(), Color::Blue) {
        println!("c Coloring {index} has a blue copy of the blue graph on {mask:#b}");
    }
    for forced in problem.forced_edges() {
        if coloring.color_of(&forced.edge()) != Some(forced.color()) {
            println!("c Coloring {index} does not respect {forced}");
        }
    }
    if !coloring.is_complete() {
        println!("c Coloring {index} is partial, with {} edges", coloring.edge_count());
    }
}
