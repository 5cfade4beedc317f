use std::collections::HashSet;

use ordered_ramsey::{
    backend::{cdcl::Cdcl, Backend},
    builder::{conditions::parse_conditions, Problem},
    enumerator::{Enumerator, EnumeratorState, Step},
    generic::subsets::binomial,
    structures::{
        edge::{complete_edges, Vertex},
        graph::{Color, Coloring, OrderedGraph},
    },
};

fn all_colorings(problem: &Problem) -> Vec<Coloring> {
    let mut enumerator = Enumerator::from_problem(problem, Cdcl::default()).unwrap();
    enumerator
        .colorings()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

/// The number of colorings of the complete ordered graph on `n` vertices avoiding a red `red` and a blue `blue`, by brute force.
fn brute_force_count(n: Vertex, red: &OrderedGraph, blue: &OrderedGraph) -> usize {
    let edges = complete_edges(n).collect::<Vec<_>>();
    let mut count = 0;

    for bits in 0..(1_u64 << edges.len()) {
        let mut coloring = Coloring::new(n);
        for (index, edge) in edges.iter().enumerate() {
            let color = match bits & (1 << index) {
                0 => Color::Red,
                _ => Color::Blue,
            };
            coloring.insert(*edge, color).unwrap();
        }
        if coloring.avoids(red, blue) {
            count += 1;
        }
    }

    count
}

fn triangle() -> OrderedGraph {
    OrderedGraph::complete(3)
}

/// The monotone path on three vertices.
fn monotone_path() -> OrderedGraph {
    OrderedGraph::parse(None, "1 2, 2 3").unwrap()
}

/// Two crossing edges on four vertices.
fn crossing() -> OrderedGraph {
    OrderedGraph::parse(None, "1 3, 2 4").unwrap()
}

mod properties {
    use super::*;

    #[test]
    fn no_duplicates() {
        let colorings = all_colorings(&Problem::diagonal(5, triangle()));

        let distinct = colorings
            .iter()
            .map(|coloring| coloring.to_string())
            .collect::<HashSet<_>>();
        assert_eq!(colorings.len(), 12);
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn every_coloring_avoids() {
        let red = monotone_path();
        let blue = triangle();

        for n in 3..=4 {
            let colorings = all_colorings(&Problem::new(n, red.clone(), blue.clone()));
            assert!(!colorings.is_empty());
            for coloring in colorings {
                assert!(coloring.avoids(&red, &blue), "{coloring}");
                assert_eq!(coloring.to_string().parse::<Coloring>(), Ok(coloring.clone()));
            }
        }
    }

    #[test]
    fn exhaustion_is_permanent() {
        let problem = Problem::diagonal(5, triangle());
        let mut enumerator = Enumerator::from_problem(&problem, Cdcl::default()).unwrap();

        while let Ok(Step::Found(_)) = enumerator.next() {}

        assert_eq!(enumerator.state(), EnumeratorState::Exhausted);
        let rounds = enumerator.counters().rounds;
        for _ in 0..4 {
            assert_eq!(enumerator.next(), Ok(Step::Exhausted));
        }
        assert_eq!(enumerator.counters().rounds, rounds);
        assert_eq!(rounds, enumerator.counters().found + 1);
    }

    #[test]
    fn reflections_take_opposite_colors() {
        let n = 4;
        let problem = Problem::diagonal(n, crossing()).with_symmetry(true);
        let colorings = all_colorings(&problem);

        // Edges 1 4 and 2 3 are their own reflections, and appear in no clause.
        assert_eq!(colorings.len(), 4);

        for coloring in colorings {
            assert_eq!(coloring.edge_count(), 4);
            for (edge, color) in coloring.iter() {
                assert!(!edge.is_self_reflective(n));
                assert_eq!(coloring.color_of(&edge.reflect(n)), Some(color.opposite()));
            }
        }
    }

    #[test]
    fn symmetric_triangles_on_five() {
        let problem = Problem::diagonal(5, triangle()).with_symmetry(true);
        assert!(all_colorings(&problem).is_empty());
    }

    #[test]
    fn forced_edges_are_respected() {
        let forced = parse_conditions("1 2 r", 5).unwrap();
        let problem = Problem::diagonal(5, triangle()).with_forced_edges(forced);
        let colorings = all_colorings(&problem);

        assert_eq!(colorings.len(), 6);
        for coloring in colorings {
            assert_eq!(coloring.color_of_pair(1, 2), Some(Color::Red));
            assert!(coloring.avoids(&triangle(), &triangle()));
        }

        let forced = parse_conditions("1 2 r, 1 3 r, 2 3 r", 5).unwrap();
        let problem = Problem::diagonal(5, triangle()).with_forced_edges(forced);
        assert!(all_colorings(&problem).is_empty());
    }

    #[test]
    fn forced_and_symmetric() {
        let n = 4;
        let forced = parse_conditions("2 3 b", n).unwrap();
        let problem = Problem::diagonal(n, crossing())
            .with_symmetry(true)
            .with_forced_edges(forced);
        let colorings = all_colorings(&problem);

        assert_eq!(colorings.len(), 4);
        for coloring in colorings {
            assert_eq!(coloring.color_of_pair(2, 3), Some(Color::Blue));
            assert_eq!(coloring.color_of_pair(1, 4), None);
        }
    }
}

mod ramsey_numbers {
    use super::*;

    use rand::{rngs::SmallRng, Rng, SeedableRng};

    fn first(problem: &Problem) -> Step {
        let mut enumerator = Enumerator::from_problem(problem, Cdcl::default()).unwrap();
        enumerator.next().unwrap()
    }

    #[test]
    fn triangles() {
        assert!(matches!(first(&Problem::diagonal(5, triangle())), Step::Found(_)));
        assert_eq!(first(&Problem::diagonal(6, triangle())), Step::Exhausted);
    }

    #[test]
    fn monotone_paths() {
        // (3 - 1)(3 - 1) + 1, by Erdős–Szekeres.
        assert!(matches!(first(&Problem::diagonal(4, monotone_path())), Step::Found(_)));
        assert_eq!(first(&Problem::diagonal(5, monotone_path())), Step::Exhausted);
    }

    #[test]
    fn four_cliques() {
        // The diagonal Ramsey number of K4 is 18, and the Paley graph on 17 vertices avoids.
        let clique = OrderedGraph::complete(4);
        for n in [12, 17] {
            match first(&Problem::diagonal(n, clique.clone())) {
                Step::Found(coloring) => {
                    assert_eq!(coloring.edge_count(), binomial(n, 2) as usize);
                    assert!(coloring.avoids(&clique, &clique));
                }
                otherwise => panic!("{otherwise:?}"),
            }
        }
    }

    #[test]
    fn crossing_edges() {
        assert!(matches!(first(&Problem::diagonal(4, crossing())), Step::Found(_)));
        assert_eq!(first(&Problem::diagonal(5, crossing())), Step::Exhausted);
    }

    #[test]
    fn brute_force_agreement() {
        let mut rng = SmallRng::seed_from_u64(1729);

        for _ in 0..24 {
            let mut patterns = Vec::default();
            for _ in 0..2 {
                let order: Vertex = rng.random_range(2..=3);
                let mut pattern = OrderedGraph::new(order);
                for edge in complete_edges(order) {
                    if rng.random_bool(0.6) {
                        pattern.add_edge(edge.low(), edge.high()).unwrap();
                    }
                }
                if pattern.is_edgeless() {
                    pattern.add_edge(1, 2).unwrap();
                }
                patterns.push(pattern);
            }
            let (red, blue) = (&patterns[0], &patterns[1]);

            for n in 3..=4 {
                let problem = Problem::new(n, red.clone(), blue.clone());
                let variables = problem.formula().unwrap().variables().len();
                let colorings = all_colorings(&problem);

                // Edges in no clause may take either color.
                let unconstrained = binomial(n, 2) as usize - variables;
                assert_eq!(
                    colorings.len() << unconstrained,
                    brute_force_count(n, red, blue),
                    "{red} / {blue} on {n}"
                );
            }
        }
    }
}

mod sessions {
    use super::*;

    use std::time::Duration;

    use crossbeam::channel::{unbounded, Sender};
    use ordered_ramsey::{
        backend::Outcome,
        config::{Config, Solver},
        dispatch::{self, Dispatch},
        generic::cancel::CancelToken,
        structures::formula::Formula,
        types::err::{self},
    };

    /// A backend which runs until cancelled.
    struct Waiting {
        started: Sender<()>,
    }

    impl Backend for Waiting {
        fn solve(&mut self, _: &Formula, cancel: &CancelToken) -> Result<Outcome, err::ErrorKind> {
            let _ = self.started.send(());
            while !cancel.is_cancelled() {
                std::thread::sleep(Duration::from_millis(1));
            }
            Err(err::ErrorKind::Cancelled)
        }

        fn name(&self) -> String {
            "waiting".to_string()
        }
    }

    #[test]
    fn dispatch_to_exhaustion() {
        let problem = Problem::diagonal(5, triangle());
        let enumerator = Enumerator::from_problem(&problem, Cdcl::default()).unwrap();

        let (tx, rx) = unbounded();
        let handle = dispatch::spawn(enumerator, tx, None);
        let dispatches = rx.iter().collect::<Vec<_>>();

        assert_eq!(dispatches.len(), 13);
        assert!(dispatches[..12]
            .iter()
            .all(|dispatch| matches!(dispatch, Dispatch::Coloring(_))));
        assert_eq!(dispatches[12], Dispatch::Exhausted);

        let enumerator = handle.join().unwrap();
        assert_eq!(enumerator.counters().found, 12);
        assert_eq!(enumerator.state(), EnumeratorState::Exhausted);
    }

    #[test]
    fn dispatch_with_limit() {
        let problem = Problem::diagonal(5, triangle());
        let enumerator = Enumerator::from_problem(&problem, Cdcl::default()).unwrap();

        let (tx, rx) = unbounded();
        let handle = dispatch::spawn(enumerator, tx, Some(5));
        let dispatches = rx.iter().collect::<Vec<_>>();

        assert_eq!(dispatches.len(), 6);
        assert_eq!(dispatches[5], Dispatch::Stopped);
        assert_eq!(handle.join().unwrap().state(), EnumeratorState::Active);
    }

    #[test]
    fn cancel_in_flight() {
        let (started_tx, started_rx) = unbounded();
        let formula = Problem::diagonal(5, triangle()).formula().unwrap();
        let enumerator = Enumerator::new(5, formula, Waiting { started: started_tx });
        let token = enumerator.cancel_token();

        let (tx, rx) = unbounded();
        let handle = dispatch::spawn(enumerator, tx, None);

        started_rx.recv().unwrap();
        token.cancel();

        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![Dispatch::Stopped]);

        let mut enumerator = handle.join().unwrap();
        assert_eq!(enumerator.state(), EnumeratorState::Cancelled);
        assert_eq!(
            enumerator.next(),
            Err(err::ErrorKind::State(err::StateError::Cancelled))
        );
    }

    #[test]
    fn independent_sessions() {
        let handles = (0..4)
            .map(|_| {
                let problem = Problem::diagonal(5, triangle());
                let enumerator = Enumerator::from_problem(&problem, Cdcl::default()).unwrap();
                let (tx, rx) = unbounded();
                (dispatch::spawn(enumerator, tx, None), rx)
            })
            .collect::<Vec<_>>();

        for (handle, rx) in handles {
            let colorings = rx
                .iter()
                .filter(|dispatch| matches!(dispatch, Dispatch::Coloring(_)))
                .count();
            assert_eq!(colorings, 12);
            assert!(handle.join().is_ok());
        }
    }

    #[test]
    fn internal_solver_from_config() {
        let config = Config {
            solver: Solver::Internal,
            ..Config::default()
        };
        let problem = Problem::diagonal(4, monotone_path());
        let mut enumerator = Enumerator::from_config(&problem, &config).unwrap();

        assert_eq!(enumerator.backend().name(), "cdcl");
        assert_eq!(enumerator.colorings().filter(Result::is_ok).count(), 2);
    }
}
