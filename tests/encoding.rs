use ordered_ramsey::{
    builder::{self, conditions::parse_conditions, Problem},
    generic::subsets::binomial,
    structures::{edge::Vertex, graph::OrderedGraph},
    types::err::{self},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// A random pattern on between two and four vertices, with at least one edge.
fn random_pattern(rng: &mut SmallRng) -> OrderedGraph {
    let order = rng.random_range(2..=4);
    let mut pattern = OrderedGraph::new(order);
    for i in 1..=order {
        for j in (i + 1)..=order {
            if rng.random_bool(0.5) {
                pattern.add_edge(i, j).unwrap();
            }
        }
    }
    if pattern.is_edgeless() {
        pattern.add_edge(1, order).unwrap();
    }
    pattern
}

mod clauses {
    use super::*;

    #[test]
    fn triangle_on_three() {
        let triangle = OrderedGraph::complete(3);
        let formula = builder::build(3, &triangle, &triangle, false, &[]).unwrap();

        assert_eq!(formula.clauses(), &[vec![1, 2, 5], vec![-1, -2, -5]]);
    }

    #[test]
    fn count_law() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        for _ in 0..64 {
            let red = random_pattern(&mut rng);
            let blue = random_pattern(&mut rng);
            let n: Vertex = rng.random_range(red.order().max(blue.order())..=9);

            let problem = Problem::new(n, red.clone(), blue.clone());
            let formula = problem.formula().unwrap();

            let expected = binomial(n, red.order()) + binomial(n, blue.order());
            assert_eq!(formula.clause_count() as u128, expected, "{red} / {blue} on {n}");
            assert_eq!(problem.clause_count(), expected);

            for (index, clause) in formula.clauses().iter().enumerate() {
                let (pattern, positive) = match (index as u128) < binomial(n, red.order()) {
                    true => (&red, true),
                    false => (&blue, false),
                };
                assert_eq!(clause.len(), pattern.edge_count());
                assert!(clause.iter().all(|literal| literal.is_positive() == positive));
            }
        }
    }

    #[test]
    fn ordered_copies_only() {
        // Vertices 1, 2 and 4 of four, with the path taking edges (1, 2) and (2, 4).
        let path = OrderedGraph::parse(None, "1 2, 2 3").unwrap();
        let formula = Problem::diagonal(4, path).formula().unwrap();

        assert!(formula.clauses().contains(&vec![1, 7]));
        // (1, 2) with (1, 4) is not an ordered copy of the path.
        assert!(!formula.clauses().contains(&vec![1, 3]));
    }

    #[test]
    fn unequal_orders() {
        let edge = OrderedGraph::parse(Some(2), "1 2").unwrap();
        let triangle = OrderedGraph::complete(3);
        let formula = Problem::new(4, edge, triangle).formula().unwrap();

        // Every edge is blue, and no triangle is blue.
        assert_eq!(formula.clause_count(), 6 + 4);
        assert_eq!(formula.clauses()[0], vec![1]);
        assert_eq!(formula.clauses()[6], vec![-1, -2, -6]);
    }
}

mod constraints {
    use super::*;

    #[test]
    fn forced_edges_follow_patterns() {
        let triangle = OrderedGraph::complete(3);
        let forced = parse_conditions("1 2 r, 5 4 b", 5).unwrap();
        let formula = builder::build(5, &triangle, &triangle, false, &forced).unwrap();

        assert_eq!(formula.clause_count(), 10 + 10 + 2);
        assert_eq!(formula.clauses()[20], vec![-1]);
        assert_eq!(formula.clauses()[21], vec![19]);
    }

    #[test]
    fn symmetry_on_four() {
        let clauses = builder::symmetry_clauses(4).unwrap();
        assert_eq!(
            clauses,
            vec![
                vec![1, 11],
                vec![-1, -11],
                vec![2, 7],
                vec![-2, -7],
                vec![7, 2],
                vec![-7, -2],
                vec![11, 1],
                vec![-11, -1],
            ]
        );

        let triangle = OrderedGraph::complete(3);
        let problem = Problem::diagonal(4, triangle).with_symmetry(true);
        assert_eq!(problem.formula().unwrap().clause_count(), 4 + 4 + 8);
        assert_eq!(problem.clause_count(), 16);
    }

    #[test]
    fn symmetry_count_law() {
        for n in 2..=12 {
            let expected = 2 * (binomial(n, 2) - (n / 2) as u128);
            assert_eq!(builder::symmetry_clauses(n).unwrap().len() as u128, expected);
        }
        assert!(builder::symmetry_clauses(2).unwrap().is_empty());
    }
}

mod modelling_errors {
    use super::*;

    #[test]
    fn rejected_before_any_clause() {
        let triangle = OrderedGraph::complete(3);

        assert_eq!(
            Problem::diagonal(2, triangle.clone()).formula(),
            Err(err::ErrorKind::Model(err::ModelError::PatternTooLarge {
                pattern: 3,
                order: 2
            }))
        );

        let edgeless = OrderedGraph::parse(None, "   ").unwrap();
        assert_eq!(
            Problem::new(5, triangle.clone(), edgeless).formula(),
            Err(err::ErrorKind::Model(err::ModelError::EdgelessPattern))
        );

        assert_eq!(
            parse_conditions("1 2 r, 2 7 b", 5),
            Err(err::ErrorKind::Model(err::ModelError::ForcedEdgeOutOfRange(2, 7)))
        );
        assert_eq!(
            parse_conditions("1 2 r, 2 3", 5),
            Err(err::ErrorKind::Parse(err::ParseError::Condition(1)))
        );
        assert_eq!(
            parse_conditions("1 2 g", 5),
            Err(err::ErrorKind::Parse(err::ParseError::Condition(0)))
        );
    }

    #[test]
    fn malformed_patterns() {
        assert_eq!(
            OrderedGraph::parse(None, "1 2, 3"),
            Err(err::ErrorKind::Parse(err::ParseError::Edge(1)))
        );
        assert_eq!(
            OrderedGraph::parse(None, "1 2, 2 2"),
            Err(err::ErrorKind::Graph(err::GraphError::SelfLoop(2)))
        );
        assert_eq!(
            OrderedGraph::parse(None, "1 2, 2 1"),
            Err(err::ErrorKind::Graph(err::GraphError::DuplicateEdge(1, 2)))
        );
        assert_eq!(
            OrderedGraph::parse(Some(3), "1 4"),
            Err(err::ErrorKind::Graph(err::GraphError::OutOfRange(4, 3)))
        );
    }
}
