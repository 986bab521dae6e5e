use super::*;
use crate::closure::ClosureEngine;

fn scenario_grammar() -> GrammarIndex {
    GrammarIndex::new(vec![
        ("A", vec![vec!["a"]]),
        ("B", vec![vec!["d"]]),
        ("C", vec![vec!["c"]]),
        ("D", vec![vec!["A", "B"]]),
        ("E", vec![vec!["B", "C"]]),
        ("S", vec![vec!["D", "E"]]),
    ]).unwrap()
}

#[test]
fn scenario_b_derives_s() {
    let grammar = scenario_grammar();
    let closure = NaiveOracle::new(&grammar).close_rows(&[
        vec![None, Some("a"), None, None, None],
        vec![None, None, Some("d"), None, None],
        vec![None, None, None, Some("d"), None],
        vec![None, None, None, None, Some("c")],
        vec![None, None, None, None, None],
    ]).unwrap();
    assert_eq!(closure.labels(0, 4), &["S"]);
    assert_eq!(closure.labels(0, 2), &["D"]);
    assert_eq!(closure.labels(2, 4), &["E"]);
    assert_eq!(closure.num_facts(), 7);
}

#[test]
fn scenario_a_has_no_s() {
    let grammar = scenario_grammar();
    let matrix = EdgeMatrix::with_edges(4, &[(0, 1, "a"), (1, 2, "d"), (2, 3, "c")]).unwrap();
    let closure = NaiveOracle::new(&grammar).close(&matrix);
    assert!(closure.labels(0, 3).is_empty());
    assert_eq!(closure.labels(1, 3), &["E"]);
}

/// Balanced parentheses: `S -> L R | L T | S S`, `T -> S R`. The
/// derivation of the outer pair needs several passes.
#[test]
fn dyck_chain_matches_engine() {
    let grammar = GrammarIndex::new(vec![
        ("L", vec![vec!["("]]),
        ("R", vec![vec![")"]]),
        ("S", vec![vec!["L", "R"], vec!["L", "T"], vec!["S", "S"]]),
        ("T", vec![vec!["S", "R"]]),
    ]).unwrap();
    // ( ( ) ( ) )
    let matrix = EdgeMatrix::with_edges(7, &[
        (0, 1, "("),
        (1, 2, "("),
        (2, 3, ")"),
        (3, 4, "("),
        (4, 5, ")"),
        (5, 6, ")"),
    ]).unwrap();
    let naive = NaiveOracle::new(&grammar).close(&matrix);
    assert!(naive.contains(0, 6, "S"));
    assert!(naive.contains(1, 5, "S"));
    assert!(!naive.contains(0, 5, "S"));
    assert_eq!(naive, ClosureEngine::new(&grammar).solve_matrix(&matrix));
}

#[test]
fn non_square_rows_rejected() {
    let grammar = scenario_grammar();
    let result = NaiveOracle::new(&grammar).close_rows(&[vec![None, Some("a")]]);
    assert_eq!(
        result.err(),
        Some(ConfigurationError::NonSquareMatrix { row: 0, len: 2, expected: 1 })
    );
}
