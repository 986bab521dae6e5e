use super::*;
use std::collections::BTreeMap;

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
fn terminal_lookup() {
    let grammar = scenario_grammar();
    assert_eq!(grammar.nonterminals_for_terminal("a"), vec!["A"]);
    assert_eq!(grammar.nonterminals_for_terminal("d"), vec!["B"]);
    assert_eq!(grammar.lookup_by_terminal("d"), &[grammar.label("B").unwrap()]);
    assert!(grammar.is_terminal("c"));
    assert_eq!(grammar.terminals(), vec!["a", "c", "d"]);
}

#[test]
fn pair_lookup() {
    let grammar = scenario_grammar();
    let a = grammar.label("A").unwrap();
    let b = grammar.label("B").unwrap();
    let d = grammar.label("D").unwrap();
    assert_eq!(grammar.lookup_by_pair(a, b), &[d]);
    assert_eq!(grammar.name(d), "D");
    assert_eq!(grammar.nonterminals_for_pair("D", "E"), vec!["S"]);
}

#[test]
fn pair_order_matters() {
    let grammar = scenario_grammar();
    let a = grammar.label("A").unwrap();
    let b = grammar.label("B").unwrap();
    assert!(grammar.lookup_by_pair(b, a).is_empty());
    assert!(grammar.nonterminals_for_pair("E", "D").is_empty());
}

#[test]
fn unknown_symbols_are_empty() {
    let grammar = scenario_grammar();
    assert!(grammar.lookup_by_terminal("z").is_empty());
    assert!(grammar.nonterminals_for_terminal("").is_empty());
    assert!(grammar.nonterminals_for_pair("A", "Q").is_empty());
    assert!(!grammar.is_terminal("A"));
    assert_eq!(grammar.label("Q"), None);
}

#[test]
fn nonterminals_sorted() {
    let grammar = scenario_grammar();
    let names: Vec<&str> = grammar.nonterminals().collect();
    assert_eq!(names, vec!["A", "B", "C", "D", "E", "S"]);
    assert_eq!(grammar.num_labels(), 6);
}

/// one terminal matched by two unary rules keeps both nonterminals
#[test]
fn terminal_collision() {
    let grammar = GrammarIndex::new(vec![
        ("X", vec![vec!["a"]]),
        ("Y", vec![vec!["a"], vec!["b"]]),
    ]).unwrap();
    assert_eq!(grammar.nonterminals_for_terminal("a"), vec!["X", "Y"]);
    assert_eq!(grammar.nonterminals_for_terminal("b"), vec!["Y"]);
}

#[test]
fn duplicate_rules_collapse() {
    let grammar = GrammarIndex::new(vec![
        ("X", vec![vec!["a"], vec!["a"], vec!["X", "X"], vec!["X", "X"]]),
    ]).unwrap();
    let x = grammar.label("X").unwrap();
    assert_eq!(grammar.lookup_by_terminal("a"), &[x]);
    assert_eq!(grammar.lookup_by_pair(x, x), &[x]);
}

#[test]
fn reject_three_symbol_rhs() {
    let result = GrammarIndex::new(vec![
        ("A", vec![vec!["a"]]),
        ("S", vec![vec!["A", "A", "A"]]),
    ]);
    assert_eq!(
        result.err(),
        Some(ConfigurationError::MalformedRule { lhs: "S".to_string(), len: 3 })
    );
}

#[test]
fn reject_empty_rhs() {
    let rhs: Vec<Vec<&str>> = vec![vec![]];
    let result = GrammarIndex::new(vec![("S", rhs)]);
    assert_eq!(
        result.err(),
        Some(ConfigurationError::MalformedRule { lhs: "S".to_string(), len: 0 })
    );
}

#[test]
fn reject_empty_symbol() {
    let result = GrammarIndex::new(vec![("S", vec![vec!["A", ""]])]);
    assert_eq!(
        result.err(),
        Some(ConfigurationError::EmptySymbol { lhs: "S".to_string() })
    );
}

#[test]
fn from_owned_map() {
    let mut rules: BTreeMap<String, Vec<Vec<String>>> = BTreeMap::new();
    rules.insert("P".to_string(), vec![vec!["p".to_string()]]);
    rules.insert("Q".to_string(), vec![vec!["P".to_string(), "P".to_string()]]);
    let grammar = GrammarIndex::new(&rules).unwrap();
    assert_eq!(grammar.nonterminals_for_pair("P", "P"), vec!["Q"]);
    assert_eq!(grammar.nonterminals_for_terminal("p"), vec!["P"]);
}

#[test]
fn shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GrammarIndex>();
}
