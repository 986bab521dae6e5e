//! Index of a grammar in Chomsky Normal Form.
//!
//! Unary rules `A -> a` are kept in a table keyed by the terminal, binary
//! rules `A -> B C` in a table keyed by the ordered pair `(B, C)`. Both
//! tables are frozen once `GrammarIndex::new` returns.

use crate::errors::ConfigurationError;
use std::collections::{BTreeSet, HashMap};

#[cfg(test)]
mod test;

index! {
    /// A grammar symbol that may label a derived edge or appear on the
    /// right-hand side of a binary rule. Only meaningful for the
    /// `GrammarIndex` that assigned it.
    pub struct Label = "L";
}

#[derive(Debug)]
pub struct GrammarIndex {
    names: Vec<String>,
    labels: HashMap<String, Label>,
    by_terminal: HashMap<String, Vec<Label>>,
    by_pair: HashMap<(Label, Label), Vec<Label>>,
    nonterminals: BTreeSet<String>,
}

impl GrammarIndex {
    /// Builds the index from `(lhs, right-hand sides)` entries. Any
    /// right-hand side whose length is not 1 or 2 rejects the whole
    /// grammar.
    pub fn new<I, L, R, S>(rules: I) -> Result<GrammarIndex, ConfigurationError>
    where
        I: IntoIterator<Item = (L, R)>,
        L: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut index = GrammarIndex {
            names: vec![],
            labels: HashMap::new(),
            by_terminal: HashMap::new(),
            by_pair: HashMap::new(),
            nonterminals: BTreeSet::new(),
        };

        let mut num_rules = 0;
        for (lhs, rhs_list) in rules {
            let lhs = lhs.as_ref();
            if lhs.is_empty() {
                return Err(ConfigurationError::EmptySymbol { lhs: String::new() });
            }
            let lhs_label = index.intern(lhs);
            index.nonterminals.insert(lhs.to_string());

            for rhs in rhs_list {
                let rhs = rhs.as_ref();
                if rhs.iter().any(|symbol| symbol.as_ref().is_empty()) {
                    return Err(ConfigurationError::EmptySymbol { lhs: lhs.to_string() });
                }
                match rhs {
                    [terminal] => {
                        let lhs_list = index
                            .by_terminal
                            .entry(terminal.as_ref().to_string())
                            .or_insert(vec![]);
                        push_unique(lhs_list, lhs_label);
                    }
                    [left, right] => {
                        let left = index.intern(left.as_ref());
                        let right = index.intern(right.as_ref());
                        push_unique(index.by_pair.entry((left, right)).or_insert(vec![]), lhs_label);
                    }
                    _ => {
                        return Err(ConfigurationError::MalformedRule {
                            lhs: lhs.to_string(),
                            len: rhs.len(),
                        });
                    }
                }
                num_rules += 1;
            }
        }

        log!(
            "GrammarIndex::new: {} rules, {} nonterminals, {} terminals, {} pair keys",
            num_rules,
            index.nonterminals.len(),
            index.by_terminal.len(),
            index.by_pair.len()
        );

        Ok(index)
    }

    fn intern(&mut self, name: &str) -> Label {
        if let Some(&label) = self.labels.get(name) {
            return label;
        }
        let label = Label::from(self.names.len());
        self.names.push(name.to_string());
        self.labels.insert(name.to_string(), label);
        label
    }

    /// Nonterminals with a unary rule for `terminal`; empty if the
    /// terminal is not part of the grammar.
    pub fn lookup_by_terminal(&self, terminal: &str) -> &[Label] {
        self.by_terminal
            .get(terminal)
            .map(|v| &v[..])
            .unwrap_or(&[])
    }

    /// Nonterminals `A` with a rule `A -> left right`.
    pub fn lookup_by_pair(&self, left: Label, right: Label) -> &[Label] {
        self.by_pair
            .get(&(left, right))
            .map(|v| &v[..])
            .unwrap_or(&[])
    }

    pub fn nonterminals_for_terminal(&self, terminal: &str) -> Vec<&str> {
        self.sorted_names(self.lookup_by_terminal(terminal))
    }

    pub fn nonterminals_for_pair(&self, left: &str, right: &str) -> Vec<&str> {
        match (self.label(left), self.label(right)) {
            (Some(left), Some(right)) => self.sorted_names(self.lookup_by_pair(left, right)),
            _ => vec![],
        }
    }

    fn sorted_names(&self, labels: &[Label]) -> Vec<&str> {
        let mut names: Vec<&str> = labels.iter().map(|&l| self.name(l)).collect();
        names.sort();
        names
    }

    pub fn label(&self, name: &str) -> Option<Label> {
        self.labels.get(name).cloned()
    }

    pub fn name(&self, label: Label) -> &str {
        &self.names[label.index()]
    }

    /// Number of distinct labels; every `Label` handed out is below this.
    pub fn num_labels(&self) -> usize {
        self.names.len()
    }

    /// Left-hand sides of the grammar, sorted.
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> + '_ {
        self.nonterminals.iter().map(|s| &s[..])
    }

    /// The terminal alphabet, sorted.
    pub fn terminals(&self) -> Vec<&str> {
        let mut terminals: Vec<&str> = self.by_terminal.keys().map(|s| &s[..]).collect();
        terminals.sort();
        terminals
    }

    pub fn is_terminal(&self, symbol: &str) -> bool {
        self.by_terminal.contains_key(symbol)
    }
}

fn push_unique(labels: &mut Vec<Label>, label: Label) {
    if !labels.contains(&label) {
        labels.push(label);
    }
}
