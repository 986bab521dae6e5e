use std::fmt;

/// The dense result of a closure: for every ordered vertex pair, the
/// nonterminals that derive some path between them, sorted and without
/// repeats. Cells with no derivation hold an empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelClosure {
    size: usize,
    cells: Vec<Vec<String>>,
}

impl LabelClosure {
    /// Builds the grid by asking `labels_of(i, j)` for every cell, then
    /// sorting each cell.
    pub(crate) fn from_fn<F>(size: usize, mut labels_of: F) -> Self
    where
        F: FnMut(usize, usize) -> Vec<String>,
    {
        let mut cells = Vec::with_capacity(size * size);
        for source in 0..size {
            for target in 0..size {
                let mut labels = labels_of(source, target);
                labels.sort();
                debug_assert!(labels.windows(2).all(|w| w[0] != w[1]));
                cells.push(labels);
            }
        }
        LabelClosure { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn labels(&self, source: usize, target: usize) -> &[String] {
        assert!(source < self.size && target < self.size);
        &self.cells[source * self.size + target]
    }

    pub fn contains(&self, source: usize, target: usize, label: &str) -> bool {
        self.labels(source, target).iter().any(|l| l == label)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Vec<String>]> + '_ {
        let size = self.size;
        (0..size).map(move |row| &self.cells[row * size..(row + 1) * size])
    }

    pub fn into_rows(self) -> Vec<Vec<Vec<String>>> {
        let size = self.size;
        let mut cells = self.cells.into_iter();
        (0..size).map(|_| cells.by_ref().take(size).collect()).collect()
    }

    /// Every `(source, target, label)` triple, row-major and in label order.
    pub fn facts(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().flat_map(move |(index, labels)| {
            labels.iter().map(move |label| (index / size, index % size, &label[..]))
        })
    }

    pub fn num_facts(&self) -> usize {
        self.cells.iter().map(|labels| labels.len()).sum()
    }
}

impl fmt::Display for LabelClosure {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            write!(fmt, "{}:", index)?;
            for labels in row {
                write!(fmt, " [{}]", labels.join(" "))?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
