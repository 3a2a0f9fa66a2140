use std::time::Instant;

use num_bigint::BigUint;

use crate::numeric::Factorials;

/// A row of the triangle together with its index in the full triangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub values: Vec<BigUint>,
}

/// Pascal's triangle down to row `depth`, or only that row.
#[derive(Debug)]
pub struct Pascal {
    depth: usize,
    rows: Vec<Row>,
    max: BigUint,
}

impl Pascal {
    pub fn new(depth: usize, only: bool) -> Self {
        let start = Instant::now();
        let factorials = Factorials::up_to(depth);

        let row = |index: usize| Row {
            index,
            values: (0..=index).map(|k| factorials.nchoosek(index, k)).collect(),
        };

        let rows = if only {
            vec![row(depth)]
        } else {
            (0..=depth).map(row).collect()
        };

        let max = factorials.nchoosek(depth, depth / 2);

        tracing::debug!(
            depth,
            only,
            rows = rows.len(),
            elapsed = ?start.elapsed(),
            "built triangle"
        );

        Self { depth, rows, max }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// `nchoosek(depth, depth / 2)`, the middle of the last row.
    pub fn max(&self) -> &BigUint {
        &self.max
    }
}
