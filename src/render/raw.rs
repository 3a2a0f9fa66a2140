use std::fmt;

use crate::triangle::Pascal;

/// One bracketed, space separated list of values per row.
pub struct Raw<'a> {
    pascal: &'a Pascal,
    headers: bool,
}

impl<'a> Raw<'a> {
    pub fn new(pascal: &'a Pascal, headers: bool) -> Self {
        Self { pascal, headers }
    }
}

impl fmt::Display for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pascal.rows() {
            if self.headers {
                write!(f, "{}: ", row.index)?;
            }

            let values = row
                .values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "[{values}]")?;
        }
        Ok(())
    }
}
