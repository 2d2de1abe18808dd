use crate::core::types::Strand;

/// Number of mandatory PAF columns
pub const PAF_MANDATORY_FIELDS: usize = 12;

/// One raw alignment line from the aligner (PAF columns 1-11; mapping quality is ignored)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub query_name: String,
    pub query_len: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub strand: Strand,
    pub target_name: String,
    pub target_len: u64,
    pub target_start: u64,
    pub target_end: u64,
    pub matches: u64,
    pub block_len: u64,
}

impl AlignmentRecord {
    /// Parse a tab-separated PAF line.
    ///
    /// Returns `None` for lines with fewer than 12 fields or with non-numeric
    /// coordinate columns; such rows are tolerated and skipped by callers.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < PAF_MANDATORY_FIELDS {
            return None;
        }

        let num = |i: usize| fields[i].trim().parse::<u64>().ok();

        Some(Self {
            query_name: fields[0].to_string(),
            query_len: num(1)?,
            query_start: num(2)?,
            query_end: num(3)?,
            strand: Strand::parse(fields[4].trim()),
            target_name: fields[5].to_string(),
            target_len: num(6)?,
            target_start: num(7)?,
            target_end: num(8)?,
            matches: num(9)?,
            block_len: num(10)?,
        })
    }

    /// Fraction of alignment columns that are matches (0 when the block is empty)
    #[must_use]
    pub fn identity(&self) -> f64 {
        if self.block_len == 0 {
            return 0.0;
        }
        ratio(self.matches, self.block_len)
    }

    /// Fraction of the query covered by the alignment (0 when the query is empty)
    #[must_use]
    pub fn query_coverage(&self) -> f64 {
        if self.query_len == 0 {
            return 0.0;
        }
        ratio(self.query_aligned_len(), self.query_len)
    }

    #[must_use]
    pub fn query_aligned_len(&self) -> u64 {
        self.query_end.saturating_sub(self.query_start)
    }
}

/// Helper to divide two counts with explicit precision loss allowance
#[inline]
pub(crate) fn ratio(numerator: u64, denominator: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        numerator as f64 / denominator as f64
    }
}
