use std::fmt;

// A FastA record: the description line (without the leading '>') and the raw sequence, with any
// line wrapping from the source file already removed.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

// Always written unwrapped: one header line, one sequence line (no trailing newline here, use
// writeln!).
impl fmt::Display for SeqRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}\n{}", self.header, self.sequence)
    }
}
