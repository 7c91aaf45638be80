use serde::{Deserialize, Serialize};

// ===== PIPELINE ELEMENT TYPES =====
// A document is an ordered sequence of MarkdownLines. Rules consume and
// return the whole sequence; a rule drops a line by not re-emitting it.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownLine {
    /// 1-indexed line number in the source document
    pub number: usize,
    pub text: String,
    /// Carries an exemption marker and skips every rule
    pub exempt: bool,
    /// Set by the first rule that modifies the text
    pub rewritten: bool,
}

impl MarkdownLine {
    pub fn new(number: usize, text: &str) -> Self {
        Self {
            number,
            text: text.to_string(),
            exempt: false,
            rewritten: false,
        }
    }
}

/// Summary counters for one cleaning run. Serialized as-is for the JSON
/// report format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanReport {
    pub lines_scanned: usize,
    pub lines_kept: usize,
    pub lines_dropped: usize,
    pub lines_rewritten: usize,
    pub lines_exempt: usize,
    /// False when the output is byte-identical to the input
    pub changed: bool,
}

impl CleanReport {
    pub fn from_lines(scanned: usize, output: &[MarkdownLine], changed: bool) -> Self {
        let rewritten = output.iter().filter(|l| l.rewritten).count();
        let exempt = output.iter().filter(|l| l.exempt).count();
        Self {
            lines_scanned: scanned,
            lines_kept: output.len(),
            lines_dropped: scanned - output.len(),
            lines_rewritten: rewritten,
            lines_exempt: exempt,
            changed,
        }
    }
}
