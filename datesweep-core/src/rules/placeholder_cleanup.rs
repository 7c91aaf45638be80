use crate::types::MarkdownLine;
use anyhow::Result;

use super::engine::RewriteRule;

// PlaceholderCleanupRule - final pass over the pipeline output. Lines the
// earlier rules reduced to an empty placeholder are removed entirely;
// `--- *()*` keeps its separator. Runs on literal placeholders in the input
// too, which keeps a second pass over cleaned output a no-op.
pub struct PlaceholderCleanupRule;

impl PlaceholderCleanupRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlaceholderCleanupRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RewriteRule for PlaceholderCleanupRule {
    fn apply(&self, lines: Vec<MarkdownLine>) -> Result<Vec<MarkdownLine>> {
        let mut dropped = 0;
        let mut result_lines = Vec::with_capacity(lines.len());

        for mut line in lines {
            if line.exempt {
                result_lines.push(line);
                continue;
            }

            let trimmed = line.text.trim();
            if trimmed == "*()*" || trimmed == "##" {
                dropped += 1;
                continue;
            }
            if trimmed == "--- *()*" {
                line.text = "---".to_string();
                line.rewritten = true;
            }
            result_lines.push(line);
        }

        if dropped > 0 {
            println!("   🗑️  Dropped {dropped} empty placeholder lines");
        }
        Ok(result_lines)
    }

    fn name(&self) -> &str {
        "PlaceholderCleanup"
    }
}
