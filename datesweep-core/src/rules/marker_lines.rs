use crate::config::CleanConfig;
use crate::dates::{is_stale, DATE_TOKEN};
use crate::types::MarkdownLine;
use anyhow::Result;
use regex::{Captures, Regex};

use super::engine::RewriteRule;

// MarkerLineRule - removes or collapses stale `*(Date: YYYY-MM-DD)*` markers.
//
// Three shapes, checked in order:
//   `*(Date: D)*` alone on a line      -> line dropped
//   `--- *(Date: D)*`                  -> line becomes `---`
//   `*(Date: D)*` inside a longer line -> marker becomes `*()*`
pub struct MarkerLineRule<'a> {
    standalone: Regex,
    separator: Regex,
    embedded: Regex,
    config: &'a CleanConfig,
}

impl<'a> MarkerLineRule<'a> {
    pub fn new(config: &'a CleanConfig) -> Result<Self> {
        Ok(Self {
            standalone: Regex::new(&format!(r"^\s*\*\(Date: ({DATE_TOKEN})\)\*\s*$"))?,
            separator: Regex::new(&format!(r"^---\s*\*\(Date: ({DATE_TOKEN})\)\*\s*$"))?,
            embedded: Regex::new(&format!(r"\*\(Date: ({DATE_TOKEN})\)\*"))?,
            config,
        })
    }
}

impl<'a> RewriteRule for MarkerLineRule<'a> {
    fn apply(&self, lines: Vec<MarkdownLine>) -> Result<Vec<MarkdownLine>> {
        let cutoff = self.config.cutoff_date;
        let mut dropped = 0;
        let mut result_lines = Vec::with_capacity(lines.len());

        for mut line in lines {
            if line.exempt {
                result_lines.push(line);
                continue;
            }

            if let Some(caps) = self.standalone.captures(&line.text) {
                if is_stale(&caps[1], cutoff) {
                    dropped += 1;
                    continue;
                }
            }

            if let Some(caps) = self.separator.captures(&line.text) {
                if is_stale(&caps[1], cutoff) {
                    line.text = "---".to_string();
                    line.rewritten = true;
                    result_lines.push(line);
                    continue;
                }
            }

            if self.config.marker_lines.replace_embedded {
                let mut replaced = false;
                let swept = self.embedded.replace_all(&line.text, |caps: &Captures| {
                    if is_stale(&caps[1], cutoff) {
                        replaced = true;
                        "*()*".to_string()
                    } else {
                        caps[0].to_string()
                    }
                });
                if replaced {
                    line.text = swept.into_owned();
                    line.rewritten = true;
                }
            }

            result_lines.push(line);
        }

        if dropped > 0 {
            println!("   🗑️  Dropped {dropped} stale date-marker lines");
        }
        Ok(result_lines)
    }

    fn name(&self) -> &str {
        "MarkerLines"
    }
}
