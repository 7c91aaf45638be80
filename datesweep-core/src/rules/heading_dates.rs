use crate::config::CleanConfig;
use crate::dates::{is_stale, DATE_TOKEN};
use crate::types::MarkdownLine;
use anyhow::Result;
use regex::Regex;

use super::engine::RewriteRule;

// HeadingDateRule - strips stale dates from `## YYYY-MM-DD ...` headings.
// The heading marker and any following text survive; whitespace around the
// removed token collapses to a single space. A heading left empty becomes
// `##` and is dropped by PlaceholderCleanup.
pub struct HeadingDateRule<'a> {
    heading: Regex,
    config: &'a CleanConfig,
}

impl<'a> HeadingDateRule<'a> {
    pub fn new(config: &'a CleanConfig) -> Result<Self> {
        Ok(Self {
            heading: Regex::new(&format!(r"^## ({DATE_TOKEN})(.*)$"))?,
            config,
        })
    }
}

impl<'a> RewriteRule for HeadingDateRule<'a> {
    fn apply(&self, lines: Vec<MarkdownLine>) -> Result<Vec<MarkdownLine>> {
        let cutoff = self.config.cutoff_date;
        let mut rewritten = 0;
        let mut result_lines = Vec::with_capacity(lines.len());

        for mut line in lines {
            if !line.exempt {
                if let Some(caps) = self.heading.captures(&line.text) {
                    if is_stale(&caps[1], cutoff) {
                        let rest = caps[2].trim();
                        line.text = if rest.is_empty() {
                            "##".to_string()
                        } else {
                            format!("## {rest}")
                        };
                        line.rewritten = true;
                        rewritten += 1;
                    }
                }
            }
            result_lines.push(line);
        }

        if rewritten > 0 {
            println!("   ✂️  Removed stale dates from {rewritten} headings");
        }
        Ok(result_lines)
    }

    fn name(&self) -> &str {
        "HeadingDates"
    }
}
