use crate::config::CleanConfig;
use crate::dates::{is_stale, DATE_TOKEN};
use crate::types::MarkdownLine;
use anyhow::Result;
use regex::{Captures, Regex};

use super::engine::RewriteRule;

// InlineDateRule - rewrites parenthetical phrases that end in a stale date,
// e.g. `(Completed on 2025-01-01)` -> `(Completed)`. The date is only
// strippable when the prefix ends in a recognized connector; a parenthetical
// date with no connector is left alone.
pub struct InlineDateRule<'a> {
    parenthetical: Regex,
    version_token: Regex,
    config: &'a CleanConfig,
}

impl<'a> InlineDateRule<'a> {
    pub fn new(config: &'a CleanConfig) -> Result<Self> {
        Ok(Self {
            parenthetical: Regex::new(&format!(r"\(([^()]*?)({DATE_TOKEN})\)"))?,
            version_token: Regex::new(&config.inline_dates.version_pattern)?,
            config,
        })
    }

    /// Rewrite one parenthetical match, or None to leave it untouched.
    fn rewrite_match(&self, caps: &Captures) -> Option<String> {
        if !is_stale(&caps[2], self.config.cutoff_date) {
            return None;
        }

        let prefix = &caps[1];
        let stripped = strip_connector(prefix, &self.config.inline_dates.connectors)?;
        let kept = stripped.trim();
        if kept.is_empty() {
            return Some("()".to_string());
        }
        if self.version_token.is_match(kept) {
            // Version tokens pass through untouched
            return Some(format!("({kept})"));
        }
        let kept = kept.trim_end_matches([',', ';', ':']).trim_end();
        Some(format!("({kept})"))
    }
}

impl<'a> RewriteRule for InlineDateRule<'a> {
    fn apply(&self, lines: Vec<MarkdownLine>) -> Result<Vec<MarkdownLine>> {
        let mut rewritten = 0;
        let mut result_lines = Vec::with_capacity(lines.len());

        for mut line in lines {
            if !line.exempt {
                let mut replaced = false;
                let swept = self
                    .parenthetical
                    .replace_all(&line.text, |caps: &Captures| {
                        match self.rewrite_match(caps) {
                            Some(replacement) => {
                                replaced = true;
                                replacement
                            }
                            None => caps[0].to_string(),
                        }
                    });
                if replaced {
                    line.text = swept.into_owned();
                    line.rewritten = true;
                    rewritten += 1;
                }
            }
            result_lines.push(line);
        }

        if rewritten > 0 {
            println!("   ✂️  Stripped inline dates on {rewritten} lines");
        }
        Ok(result_lines)
    }

    fn name(&self) -> &str {
        "InlineDates"
    }
}

/// Drop a trailing connector (`on `, `as of `, `: `) from the prefix,
/// matched case-insensitively. None when no connector ends the prefix.
fn strip_connector<'t>(prefix: &'t str, connectors: &[String]) -> Option<&'t str> {
    for connector in connectors {
        let len = connector.len();
        if prefix.len() >= len && prefix.is_char_boundary(prefix.len() - len) {
            let tail = &prefix[prefix.len() - len..];
            if tail.eq_ignore_ascii_case(connector) {
                return Some(&prefix[..prefix.len() - len]);
            }
        }
    }
    None
}
