use crate::config::CleanConfig;
use crate::types::MarkdownLine;
use anyhow::Result;
use regex::Regex;

use super::heading_dates::HeadingDateRule;
use super::inline_dates::InlineDateRule;
use super::marker_lines::MarkerLineRule;
use super::placeholder_cleanup::PlaceholderCleanupRule;

// Debug configuration for pipeline tracing
#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub filter_patterns: Vec<String>,
}

impl DebugConfig {
    pub fn new(enabled: bool, filter_patterns: Vec<String>) -> Self {
        Self {
            enabled,
            filter_patterns,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            filter_patterns: Vec::new(),
        }
    }
}

/// Debug utility function to trace lines through the pipeline
pub fn debug_pipeline_lines(rule_name: &str, lines: &[MarkdownLine], debug_config: &DebugConfig) {
    if !debug_config.enabled || debug_config.filter_patterns.is_empty() {
        return;
    }

    let matching_lines: Vec<_> = lines
        .iter()
        .filter(|line| {
            debug_config.filter_patterns.iter().any(|pattern| {
                // Try regex first, fall back to simple string contains
                if let Ok(regex) = Regex::new(pattern) {
                    regex.is_match(&line.text)
                } else {
                    line.text.contains(pattern)
                }
            })
        })
        .collect();

    if !matching_lines.is_empty() {
        println!(
            "🔍 [{}] {} matching lines:",
            rule_name,
            matching_lines.len()
        );
        for line in matching_lines {
            let text_preview: String = if line.text.chars().count() > 60 {
                line.text.chars().take(57).collect::<String>() + "..."
            } else {
                line.text.clone()
            };
            println!(
                "  Line {}: \"{}\" (exempt: {}, rewritten: {})",
                line.number, text_preview, line.exempt, line.rewritten
            );
        }
        println!();
    }
}

pub struct RuleEngine {
    config: CleanConfig,
    debug_config: DebugConfig,
    pub rule_timings: std::cell::RefCell<Vec<(String, std::time::Duration)>>,
}

impl RuleEngine {
    pub fn new(config: CleanConfig) -> Self {
        Self {
            config,
            debug_config: DebugConfig::disabled(),
            rule_timings: std::cell::RefCell::new(Vec::new()),
        }
    }

    pub fn set_debug_config(&mut self, debug_config: DebugConfig) {
        self.debug_config = debug_config;
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Base conversion: split raw text into MarkdownLines and mark the
    /// exempt ones once, so individual rules only have to check a flag.
    pub fn convert_content_to_lines(&self, content: &str) -> Vec<MarkdownLine> {
        content
            .lines()
            .enumerate()
            .map(|(index, text)| {
                let mut line = MarkdownLine::new(index + 1, text);
                line.exempt = self
                    .config
                    .exempt_markers
                    .iter()
                    .any(|marker| text.contains(marker.as_str()));
                line
            })
            .collect()
    }

    /// Apply the configured rule pipeline in order.
    pub fn apply_rules(&self, lines: Vec<MarkdownLine>) -> Result<Vec<MarkdownLine>> {
        println!(
            "⚙️  Applying rewrite pipeline ({} lines, cutoff {})",
            lines.len(),
            self.config.cutoff_date
        );

        // Clear previous timings
        self.rule_timings.borrow_mut().clear();

        let mut lines = lines;
        for rule_config in &self.config.pipeline.rules {
            if !rule_config.enabled {
                println!("   ⏭️  Skipping disabled rule: {}", rule_config.name);
                continue;
            }

            println!("🔧 Applying rule: {}", rule_config.name);
            lines = self.apply_rule_by_name(&rule_config.name, lines)?;
            println!("   ✅ {} lines after {}", lines.len(), rule_config.name);
        }

        Ok(lines)
    }

    fn apply_rule_by_name(
        &self,
        rule_name: &str,
        lines: Vec<MarkdownLine>,
    ) -> Result<Vec<MarkdownLine>> {
        let rule_start = std::time::Instant::now();
        let result = match rule_name {
            "MarkerLines" => {
                let rule = MarkerLineRule::new(&self.config)?;
                let result = rule.apply(lines)?;
                debug_pipeline_lines("MarkerLines", &result, &self.debug_config);
                Ok(result)
            }
            "HeadingDates" => {
                let rule = HeadingDateRule::new(&self.config)?;
                let result = rule.apply(lines)?;
                debug_pipeline_lines("HeadingDates", &result, &self.debug_config);
                Ok(result)
            }
            "InlineDates" => {
                let rule = InlineDateRule::new(&self.config)?;
                let result = rule.apply(lines)?;
                debug_pipeline_lines("InlineDates", &result, &self.debug_config);
                Ok(result)
            }
            "PlaceholderCleanup" => {
                let rule = PlaceholderCleanupRule::new();
                let result = rule.apply(lines)?;
                debug_pipeline_lines("PlaceholderCleanup", &result, &self.debug_config);
                Ok(result)
            }
            _ => {
                println!("⚠️  Unknown rule: {rule_name}. Skipping...");
                Ok(lines)
            }
        };

        let rule_duration = rule_start.elapsed();
        self.rule_timings
            .borrow_mut()
            .push((rule_name.to_string(), rule_duration));
        result
    }
}

// Sequential rule pipeline infrastructure
pub trait RewriteRule {
    fn apply(&self, lines: Vec<MarkdownLine>) -> Result<Vec<MarkdownLine>>;
    fn name(&self) -> &str;
}
