use crate::config::CleanConfig;
use crate::rules::{DebugConfig, RuleEngine};
use crate::storage::{read_markdown, write_markdown};
use crate::types::{CleanReport, MarkdownLine};
use anyhow::Result;
use std::path::Path;
use std::time::{Duration, Instant};

/// The cleaned document plus the run's summary counters.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CleanOutcome {
    pub text: String,
    pub report: CleanReport,
}

/// Simple profiler that collects timings for pipeline steps
pub struct StepProfiler {
    enabled: bool,
    timings: Vec<(String, Duration)>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            timings: Vec::new(),
        }
    }

    pub fn time_step<F, R>(&mut self, step_name: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if !self.enabled {
            return f();
        }

        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        self.timings.push((step_name.to_string(), elapsed));
        println!("⏱️  {}: {:.0}ms", step_name, elapsed.as_millis());

        result
    }

    pub fn print_summary(&self) {
        if !self.enabled || self.timings.is_empty() {
            return;
        }

        println!("\n📊 Performance Summary:");
        let total: Duration = self.timings.iter().map(|(_, d)| *d).sum();

        for (step, duration) in &self.timings {
            println!("   {:.<25} {:.0}ms", step, duration.as_millis());
        }
        println!("   {:.<25} {:.0}ms", "Total", total.as_millis());
    }
}

pub struct DocumentCleaner {
    rule_engine: RuleEngine,
}

impl DocumentCleaner {
    pub fn new(config: CleanConfig) -> Self {
        Self {
            rule_engine: RuleEngine::new(config),
        }
    }

    pub fn set_debug_config(&mut self, debug_config: DebugConfig) {
        self.rule_engine.set_debug_config(debug_config);
    }

    /// Per-rule timings collected by the engine during the last run
    pub fn rule_timings(&self) -> Vec<(String, Duration)> {
        self.rule_engine.rule_timings.borrow().clone()
    }

    /// Clean a whole document held in memory. Purely functional: the same
    /// input and config always produce the same outcome, and cleaning the
    /// output again is a no-op.
    pub fn clean_text(&self, content: &str) -> Result<CleanOutcome> {
        let lines = self.rule_engine.convert_content_to_lines(content);
        let scanned = lines.len();

        let cleaned = self.rule_engine.apply_rules(lines)?;

        let text = join_lines(&cleaned, content.ends_with('\n'));
        let changed = text != content;
        let report = CleanReport::from_lines(scanned, &cleaned, changed);
        Ok(CleanOutcome { text, report })
    }

    /// Clean a file in place: read fully, process in memory, write back.
    /// The write happens only after the whole pass succeeded and is skipped
    /// when the document is already clean.
    pub fn clean_file(&self, path: &Path) -> Result<CleanReport> {
        self.clean_file_with_options(path, None, false, false)
    }

    pub fn clean_file_with_options(
        &self,
        input: &Path,
        output: Option<&Path>,
        dry_run: bool,
        profile: bool,
    ) -> Result<CleanReport> {
        let mut profiler = StepProfiler::new(profile);

        let content = profiler.time_step("Read", || read_markdown(input))?;
        let outcome = profiler.time_step("Rule processing", || self.clean_text(&content))?;

        if profile {
            for (rule, duration) in self.rule_timings() {
                println!("   ⏱️  {}: {:.0}ms", rule, duration.as_millis());
            }
        }

        let target = output.unwrap_or(input);
        if dry_run {
            println!("🔎 Dry run - {} not written", target.display());
        } else if !outcome.report.changed && output.is_none() {
            println!("✨ Already clean - {} left untouched", input.display());
        } else {
            profiler.time_step("Write", || write_markdown(target, &outcome.text))?;
            println!("💾 Cleaned document written to {}", target.display());
        }

        profiler.print_summary();
        Ok(outcome.report)
    }
}

/// Reassemble output lines, preserving the input's trailing final newline.
fn join_lines(lines: &[MarkdownLine], trailing_newline: bool) -> String {
    let mut text = lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    if trailing_newline && !text.is_empty() {
        text.push('\n');
    }
    text
}
