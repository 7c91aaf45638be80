use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_cutoff_date() -> NaiveDate {
    // Annotations dated strictly before this are stale
    NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid cutoff date literal")
}

fn default_exempt_markers() -> Vec<String> {
    vec!["Current Session".to_string()]
}

fn default_connectors() -> Vec<String> {
    vec!["on ".to_string(), "as of ".to_string(), ": ".to_string()]
}

fn default_version_pattern() -> String {
    // v2.1.0-beta, v1.0, v3.2.1-rc.2, ...
    r"^v\d+[0-9A-Za-z_.\-]*$".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Dates strictly before this are stale and subject to removal
    #[serde(default = "default_cutoff_date")]
    pub cutoff_date: NaiveDate,
    /// A line containing any of these substrings skips every rule
    #[serde(default = "default_exempt_markers")]
    pub exempt_markers: Vec<String>,
    /// Pipeline configuration - defines which rules to run and in what order
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Marker-line rule configuration
    #[serde(default)]
    pub marker_lines: MarkerLineConfig,
    /// Inline-date rule configuration
    #[serde(default)]
    pub inline_dates: InlineDateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// List of rules to run in order
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Name of the rule
    pub name: String,
    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                RuleConfig {
                    name: "MarkerLines".to_string(),
                    enabled: true,
                },
                RuleConfig {
                    name: "HeadingDates".to_string(),
                    enabled: true,
                },
                RuleConfig {
                    name: "InlineDates".to_string(),
                    enabled: true,
                },
                RuleConfig {
                    name: "PlaceholderCleanup".to_string(),
                    enabled: true,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerLineConfig {
    /// Replace stale `*(Date: ...)*` markers embedded in longer lines with
    /// the `*()*` placeholder instead of leaving them
    #[serde(default = "default_true")]
    pub replace_embedded: bool,
}

impl Default for MarkerLineConfig {
    fn default() -> Self {
        Self {
            replace_embedded: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineDateConfig {
    /// Connector suffixes a parenthetical prefix must end with for the date
    /// to be strippable. Matched case-insensitively.
    #[serde(default = "default_connectors")]
    pub connectors: Vec<String>,
    /// Prefixes matching this pattern are version tokens and are wrapped
    /// back verbatim instead of being normalized as prose
    #[serde(default = "default_version_pattern")]
    pub version_pattern: String,
}

impl Default for InlineDateConfig {
    fn default() -> Self {
        Self {
            connectors: default_connectors(),
            version_pattern: default_version_pattern(),
        }
    }
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            cutoff_date: default_cutoff_date(),
            exempt_markers: default_exempt_markers(),
            pipeline: PipelineConfig::default(),
            marker_lines: MarkerLineConfig::default(),
            inline_dates: InlineDateConfig::default(),
        }
    }
}

impl CleanConfig {
    /// Load config from file path (functional approach)
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CleanConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|_| {
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
