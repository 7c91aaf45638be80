use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::{Path, PathBuf};

// Import from datesweep-core
use datesweep_core::{CleanConfig, CleanReport, DebugConfig, DocumentCleaner};

#[derive(Parser)]
#[command(name = "datesweep")]
#[command(about = "Sweep stale date annotations out of markdown task logs")]
struct Args {
    /// Path to the markdown file to clean
    #[arg(short, long, default_value = "Dev/tasks/completed.md")]
    input: String,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Cutoff date override (YYYY-MM-DD); dates strictly before it are stale
    #[arg(long)]
    cutoff: Option<String>,

    /// Output file path (rewrites the input in place if not specified)
    #[arg(short, long)]
    output: Option<String>,

    /// Process and report without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Show available config options and exit
    #[arg(long)]
    show_configs: bool,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Trace lines matching this pattern through the pipeline (repeatable)
    #[arg(long)]
    trace: Vec<String>,

    /// Report format: text or json
    #[arg(long, default_value = "text")]
    report_format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("🧹 Datesweep Markdown Cleaner");

    if args.show_configs {
        show_help();
        return Ok(());
    }

    // Check if input file exists
    if !Path::new(&args.input).exists() {
        println!("⚠️  Input file not found at: {}", args.input);
        println!("   Please check the file path.");
        return Ok(());
    }

    // Load config using the functional fallback pattern
    let config_path = args.config.clone().or_else(discover_user_config);
    let mut config = CleanConfig::load_with_fallback(config_path.as_deref());

    if let Some(config_path) = &config_path {
        println!("📋 Loaded config from: {}", config_path);
    } else {
        println!("📋 Using default config");
    }

    // Apply CLI overrides to config
    if let Some(cutoff) = &args.cutoff {
        match NaiveDate::parse_from_str(cutoff, "%Y-%m-%d") {
            Ok(date) => config.cutoff_date = date,
            Err(_) => {
                eprintln!("❌ Invalid cutoff date '{}' (expected YYYY-MM-DD)", cutoff);
                std::process::exit(1);
            }
        }
    }

    let mut cleaner = DocumentCleaner::new(config);
    if !args.trace.is_empty() {
        cleaner.set_debug_config(DebugConfig::new(true, args.trace.clone()));
    }

    println!("📄 Processing: {}", args.input);

    let output = args.output.as_ref().map(PathBuf::from);
    match cleaner.clean_file_with_options(
        Path::new(&args.input),
        output.as_deref(),
        args.dry_run,
        args.profile,
    ) {
        Ok(report) => {
            println!("✅ Successfully processed {}", args.input);
            print_report(&report, &args.report_format)?;
        }
        Err(e) => {
            eprintln!("❌ Processing failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Fall back to a config in the user config directory when none is given
fn discover_user_config() -> Option<String> {
    let path = dirs::config_dir()?.join("datesweep/config.yaml");
    if path.exists() {
        Some(path.to_string_lossy().into_owned())
    } else {
        None
    }
}

fn print_report(report: &CleanReport, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        "text" => {
            println!("📊 Clean report:");
            println!("   - Lines scanned: {}", report.lines_scanned);
            println!("   - Lines kept: {}", report.lines_kept);
            println!("   - Lines dropped: {}", report.lines_dropped);
            println!("   - Lines rewritten: {}", report.lines_rewritten);
            println!("   - Lines exempt: {}", report.lines_exempt);
        }
        _ => {
            println!("⚠️  Unknown report format '{}', using text", format);
            print_report(report, "text")?;
        }
    }
    Ok(())
}

fn show_help() {
    println!("\n📋 Available Configuration Options:");
    println!("  --config <path>         Load custom config file");
    println!("  --input <path>          Markdown file to clean");
    println!("  --output <path>         Output file path (in-place rewrite if not specified)");
    println!("  --cutoff <date>         Override the stale-date cutoff (YYYY-MM-DD)");
    println!("  --dry-run               Process and report without writing");
    println!("  --profile               Time each pipeline step");
    println!("  --trace <pattern>       Trace matching lines through the pipeline");
    println!("  --report-format <fmt>   Report format: text or json");

    println!("\n📄 Config file keys (YAML):");
    println!("  cutoff_date             Stale-date threshold (default 2025-05-01)");
    println!("  exempt_markers          Substrings that exempt a line from all rules");
    println!("  pipeline.rules          Named rules to run, in order");
    println!("  marker_lines            Embedded `*(Date: ...)*` replacement toggle");
    println!("  inline_dates            Connector list and version-token pattern");

    println!("\n📝 Usage Examples:");
    println!("  cargo run -- -i tasks/completed.md");
    println!("  cargo run -- -i tasks/completed.md --dry-run --report-format json");
    println!("  cargo run -- -i tasks/completed.md -c sweep.yaml --cutoff 2025-01-01");
}
