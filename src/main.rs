//! Periscope - Passive Web Reconnaissance Scanner CLI

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;
use url::Url;

use periscope::advisor::{Advisor, ChatAdvisor};
use periscope::config;
use periscope::models::{ScanConfig, ScanResult, Severity};
use periscope::report;
use periscope::scanner;

/// Periscope - passive security reconnaissance for client audits
#[derive(Parser)]
#[command(name = "periscope", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a passive scan against a target site
    Scan {
        /// Target base URL (scheme optional, http assumed)
        #[arg(short, long)]
        target: String,

        /// Maximum number of pages to crawl
        #[arg(short, long)]
        max_pages: Option<usize>,

        /// Request timeout in seconds for crawl and probes
        #[arg(long)]
        timeout: Option<u64>,

        /// Output file path (default: periscope_{hostname}.json)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Re-print the summary of a previously saved scan
    Report {
        /// Path to the JSON results file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Expand a finding into client-friendly guidance via the advisory service
    Advise {
        /// Finding title
        #[arg(short, long)]
        title: String,

        /// Supporting evidence
        #[arg(short, long)]
        evidence: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "periscope=debug"
    } else {
        "periscope=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn print_banner() {
    let banner = r#"
    ╔═══════════════════════════════════════╗
    ║  PERISCOPE v0.1.0                     ║
    ║  Passive Web Reconnaissance Scanner   ║
    ╚═══════════════════════════════════════╝
    "#;
    println!("{}", banner.cyan());
}

fn severity_label(severity: &Severity) -> colored::ColoredString {
    match severity {
        Severity::High => "HIGH".red().bold(),
        Severity::Medium => "MEDIUM".yellow(),
        Severity::Low => "LOW".blue(),
    }
}

fn print_summary(result: &ScanResult) {
    println!("\n{}", "  Client Report".bold());
    println!("  {}", "─".repeat(35));

    for finding in &result.report {
        println!(
            "  [{}] {}",
            severity_label(&finding.severity),
            finding.title.bold()
        );
        println!("        {}", finding.explanation);
        println!("        {} {}", "Fix:".bold(), finding.remediation);
    }

    let severities = [
        (Severity::High, "High"),
        (Severity::Medium, "Medium"),
        (Severity::Low, "Low"),
    ];

    let mut builder = Builder::default();
    builder.push_record(["Severity", "Count"]);
    for (severity, label) in &severities {
        builder.push_record([
            label.to_string(),
            result.count_by_severity(severity).to_string(),
        ]);
    }
    builder.push_record(["Total".to_string(), result.report.len().to_string()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("\n{table}");
}

fn output_name_from_target(target: &str) -> String {
    if let Ok(url) = Url::parse(target) {
        let host = url.host_str().unwrap_or("unknown");
        let sanitized: String = host
            .chars()
            .map(|c| if c == '.' { '_' } else { c })
            .collect();
        format!("periscope_{sanitized}.json")
    } else {
        "periscope_report.json".to_string()
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            target,
            max_pages,
            timeout,
            output,
            config: config_path,
            verbose,
        } => {
            init_tracing(verbose);
            print_banner();

            let mut scan_config = if let Some(ref path) = config_path {
                config::load_config(path)?
            } else {
                let default_path = Path::new("config/default.toml");
                if default_path.exists() {
                    config::load_config(default_path)?
                } else {
                    ScanConfig::default()
                }
            };

            config::merge_cli_args(&mut scan_config, target, max_pages, timeout);

            println!("  {} {}", "Target:".bold(), scan_config.target.green());
            println!(
                "  {} {}\n",
                "Page budget:".bold(),
                scan_config.max_pages.to_string().cyan()
            );

            let result = scanner::run_scan(&scan_config).await?;

            println!(
                "  {} {} pages, {} scripts, {} forms",
                "Surface:".bold(),
                result.surface.pages.len(),
                result.surface.scripts.len(),
                result.surface.forms.len()
            );
            print_summary(&result);

            let output_file = output.unwrap_or_else(|| output_name_from_target(&result.target));
            report::json::export(&result, Path::new(&output_file))?;
            println!("\n  {} {}", "Report saved to:".bold(), output_file.green());
        }

        Commands::Report { input } => {
            init_tracing(false);
            print_banner();

            let result = report::json::load(&input)?;
            println!("  {} {}", "Target:".bold(), result.target.green());
            println!("  {} {}", "Scan id:".bold(), result.scan_id.cyan());
            print_summary(&result);
        }

        Commands::Advise { title, evidence } => {
            init_tracing(false);

            let advisor = ChatAdvisor::from_env();
            if !advisor.is_available() {
                eprintln!(
                    "  {} GROQ_API_KEY not set; advisory output will be a placeholder.",
                    "Note:".yellow().bold()
                );
            }
            let guidance = advisor.generate(&title, &evidence).await;
            println!("{guidance}");
        }
    }

    Ok(())
}
