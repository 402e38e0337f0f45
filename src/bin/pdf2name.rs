//! CLI binary for pdf2name.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `RenameConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2name::{
    run_batch, BatchProgressCallback, ProgressCallback, RenameConfig,
    DEFAULT_IDENTIFIER_LINE_INDEX, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and per-file log
/// lines using [indicatif]. Files are processed strictly in order, so a
/// single slot for the current file's start time is enough.
struct CliProgressCallback {
    /// The single progress bar anchored at the bottom of the terminal.
    bar: ProgressBar,
    /// Wall-clock start of the file currently being processed.
    started: Mutex<Option<Instant>>,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set dynamically
    /// by `on_batch_start` (called once discovery has counted the files).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_batch_start

        // Initial style: spinner only (no counter until we know the total).
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        bar.set_style(spinner_style);
        bar.set_prefix("Scanning");
        bar.set_message("Listing PDF files…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            started: Mutex::new(None),
        })
    }

    /// Switch to the full progress-bar style once we know `total`.
    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  \
             ⏱ {elapsed_precise}  ETA {eta_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Renaming");
        self.bar.reset_eta();
    }

    fn take_elapsed_secs(&self) -> f64 {
        self.started
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .map(|t| t.elapsed().as_millis() as f64 / 1000.0)
            .unwrap_or(0.0)
    }
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_batch_start(&self, total_files: usize) {
        // Switch from spinner-only style to full progress bar now that we
        // know the actual file count.
        self.activate_bar(total_files);
        if total_files > 0 {
            self.bar.println(format!(
                "{} {}",
                cyan("◆"),
                bold(&format!("Renaming {total_files} PDF file(s)…"))
            ));
        }
    }

    fn on_file_start(&self, _index: usize, _total_files: usize, file_name: &str) {
        if let Ok(mut slot) = self.started.lock() {
            *slot = Some(Instant::now());
        }
        self.bar.set_message(file_name.to_string());
    }

    fn on_file_renamed(&self, index: usize, total_files: usize, file_name: &str, new_name: &str) {
        let secs = self.take_elapsed_secs();

        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {} → {}  {}",
            green("✓"),
            index,
            total_files,
            file_name,
            bold(new_name),
            dim(&format!("{secs:.1}s")),
        ));
        self.bar.inc(1);
    }

    fn on_file_skipped(&self, index: usize, total_files: usize, file_name: &str, error: &str) {
        let secs = self.take_elapsed_secs();

        // Truncate very long error messages to keep output tidy.
        let msg = if error.chars().count() > 80 {
            let cut: String = error.chars().take(79).collect();
            format!("{cut}\u{2026}")
        } else {
            error.to_string()
        };

        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {}  {}  {}",
            red("✗"),
            index,
            total_files,
            file_name,
            red(&msg),
            dim(&format!("{secs:.1}s")),
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, total_files: usize, renamed_count: usize) {
        let skipped = total_files.saturating_sub(renamed_count);
        self.bar.finish_and_clear();

        if total_files == 0 {
            eprintln!("{}", dim("No PDF files to rename."));
        } else if skipped == 0 {
            eprintln!(
                "{} {} file(s) renamed",
                green("✔"),
                bold(&renamed_count.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} file(s) renamed  ({} skipped, left in place)",
                if renamed_count == 0 { red("✘") } else { cyan("⚠") },
                bold(&renamed_count.to_string()),
                total_files,
                red(&skipped.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Rename everything in "./PDF files/" into "./PDF renamed/"
  pdf2name

  # Explicit directories
  pdf2name --input-dir scans --output-dir filed

  # Identifier on the first line instead of the fourteenth
  pdf2name --line 0

  # Machine-readable report of what happened
  pdf2name --json > report.json

  # Plain log output instead of the progress bar, e.g. under cron
  pdf2name --no-progress

  # Keep the terminal window open when launched from a file manager
  pdf2name --pause

BEHAVIOUR:
  Both directories are created if missing. The identifier is read from the
  configured line of each document's text; trailing whitespace is trimmed
  and '-' separators are removed, so a document carrying "20-123456-7"
  becomes "201234567.pdf". A file is skipped — left untouched in the input
  directory, with the reason reported — when its text cannot be read, when
  the text has too few lines, or when the target name is already taken.
  Nothing is ever overwritten. Re-running after fixing a problem picks up
  exactly the leftovers.

ENVIRONMENT VARIABLES:
  PDF2NAME_INPUT_DIR    Input directory            (default: "PDF files")
  PDF2NAME_OUTPUT_DIR   Output directory           (default: "PDF renamed")
  PDF2NAME_LINE         Zero-based identifier line (default: 13)

SETUP:
  pdf2name needs the pdfium shared library at runtime. Place libpdfium
  (.so / .dylib / .dll) next to the executable, or install it system-wide.
  Prebuilt binaries: https://github.com/bblanchon/pdfium-binaries
"#;

/// Rename PDF files in bulk after the identifier inside them.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2name",
    version,
    about = "Rename PDF files in bulk after the identifier on a fixed line of their text",
    long_about = "Scan a directory of PDF files, read the document identifier from a fixed line \
of each file's extracted text, and move every file to <identifier>.pdf in the output directory. \
Files that cannot be processed are skipped and stay where they are; existing files are never \
overwritten.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory scanned for PDF files (created if missing).
    #[arg(short, long, env = "PDF2NAME_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory renamed files are moved into (created if missing).
    #[arg(short, long, env = "PDF2NAME_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Zero-based line index of the identifier in the extracted text.
    #[arg(
        short,
        long,
        env = "PDF2NAME_LINE",
        default_value_t = DEFAULT_IDENTIFIER_LINE_INDEX,
        long_help = "Zero-based index into the document's text lines. The default, 13, reads \
the fourteenth line, where the identifier sits on the standard form layout."
    )]
    line: usize,

    /// Output a structured JSON report (per-file records + stats) instead of log lines.
    #[arg(long, env = "PDF2NAME_JSON")]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, env = "PDF2NAME_NO_PROGRESS")]
    no_progress: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2NAME_QUIET")]
    quiet: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2NAME_VERBOSE")]
    verbose: bool,

    /// Wait for Enter before exiting (keeps a double-clicked window open).
    #[arg(long)]
    pause: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.quiet || show_progress {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    // In verbose mode we always want all logs regardless of progress.
    let filter = if cli.verbose { "debug" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    // The progress bar starts as a spinner (no file count yet);
    // `on_batch_start` resizes it to the correct total once the input
    // directory has been listed.
    let progress_cb: Option<ProgressCallback> = if show_progress {
        let cb = CliProgressCallback::new_dynamic();
        Some(cb as Arc<dyn BatchProgressCallback>)
    } else {
        None
    };

    let config = build_config(&cli, progress_cb)?;

    // ── Run the batch ────────────────────────────────────────────────────
    let result = run_batch(&config).await.context("Batch failed");

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            maybe_pause(&cli);
            return Err(e);
        }
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to serialise report")?;
        println!("{json}");
    } else if !cli.quiet && !show_progress {
        // Only print inline stats when the progress callback is disabled;
        // otherwise the callback already printed the final summary line.
        eprintln!(
            "Renamed {}/{} file(s) in {}ms",
            output.stats.renamed, output.stats.discovered, output.stats.total_duration_ms
        );
        if output.stats.skipped > 0 {
            eprintln!("  {} file(s) skipped, left in place", output.stats.skipped);
        }
    }

    maybe_pause(&cli);
    Ok(())
}

/// Map CLI args to `RenameConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<RenameConfig> {
    let mut builder = RenameConfig::builder()
        .input_dir(cli.input_dir.clone())
        .output_dir(cli.output_dir.clone())
        .identifier_line_index(cli.line);

    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Honour `--pause`: block on Enter so a window opened by a file manager
/// stays readable. Runs on both success and failure paths.
fn maybe_pause(cli: &Cli) {
    if !cli.pause {
        return;
    }
    eprint!("Press Enter to close…");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
}
