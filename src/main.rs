use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use sloc_scan::cli::{Cli, Commands, CountArgs, InitArgs};
use sloc_scan::config::{Config, ConfigLoader, FileConfigLoader};
use sloc_scan::counter;
use sloc_scan::output::{
    FileReport, JsonFormatter, OutputFormat, ReportFormatter, ScanReport, TextFormatter,
};
use sloc_scan::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};
use sloc_scan::{EXIT_CONFIG_ERROR, EXIT_READ_ERRORS, EXIT_SUCCESS};

/// File size threshold for streaming reads (10 MB)
const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Count(args) => run_count(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    match run_count_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_count_impl(args: &CountArgs, cli: &Cli) -> sloc_scan::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Create file filter (CLI extensions/excludes extend the config)
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.extensions.clone());
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = ExtensionFilter::new(extensions, &exclude_patterns)?;

    // 3. Determine paths to scan
    let paths_to_scan = get_scan_paths(args, &config);

    // 4. Scan directories
    let scanner = DirectoryScanner::new(filter);
    let mut all_files = Vec::new();
    for path in &paths_to_scan {
        let files = scanner.scan(path)?;
        all_files.extend(files);
    }

    // 5. Count each file (parallel with rayon)
    let counted: Vec<_> = all_files
        .par_iter()
        .map(|file_path| count_file(file_path))
        .collect();

    // 6. Partition into per-file reports and unreadable paths
    let mut reports = Vec::new();
    let mut unreadable = Vec::new();
    for outcome in counted {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Warning: {e}");
                if let sloc_scan::SlocScanError::FileRead { path, .. } = e {
                    unreadable.push(path);
                }
            }
        }
    }
    let report = ScanReport::new(reports, unreadable);

    // 7. Format output
    let output = if args.total_only {
        format!("{}\n", report.total_code_lines)
    } else {
        format_output(args.format, &report)?
    };

    // 8. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 9. Determine exit code
    if report.has_read_errors() {
        Ok(EXIT_READ_ERRORS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> sloc_scan::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn get_scan_paths(args: &CountArgs, config: &Config) -> Vec<PathBuf> {
    // If CLI paths provided (other than default "."), use them
    let default_path = PathBuf::from(".");
    if args.paths.len() != 1 || args.paths[0] != default_path {
        return args.paths.clone();
    }

    // Use config include_paths if available
    if !config.include_paths.is_empty() {
        return config.include_paths.iter().map(PathBuf::from).collect();
    }

    // Default to current directory
    args.paths.clone()
}

/// Count one file, streaming it when it is large.
///
/// A failure to read is surfaced as `FileRead` for this file only; other
/// files are unaffected since each scan carries its own state.
fn count_file(file_path: &Path) -> sloc_scan::Result<FileReport> {
    let read_err = |source| sloc_scan::SlocScanError::FileRead {
        path: file_path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(file_path).map_err(read_err)?;

    let code_lines = if metadata.len() >= LARGE_FILE_THRESHOLD {
        let file = File::open(file_path).map_err(read_err)?;
        counter::count_reader(BufReader::new(file)).map_err(read_err)?
    } else {
        let content = fs::read_to_string(file_path).map_err(read_err)?;
        counter::count_source(&content)
    };

    Ok(FileReport {
        path: file_path.to_path_buf(),
        code_lines,
    })
}

fn format_output(format: OutputFormat, report: &ScanReport) -> sloc_scan::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter.format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> sloc_scan::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> sloc_scan::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(sloc_scan::SlocScanError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# sloc-scan configuration file

# File extensions to count (C-style comment syntax is assumed)
extensions = ["java", "c", "h", "cpp", "hpp", "cc", "cs", "go", "js", "ts", "rs"]

# Directories to scan when no paths are given (empty = current directory)
# include_paths = ["src", "lib"]

# Exclude patterns (glob syntax)
[exclude]
patterns = [
    "**/target/**",
    "**/node_modules/**",
    "**/.git/**",
    "**/build/**",
]
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
