use dtf_validator::{logging, validation, ValidationOutcome};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <pattern>... [options]", args[0]);
        eprintln!("       {} --file <path> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    let options = parse_options(&args[1..]);

    let patterns = if let Some(path) = &options.file {
        read_pattern_file(path)?
    } else {
        options.patterns.clone()
    };

    if patterns.is_empty() {
        eprintln!("Error: No patterns to validate");
        std::process::exit(1);
    }

    let summary = run_patterns(&patterns, &options);

    if !options.quiet {
        print_summary(&summary);
    }

    if summary.legacy_count + summary.invalid_count > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("Datetime Pattern Validator v{}", env!("CARGO_PKG_VERSION"));
    println!("Classifies datetime format patterns before they reach the formatting engine");
    println!();
    println!("USAGE:");
    println!(
        "    {} <pattern>...                   # Validate patterns given as arguments",
        program_name
    );
    println!(
        "    {} --file <path> [options]        # Validate patterns, one per line",
        program_name
    );
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --file <path>       Read patterns from a file, one per line");
    println!("    --fail-fast         Stop on first rejected pattern");
    println!("    --quiet             Suppress the summary line");
    println!();
    println!("OUTPUT:");
    println!("    OK       pattern is well-formed and supported");
    println!("    LEGACY   pattern needs the legacy parser policy; diagnostic names the toggle");
    println!("    INVALID  pattern is structurally malformed; no configuration accepts it");
    println!();
    println!("EXAMPLES:");
    println!("    {} 'yyyy-MM-dd'                    # Single pattern", program_name);
    println!("    {} GGGGG qqqqq                     # Several patterns", program_name);
    println!(
        "    {} --file patterns.txt --fail-fast # File input with early exit",
        program_name
    );
}

#[derive(Debug, Default)]
struct DriverOptions {
    patterns: Vec<String>,
    file: Option<String>,
    fail_fast: bool,
    quiet: bool,
}

fn parse_options(args: &[String]) -> DriverOptions {
    let mut options = DriverOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                if i + 1 < args.len() {
                    options.file = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Warning: --file requires a path");
                }
            }
            "--fail-fast" => {
                options.fail_fast = true;
            }
            "--quiet" => {
                options.quiet = true;
            }
            other if other.starts_with("--") => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
            pattern => {
                options.patterns.push(pattern.to_string());
            }
        }
        i += 1;
    }

    options
}

fn read_pattern_file(path: &str) -> Result<Vec<String>, std::io::Error> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect())
}

#[derive(Debug, Default)]
struct RunSummary {
    accepted_count: usize,
    legacy_count: usize,
    invalid_count: usize,
}

fn run_patterns(patterns: &[String], options: &DriverOptions) -> RunSummary {
    let mut summary = RunSummary::default();

    for pattern in patterns {
        let outcome = validation::validate(pattern);

        match &outcome {
            ValidationOutcome::Accepted(_) => {
                summary.accepted_count += 1;
                if !options.quiet {
                    println!("OK       {}", pattern);
                }
            }
            ValidationOutcome::LegacyIncompatible(diag) => {
                summary.legacy_count += 1;
                println!("LEGACY   {}: set {} to LEGACY to restore", pattern, diag.config);
            }
            ValidationOutcome::Invalid(invalid) => {
                summary.invalid_count += 1;
                println!("INVALID  {}: {}", pattern, invalid);
            }
        }

        if options.fail_fast && !outcome.is_accepted() {
            break;
        }
    }

    summary
}

fn print_summary(summary: &RunSummary) {
    let total = summary.accepted_count + summary.legacy_count + summary.invalid_count;
    println!(
        "\n{} patterns: {} accepted, {} legacy-incompatible, {} invalid",
        total, summary.accepted_count, summary.legacy_count, summary.invalid_count
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        let args = vec![
            "yyyy-MM-dd".to_string(),
            "--fail-fast".to_string(),
            "GGGGG".to_string(),
            "--quiet".to_string(),
        ];

        let options = parse_options(&args);
        assert_eq!(options.patterns, vec!["yyyy-MM-dd", "GGGGG"]);
        assert!(options.fail_fast);
        assert!(options.quiet);
        assert!(options.file.is_none());
    }

    #[test]
    fn test_parse_options_file() {
        let args = vec!["--file".to_string(), "patterns.txt".to_string()];

        let options = parse_options(&args);
        assert_eq!(options.file.as_deref(), Some("patterns.txt"));
        assert!(options.patterns.is_empty());
    }

    #[test]
    fn test_run_patterns_counts() {
        let patterns = vec![
            "yyyy-MM-dd".to_string(),
            "GGGGG".to_string(),
            "qqqqq".to_string(),
        ];
        let options = DriverOptions {
            quiet: true,
            ..DriverOptions::default()
        };

        let summary = run_patterns(&patterns, &options);
        assert_eq!(summary.accepted_count, 1);
        assert_eq!(summary.legacy_count, 1);
        assert_eq!(summary.invalid_count, 1);
    }

    #[test]
    fn test_fail_fast_stops_early() {
        let patterns = vec![
            "A".to_string(),
            "yyyy".to_string(),
        ];
        let options = DriverOptions {
            quiet: true,
            fail_fast: true,
            ..DriverOptions::default()
        };

        let summary = run_patterns(&patterns, &options);
        assert_eq!(summary.invalid_count, 1);
        assert_eq!(summary.accepted_count, 0);
    }
}
