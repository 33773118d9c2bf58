use crate::config::{ConvertConfig, MinifyConfig};
use crate::convert::run_convert;
use crate::error::SyncResult;
use crate::minify::run_minify;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Format a byte count as KB with two decimals for the size report
fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Block until the operator presses Enter (opt-in via --wait)
fn wait_for_enter() {
    print!("\nPress Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

/// Execute the convert command
pub fn convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    backup_dir: Option<PathBuf>,
    verbose: bool,
    wait: bool,
) -> SyncResult<()> {
    let defaults = ConvertConfig::default();
    let config = ConvertConfig {
        input: input.unwrap_or(defaults.input),
        output: output.unwrap_or(defaults.output),
        backup_dir: backup_dir.unwrap_or(defaults.backup_dir),
    };

    println!("{}", "🔄 Modsync - Excel to JSON".bold().green());
    println!("   Input:  {}", config.input.display());
    println!("   Output: {}\n", config.output.display());

    if verbose {
        println!("{}", "📖 Reading spreadsheet...".cyan());
    }

    let result = run_convert(&config);
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            if wait {
                wait_for_enter();
            }
            return Err(e);
        }
    };

    if let Some(ref backup) = outcome.backup_path {
        println!("   💾 Backed up previous output: {}", backup.display());
    }
    if verbose {
        println!("   Sheet: {}", outcome.sheet_name.bright_blue());
    }

    println!("{}", "✅ Conversion Complete!".bold().green());
    println!(
        "   {} records written to {}\n",
        outcome.record_count.to_string().bold(),
        config.output.display()
    );

    if wait {
        wait_for_enter();
    }
    Ok(())
}

/// Execute the minify command
pub fn minify(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
    wait: bool,
) -> SyncResult<()> {
    let defaults = MinifyConfig::default();
    let config = MinifyConfig {
        input: input.unwrap_or(defaults.input),
        output: output.unwrap_or(defaults.output),
    };

    println!("{}", "🗜️  Modsync - JSON Minify".bold().green());
    println!("   Input:  {}", config.input.display());
    println!("   Output: {}\n", config.output.display());

    if verbose {
        println!("{}", "📖 Parsing JSON...".cyan());
    }

    let result = run_minify(&config);
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            if wait {
                wait_for_enter();
            }
            return Err(e);
        }
    };

    println!("   Original size:  {}", format_kb(outcome.original_bytes));
    println!("   Minified size:  {}", format_kb(outcome.minified_bytes));
    println!(
        "   Size reduction: {}",
        format!("{:.2}%", outcome.reduction_percent()).bold()
    );

    println!("\n{}", "✅ Minification Complete!".bold().green());
    println!("   Minified file: {}\n", config.output.display());

    if wait {
        wait_for_enter();
    }
    Ok(())
}
