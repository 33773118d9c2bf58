use clap::{Parser, Subcommand};
use modifier_sync::cli;
use modifier_sync::error::SyncResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modsync")]
#[command(about = "Sync the modifier spreadsheet to website JSON, with backups.")]
#[command(long_about = "Modsync - Modifier data sync tool

Reads the modifier collection spreadsheet and publishes it as JSON for
the website, snapshotting the previous JSON before every overwrite.

COMMANDS:
  convert - Excel (.xlsx) to pretty-printed JSON, with backup
  minify  - Strip whitespace from a JSON file and report the savings

EXAMPLES:
  modsync convert                             # Use the data/ layout
  modsync convert -i modifiers.xlsx -o out.json
  modsync minify                              # data/modifiers_data.json → .min.json")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert the modifier spreadsheet to JSON.

Reads the first worksheet: row 1 is the header, every following row
becomes one JSON object keyed by the header names in column order.
Empty cells become empty strings and values are whitespace-trimmed.

BACKUPS:
  If the output file already exists it is copied into the backup
  directory as <name>_backup_<YYYY-MM-DD_HH-MM-SS>.json before the
  new data is read. Backups are never deleted automatically.

NOTE: The output is overwritten in place (no atomic replace). Do not
run two conversions against the same output path at once.

EXAMPLE:
  modsync convert -i data/modifiers.xlsx -o data/modifiers_data.json")]
    /// Convert the modifier spreadsheet to pretty-printed JSON
    Convert {
        /// Path to the spreadsheet (.xlsx), first sheet only
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output JSON file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for timestamped backups of the previous output
        #[arg(long)]
        backup_dir: Option<PathBuf>,

        /// Show verbose conversion steps
        #[arg(short, long)]
        verbose: bool,

        /// Wait for Enter before exiting
        #[arg(long)]
        wait: bool,
    },

    #[command(long_about = "Minify a JSON file.

Parses the document and re-writes it with no whitespace between
tokens, to a separate output path. Reports the original size, the
minified size, and the percentage reduction. The source file is
never modified.

EXAMPLE:
  modsync minify -i data/modifiers_data.json -o data/optimized/modifiers_data.min.json")]
    /// Minify a JSON file and report the size reduction
    Minify {
        /// Path to the JSON file to minify
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Minified output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose steps
        #[arg(short, long)]
        verbose: bool,

        /// Wait for Enter before exiting
        #[arg(long)]
        wait: bool,
    },
}

fn main() -> SyncResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            backup_dir,
            verbose,
            wait,
        } => cli::convert(input, output, backup_dir, verbose, wait),

        Commands::Minify {
            input,
            output,
            verbose,
            wait,
        } => cli::minify(input, output, verbose, wait),
    }
}
