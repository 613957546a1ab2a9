use clap::Parser;
use huesort_cli::{build_sort_params, run_sort, FilterArgs};
use huesort_core::config::set_verbose;
use huesort_core::{verbose_println, SortError};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huesort")]
#[command(
    version,
    about = "Sort named colors into hue buckets and render one swatch image per bucket",
    long_about = None
)]
struct Cli {
    /// File listing one swatch per line as '<name>,#<hex>'
    #[arg(long, value_name = "FILE")]
    color_swatches: PathBuf,

    #[command(flatten)]
    filter: FilterArgs,

    /// Directory for the bucket images [default: config value, else current directory]
    #[arg(short, long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Config file (YAML) with default filter bounds and output directory
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cmd_sort(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_sort(cli: Cli) -> Result<(), SortError> {
    set_verbose(cli.verbose);

    // Config and options are checked before the swatch file is touched
    let params = build_sort_params(
        cli.color_swatches,
        cli.out,
        &cli.filter,
        cli.config.as_deref(),
    )?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_sort(&params, &mut out)?;
    out.flush().map_err(|e| SortError::Io {
        path: PathBuf::from("<stdout>"),
        source: e,
    })?;

    verbose_println!(
        "[huesort] {} swatches, {} bucket images written to {}",
        summary.swatches_loaded,
        summary.written.len(),
        params.output_dir.display()
    );
    Ok(())
}
