use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Assignment pairs; read from stdin when omitted
    input: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();

    let input = aoclib::read_input(args.input.as_deref())?;
    let start = std::time::Instant::now();
    let tally = aoclib::tally_intervals(input.lines())?;
    log::debug!("succeeded in {:?}", start.elapsed());
    println!("{}", tally.containing);
    println!("{}", tally.overlapping);
    Ok(())
}
