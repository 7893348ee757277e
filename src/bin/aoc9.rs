use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use aoclib::{KnotChain, Point};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Move list; read from stdin when omitted
    input: Option<PathBuf>,
    #[arg(short, long, value_parser, default_value("10"))]
    num_knots: usize,
    #[arg(short, long)]
    verbose: bool,
    /// Draw every step on the terminal
    #[arg(short, long)]
    animate: bool,
    #[arg(short, long, value_parser, default_value("32"))]
    ms_per_frame: u64,
    #[arg(long)]
    trails: bool,
}

fn knot_label(index: usize) -> char {
    if index == 0 {
        'H'
    } else {
        char::from_digit((index % 36) as u32, 36).unwrap_or('#')
    }
}

fn render<W: std::io::Write>(
    out: &mut W,
    chain: &KnotChain,
    line: usize,
    trails: bool,
) -> anyhow::Result<()> {
    let (width, height) = crossterm::terminal::size()
        .map(|(w, h)| (w as i64, h as i64))
        .unwrap_or((80, 40));
    let (min_x, max_x, min_y, max_y) = (-width / 2 + 1, width / 2, -height / 2 + 1, height / 2 - 1);
    let knots = chain.knots().copied().collect::<Vec<Point>>();
    execute!(out, MoveTo(0, 0))?;
    for y in (min_y..=max_y).rev() {
        let row = (min_x..=max_x)
            .map(|x| {
                let coord = Point::new(x, y);
                if let Some(index) = knots.iter().position(|k| *k == coord) {
                    knot_label(index)
                } else if trails && chain.visited().contains(&coord) {
                    '#'
                } else {
                    ' '
                }
            })
            .collect::<String>();
        writeln!(out, "{}", row)?;
    }
    execute!(out, MoveTo(0, height.saturating_sub(1) as u16))?;
    write!(
        out,
        " [ step {:<10} (line {:<10}) visited {:<6} ]",
        chain.steps_applied(),
        line + 1,
        chain.visited_count()
    )?;
    out.flush()?;
    Ok(())
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

    let visited = if args.animate {
        let running = Arc::new(AtomicBool::new(true));
        let r = running.clone();
        ctrlc::set_handler(move || {
            r.store(false, Ordering::SeqCst);
        })?;

        let stdout_r = std::io::stdout();
        let mut stdout = stdout_r.lock();
        execute!(&mut stdout, EnterAlternateScreen)?;
        execute!(&mut stdout, Clear(ClearType::All))?;
        execute!(&mut stdout, Hide)?;
        let frame = std::time::Duration::from_millis(args.ms_per_frame);
        let result = aoclib::simulate(input.lines(), args.num_knots, |chain, line| {
            if !running.load(Ordering::SeqCst) {
                anyhow::bail!("interrupted after {} steps", chain.steps_applied());
            }
            render(&mut stdout, chain, line, args.trails)?;
            std::thread::sleep(frame);
            Ok(())
        });
        execute!(&mut stdout, Show)?;
        execute!(&mut stdout, LeaveAlternateScreen)?;
        result?.visited_count()
    } else {
        aoclib::calculate_visited_fields(input.lines(), args.num_knots)?
    };

    log::debug!("succeeded in {:?}", start.elapsed());
    println!("{}", visited);
    Ok(())
}
