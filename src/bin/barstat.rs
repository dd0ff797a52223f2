//! barstat - status line daemon for i3bar.
//!
//! Writes the i3bar JSON protocol to stdout, one line per second, until the
//! bar kills it or stdout goes away.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, error, info, trace};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use barstat::collector::{RealFs, SystemCollector};
use barstat::pacer::Pacer;
use barstat::protocol::StreamWriter;
use barstat::rates::CycleState;
use barstat::status::{ROOT_MOUNT, StatusLine};

/// Status line daemon for i3bar.
#[derive(Parser)]
#[command(name = "barstat", about = "Status line daemon for i3bar", version)]
struct Args {
    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Mount point whose usage the disk segment shows.
    #[arg(long, default_value = ROOT_MOUNT)]
    mount: String,

    /// Increase logging verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber on stderr; stdout belongs to the bar.
/// Default level is WARN so a healthy daemon prints nothing.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("barstat={}", level).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("stdout closed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the sampling loop; only returns when writing to stdout fails.
fn run(args: &Args) -> io::Result<()> {
    let pacer = Pacer::default();
    let status = StatusLine::new(SystemCollector::new(RealFs::new(), &args.proc_path))
        .with_mount(&args.mount)
        .with_interval(pacer.interval());
    let mut state = CycleState::new(num_cpus::get());

    info!("barstat {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: interval={:?}, proc={}, mount={}, cpus={}",
        pacer.interval(),
        args.proc_path,
        args.mount,
        state.cpu_count
    );

    let mut writer = StreamWriter::new(io::stdout().lock())?;

    loop {
        let started = pacer.start();
        let segments = status.sample(&mut state, &chrono::Local::now());
        writer.write_line(&segments)?;
        trace!(line = writer.lines_written(), "status line written");
        pacer.sleep_until_next(started);
    }
}
