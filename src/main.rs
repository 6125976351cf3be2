use clap::Parser;
use std::path::PathBuf;
use toboggan::{io::read_map, out::print, part_one, part_two, InputFormatError, Slope};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "with_dhat")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "with_dhat")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

/// Counts the trees hit while sledding down the map.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Map file; read from stdin when missing or `-`
    input: Option<PathBuf>,

    /// Also count the trees along a slope given as `RIGHT,DOWN`, may be repeated
    #[arg(long = "slope", value_name = "RIGHT,DOWN")]
    slopes: Vec<Slope>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    #[cfg(feature = "with_dhat")]
    let _dhat = Dhat::start_heap_profiling();

    let args = Args::parse();

    init_logger(args.verbose);

    let map = match args.input.as_ref() {
        Some(path) if path.as_os_str() != "-" => {
            tracing::debug!(path = %path.display(), "reading map");
            let file = std::fs::File::open(path).map_err(InputFormatError::from)?;
            read_map(std::io::BufReader::new(file))?
        }
        _ => {
            let stdin = std::io::stdin();
            let stdin = stdin.lock();
            read_map(stdin)?
        }
    };

    print("Part 1", || part_one(&map))?;
    print("Part 2", || part_two(&map))?;

    for slope in args.slopes {
        print(&format!("Slope {}", slope), || map.trees_along(slope))?;
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let fallback = if verbose {
        "toboggan=debug"
    } else {
        "toboggan=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
