use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use mapbound_core::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: mapbound-tool <map.json> <positions.json>";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Option<(PathBuf, PathBuf)> {
    let map_path = args.next()?;
    let positions_path = args.next()?;
    Some((map_path.into(), positions_path.into()))
}

fn run(map_path: PathBuf, positions_path: PathBuf) -> Result<(), Box<dyn Error>> {
    let mut world = World::load(&map_path, &positions_path)?;

    let corrected = world.clamp_all();
    info!(
        map = %map_path.display(),
        positions = %positions_path.display(),
        total = world.positions().len(),
        corrected,
        "clamped positions"
    );

    println!("{}", world.positions_json()?);
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let Some((map_path, positions_path)) = parse_args(std::env::args_os().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(map_path, positions_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
