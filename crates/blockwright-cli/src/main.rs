mod args;
mod error;
mod render;
mod report;
mod svg;

use std::path::Path;
use std::process;

use args::{Command, USAGE};
use blockwright_persist::ProjectData;
use error::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    match args::parse_args(args)? {
        Command::Help => println!("{USAGE}"),
        Command::Info { input } => {
            let data = load(&input)?;
            println!("{}", report::format_markdown(&data));
        }
        Command::Render(render_args) => {
            let data = load(&render_args.input)?;
            let svg = render::render_svg(&data, &render_args)?;
            std::fs::write(&render_args.output, svg).map_err(|source| CliError::Write {
                path: render_args.output.clone(),
                source,
            })?;
            log::info!("Wrote {}", render_args.output.display());
        }
    }
    Ok(())
}

fn load(path: &Path) -> Result<ProjectData, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = blockwright_persist::import_project(&text)?;
    for warning in &data.warnings {
        log::warn!("{}: {warning}", path.display());
    }
    log::info!(
        "Loaded {} polyhedrons from {}",
        data.polyhedrons.len(),
        path.display()
    );
    Ok(data)
}
