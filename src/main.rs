use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use colored::Colorize;

// The CLI layer should only parse inputs and forward them to library code.
fn main() {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    init_logging(is_verbose);

    if let Err(error) = sassling::api::generate() {
        eprintln!("{} {}", "error:".red().bold(), error);
        std::process::exit(1);
    }
}

fn init_logging(is_verbose: bool) {
    let default_filter = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
