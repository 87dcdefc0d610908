//! Command-line interface implementation for component-extract.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for component-extract.
#[derive(Parser, Debug)]
#[command(
    name = "extract-template",
    author,
    version,
    about = "Move inline component templates and styles into sibling files",
    long_about = None
)]
pub struct Args {
    /// Path to the component source file (e.g. app.component.ts)
    #[arg(value_name = "COMPONENT")]
    pub component: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and usage on stdout if the component path is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
