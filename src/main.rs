//! extract-template entry point.
//! Parses the command line, sets up logging and runs the extraction.

use component_extract::{
    cli::{get_args, Args},
    error::{default_error_handler, ExtractResult},
    extractor::extract_component_files,
    logger::init_logger,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> ExtractResult<()> {
    let written = extract_component_files(&args.component)?;
    log::debug!("Wrote {} file(s).", written.len());
    Ok(())
}
