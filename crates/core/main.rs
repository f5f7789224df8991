#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{io, process};

mod app;

use clap::{Args, Parser};
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{err:#}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        json,
        global_opts: GlobalOpts { verbosity, quiet },
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    if !quiet {
        eprint!("Enter a book title: ");
    }
    let title = app::read_title(io::stdin().lock())?;
    trace!("Title read from stdin: '{title}'");

    let result = app::search(&title, json)?;

    app::print_result(io::stdout().lock(), &result)
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 1 } else { verbosity + 2 };

    stderrlog::new().verbosity(verbosity).init()?;
    Ok(())
}

#[derive(Parser)]
#[clap(name = "olsearch")]
#[clap(about = "Look up the title and author of a book on Open Library")]
#[clap(long_about = "Look up the title and author of a book on Open Library\n\n\
    The title to search for is read as a single line from stdin.")]
#[clap(version, author)]
struct Cli {
    /// Print the whole JSON response instead of the title and author
    #[clap(long)]
    json: bool,

    #[clap(flatten)]
    global_opts: GlobalOpts,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// How chatty the program is when searching
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Hides the prompt and all logs except errors.
    #[clap(short, long)]
    quiet: bool,
}
