use std::io::{self, Write};
use std::path::Path;

use clap::{App, Arg, ArgMatches};
use log::error;
use pinbt::header::HeaderStore;
use pinbt_tools::{document_args, endian, init_logging, print_tree, store, Result};

fn dump(args: &ArgMatches) -> Result<()> {
    let file = Path::new(args.value_of("file").unwrap_or_default());
    let bytes = store(args).strip_header(file)?;
    let doc = pinbt::load(&bytes, endian(args))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_present("json") {
        serde_json::to_writer_pretty(&mut out, &doc)?;
        writeln!(out)?;
    } else {
        print_tree(&mut out, &doc)?;
    }

    Ok(())
}

fn main() {
    init_logging();

    let matches = App::new("pinbt-dump")
        .about("print the NBT document in a level.dat")
        .arg(Arg::with_name("file").takes_value(true).required(true))
        .args(&document_args())
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .required(false)
                .help("print JSON instead of a tree"),
        )
        .get_matches();

    if let Err(e) = dump(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}
