use clap::{App, Arg, SubCommand};
use log::{error, info};
use pinbt_tools::{init_logging, HeaderAction, Result};

fn convert(action: HeaderAction, input: &str, output: &str) -> Result<()> {
    let bytes = std::fs::read(input)?;
    let (out, changed) = action.apply(&bytes)?;

    if changed {
        match action {
            HeaderAction::Add => info!("adding header to {}", input),
            HeaderAction::Remove => info!("removing header from {}", input),
        }
    } else {
        match action {
            HeaderAction::Add => info!("{} already has a header, copying", input),
            HeaderAction::Remove => info!("{} has no header, copying", input),
        }
    }

    std::fs::write(output, out)?;
    Ok(())
}

fn main() {
    init_logging();

    let files = [
        Arg::with_name("input").takes_value(true).required(true),
        Arg::with_name("output").takes_value(true).required(true),
    ];

    let matches = App::new("pi-nbt")
        .about("add or remove the header of a Minecraft: Pi Edition level.dat")
        .subcommand(
            SubCommand::with_name("add-header")
                .about("prefix an NBT file with the Pi header")
                .args(&files),
        )
        .subcommand(
            SubCommand::with_name("remove-header")
                .about("strip the Pi header, leaving plain NBT")
                .args(&files),
        )
        .get_matches();

    let (action, args) = match matches.subcommand() {
        ("add-header", Some(args)) => (HeaderAction::Add, args),
        ("remove-header", Some(args)) => (HeaderAction::Remove, args),
        _ => {
            error!("{}", matches.usage());
            std::process::exit(1);
        }
    };

    // Both are required, clap has already checked them.
    let input = args.value_of("input").unwrap_or_default();
    let output = args.value_of("output").unwrap_or_default();

    if let Err(e) = convert(action, input, output) {
        error!("{}", e);
        std::process::exit(1);
    }
}
