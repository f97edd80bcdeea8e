use std::fmt::Display;
use std::str::FromStr;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info};
use pinbt::header::HeaderStore;
use pinbt::level::{self, GameMode, Slot, SlotList, World, PLAYER};
use pinbt::session::Session;
use pinbt::Path;
use pinbt_tools::{document_args, endian, err, init_logging, parse_value, store, Result};

type Editor = Session<Box<dyn HeaderStore>>;

fn arg<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str> {
    match args.value_of(name) {
        Some(v) => Ok(v),
        None => err(format!("missing argument '{}'", name)),
    }
}

fn parse<T>(args: &ArgMatches, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text = arg(args, name)?;
    text.parse()
        .or_else(|e| err(format!("bad {} '{}': {}", name, text, e)))
}

fn show(session: &Editor) -> Result<()> {
    let root = session.root();
    let world = World::read(root)?;

    println!("name:   {}", world.name);
    println!("seed:   {}", world.seed);
    println!("time:   {}", world.time);
    println!("mode:   {}", world.mode);
    println!("health: {}", level::health(root)?);

    let player = root.get_compound(PLAYER)?;
    for list in [SlotList::Inventory, SlotList::Armor] {
        println!("{}:", list.name());
        for (i, slot) in level::read_slots(player, list)?.iter().enumerate() {
            if *slot != Slot::EMPTY {
                println!(
                    "    [{}] id {} count {} damage {}",
                    i, slot.id, slot.count, slot.damage
                );
            }
        }
    }

    Ok(())
}

fn get(session: &Editor, args: &ArgMatches) -> Result<()> {
    let path = Path::parse(arg(args, "path")?)?;
    let value = session.get(&path)?;
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn set(session: &mut Editor, args: &ArgMatches) -> Result<()> {
    let path = Path::parse(arg(args, "path")?)?;
    let value = parse_value(arg(args, "type")?, arg(args, "value")?)?;
    info!("setting {} to {:?}", path, value);
    session.set(&path, value)?;
    Ok(())
}

fn world(session: &mut Editor, args: &ArgMatches) -> Result<()> {
    let mut world = World::read(session.root())?;

    if let Some(name) = args.value_of("name") {
        world.name = name.to_owned();
    }
    if args.is_present("seed") {
        world.seed = parse(args, "seed")?;
    }
    if args.is_present("time") {
        world.time = parse(args, "time")?;
    }
    if args.is_present("mode") {
        world.mode = parse::<GameMode>(args, "mode")?;
    }

    info!("world is now {:?}", world);
    world.write(session.root_mut());
    Ok(())
}

fn health(session: &mut Editor, args: &ArgMatches) -> Result<()> {
    let health: i16 = parse(args, "health")?;
    level::set_health(session.root_mut(), health)?;
    Ok(())
}

fn slot(session: &mut Editor, args: &ArgMatches) -> Result<()> {
    let list: SlotList = parse(args, "list")?;
    let index: usize = parse(args, "index")?;
    let slot = Slot {
        id: parse(args, "id")?,
        count: parse(args, "count")?,
        damage: parse(args, "damage")?,
    };

    let player = session.root_mut().get_compound_mut(PLAYER)?;
    level::set_slot(player, list, index, slot)?;
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let file = arg(matches, "file")?;
    let mut session = Session::open(store(matches), file, endian(matches))?;

    match matches.subcommand() {
        ("show", Some(_)) => return show(&session),
        ("get", Some(args)) => return get(&session, args),
        ("set", Some(args)) => set(&mut session, args)?,
        ("world", Some(args)) => world(&mut session, args)?,
        ("health", Some(args)) => health(&mut session, args)?,
        ("slot", Some(args)) => slot(&mut session, args)?,
        _ => return err(matches.usage()),
    }

    session.save()?;
    Ok(())
}

fn app() -> App<'static, 'static> {
    App::new("pinbt-edit")
        .about("view and change a Minecraft: Pi Edition level.dat")
        .global_setting(AppSettings::AllowNegativeNumbers)
        .arg(Arg::with_name("file").takes_value(true).required(true))
        .args(&document_args())
        .subcommand(SubCommand::with_name("show").about("summarise the world and player"))
        .subcommand(
            SubCommand::with_name("get")
                .about("print the value at a path, such as Player.Inventory[0]")
                .arg(Arg::with_name("path").takes_value(true).required(true)),
        )
        .subcommand(
            SubCommand::with_name("set")
                .about("replace the value at a path")
                .arg(Arg::with_name("path").takes_value(true).required(true))
                .arg(
                    Arg::with_name("type")
                        .takes_value(true)
                        .required(true)
                        .possible_values(&["byte", "short", "int", "long", "float", "double", "string"]),
                )
                .arg(Arg::with_name("value").takes_value(true).required(true)),
        )
        .subcommand(
            SubCommand::with_name("world")
                .about("change world settings")
                .arg(Arg::with_name("name").long("name").takes_value(true))
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("time")
                        .long("time")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("mode")
                        .long("mode")
                        .takes_value(true)
                        .help("survival, creative, or the mode's index"),
                ),
        )
        .subcommand(
            SubCommand::with_name("health")
                .about("set the player's health")
                .arg(
                    Arg::with_name("health")
                        .takes_value(true)
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("slot")
                .about("change an inventory or armor slot")
                .arg(
                    Arg::with_name("list")
                        .takes_value(true)
                        .required(true)
                        .possible_values(&["inventory", "armor"]),
                )
                .arg(Arg::with_name("index").takes_value(true).required(true))
                .arg(
                    Arg::with_name("id")
                        .takes_value(true)
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("count")
                        .takes_value(true)
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("damage")
                        .takes_value(true)
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
}

fn main() {
    init_logging();

    let matches = app().get_matches();
    if let Err(e) = run(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}
