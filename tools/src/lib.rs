use std::error::Error;
use std::fmt::Display;
use std::io::{self, Write};

use clap::{Arg, ArgMatches};
use env_logger::Env;
use pinbt::header::{self, FileHeaderStore, HeaderStore, RawFileStore};
use pinbt::{Compound, Document, Endian, List, Value};

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Debug)]
struct ErrorMessage(String);
impl std::error::Error for ErrorMessage {}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn err<T>(msg: impl Into<String>) -> Result<T> {
    Err(Box::new(ErrorMessage(msg.into())))
}

pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// The `--big-endian` and `--raw` flags shared by the tools that read
/// documents.
pub fn document_args<'a, 'b>() -> [Arg<'a, 'b>; 2] {
    [
        Arg::with_name("big-endian")
            .long("big-endian")
            .takes_value(false)
            .required(false)
            .help("read and write big endian (Java edition) NBT"),
        Arg::with_name("raw")
            .long("raw")
            .takes_value(false)
            .required(false)
            .help("the file has no Pi level.dat header"),
    ]
}

pub fn endian(args: &ArgMatches) -> Endian {
    if args.is_present("big-endian") {
        Endian::Big
    } else {
        Endian::Little
    }
}

pub fn store(args: &ArgMatches) -> Box<dyn HeaderStore> {
    if args.is_present("raw") {
        Box::new(RawFileStore)
    } else {
        Box::new(FileHeaderStore)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Add,
    Remove,
}

impl HeaderAction {
    /// Apply the action to the bytes of a file. The bool is false when the
    /// file was already in the requested state and is returned unchanged.
    pub fn apply(self, bytes: &[u8]) -> Result<(Vec<u8>, bool)> {
        let present = header::has_header(bytes);
        Ok(match self {
            HeaderAction::Add if !present => (header::attach(bytes)?, true),
            HeaderAction::Remove if present => (header::strip(bytes), true),
            _ => (bytes.to_vec(), false),
        })
    }
}

/// Build a value of the named tag type from text, as typed on the command
/// line. Integers are range checked against the tag's width.
pub fn parse_value(kind: &str, text: &str) -> Result<Value> {
    let int = || -> Result<i128> {
        text.trim()
            .parse()
            .map_err(|_| format!("not an integer: '{}'", text).into())
    };

    Ok(match kind.to_ascii_lowercase().as_str() {
        "byte" => Value::byte(int()?)?,
        "short" => Value::short(int()?)?,
        "int" => Value::int(int()?)?,
        "long" => Value::long(int()?)?,
        "float" => Value::Float(text.trim().parse()?),
        "double" => Value::Double(text.trim().parse()?),
        "string" => Value::String(text.to_owned()),
        _ => return err(format!("unknown value type '{}'", kind)),
    })
}

/// Print a document as an indented tree, one value per line.
pub fn print_tree(out: &mut impl Write, doc: &Document) -> io::Result<()> {
    writeln!(out, "Compound {:?} {{", doc.name)?;
    print_compound(out, &doc.root, 4)?;
    writeln!(out, "}}")
}

fn print_compound(out: &mut impl Write, compound: &Compound, indent: usize) -> io::Result<()> {
    for (name, value) in compound {
        write!(out, "{:indent$}{} {:?}", "", value.tag(), name, indent = indent)?;
        print_payload(out, value, indent)?;
    }
    Ok(())
}

fn print_list(out: &mut impl Write, list: &List, indent: usize) -> io::Result<()> {
    for value in list {
        write!(out, "{:indent$}{}", "", value.tag(), indent = indent)?;
        print_payload(out, value, indent)?;
    }
    Ok(())
}

fn print_payload(out: &mut impl Write, value: &Value, indent: usize) -> io::Result<()> {
    match value {
        Value::Byte(v) => writeln!(out, ": {}", v),
        Value::Short(v) => writeln!(out, ": {}", v),
        Value::Int(v) => writeln!(out, ": {}", v),
        Value::Long(v) => writeln!(out, ": {}", v),
        Value::Float(v) => writeln!(out, ": {}", v),
        Value::Double(v) => writeln!(out, ": {}", v),
        Value::ByteArray(v) => writeln!(out, ": {:?}", v),
        Value::String(v) => writeln!(out, ": {:?}", v),
        Value::List(l) => {
            writeln!(out, " ({} {}) [", l.len(), l.element_tag())?;
            print_list(out, l, indent + 4)?;
            writeln!(out, "{:indent$}]", "", indent = indent)
        }
        Value::Compound(c) => {
            writeln!(out, " {{")?;
            print_compound(out, c, indent + 4)?;
            writeln!(out, "{:indent$}}}", "", indent = indent)
        }
    }
}
