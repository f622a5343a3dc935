use clap::{Args as ClapArgs, Parser, Subcommand};
use nestjson_core::{Error, JsonDocument, PathOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "nestjson",
    about = "Read and edit JSON files by dotted property path (one.two.three)",
    version
)]
struct Cli {
    /// Log file reads and writes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Create (or truncate) a JSON file holding an empty or given object
    New(NewArgs),
    /// Print the value at a property path
    Get(PathArgs),
    /// Print whether a property path exists; exits with 1 when it does not
    Has(PathArgs),
    /// Set the value (raw JSON) at a property path and save
    Set(SetArgs),
    /// Remove the property at a path and save
    Remove(RemoveArgs),
    /// List every leaf property path
    List(ListArgs),
}

#[derive(ClapArgs, Debug)]
struct NewArgs {
    /// File to create
    path: PathBuf,
    /// Initial object as raw JSON, e.g. {"a":1}
    #[arg(long)]
    from: Option<String>,
}

#[derive(ClapArgs, Debug)]
struct PathArgs {
    /// JSON file to load
    path: PathBuf,
    /// Property path, e.g. settings.window.width
    property: String,
    /// Path segment delimiter
    #[arg(long, default_value_t = '.')]
    delim: char,
}

#[derive(ClapArgs, Debug)]
struct SetArgs {
    /// JSON file to load
    path: PathBuf,
    /// Property path, e.g. settings.window.width
    property: String,
    /// New value as raw JSON (e.g., 123, true, "str", {"a":1})
    value: String,
    /// Path segment delimiter
    #[arg(long, default_value_t = '.')]
    delim: char,
    /// Write here instead of back to the loaded file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct RemoveArgs {
    /// JSON file to load
    path: PathBuf,
    /// Property path, e.g. settings.window.width
    property: String,
    /// Path segment delimiter
    #[arg(long, default_value_t = '.')]
    delim: char,
    /// Write here instead of back to the loaded file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct ListArgs {
    /// JSON file to load
    path: PathBuf,
    /// Path segment delimiter
    #[arg(long, default_value_t = '.')]
    delim: char,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let res = match cli.cmd {
        Cmd::New(a) => cmd_new(a),
        Cmd::Get(a) => cmd_get(a),
        Cmd::Has(a) => cmd_has(a),
        Cmd::Set(a) => cmd_set(a),
        Cmd::Remove(a) => cmd_remove(a),
        Cmd::List(a) => cmd_list(a),
    };
    if let Err(e) = res {
        eprintln!("error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(e: &Error) -> i32 {
    match e {
        // 1 is "has: false" and 2 is clap's usage error
        Error::Io { .. } => 3,
        e if e.is_parse_error() => 4,
        Error::InvalidPath { .. } => 5,
        Error::PropertyNotFound { .. } => 6,
        e if e.is_null_error() => 7,
        e if e.is_type_error() => 8,
        Error::NoKnownPath => 9,
        _ => 10,
    }
}

fn path_opts(delim: char) -> PathOptions {
    PathOptions::default().with_delimiter(delim)
}

fn parse_raw(raw: &str) -> Result<serde_json::Value, Error> {
    serde_json::from_str(raw).map_err(|source| Error::Parse {
        path: PathBuf::from("<argument>"),
        source,
    })
}

fn cmd_new(args: NewArgs) -> Result<(), Error> {
    let root = match args.from.as_deref().map(parse_raw).transpose()? {
        None => None,
        Some(serde_json::Value::Object(map)) => Some(map),
        Some(other) => {
            return Err(Error::NotAnObject {
                path: PathBuf::from("<argument>"),
                found: nestjson_core::JsonKind::of(&other),
            });
        }
    };
    JsonDocument::create_new_file(&args.path, root)?;
    Ok(())
}

fn cmd_get(args: PathArgs) -> Result<(), Error> {
    let doc = JsonDocument::read_from_file(&args.path)?;
    let v = nestjson_core::nested_get_with(&doc, &args.property, &path_opts(args.delim))?;
    println!("{}", serde_json::to_string_pretty(v).unwrap_or_default());
    Ok(())
}

fn cmd_has(args: PathArgs) -> Result<(), Error> {
    let doc = JsonDocument::read_from_file(&args.path)?;
    let found = nestjson_core::nested_has_with(&doc, &args.property, &path_opts(args.delim))?;
    println!("{}", found);
    if !found {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_set(args: SetArgs) -> Result<(), Error> {
    let new_val = parse_raw(&args.value)?;
    let mut doc = JsonDocument::read_from_file(&args.path)?;
    nestjson_core::nested_set_with(&mut doc, &args.property, new_val, &path_opts(args.delim))?;
    doc.save_to_file(args.out.as_deref())
}

fn cmd_remove(args: RemoveArgs) -> Result<(), Error> {
    let mut doc = JsonDocument::read_from_file(&args.path)?;
    nestjson_core::nested_remove_with(&mut doc, &args.property, &path_opts(args.delim))?;
    doc.save_to_file(args.out.as_deref())
}

fn cmd_list(args: ListArgs) -> Result<(), Error> {
    let doc = JsonDocument::read_from_file(&args.path)?;
    for p in nestjson_core::nested_list_with(&doc, &path_opts(args.delim)) {
        println!("{}", p);
    }
    Ok(())
}
