//! Command-line interface for `keysched`.

#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use keysched_core::{Algorithm, RoundKeys, Schedule, SubkeySet, TripleKeySet, DES_ROUNDS};

/// Block cipher key schedule CLI.
#[derive(Parser)]
#[command(
    name = "keysched",
    version,
    author,
    about = "Derive DES, Triple-DES and AES key schedules"
)]
struct Cli {
    /// Log derivation steps at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Output layout for derived keys.
    #[arg(long, value_enum, default_value_t = Format::Hex, global = true)]
    format: Format,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the 16 DES subkeys of an 8-byte key.
    Des(DeriveArgs),
    /// Derive Triple-DES subkeys from a 16- or 24-byte key.
    Tdes(DeriveArgs),
    /// Expand a 16-, 24- or 32-byte AES key into its round keys.
    Aes(DeriveArgs),
    /// Print a schedule previously written with `--out`.
    Inspect {
        /// Path to the serialized schedule.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Derive and print the reference DES, Triple-DES and AES schedules.
    Demo,
}

#[derive(clap::Args)]
struct DeriveArgs {
    /// Key as hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Optional output path for the serialized schedule.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One labelled line per round key.
    Hex,
    /// One bare hex string per schedule.
    Compact,
}

const DEMO_DES_KEY: &str = "133457799BBCDFF1";
const DEMO_TDES_KEY: &str = "0123456789ABCDEF133457799BBCDFF1";
const DEMO_AES_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Des(args) => cmd_derive(Algorithm::Des, &args, cli.format),
        Commands::Tdes(args) => cmd_derive(Algorithm::TripleDes, &args, cli.format),
        Commands::Aes(args) => cmd_derive(Algorithm::Aes, &args, cli.format),
        Commands::Inspect { input } => cmd_inspect(&input, cli.format),
        Commands::Demo => cmd_demo(),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn cmd_derive(algorithm: Algorithm, args: &DeriveArgs, format: Format) -> Result<()> {
    let key = parse_key_hex(&args.key_hex)?;
    let schedule = Schedule::derive(algorithm, &key)
        .with_context(|| format!("derive {algorithm} key schedule"))?;
    log::info!("derived {} key schedule from {}-byte key", algorithm, key.len());
    if let Some(out) = &args.out {
        save_schedule(&schedule, out)?;
        log::info!("wrote schedule to {}", out.display());
    }
    print!("{}", render_schedule(&schedule, format));
    Ok(())
}

fn cmd_inspect(input: &Path, format: Format) -> Result<()> {
    let schedule = load_schedule(input)?;
    println!("algorithm: {}", schedule.algorithm());
    print!("{}", render_schedule(&schedule, format));
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let des = Schedule::derive(Algorithm::Des, &parse_key_hex(DEMO_DES_KEY)?)?;
    println!("DES subkeys (48 bits):");
    print!("{}", render_schedule(&des, Format::Hex));

    let tdes = match Schedule::derive(Algorithm::TripleDes, &parse_key_hex(DEMO_TDES_KEY)?)? {
        Schedule::TripleDes(set) => set,
        other => anyhow::bail!("unexpected {} schedule", other.algorithm()),
    };
    println!();
    println!("3DES subkey groups: {}", tdes.as_array().len());
    println!("subkeys per group: {}", tdes.k1().iter().count());
    println!("K1_01: {}", subkey_hex(tdes.k1(), 1));

    let aes = match Schedule::derive(Algorithm::Aes, &parse_key_hex(DEMO_AES_KEY)?)? {
        Schedule::Aes(rks) => rks,
        other => anyhow::bail!("unexpected {} schedule", other.algorithm()),
    };
    println!();
    println!("AES round keys: {}", aes.len());
    println!("round key 0: {}", hex::encode_upper(aes.first()));
    println!("final round key: {}", hex::encode_upper(aes.last()));
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).context("decode key hex")
}

fn save_schedule(schedule: &Schedule, path: &Path) -> Result<()> {
    let bytes = schedule.to_bytes().context("serialize schedule")?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn load_schedule(path: &Path) -> Result<Schedule> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Schedule::from_bytes(&bytes).context("deserialize schedule")
}

fn subkey_hex(subkeys: &SubkeySet, round: usize) -> String {
    subkeys
        .subkey_bytes(round)
        .map(hex::encode_upper)
        .unwrap_or_default()
}

fn render_schedule(schedule: &Schedule, format: Format) -> String {
    match schedule {
        Schedule::Des(subkeys) => render_subkeys(subkeys, "", format),
        Schedule::TripleDes(set) => render_triple(set, format),
        Schedule::Aes(rks) => render_round_keys(rks, format),
    }
}

fn render_subkeys(subkeys: &SubkeySet, prefix: &str, format: Format) -> String {
    let mut out = String::new();
    match format {
        Format::Hex => {
            for round in 1..=DES_ROUNDS {
                let _ = writeln!(out, "{prefix}K{round:02}: {}", subkey_hex(subkeys, round));
            }
        }
        Format::Compact => {
            for round in 1..=DES_ROUNDS {
                out.push_str(&subkey_hex(subkeys, round));
            }
            out.push('\n');
        }
    }
    out
}

fn render_triple(set: &TripleKeySet, format: Format) -> String {
    let mut out = String::new();
    if format == Format::Hex {
        let _ = writeln!(out, "keying: {:?}", set.keying());
    }
    for (stage, subkeys) in set.as_array().into_iter().enumerate() {
        let prefix = format!("K{}_", stage + 1);
        match format {
            Format::Hex => out.push_str(&render_subkeys(subkeys, &prefix, format)),
            Format::Compact => out.push_str(&render_subkeys(subkeys, "", format)),
        }
    }
    out
}

fn render_round_keys(rks: &RoundKeys, format: Format) -> String {
    let mut out = String::new();
    match format {
        Format::Hex => {
            let _ = writeln!(out, "{:?}: {} rounds", rks.size(), rks.rounds());
            for (round, key) in rks.iter().enumerate() {
                let _ = writeln!(out, "R{:02}: {}", round, hex::encode_upper(key));
            }
        }
        Format::Compact => {
            out.push_str(&hex::encode_upper(rks.to_bytes()));
            out.push('\n');
        }
    }
    out
}
