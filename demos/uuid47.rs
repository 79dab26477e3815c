//! Simple command that converts UUIDv7 strings into UUIDv4 facades and back
//!
//! ```text
//! $ export UUID47_KEY=0123456789abcdeffedcba9876543210
//! $ cargo run --example uuid47 -- encode 018f2d9f-9a2a-7def-8c3f-7b1a2c4d5e6f
//! 2463c780-7fca-4def-8c3f-7b1a2c4d5e6f
//! $ cargo run --example uuid47 -- decode 2463c780-7fca-4def-8c3f-7b1a2c4d5e6f
//! 018f2d9f-9a2a-7def-8c3f-7b1a2c4d5e6f
//! ```

use std::{io, io::Write, process::ExitCode};

use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use uuid47::{Codec, Key, Uuid};

#[derive(Parser)]
#[command(name = "uuid47", version, about)]
struct Cli {
    /// Secret key as 32 hexadecimal digits.
    #[arg(short, long, env = "UUID47_KEY", hide_env_values = true)]
    key: Option<Key>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Converts UUIDv7 strings into UUIDv4 facades.
    Encode {
        #[arg(required = true)]
        ids: Vec<Uuid>,
    },
    /// Restores UUIDv7 strings from UUIDv4 facades.
    Decode {
        #[arg(required = true)]
        ids: Vec<Uuid>,
    },
    /// Prints a freshly generated key.
    Keygen,
}

fn main() -> ExitCode {
    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .map_err(|e| eprintln!("uuid47: could not initialize logger: {e}"))
        .ok();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let codec = || {
        cli.key
            .as_ref()
            .map(Codec::from_key)
            .ok_or("key missing: pass '--key' or set UUID47_KEY")
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match cli.command {
        Command::Encode { ids } => {
            let codec = codec()?;
            for e in ids {
                writeln!(buf, "{}", codec.encode(e)?)?;
            }
        }
        Command::Decode { ids } => {
            let codec = codec()?;
            for e in ids {
                writeln!(buf, "{}", codec.decode(e)?)?;
            }
        }
        Command::Keygen => {
            let key = Key::generate(&mut rand::rngs::OsRng);
            writeln!(buf, "{}", hex::encode(key.as_bytes()))?;
        }
    }
    buf.flush()?;
    Ok(())
}
