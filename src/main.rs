use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};
use simple_logger::SimpleLogger;

use thaiqr::{outline, payload, tlv, Tlv};

mod config;
mod input;
mod qr;

use config::Conf;

#[derive(Parser)]
#[command(name = "thaiqr", version, about = "Decode, encode and draw Thai QR payment payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decodes a payload and prints its outline
    Decode {
        /// Payload, file holding it, or `-` for stdin
        input: Option<String>,
        /// Decode even when the checksum is missing or wrong
        #[arg(long)]
        force: bool,
        #[arg(long, value_enum, default_value_t = Format::Outline)]
        format: Format,
    },
    /// Encodes an outline into a payload
    Encode {
        /// Outline, file holding it, or `-` for stdin
        input: Option<String>,
        /// Keep the checksum field as written instead of recomputing it
        #[arg(long)]
        preserve_crc: bool,
        #[arg(long, value_enum, default_value_t = Format::Outline)]
        format: Format,
    },
    /// Draws a payload as a QR code in the terminal
    Generate {
        /// Payload, file holding it, or `-` for stdin
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Outline,
    Json,
}

enum Outcome {
    Done,
    Usage(&'static str),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let conf = match Conf::load() {
        Ok(conf) => conf,
        Err(e) => {
            eprintln!("error: invalid configuration: {}", e);
            return ExitCode::from(1);
        }
    };

    let level = conf.level().unwrap_or(LevelFilter::Warn);
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("warning: logger not installed: {}", e);
    }

    match run(cli.command, &conf).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Usage(usage)) => {
            eprintln!("usage: {}", usage);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(command: Command, conf: &Conf) -> anyhow::Result<Outcome> {
    match command {
        Command::Decode {
            input,
            force,
            format,
        } => {
            let Some(data) = input::resolve(input.as_deref())
                .await
                .context("reading payload")?
            else {
                return Ok(Outcome::Usage(
                    "thaiqr decode [<payload> | <file> | -] [--force]",
                ));
            };

            if !(force || conf.force) && !payload::validate(&data) {
                bail!("invalid or missing CRC in payload (use --force to ignore)");
            }

            let tlvs = tlv::decode(&data).context("decoding payload")?;
            debug!("decoded {} top-level fields", tlvs.len());

            match format {
                Format::Outline => print!("{}", outline::render(&tlvs)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&tlvs)?),
            }
        }

        Command::Encode {
            input,
            preserve_crc,
            format,
        } => {
            let Some(data) = input::resolve(input.as_deref())
                .await
                .context("reading outline")?
            else {
                return Ok(Outcome::Usage(
                    "thaiqr encode [<outline> | <file> | -] [--preserve-crc]",
                ));
            };

            let tlvs: Vec<Tlv> = match format {
                Format::Outline => outline::parse(&data),
                Format::Json => serde_json::from_str(&data).context("parsing JSON tree")?,
            };

            let encoded = if preserve_crc || conf.preserve_crc {
                tlv::encode(&tlvs)
            } else {
                payload::attach_checksum(&tlvs)
            };

            println!("{}", encoded);
        }

        Command::Generate { input } => {
            let Some(data) = input::resolve(input.as_deref())
                .await
                .context("reading payload")?
            else {
                return Ok(Outcome::Usage("thaiqr generate [<payload> | <file> | -]"));
            };

            let code = qr::render(&data).context("building QR code")?;
            println!("{}", code);
        }
    }

    Ok(Outcome::Done)
}
