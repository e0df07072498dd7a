//! mbus-ascii CLI
//!
//! Builds M-Bus ASCII request frames and parses gateway responses given as
//! hex bytes.

use clap::{Parser, Subcommand};
use mbus_ascii::hex::{format_frame, parse_hex_args};
use mbus_ascii::protocol::{self, field_value, Field, Response};
use mbus_ascii::{Config, DigitPolicy, MbusAsciiError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// mbus-ascii CLI
#[derive(Parser, Debug)]
#[command(name = "mbus-ascii")]
#[command(about = "Build and parse PiiGAB M-Bus ASCII single-item frames")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a read request for one item
    ///
    /// Example: `mbus-ascii encode 0 0 0 a.b.c` prints
    /// `02 30 30 30 30 30 30 61 2E 62 2E 63 03`
    Encode {
        /// Transaction id (0-99)
        tid: u32,

        /// Protocol id: 0 = no checksum, 1 = with checksum
        pid: u32,

        /// Device address (0-99)
        adr: u32,

        /// The item to read, e.g. Gateway.67002656_15701045T.Temperature
        item: String,

        /// Text printed before each byte (e.g. 0x)
        #[arg(long, default_value = "")]
        prefix: String,

        /// Text printed after each byte (e.g. ,)
        #[arg(long, default_value = "")]
        suffix: String,
    },

    /// Parse a response package
    ///
    /// Accepts one long hex string (06303130...) or one byte per argument
    /// (06 30 31 30 ...)
    Decode {
        /// Package bytes in hex
        #[arg(required = true, num_args = 1..)]
        package: Vec<String>,

        /// Also print TID, PID and ADR
        #[arg(long)]
        fields: bool,

        /// Decode malformed digit fields instead of rejecting them
        #[arg(long)]
        lenient_digits: bool,
    },

    /// Build a gateway response frame (ACK with a value, or NAK with a code)
    Reply {
        /// Transaction id (0-99)
        tid: u32,

        /// Protocol id: 0 = no checksum, 1 = with checksum
        pid: u32,

        /// Device address (0-99)
        adr: u32,

        /// Item value for an ACK response
        #[arg(long, conflicts_with = "nak", required_unless_present = "nak")]
        value: Option<String>,

        /// Error code character for a NAK response (C, D, I, M, O, T, V, X)
        #[arg(long)]
        nak: Option<char>,

        /// Text printed before each byte (e.g. 0x)
        #[arg(long, default_value = "")]
        prefix: String,

        /// Text printed after each byte (e.g. ,)
        #[arg(long, default_value = "")]
        suffix: String,
    },
}

fn main() {
    // Logs go to stderr; stdout carries only frame output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("mbus-ascii v{}", mbus_ascii::VERSION);

    match run(args.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Execute one subcommand and return the text to print
fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Encode {
            tid,
            pid,
            adr,
            item,
            prefix,
            suffix,
        } => {
            let config = Config::builder()
                .byte_prefix(prefix)
                .byte_suffix(suffix)
                .build();

            let frame = protocol::build_request(
                field_value(Field::Tid, tid)?,
                field_value(Field::Pid, pid)?,
                field_value(Field::Adr, adr)?,
                &item,
            )?;
            Ok(format_frame(&frame, &config))
        }

        Commands::Decode {
            package,
            fields,
            lenient_digits,
        } => {
            let policy = if lenient_digits {
                DigitPolicy::Lenient
            } else {
                DigitPolicy::Strict
            };
            let config = Config::builder().digit_policy(policy).build();

            let bytes = parse_hex_args(&package)?;
            let response = protocol::parse_response_with(&bytes, config.digit_policy)?;
            Ok(render_response(&response, fields))
        }

        Commands::Reply {
            tid,
            pid,
            adr,
            value,
            nak,
            prefix,
            suffix,
        } => {
            let config = Config::builder()
                .byte_prefix(prefix)
                .byte_suffix(suffix)
                .build();

            let tid = field_value(Field::Tid, tid)?;
            let pid = field_value(Field::Pid, pid)?;
            let adr = field_value(Field::Adr, adr)?;

            let response = match (value, nak) {
                (_, Some(code)) if !code.is_ascii() => {
                    return Err(MbusAsciiError::Encoding(format!(
                        "NAK code {:?} is not an ASCII character",
                        code
                    )));
                }
                (_, Some(code)) => Response::nak(tid, pid, adr, code as u8),
                (Some(value), None) => Response::ack(tid, pid, adr, value),
                // clap requires one of --value / --nak
                (None, None) => return Err(MbusAsciiError::EmptyInput),
            };

            let frame = protocol::encode_response(&response)?;
            Ok(format_frame(&frame, &config))
        }
    }
}

/// Format a decoded response the way the gateway tools print it
fn render_response(response: &Response, fields: bool) -> String {
    let mut lines = Vec::new();

    if fields {
        lines.push(format!("TID:\t{}", response.tid()));
        lines.push(format!("PID:\t{}", response.pid()));
        lines.push(format!("ADR:\t{}", response.adr()));
    }

    match response {
        Response::Ack(ack) => lines.push(format!("[ACK] {}", ack.value)),
        Response::Nak(nak) => lines.push(format!(
            "[NAK] {} ({:02X}, {})",
            nak.code as char, nak.code, nak.description
        )),
    }

    lines.join("\n")
}
