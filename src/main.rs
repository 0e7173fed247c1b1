//! `cyrcipher`: console front-end for the PolyShift and RouteTable ciphers.
//!
//! **Usage:**
//! ```text
//! cyrcipher poly-shift  [--key <KEY>]  [--encrypt <TEXT> | --decrypt <TEXT>]
//! cyrcipher route-table [--cols <N>]   [--encrypt <TEXT> | --decrypt <TEXT>]
//! ```
//!
//! A missing key is read from stdin. Without `--encrypt`/`--decrypt` the
//! program runs the interactive mode loop.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cyrcipher::{session, PolyShift, RouteTable, TextCipher};

/// Encrypt and decrypt Russian text with classical ciphers.
#[derive(Parser)]
#[command(name = "cyrcipher", version, about)]
struct Cli {
    #[command(subcommand)]
    cipher: CipherCommand,
}

#[derive(Subcommand)]
enum CipherCommand {
    /// Polyalphabetic shift cipher keyed by a word of the alphabet.
    PolyShift {
        /// Key word; prompted for when omitted.
        #[arg(short, long)]
        key: Option<String>,

        #[command(flatten)]
        message: OneShot,
    },
    /// Route transposition cipher keyed by a column count.
    RouteTable {
        /// Number of table columns; prompted for when omitted.
        #[arg(short, long, allow_negative_numbers = true)]
        cols: Option<i64>,

        #[command(flatten)]
        message: OneShot,
    },
}

/// Single operation performed instead of the interactive loop.
#[derive(Args)]
struct OneShot {
    /// Encrypt TEXT, print the result and exit.
    #[arg(short, long, value_name = "TEXT", conflicts_with = "decrypt")]
    encrypt: Option<String>,

    /// Decrypt TEXT, print the result and exit.
    #[arg(short, long, value_name = "TEXT")]
    decrypt: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (cipher, message) = match cli.cipher {
        CipherCommand::PolyShift { key, message } => {
            let key = match key {
                Some(key) => key,
                None => read_key("Enter key: ")?,
            };
            let cipher = PolyShift::new(&key).context("failed to initialise cipher")?;
            (Box::new(cipher) as Box<dyn TextCipher>, message)
        }
        CipherCommand::RouteTable { cols, message } => {
            let cols = match cols {
                Some(cols) => cols,
                None => {
                    let line = read_key("Enter number of columns: ")?;
                    line.trim()
                        .parse()
                        .with_context(|| format!("column count must be an integer: {:?}", line))?
                }
            };
            let cipher = RouteTable::new(cols).context("failed to initialise cipher")?;
            (Box::new(cipher) as Box<dyn TextCipher>, message)
        }
    };

    let result = match (message.encrypt, message.decrypt) {
        (Some(plain), _) => cipher.encrypt(&plain),
        (None, Some(secret)) => cipher.decrypt(&secret),
        (None, None) => {
            println!("Key loaded.");
            let stdin = io::stdin();
            session::run(
                cipher.as_ref(),
                stdin.lock(),
                &mut io::stdout(),
                &mut io::stderr(),
            )
            .context("console session failed")?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    match result {
        Ok(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error processing text: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Prompts on stdout and reads the key line from stdin.
fn read_key(text: &str) -> Result<String> {
    let stdin = io::stdin();
    match session::prompt(&mut stdin.lock(), &mut io::stdout(), text)? {
        Some(line) => Ok(line),
        None => bail!("no key given: end of input"),
    }
}
