//! Interactive console dialogue.
//!
//! Repeatedly asks for a mode (0 exit, 1 encrypt, 2 decrypt) and a message,
//! and prints the result. Cipher errors are reported and the dialogue goes
//! on; end of input finishes it like mode 0.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::cipher::TextCipher;

/// Prompt asking for the next mode.
const MODE_PROMPT: &str = "Select mode (0 - exit, 1 - encrypt, 2 - decrypt): ";

/// Prompt asking for the message.
const TEXT_PROMPT: &str = "Enter text: ";

/// Operation selected in the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// End the session.
    Exit,
    /// Encrypt the next message.
    Encrypt,
    /// Decrypt the next message.
    Decrypt,
}

/// Rejected mode selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMode;

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(0) => Ok(Mode::Exit),
            Ok(1) => Ok(Mode::Encrypt),
            Ok(2) => Ok(Mode::Decrypt),
            _ => Err(InvalidMode),
        }
    }
}

/// Runs the dialogue until the user exits or input ends.
///
/// # Parameters
/// - `cipher`: The cipher applied to every message.
/// - `input`: Source of mode selections and messages, one per line.
/// - `output`: Receives prompts and results.
/// - `errors`: Receives diagnostics for rejected modes and messages.
///
/// # Errors
/// Returns any I/O error raised by `input`, `output` or `errors`.
pub fn run<C, R, W, E>(cipher: &C, mut input: R, output: &mut W, errors: &mut E) -> io::Result<()>
where
    C: TextCipher + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        let Some(line) = prompt(&mut input, output, MODE_PROMPT)? else {
            return Ok(());
        };
        let mode = match line.parse::<Mode>() {
            Ok(Mode::Exit) => return Ok(()),
            Ok(mode) => mode,
            Err(InvalidMode) => {
                writeln!(errors, "Invalid mode selection.")?;
                continue;
            }
        };

        let Some(message) = prompt(&mut input, output, TEXT_PROMPT)? else {
            return Ok(());
        };
        let (label, result) = match mode {
            Mode::Encrypt => ("Encrypted", cipher.encrypt(&message)),
            _ => ("Decrypted", cipher.decrypt(&message)),
        };
        match result {
            Ok(text) => writeln!(output, "{}: {}", label, text)?,
            Err(err) => writeln!(errors, "Error processing text: {}", err)?,
        }
    }
}

/// Writes `text`, then reads one line without its line terminator.
///
/// Returns `None` at end of input.
///
/// # Errors
/// Returns any I/O error raised by `input` or `output`.
pub fn prompt<R, W>(input: &mut R, output: &mut W, text: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PolyShift, RouteTable};

    fn run_script<C: TextCipher + ?Sized>(cipher: &C, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(cipher, script.as_bytes(), &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("0".parse::<Mode>(), Ok(Mode::Exit));
        assert_eq!(" 1 ".parse::<Mode>(), Ok(Mode::Encrypt));
        assert_eq!("2\r".parse::<Mode>(), Ok(Mode::Decrypt));
        assert_eq!("3".parse::<Mode>(), Err(InvalidMode));
        assert_eq!("x".parse::<Mode>(), Err(InvalidMode));
        assert_eq!("-1".parse::<Mode>(), Err(InvalidMode));
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let cipher = PolyShift::new("Б").unwrap();
        let (out, err) = run_script(&cipher, "1\nпривет, мир\n2\nРСЙГЁУНЙС\n0\n");
        assert!(out.contains("Encrypted: РСЙГЁУНЙС\n"));
        assert!(out.contains("Decrypted: ПРИВЕТМИР\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let cipher = RouteTable::new(3).unwrap();
        let (out, err) = run_script(&cipher, "2\nИТР РЕИ\n7\n1\nПРИВЕТМИР\n");
        assert!(err.contains("Error processing text: Whitespace in cipher text\n"));
        assert!(err.contains("Invalid mode selection.\n"));
        assert!(out.contains("Encrypted: ИТРРЕИПВМ\n"));
    }

    #[test]
    fn test_exit_stops_reading() {
        let cipher = RouteTable::new(3).unwrap();
        let (out, _) = run_script(&cipher, "0\n1\nПРИВЕТ\n");
        assert_eq!(out, MODE_PROMPT);
    }

    #[test]
    fn test_end_of_input_after_mode() {
        let cipher = RouteTable::new(2).unwrap();
        let (out, err) = run_script(&cipher, "1\n");
        assert_eq!(out, format!("{}{}", MODE_PROMPT, TEXT_PROMPT));
        assert!(err.is_empty());
    }

    #[test]
    fn test_prompt_strips_crlf() {
        let mut input = "ПРИВЕТ\r\n".as_bytes();
        let mut out = Vec::new();
        let line = prompt(&mut input, &mut out, TEXT_PROMPT).unwrap();
        assert_eq!(line.as_deref(), Some("ПРИВЕТ"));
    }
}
