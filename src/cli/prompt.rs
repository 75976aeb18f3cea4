//! Certificate and password prompts.
//!
//! Both answers are taken verbatim: only the line ending is stripped.

use crate::packager::{Credentials, Error, Result};
use dialoguer::{Input, Password};
use std::io::{self, BufRead, IsTerminal, Write};

const CERTIFICATE_PROMPT: &str = "Certificate path";
const PASSWORD_PROMPT: &str = "Password";

/// Ask for the certificate path, then the password.
///
/// Uses interactive prompts on a terminal and plain line reads otherwise,
/// so answers can be piped in.
pub fn read_credentials(hide_password: bool) -> Result<Credentials> {
    if io::stdin().is_terminal() {
        read_interactive(hide_password)
    } else {
        read_lines(io::stdin().lock(), io::stdout().lock())
    }
}

fn read_interactive(hide_password: bool) -> Result<Credentials> {
    let certificate: String = Input::new()
        .with_prompt(CERTIFICATE_PROMPT)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let answer = if hide_password {
        Password::new()
            .with_prompt(PASSWORD_PROMPT)
            .allow_empty_password(true)
            .interact()
    } else {
        Input::<String>::new()
            .with_prompt(PASSWORD_PROMPT)
            .allow_empty(true)
            .interact_text()
    };
    let password = answer.map_err(prompt_error)?;

    Ok(Credentials::new(certificate, password))
}

/// Prompt on `output` and read one answer per line from `input`.
pub fn read_lines<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Credentials> {
    let certificate = ask(&mut input, &mut output, CERTIFICATE_PROMPT)?;
    let password = ask(&mut input, &mut output, PASSWORD_PROMPT)?;
    Ok(Credentials::new(certificate, password))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Prompt(format!(
            "standard input closed before {} was entered",
            prompt.to_lowercase()
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_answers_verbatim() {
        let mut shown = Vec::new();
        let creds = read_lines(&b"C:\\cert.pfx\r\n  se cret \n"[..], &mut shown).unwrap();
        assert_eq!(creds.certificate(), "C:\\cert.pfx");
        assert_eq!(creds.password(), "  se cret ");
        assert_eq!(String::from_utf8(shown).unwrap(), "Certificate path: Password: ");
    }

    #[test]
    fn last_line_without_newline() {
        let creds = read_lines(&b"cert.pfx\nsecret"[..], Vec::new()).unwrap();
        assert_eq!(creds.password(), "secret");
    }

    #[test]
    fn closed_input_is_an_error() {
        let err = read_lines(&b"cert.pfx\n"[..], Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Prompt(msg) if msg.contains("password")));
    }

    #[test]
    fn empty_answers_are_allowed() {
        let creds = read_lines(&b"\n\n"[..], Vec::new()).unwrap();
        assert_eq!(creds.certificate(), "");
        assert_eq!(creds.password(), "");
    }
}
