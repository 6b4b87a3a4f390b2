//! Interactive mode: one [`Console`] serving many commands.

use crate::Console;
use crate::cli::Command;
use anyhow::{Result, bail};
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const PROMPT: &str = "desk> ";

/// A command typed at the shell prompt.
#[derive(Parser, Debug)]
#[command(name = "desk", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

impl Console {
    /// Reads commands from `input` line by line and runs each one.
    ///
    /// A failing command prints its error and the shell keeps going. Stops at
    /// end of input or on `exit`/`quit`.
    pub async fn shell<I>(&mut self, input: I, out: &mut impl Write) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            let words = match split_words(&line) {
                Ok(words) => words,
                Err(e) => {
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };
            match words.first().map(String::as_str) {
                None => continue,
                Some("exit" | "quit") => break,
                Some(_) => {}
            }

            let parsed = match ShellLine::try_parse_from(&words) {
                Ok(parsed) => parsed,
                Err(e) => {
                    write!(out, "{}", e.render())?;
                    continue;
                }
            };
            debug!("Shell command: {:?}", parsed.command);
            if let Err(e) = self.execute(&parsed.command, out).await {
                writeln!(out, "error: {e:#}")?;
            }
        }

        Ok(())
    }
}

/// Splits a line on whitespace. Single or double quotes group words.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        bail!("unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
