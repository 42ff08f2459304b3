//! Line-oriented terminal front end for [`ShortenForm`].

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::{
    client::ShortenService,
    clipboard::Clipboard,
    form::{Notice, ShortenForm},
};

const PROMPT: &str = "Enter URL...";
const COPY: &str = ":copy";
const QUIT: &str = ":quit";

/// Runs until `:quit` or end of input. Each other line becomes the candidate
/// input and is submitted.
pub async fn run<S, C, R, W>(form: &ShortenForm<S, C>, mut input: R, out: &mut W) -> io::Result<()>
where
    S: ShortenService,
    C: Clipboard,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut line = String::new();
    loop {
        write_prompt(form, out)?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            break;
        }
        let command = line.trim_end_matches(['\r', '\n']);

        match command.trim() {
            QUIT => break,
            COPY => {
                let result = form.copy_to_clipboard();
                writeln!(out, "{}", Notice::for_copy(&result))?;
            }
            _ => {
                form.set_input(command);
                let result = form.submit_input().await;
                writeln!(out, "{}", Notice::for_submission(&result))?;
                if let Ok(link) = &result {
                    writeln!(out, "{}", link)?;
                }
            }
        }
    }
    debug!("Session ended");
    Ok(())
}

fn write_prompt<S, C, W>(form: &ShortenForm<S, C>, out: &mut W) -> io::Result<()>
where
    S: ShortenService,
    C: Clipboard,
    W: Write,
{
    if form.can_copy() {
        write!(out, "{} ({} to copy, {} to exit)> ", PROMPT, COPY, QUIT)?;
    } else {
        write!(out, "{} ({} to exit)> ", PROMPT, QUIT)?;
    }
    out.flush()
}
