/// Interactive yes/no confirmation for destructive commands.
use std::io::{self, BufRead, Write};

/// Something that can ask the user a yes/no question.
pub trait Confirm {
    /// Ask `prompt`; `true` only on an explicit yes.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Prompts on stderr and reads one line from stdin.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let stderr = io::stderr();
        match ask(&mut stdin.lock(), &mut stderr.lock(), prompt) {
            Ok(answer) => answer,
            Err(e) => {
                log::debug!("confirmation read failed: {e}");
                false
            }
        }
    }
}

/// Skip the prompt entirely when `force` is set.
pub fn confirm_unless_forced(confirm: &dyn Confirm, force: bool, prompt: &str) -> bool {
    if force {
        log::debug!("--force set, skipping confirmation");
        return true;
    }
    confirm.confirm(prompt)
}

/// Write `prompt` and read a single answer line.
///
/// End of input counts as no.
///
/// # Errors
///
/// Returns any I/O error from writing the prompt or reading the answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<bool> {
    write!(output, "{prompt} [y/N]: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
