//! Hands a rendered recipe to the host print command.
//!
//! Printing is fire-and-forget from the card's point of view: the job runs
//! off the UI thread and the outcome is only logged.

use anyhow::{Context, Result, anyhow};
use std::io::Write;
use std::process::{Command, Stdio};

/// One print request: the command line to run and the document fed to its stdin.
///
/// The command is split like a shell word list: whitespace separates
/// arguments, single quotes are literal, double quotes and backslashes escape.
/// No variables, globs or pipes.
#[derive(Debug, Clone)]
pub struct PrintJob {
    command: String,
    document: String,
}

impl PrintJob {
    pub fn new(command: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            document: document.into(),
        }
    }

    pub fn program(&self) -> Option<String> {
        split_command(&self.command)
            .ok()
            .and_then(|words| words.into_iter().next())
    }

    /// Run the command to completion, writing the document to its stdin.
    /// The child is always reaped, even when it stops reading early.
    pub fn dispatch(&self) -> Result<()> {
        let mut words = split_command(&self.command)?.into_iter();
        let program = words
            .next()
            .ok_or_else(|| anyhow!("print command is empty"))?;

        let mut child = Command::new(&program)
            .args(words)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to launch print command `{}`", self.command))?;

        let sent = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(self.document.as_bytes()),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .with_context(|| format!("failed to wait for `{program}`"))?;
        sent.with_context(|| format!("failed to send recipe to `{program}`"))?;
        if !output.status.success() {
            return Err(anyhow!(
                "`{program}` exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Ok(())
    }
}

fn split_command(raw: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(anyhow!("unterminated ' in print command")),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(anyhow!("unterminated \" in print command")),
                        },
                        Some(c) => current.push(c),
                        None => return Err(anyhow!("unterminated \" in print command")),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(c) = chars.next() {
                    current.push(c);
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::{PrintJob, split_command};

    #[test]
    fn empty_command_is_an_error() {
        let job = PrintJob::new("   ", "Classic Chocolate Cake");
        assert!(job.program().is_none());
        let err = job.dispatch().expect_err("empty command must fail");
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn program_is_first_token() {
        let job = PrintJob::new("lpr -P kitchen", "");
        assert_eq!(job.program().as_deref(), Some("lpr"));
    }

    #[cfg(unix)]
    #[test]
    fn dispatch_feeds_document_to_command() {
        let job = PrintJob::new("cat", "1. Preheat the oven\n");
        job.dispatch().expect("cat accepts the document");
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_reported() {
        let job = PrintJob::new("sh -c false", "");
        assert!(job.dispatch().is_err());
    }

    #[test]
    fn quoted_arguments_stay_together() {
        let words = split_command(r#"lp -o "media=A4 borderless" -t 'Chocolate Cake' a\ b"#)
            .expect("valid command");
        assert_eq!(
            words,
            vec!["lp", "-o", "media=A4 borderless", "-t", "Chocolate Cake", "a b"]
        );
    }

    #[test]
    fn escaped_quote_inside_double_quotes() {
        let words = split_command(r#"lp -t "8\" pans""#).expect("valid command");
        assert_eq!(words, vec!["lp", "-t", "8\" pans"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(split_command("lp -o 'media=A4").is_err());
        let job = PrintJob::new("lp -t \"cake", "");
        assert!(job.program().is_none());
        assert!(job.dispatch().is_err());
    }

    #[cfg(target_os = "linux")]
    fn zombie_children_named(comm: &str) -> usize {
        let me = std::process::id().to_string();
        let Ok(entries) = std::fs::read_dir("/proc") else {
            return 0;
        };
        entries
            .flatten()
            .filter_map(|entry| std::fs::read_to_string(entry.path().join("stat")).ok())
            .filter(|stat| {
                let Some(open) = stat.find('(') else {
                    return false;
                };
                let Some(close) = stat.rfind(')') else {
                    return false;
                };
                let name = &stat[open + 1..close];
                let mut rest = stat[close + 1..].split_whitespace();
                let state = rest.next();
                let ppid = rest.next();
                name == comm && state == Some("Z") && ppid == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn command_that_stops_reading_is_still_reaped() {
        let before = zombie_children_named("head");
        let job = PrintJob::new("head -c 0", "x".repeat(1 << 20));

        let err = job.dispatch().expect_err("closed stdin must be reported");

        assert!(format!("{err:#}").contains("failed to send recipe"));
        assert_eq!(zombie_children_named("head"), before);
    }
}
