//! Interactive form in the terminal.

use std::io;

use form::{FormController, SubmitError, SubmitOutcome, view::SUBMITTING_LABEL};
use model::Field;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::warn;

use crate::render::{render_header, render_prompt, render_view};

pub struct Terminal<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            lines: input.lines(),
            output,
        }
    }

    async fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    /// Returns `None` when input ends.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    Submitted,
    Cancelled,
}

/// Ask every field, then keep asking invalid fields until the form is
/// valid. After a failed submission the user decides whether to retry
/// with the same values.
pub async fn run_session<R, W>(
    form: &FormController,
    terminal: &mut Terminal<R, W>,
) -> io::Result<SessionResult>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    terminal.print(&render_header()).await?;
    terminal.print("\n").await?;

    for field in Field::ALL {
        if !prompt_field(form, terminal, field).await? {
            return Ok(SessionResult::Cancelled);
        }
    }

    loop {
        let errors = form.validate();
        if !errors.is_empty() {
            for (field, message) in errors.iter() {
                terminal.print(&format!("! {message}\n")).await?;
                if !prompt_field(form, terminal, field).await? {
                    return Ok(SessionResult::Cancelled);
                }
            }
            continue;
        }

        terminal.print(&format!("{SUBMITTING_LABEL}\n")).await?;
        match form.submit().await {
            Ok(SubmitOutcome::Submitted) => {
                terminal.print(&render_view(&form.view())).await?;
                return Ok(SessionResult::Submitted);
            }
            Ok(SubmitOutcome::Failed) => {
                terminal.print(&render_view(&form.view())).await?;
                terminal.print("Try again? [Y/n]: ").await?;
                match terminal.read_line().await? {
                    Some(answer) if !is_no(&answer) => continue,
                    _ => return Ok(SessionResult::Cancelled),
                }
            }
            Err(SubmitError::Invalid(_)) => continue,
            Err(e) => {
                warn!("Submission was not started: {e}");
                return Ok(if form.state().submitted {
                    SessionResult::Submitted
                } else {
                    SessionResult::Cancelled
                });
            }
        }
    }
}

/// Returns false when input ends.
async fn prompt_field<R, W>(
    form: &FormController,
    terminal: &mut Terminal<R, W>,
    field: Field,
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    terminal.print(&render_prompt(field)).await?;
    match terminal.read_line().await? {
        Some(value) => {
            form.set_field(field, value);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn is_no(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use form::SUBMIT_ERROR_MESSAGE;
    use profile_store::{InMemoryProfileStore, RemoteProfileStore};

    use super::*;

    const ADA_INPUT: &str = "Ada\n29\nfemale\nada@example.com\nmath\ncuriosity\n\n\n";

    async fn run(form: &FormController, input: &str) -> (SessionResult, String) {
        let mut terminal = Terminal::new(input.as_bytes(), Vec::new());
        let result = run_session(form, &mut terminal).await.unwrap();
        let output = String::from_utf8(terminal.into_output()).unwrap();
        (result, output)
    }

    #[tokio::test]
    async fn valid_input_is_submitted() {
        let store = Arc::new(InMemoryProfileStore::new());
        let form = FormController::new(store.clone());

        let (result, output) = run(&form, ADA_INPUT).await;

        assert_eq!(result, SessionResult::Submitted);
        assert!(output.contains(SUBMITTING_LABEL));
        assert!(output.contains("Thank You!"));
        let profiles = store.profiles().await;
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].email().as_str(), "ada@example.com");
        assert_eq!(profiles[0].ideal_date(), None);
    }

    #[tokio::test]
    async fn invalid_field_is_asked_again() {
        let store = Arc::new(InMemoryProfileStore::new());
        let form = FormController::new(store.clone());
        let input = "Ada\n15\nfemale\nada@example.com\nmath\ncuriosity\npicnic\n\n30\n";

        let (result, output) = run(&form, input).await;

        assert_eq!(result, SessionResult::Submitted);
        assert!(output.contains("! Minimum age is 18\nAge [Your age]: "));
        let profiles = store.profiles().await;
        assert_eq!(profiles[0].age().value(), 30);
        assert_eq!(profiles[0].ideal_date(), Some("picnic"));
    }

    #[tokio::test]
    async fn unconfigured_store_shows_error_and_keeps_values() {
        let store = Arc::new(RemoteProfileStore::not_configured("valentine_profiles".to_string()));
        let form = FormController::new(store);
        let input = format!("{ADA_INPUT}y\nn\n");

        let (result, output) = run(&form, &input).await;

        assert_eq!(result, SessionResult::Cancelled);
        assert_eq!(output.matches(SUBMIT_ERROR_MESSAGE).count(), 2);
        assert!(output.contains("Name: Ada"));
        assert_eq!(form.fields().name, "Ada");
        assert!(!form.state().submitted);
    }

    #[tokio::test]
    async fn input_end_cancels() {
        let form = FormController::new(Arc::new(InMemoryProfileStore::new()));
        let (result, _) = run(&form, "Ada\n29\n").await;
        assert_eq!(result, SessionResult::Cancelled);
    }

    #[test]
    fn retry_answers() {
        assert!(is_no("n"));
        assert!(is_no(" No "));
        assert!(!is_no(""));
        assert!(!is_no("y"));
    }
}
