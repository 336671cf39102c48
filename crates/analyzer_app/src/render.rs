use std::io::Write;

use analyzer_core::AppViewModel;

/// Incremental terminal renderer for the view model. Tracks what it has
/// already written so the feedback reveal appends characters instead of
/// reprinting the whole text every frame.
#[derive(Default)]
pub struct TerminalRenderer {
    last_loading: Option<String>,
    last_notice: Option<String>,
    header_written: bool,
    /// Bytes of the revealed feedback prefix already on screen.
    feedback_written: usize,
    reveal_closed: bool,
    error_written: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<W: Write>(&mut self, out: &mut W, view: &AppViewModel) -> std::io::Result<()> {
        if view.submitting {
            // A fresh submission starts a fresh result block.
            self.header_written = false;
            self.feedback_written = 0;
            self.reveal_closed = false;
            self.error_written = false;
        }

        if view.loading_message != self.last_loading {
            if let Some(message) = &view.loading_message {
                writeln!(out, "{message}")?;
            }
            self.last_loading = view.loading_message.clone();
        }

        if view.notice != self.last_notice {
            if let Some(notice) = &view.notice {
                writeln!(out, "{notice}")?;
            }
            self.last_notice = view.notice.clone();
        }

        if let Some(feedback) = &view.feedback {
            if !self.header_written {
                let score = match view.score {
                    Some(score) => format!("{score}"),
                    None => "N/A".to_string(),
                };
                writeln!(out, "Safety Score: {score}/100")?;
                writeln!(out, "Feedback:")?;
                self.header_written = true;
            }
            if feedback.len() > self.feedback_written {
                out.write_all(feedback[self.feedback_written..].as_bytes())?;
                self.feedback_written = feedback.len();
                out.flush()?;
            }
            if view.reveal_complete && !self.reveal_closed {
                writeln!(out)?;
                self.reveal_closed = true;
            }
        }

        if let Some(error) = &view.error {
            if !self.error_written {
                writeln!(out, "Error: {error}")?;
                self.error_written = true;
            }
        }

        Ok(())
    }
}
