//! Terminal prompts the session drives

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use std::io;

/// Everything the session needs from the terminal.
///
/// Each call blocks until the user answers.
pub trait Prompter {
    /// Pick one option, returning its index
    fn choose_one(&mut self, prompt: &str, options: &[String]) -> io::Result<usize>;

    /// Pick any number of options, each given with its initial checked state
    fn choose_many(&mut self, prompt: &str, options: &[(String, bool)]) -> io::Result<Vec<usize>>;

    fn read_text(&mut self, prompt: &str) -> io::Result<String>;

    /// Show a report and wait until the user is done reading it
    fn display(&mut self, lines: &[String]) -> io::Result<()>;

    /// Redraw the screen, showing the one-shot status line if there is one
    fn show_status(&mut self, status: Option<&str>) -> io::Result<()>;
}

/// Pick one of `items`, labelled by `label`
pub fn choose<T: Copy>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    items: &[T],
    label: impl Fn(&T) -> String,
) -> io::Result<T> {
    let labels: Vec<String> = items.iter().map(label).collect();
    let index = prompter.choose_one(prompt, &labels)?;
    items.get(index).copied().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("selection {} out of range", index),
        )
    })
}

/// Dialoguer-backed prompter for an interactive terminal
pub struct TerminalPrompter {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn choose_one(&mut self, prompt: &str, options: &[String]) -> io::Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_on(&self.term)
            .map_err(io::Error::other)
    }

    fn choose_many(&mut self, prompt: &str, options: &[(String, bool)]) -> io::Result<Vec<usize>> {
        if options.is_empty() {
            return Ok(Vec::new());
        }
        let labels: Vec<&str> = options.iter().map(|(label, _)| label.as_str()).collect();
        let checked: Vec<bool> = options.iter().map(|(_, checked)| *checked).collect();

        MultiSelect::with_theme(&self.theme)
            .with_prompt(format!("{} (space to toggle, enter to confirm)", prompt))
            .items(&labels)
            .defaults(&checked)
            .interact_on(&self.term)
            .map_err(io::Error::other)
    }

    fn read_text(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(io::Error::other)
    }

    fn display(&mut self, lines: &[String]) -> io::Result<()> {
        self.term.clear_screen()?;
        for line in lines {
            self.term.write_line(line)?;
        }
        self.term.write_line("")?;
        self.read_text("Press ENTER to continue")?;
        Ok(())
    }

    fn show_status(&mut self, status: Option<&str>) -> io::Result<()> {
        self.term.clear_screen()?;
        if let Some(status) = status {
            self.term.write_line(&style(status).bold().to_string())?;
            self.term.write_line("")?;
        }
        Ok(())
    }
}
