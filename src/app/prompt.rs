//! Terminal front-end
//!
//! Screens talk to the user only through [`Prompter`], so the whole flow can be
//! driven from tests with a scripted implementation.

use crate::core::error::{ErrorContext, FunBunError, Result};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

/// Interaction surface used by the screens
pub trait Prompter {
    /// Pick one of `options`, returning its index
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize>;

    /// Free text, empty allowed
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Hidden text, empty allowed
    fn password(&mut self, prompt: &str) -> Result<String>;

    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    fn info(&mut self, message: &str) -> Result<()>;

    fn success(&mut self, message: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;
}

/// Default interactive implementation backed by `dialoguer`
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stdout(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, options: &[String]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_on(&self.term)
            .with_context(FunBunError::PromptError, || format!("Failed to read choice for '{}'", prompt))
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .with_context(FunBunError::PromptError, || format!("Failed to read '{}'", prompt))
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact_on(&self.term)
            .with_context(FunBunError::PromptError, || format!("Failed to read '{}'", prompt))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_on(&self.term)
            .context(FunBunError::PromptError, "Failed to read confirmation")
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.term.write_line(message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.term.write_line(&style(message).green().to_string())?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.term.write_line(&style(message).red().to_string())?;
        Ok(())
    }
}
