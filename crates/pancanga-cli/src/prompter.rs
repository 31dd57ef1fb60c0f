//! Terminal prompts backed by `dialoguer`

use dialoguer::{Input, Select, theme::ColorfulTheme};
use pancanga_core::prompt::Validator;
use pancanga_core::{PromptError, Prompter};

/// Default interactive implementation of [`Prompter`].
///
/// Rejected input is reported under the prompt by dialoguer, which then
/// asks again.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, PromptError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| PromptError::interaction(e.to_string()))
    }

    fn input(&mut self, prompt: &str, validate: &Validator<'_>) -> Result<String, PromptError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|raw: &String| validate(raw).map_err(|rejection| rejection.message))
            .interact_text()
            .map_err(|e| PromptError::interaction(e.to_string()))
    }
}
