//! Interactive prompts for arguments left off the command line.

use crate::extract::Language;
use anyhow::{bail, Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Prompts only run on a terminal and when `--no-input` is not given.
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    pub fn new(no_input: bool) -> Self {
        Self {
            interactive: !no_input && io::stdin().is_terminal() && io::stderr().is_terminal(),
        }
    }

    pub fn project_dir(&self) -> Result<PathBuf> {
        if !self.interactive {
            bail!("missing project directory (pass it as the first argument)");
        }
        let dir = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Project directory")
            .default(".".to_string())
            .interact_text()
            .context("failed to read project directory")?;
        Ok(PathBuf::from(dir.trim()))
    }

    pub fn language(&self) -> Result<String> {
        if !self.interactive {
            bail!(
                "missing language (pass one of: {})",
                language_ids().join(", ")
            );
        }
        let ids = language_ids();
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Language")
            .items(&ids[..])
            .default(0)
            .interact()
            .context("failed to read language")?;
        Ok(ids[choice].to_string())
    }
}

fn language_ids() -> Vec<&'static str> {
    Language::ALL.iter().map(|lang| lang.id()).collect()
}
