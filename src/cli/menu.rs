// src/cli/menu.rs
use crate::cli::prompts::{parse_bool, parse_int, IntBounds};
use crate::cli::terminal::{Result, ShellError, Terminal};
use crate::core::{Config, Session};
use crate::export::{ExportOutcome, Exporter};
use crate::generators::PasswordGenerator;
use crate::models::{
    GenerationConfig, MAX_BATCH_COUNT, MAX_PASSWORD_LENGTH, MIN_BATCH_COUNT, MIN_PASSWORD_LENGTH,
};

pub const BANNER: &str = "=== Password Tool: generate, validate, save ===";
pub const GOODBYE: &str = "Exiting. Bye!";

const MENU: [&str; 5] = [
    "1. Generate a single password",
    "2. Generate multiple passwords",
    "3. Validate an existing password",
    "4. Save last generated passwords to TXT",
    "5. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    GenerateSingle,
    GenerateMultiple,
    Validate,
    SaveLast,
    Exit,
}

impl MenuAction {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuAction::GenerateSingle),
            "2" => Some(MenuAction::GenerateMultiple),
            "3" => Some(MenuAction::Validate),
            "4" => Some(MenuAction::SaveLast),
            "5" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// The interactive menu loop. Owns the session for the lifetime of the run.
pub struct Shell<T: Terminal> {
    terminal: T,
    session: Session,
    generator: PasswordGenerator,
    exporter: Exporter,
    length_bounds: IntBounds,
    count_bounds: IntBounds,
}

impl<T: Terminal> Shell<T> {
    pub fn new(terminal: T, config: &Config) -> Self {
        Self {
            terminal,
            session: Session::new(),
            generator: PasswordGenerator::new(),
            exporter: Exporter::new(config.export_directory.clone()),
            length_bounds: IntBounds::new(
                config.default_password_length,
                MIN_PASSWORD_LENGTH,
                MAX_PASSWORD_LENGTH,
            ),
            count_bounds: IntBounds::new(config.default_batch_count, MIN_BATCH_COUNT, MAX_BATCH_COUNT),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.run_loop() {
            Err(ShellError::EndOfInput) => {
                log::debug!("Input closed; leaving the menu");
                self.terminal.say("");
                self.terminal.say(GOODBYE);
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> Result<()> {
        loop {
            self.show_menu();

            let choice = self.terminal.read_line("Enter your choice (1-5): ")?;
            match MenuAction::from_choice(&choice) {
                Some(MenuAction::Exit) => {
                    self.terminal.say(GOODBYE);
                    return Ok(());
                }
                Some(action) => self.dispatch(action)?,
                None => self.terminal.error("Invalid choice."),
            }

            if !self.prompt_bool("Do you want to perform another action? (Y/n): ", true)? {
                self.terminal.say(GOODBYE);
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) {
        self.terminal.say("");
        self.terminal.say(BANNER);
        self.terminal.say("");
        for line in MENU {
            self.terminal.say(line);
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        log::debug!("Menu action selected: {:?}", action);
        match action {
            MenuAction::GenerateSingle => self.generate_single(),
            MenuAction::GenerateMultiple => self.generate_multiple(),
            MenuAction::Validate => self.validate_password(),
            MenuAction::SaveLast => {
                if self.session.is_empty() {
                    self.terminal.say("No generated passwords in this session to save.");
                } else {
                    self.save_session();
                }
                Ok(())
            }
            MenuAction::Exit => Ok(()),
        }
    }

    fn generate_single(&mut self) -> Result<()> {
        let config = self.prompt_generation_config()?;

        let pwd = match self.generator.generate(&config) {
            Ok(pwd) => pwd,
            Err(e) => {
                self.terminal.error(&format!("❌ {}", e));
                return Ok(());
            }
        };

        let strength = self.generator.classify(pwd.as_str());
        self.terminal.say("");
        self.terminal
            .say(&format!("Generated Password: {}  |  Strength: {}", pwd, strength));
        self.session.replace(vec![pwd]);

        if self.prompt_bool("Save this password to a TXT file? (y/N): ", false)? {
            self.save_session();
        }
        Ok(())
    }

    fn generate_multiple(&mut self) -> Result<()> {
        let count = self.prompt_int("How many passwords to generate? ", self.count_bounds)?;
        let config = self.prompt_generation_config()?;

        let passwords = match self.generator.generate_batch(&config, count) {
            Ok(passwords) => passwords,
            Err(e) => {
                self.terminal.error(&format!("❌ {}", e));
                return Ok(());
            }
        };

        for pwd in &passwords {
            let strength = self.generator.classify(pwd.as_str());
            self.terminal.say("");
            self.terminal
                .say(&format!("Generated Password: {}  |  Strength: {}", pwd, strength));
        }
        self.session.replace(passwords);

        if self.prompt_bool("Save these passwords to a TXT file? (y/N): ", false)? {
            self.save_session();
        }
        Ok(())
    }

    fn validate_password(&mut self) -> Result<()> {
        self.terminal.say("");
        let pwd = self.terminal.read_line("Enter the password to validate: ")?;
        let strength = self.generator.classify(&pwd);
        self.terminal.say(&format!("Password Strength: {}", strength));
        Ok(())
    }

    fn prompt_generation_config(&mut self) -> Result<GenerationConfig> {
        let length = self.prompt_int("Enter password length ", self.length_bounds)?;
        let include_lowercase = self.prompt_bool("Include lowercase letters? (Y/n): ", true)?;
        let include_uppercase = self.prompt_bool("Include uppercase letters? (Y/n): ", true)?;
        let include_digits = self.prompt_bool("Include digits? (Y/n): ", true)?;
        let include_symbols = self.prompt_bool("Include symbols? (Y/n): ", true)?;

        Ok(GenerationConfig {
            length,
            include_lowercase,
            include_uppercase,
            include_digits,
            include_symbols,
        })
    }

    fn save_session(&mut self) {
        let outcome = self.exporter.export(self.session.passwords(), None);
        match outcome {
            Ok(ExportOutcome::Saved { path, .. }) => {
                self.terminal.say("");
                self.terminal
                    .say(&format!("✅ Passwords saved to {}", path.display()));
            }
            Ok(ExportOutcome::NothingToSave) => self.terminal.say("No passwords to save."),
            Err(e) => self.terminal.error(&format!("Error saving file: {}", e)),
        }
    }

    // `label` gets the default appended, e.g. "Enter password length (default 12): ".
    fn prompt_int(&mut self, label: &str, bounds: IntBounds) -> Result<usize> {
        let prompt = format!("{}(default {}): ", label, bounds.default);
        let answer = self.terminal.read_line(&prompt)?;
        let parsed = parse_int(&answer, bounds);
        for warning in &parsed.warnings {
            log::warn!("Numeric input {:?} adjusted: {}", answer.trim(), warning);
            self.terminal.warn(&warning.to_string());
        }
        Ok(parsed.value)
    }

    fn prompt_bool(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = self.terminal.read_line(prompt)?;
        Ok(parse_bool(&answer, default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_map_to_actions() {
        assert_eq!(MenuAction::from_choice("1"), Some(MenuAction::GenerateSingle));
        assert_eq!(MenuAction::from_choice(" 2 "), Some(MenuAction::GenerateMultiple));
        assert_eq!(MenuAction::from_choice("3"), Some(MenuAction::Validate));
        assert_eq!(MenuAction::from_choice("4"), Some(MenuAction::SaveLast));
        assert_eq!(MenuAction::from_choice("5"), Some(MenuAction::Exit));
    }

    #[test]
    fn unknown_choices_are_rejected() {
        for choice in ["", "0", "6", "one", "1 2", "exit"] {
            assert_eq!(MenuAction::from_choice(choice), None, "{choice:?}");
        }
    }
}
