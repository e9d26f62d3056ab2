// src/core/session.rs
use crate::models::Password;

/// The most recently generated batch of passwords. Lives for the current run only.
#[derive(Debug, Default, Clone)]
pub struct Session {
    passwords: Vec<Password>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole batch. Earlier passwords are dropped, never merged.
    pub fn replace(&mut self, passwords: Vec<Password>) {
        log::info!("Session replaced with {} password(s)", passwords.len());
        self.passwords = passwords;
    }

    pub fn passwords(&self) -> &[Password] {
        &self.passwords
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.passwords().is_empty());
    }

    #[test]
    fn replace_discards_previous_batch() {
        let mut session = Session::new();
        session.replace(vec![Password::from("one"), Password::from("two")]);
        assert_eq!(session.len(), 2);

        session.replace(vec![Password::from("three")]);
        assert_eq!(session.passwords(), &[Password::from("three")]);
    }
}
