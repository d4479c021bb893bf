//! Navigation history
//!
//! The controller talks to the address bar only through the `History`
//! trait. The browser implementation lives in the frontend crate;
//! `MemoryHistory` is a self-contained stack used by tests and the CLI.

use super::error::NavigationError;
use super::location::Location;

/// Session history the view state is mirrored into
pub trait History {
    /// Current address
    fn location(&self) -> Location;

    /// Push a new entry and make it current, without reloading the page
    fn push(&mut self, location: &Location) -> Result<(), NavigationError>;
}

/// In-memory session history with back/forward support
///
/// Moving the cursor with `back`/`forward` or replacing the address with
/// `visit` models what the user does outside the page; the controller
/// learns about it only through `ViewController::on_navigation`.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    cursor: usize,
}

impl MemoryHistory {
    /// History with a single entry at `url`
    pub fn new(url: &str) -> Self {
        Self {
            entries: vec![Location::parse(url)],
            cursor: 0,
        }
    }

    /// Step back one entry. Returns the new current location, or `None`
    /// when already at the oldest entry.
    pub fn back(&mut self) -> Option<&Location> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one entry, if a forward entry exists
    pub fn forward(&mut self) -> Option<&Location> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// Simulate the user typing a URL into the address bar
    pub fn visit(&mut self, url: &str) {
        self.push_entry(Location::parse(url));
    }

    /// Number of entries in the session
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    fn push_entry(&mut self, location: Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, location: &Location) -> Result<(), NavigationError> {
        self.push_entry(location.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_navigate() {
        let mut history = MemoryHistory::new("/base/");
        history.push(&Location::parse("/base/#studies")).unwrap();
        history.push(&Location::parse("/base/#future")).unwrap();
        assert_eq!(history.len(), 3);

        assert_eq!(history.back().map(|l| l.to_string()), Some("/base/#studies".to_string()));
        assert_eq!(history.back().map(|l| l.to_string()), Some("/base/".to_string()));
        assert!(history.back().is_none());

        assert_eq!(history.forward().map(|l| l.to_string()), Some("/base/#studies".to_string()));
        assert_eq!(history.location().to_string(), "/base/#studies");
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut history = MemoryHistory::new("/");
        history.push(&Location::parse("/#studies")).unwrap();
        history.push(&Location::parse("/#future")).unwrap();
        history.back();

        history.visit("/#experience");
        assert_eq!(history.len(), 3);
        assert!(history.forward().is_none());
        assert_eq!(history.location().to_string(), "/#experience");
    }
}
