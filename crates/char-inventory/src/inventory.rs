//! Character set reduction and output.

use std::{collections::BTreeSet, fmt, fs, path::Path};

use crate::Error;

/// Set of distinct characters ordered by their code points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharInventory {
    chars: BTreeSet<char>,
}

impl CharInventory {
    /// Creates an inventory with all distinct chars from `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Adds chars from `text` to this inventory, returning the number of previously absent chars.
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let len_before = self.chars.len();
        self.chars.extend(text.chars());
        self.chars.len() - len_before
    }

    /// Returns the number of distinct chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Checks whether this inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Checks whether this inventory contains the specified char.
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Iterates over chars in the ascending code point order.
    pub fn chars(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.chars.iter().copied()
    }

    /// Returns the underlying char set.
    pub fn as_set(&self) -> &BTreeSet<char> {
        &self.chars
    }

    /// Writes this inventory as UTF-8 text to the specified file, creating or truncating it.
    /// Chars are not separated, and no trailing newline is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, self.to_string()).map_err(|err| Error::write_output(path, err))
    }
}

impl fmt::Display for CharInventory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        for &ch in &self.chars {
            formatter.write_char(ch)?;
        }
        Ok(())
    }
}

impl FromIterator<char> for CharInventory {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for CharInventory {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}
