//! Pipeline configuration.

use std::path::{Path, PathBuf};

/// Chars always included into the inventory: ASCII digits, Latin letters and punctuation.
pub const BASE_ALPHABET: &str = "0123456789\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ\
    abcdefghijklmnopqrstuvwxyz\
    .,;:!?'\"+-*/=<>()[]{}@#$%^&_|\\~`";

/// Input documents read by default, in the accumulation order: the primary document and the fallback.
pub const DEFAULT_INPUTS: [&str; 2] = ["index.html", "fallback.html"];

/// Output file written by default.
pub const DEFAULT_OUTPUT: &str = "chars.txt";

/// Configuration of the inventory pipeline.
///
/// [`Default`] yields [`BASE_ALPHABET`], [`DEFAULT_INPUTS`] and [`DEFAULT_OUTPUT`], with paths
/// relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub(crate) base_alphabet: String,
    pub(crate) inputs: Vec<PathBuf>,
    pub(crate) output: PathBuf,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_alphabet: BASE_ALPHABET.to_owned(),
            inputs: DEFAULT_INPUTS.into_iter().map(PathBuf::from).collect(),
            output: DEFAULT_OUTPUT.into(),
        }
    }
}

impl InventoryConfig {
    /// Resolves the default input and output paths relative to `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let default = Self::default();
        Self {
            inputs: default.inputs.iter().map(|path| dir.join(path)).collect(),
            output: dir.join(&default.output),
            ..default
        }
    }

    /// Replaces the base alphabet.
    #[must_use]
    pub fn with_base_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.base_alphabet = alphabet.into();
        self
    }

    /// Replaces the input documents.
    #[must_use]
    pub fn with_inputs<P: Into<PathBuf>>(mut self, inputs: impl IntoIterator<Item = P>) -> Self {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Returns the base alphabet.
    pub fn base_alphabet(&self) -> &str {
        &self.base_alphabet
    }

    /// Returns input document paths in the accumulation order.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}
