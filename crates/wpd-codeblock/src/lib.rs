//! Copy-to-clipboard text extraction for code blocks.
//!
//! Documentation code blocks get a copy button. For regular blocks the copied
//! text is the block's text content. Diff blocks (`language-diff`) show the
//! change being made, but readers want the resulting code, so removed lines
//! are dropped and the `+`/space markers are stripped before copying.
//!
//! # Example
//!
//! ```
//! use wpd_codeblock::{CopyStatus, copy_text};
//!
//! let diff = " module.exports = {\n-  entry: './a.js',\n+  entry: './b.js',\n };\n";
//! let copied = copy_text("language-diff", diff);
//!
//! assert_eq!(copied, "module.exports = {\n  entry: './b.js',\n};\n");
//! assert_eq!(CopyStatus::after_copy(&copied, true), CopyStatus::Copied);
//! ```

use std::time::Duration;

/// Class marking a diff-highlighted code element.
const DIFF_LANGUAGE_CLASS: &str = "language-diff";

/// How long the button shows a result before returning to [`CopyStatus::Copy`].
pub const RESET_AFTER: Duration = Duration::from_secs(2);

/// Check whether a code element's class list marks it as a diff.
///
/// The class attribute is split on whitespace, so `language-diff-x` or
/// `xlanguage-diff` do not match.
#[must_use]
pub fn is_diff_language(class_name: &str) -> bool {
    class_name
        .split_whitespace()
        .any(|class| class == DIFF_LANGUAGE_CLASS)
}

/// Text to place on the clipboard for a code block.
///
/// Non-diff blocks are returned unchanged. For diff blocks, deleted lines
/// (starting with `-`) are removed and the leading `+` or space marker of
/// inserted and unchanged lines is stripped. File header lines (`---`, `+++`,
/// `***`) and other lines are kept verbatim.
#[must_use]
pub fn copy_text(class_name: &str, text: &str) -> String {
    if !is_diff_language(class_name) {
        return text.to_owned();
    }
    strip_diff_markup(text)
}

/// Prefixes of unified/context diff file headers.
const HEADER_PREFIXES: [&str; 3] = ["---", "+++", "***"];

fn strip_diff_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if HEADER_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
            out.push_str(line);
            continue;
        }
        match line.as_bytes().first() {
            Some(b'-') => {}
            Some(b'+' | b' ') => out.push_str(&line[1..]),
            _ => out.push_str(line),
        }
    }
    out
}

/// A code block as rendered on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBlock {
    /// Class attribute of the inner `<code>` element (e.g. `language-js`).
    pub class_name: String,
    /// Text content of the `<code>` element.
    pub text: String,
}

impl CodeBlock {
    /// Create a code block.
    #[must_use]
    pub fn new(class_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            text: text.into(),
        }
    }

    /// Whether the block is diff-highlighted.
    #[must_use]
    pub fn is_diff(&self) -> bool {
        is_diff_language(&self.class_name)
    }

    /// See [`copy_text`].
    #[must_use]
    pub fn copy_text(&self) -> String {
        copy_text(&self.class_name, &self.text)
    }
}

/// State of the copy button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CopyStatus {
    /// Idle, ready to copy.
    #[default]
    Copy,
    /// Last copy succeeded.
    Copied,
    /// Last copy failed or there was nothing to copy.
    Error,
}

impl CopyStatus {
    /// Status after a copy attempt of `text`.
    ///
    /// Empty text is an error even if the clipboard write reported success.
    #[must_use]
    pub fn after_copy(text: &str, succeeded: bool) -> Self {
        if !text.is_empty() && succeeded {
            Self::Copied
        } else {
            Self::Error
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Copy => "Copy",
            Self::Copied => "Copied!",
            Self::Error => "Error",
        }
    }

    /// CSS modifier class on the button.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Copied => "copied",
            Self::Error => "error",
        }
    }
}
