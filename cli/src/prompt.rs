//! Interactive console input.

use std::io::{self, BufRead, Write};

/// Values collected from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptAnswers {
    pub url: String,
    pub filename: Option<String>,
}

/// Which values to read from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptPlan {
    pub ask_url: bool,
    pub ask_filename: bool,
}

impl PromptPlan {
    /// A missing URL is always asked for. The file name is asked for only
    /// when no output name or derivation was requested, and either the URL
    /// was missing too or `--interactive` was given.
    pub fn new(url_given: bool, output_given: bool, name_from_url: bool, interactive: bool) -> Self {
        Self {
            ask_url: !url_given,
            ask_filename: !output_given && !name_from_url && (!url_given || interactive),
        }
    }

    pub fn needs_prompt(&self) -> bool {
        self.ask_url || self.ask_filename
    }
}

/// Print `label` and read one trimmed line. EOF reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    write!(output, "=> {label}: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for whatever the command line did not provide.
///
/// The URL is asked for when `url` is `None`; the file name when
/// `ask_filename` is set. An empty file name answer becomes `None`.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    url: Option<&str>,
    ask_filename: bool,
) -> io::Result<PromptAnswers> {
    let url = match url {
        Some(u) => u.to_string(),
        None => prompt_line(input, output, "Enter the URL to encode in QR")?,
    };
    let filename = if ask_filename {
        Some(prompt_line(input, output, "Enter output QR filename (without extension)")?)
            .filter(|f| !f.is_empty())
    } else {
        None
    };
    Ok(PromptAnswers { url, filename })
}
