//! Pure functions producing Discord markdown.

use crate::constants::DEFAULT_CODE_BLOCK_LANGUAGE;
use crate::error::{Error, Result};

/// Heading sizes supported by Discord markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn prefix(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "#",
            HeadingLevel::H2 => "##",
            HeadingLevel::H3 => "###",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            _ => Err(Error::invalid_argument(
                "level",
                format!("{} (expected 1 to 3)", level),
            )),
        }
    }
}

/// Bullet used by [`unordered_list`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMarker {
    #[default]
    Dash,
    Asterisk,
}

impl ListMarker {
    fn as_str(self) -> &'static str {
        match self {
            ListMarker::Dash => "-",
            ListMarker::Asterisk => "*",
        }
    }
}

/// Surround text with the same marker on both sides
pub fn wrap(text: &str, marker: &str) -> String {
    format!("{marker}{text}{marker}")
}

/// Inverse of [`wrap`]; `None` when the text is not wrapped by `marker`
pub fn strip_wrapping<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    if text.len() < marker.len() * 2 {
        return None;
    }
    text.strip_prefix(marker)?.strip_suffix(marker)
}

pub fn heading(text: &str, level: HeadingLevel) -> String {
    format!("{} {}", level.prefix(), text)
}

pub fn h1(text: &str) -> String {
    heading(text, HeadingLevel::H1)
}

pub fn h2(text: &str) -> String {
    heading(text, HeadingLevel::H2)
}

pub fn h3(text: &str) -> String {
    heading(text, HeadingLevel::H3)
}

pub fn spoiler(text: &str) -> String {
    wrap(text, "||")
}

/// Italic using underscores (`_text_`)
pub fn italic(text: &str) -> String {
    wrap(text, "_")
}

/// Italic using asterisks (`*text*`)
pub fn italic_asterisks(text: &str) -> String {
    wrap(text, "*")
}

pub fn bold(text: &str) -> String {
    wrap(text, "**")
}

pub fn bold_italic(text: &str) -> String {
    wrap(text, "***")
}

pub fn underline(text: &str) -> String {
    wrap(text, "__")
}

pub fn underline_bold(text: &str) -> String {
    bold(&underline(text))
}

pub fn underline_italic(text: &str) -> String {
    italic_asterisks(&underline(text))
}

pub fn strikethrough(text: &str) -> String {
    wrap(text, "~~")
}

pub fn inline_code(text: &str) -> String {
    wrap(text, "`")
}

/// Quote a single line
pub fn quote(text: &str) -> String {
    format!("> {}", text)
}

/// Quote everything that follows, including later lines
pub fn block_quote(text: &str) -> String {
    format!(">>> {}", text)
}

/// Wrap a link in angle brackets so Discord does not embed it
pub fn hide_embed(url: &str) -> String {
    format!("<{}>", url)
}

/// Masked link, with an optional hover title
pub fn hyperlink(text: &str, url: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("[{}]({} \"{}\")", text, url, title),
        None => format!("[{}]({})", text, url),
    }
}

/// Fenced code block, tagged `md` when no language is given
pub fn code_block(text: &str, language: Option<&str>) -> String {
    let language = language.unwrap_or(DEFAULT_CODE_BLOCK_LANGUAGE);
    format!("```{}\n{}\n```", language, text)
}

/// Bulleted list, one item per line; empty items are skipped
pub fn unordered_list<I, S>(items: I, marker: ListMarker) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_list(items, marker.as_str())
}

/// Numbered list; every line uses `1.` and Discord renumbers on display
pub fn ordered_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_list(items, "1.")
}

fn build_list<I, S>(items: I, prefix: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter(|item| !item.as_ref().is_empty())
        .map(|item| format!("{} {}\n", prefix, item.as_ref()))
        .collect()
}
