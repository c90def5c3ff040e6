//! Reader for the `.properties` key/value format used by configuration files.
//!
//! The reader follows the conventions of the format as edited by users of
//! the plugin: `#` and `!` comments, `=`, `:` or whitespace separators,
//! backslash line continuations and `\uXXXX` escapes. Files are stored as
//! ISO-8859-1, so characters outside Latin-1 need the escape form. Parsing
//! is lenient and never fails; malformed escapes are kept verbatim.

use std::collections::BTreeMap;

use figment::providers::Serialized;

/// Key/value pairs read from a single `.properties` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parse `.properties` text. Later duplicates of a key override earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use cucumber_plus::Properties;
    ///
    /// let props = Properties::parse("# header\ntopLeft = Page now()\ndateFormat: dd/MM/yyyy\n");
    /// assert_eq!(props.get("topLeft"), Some("Page now()"));
    /// assert_eq!(props.get("dateFormat"), Some("dd/MM/yyyy"));
    /// assert_eq!(props.get("bottomLeft"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries = logical_lines(text)
            .into_iter()
            .map(|line| split_entry(&line))
            .collect();
        Self { entries }
    }

    /// Parse the raw bytes of a `.properties` file, one byte per character.
    ///
    /// # Examples
    ///
    /// ```
    /// use cucumber_plus::Properties;
    ///
    /// let props = Properties::from_latin1(b"topLeft=Caf\xE9\ntopRight=\\u20ac");
    /// assert_eq!(props.get("topLeft"), Some("Café"));
    /// assert_eq!(props.get("topRight"), Some("€"));
    /// ```
    #[must_use]
    pub fn from_latin1(bytes: &[u8]) -> Self {
        let text: String = bytes.iter().copied().map(char::from).collect();
        Self::parse(&text)
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of keys defined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wrap the entries as a figment provider so they can take part in a
    /// layered merge.
    pub(crate) fn provider(&self) -> Serialized<&BTreeMap<String, String>> {
        Serialized::defaults(&self.entries)
    }
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() & 1 == 1
}

/// Split on `\r\n`, `\n` or a lone `\r`.
fn natural_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.strip_prefix(['\r', '\n']))
            .unwrap_or(tail);
        Some(line)
    })
}

/// Join natural lines into logical lines, dropping comments and blanks.
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;
    for natural in natural_lines(text) {
        let trimmed = natural.trim_start_matches(is_blank);
        let mut logical = match current.take() {
            Some(pending) => pending,
            None => {
                if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
                    continue;
                }
                String::new()
            }
        };
        if ends_with_odd_backslashes(trimmed) {
            logical.push_str(trimmed.strip_suffix('\\').unwrap_or(trimmed));
            current = Some(logical);
        } else {
            logical.push_str(trimmed);
            lines.push(logical);
        }
    }
    if let Some(pending) = current {
        lines.push(pending);
    }
    lines
}

/// Split a logical line into an unescaped key and value.
fn split_entry(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut separator = None;
    let mut escaped = false;
    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = idx;
            separator = Some(c);
            break;
        }
    }

    let (raw_key, rest) = line.split_at(key_end);
    let mut value = match separator {
        Some(c) => rest.strip_prefix(c).unwrap_or(rest),
        None => rest,
    };
    value = value.trim_start_matches(is_blank);
    if separator.is_some_and(is_blank)
        && let Some(stripped) = value.strip_prefix(['=', ':'])
    {
        value = stripped.trim_start_matches(is_blank);
    }
    (unescape(raw_key), unescape(value))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
