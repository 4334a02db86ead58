use regex::Regex;
use std::sync::OnceLock;

/// Placeholder text for absent values. Missing fields are stringified once at
/// ingestion so the scorer and the output builder only ever see text.
pub const MISSING_TEXT: &str = "nan";

static ATTENTION_RE: OnceLock<Regex> = OnceLock::new();

fn attention_re() -> &'static Regex {
    // "Att..." through end of line covers Attn:, Attention:, ATT <name> etc.
    ATTENTION_RE.get_or_init(|| Regex::new(r"(?i)att.*$").expect("valid attention regex"))
}

/// Coerce an optional field to text.
pub fn text_or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => MISSING_TEXT.to_string(),
    }
}

/// Strip an "Attention:"-style suffix from an address line.
pub fn strip_attention(line: &str) -> String {
    attention_re().replace(line, "").into_owned()
}

/// Build the comparable address for an acquisition record: strip attention
/// suffixes from each configured line, drop lines that are missing or end up
/// empty, and join the rest with a newline.
pub fn full_address(street: Option<&str>, line2: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(2);
    for line in [street, line2].into_iter().flatten() {
        let cleaned = strip_attention(line);
        if !cleaned.is_empty() {
            parts.push(cleaned);
        }
    }
    parts.join("\n")
}

/// Title-case a string the way the dataload expects: the first alphabetic
/// character of every word is upper-cased, the rest lower-cased, with word
/// boundaries at any non-alphabetic character.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
