//! Line templates with best-effort field substitution
//!
//! A template is plain text with `{field}` placeholders. Known fields are
//! `{timestamp}`, `{prefix}`, `{level}`, `{sequence}`, and `{message}` (the
//! payload slot, filled in a second pass by the renderer). Anything
//! malformed — unknown names, unterminated braces — is kept literally in the
//! output rather than rejected, so a bad template garbles a line instead of
//! silencing it.

use super::message::Message;
use super::timestamp::TimestampFormat;

/// The stock template: time, prefix, and level separated by `❱❱` markers,
/// then a tab and the payload.
pub const DEFAULT_TEMPLATE: &str =
    "{timestamp} \u{2771}\u{2771} {prefix} \u{2771}\u{2771} {level} \u{2771}\u{2771}\t{message}";

/// Placeholder left in the expanded line for the payload text.
pub(crate) const PAYLOAD_PLACEHOLDER: &str = "{message}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Timestamp,
    Prefix,
    Level,
    Sequence,
    Message,
}

/// A parsed line template.
///
/// Parsing never fails; see the module docs for the degradation rules.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
    timestamp_format: TimestampFormat,
}

impl Template {
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];
            match after_open.find('}') {
                Some(close) => {
                    let name = &after_open[..close];
                    match Self::field_for(name) {
                        Some(field) => {
                            if !literal.is_empty() {
                                segments.push(Segment::Literal(std::mem::take(&mut literal)));
                            }
                            segments.push(Segment::Field(field));
                        }
                        // Unknown placeholder: keep it verbatim
                        None => {
                            literal.push('{');
                            literal.push_str(name);
                            literal.push('}');
                        }
                    }
                    rest = &after_open[close + 1..];
                }
                // Unterminated brace: the remainder is literal text
                None => {
                    literal.push('{');
                    rest = after_open;
                    break;
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            segments,
            timestamp_format: TimestampFormat::default(),
        }
    }

    fn field_for(name: &str) -> Option<Field> {
        match name {
            "timestamp" => Some(Field::Timestamp),
            "prefix" => Some(Field::Prefix),
            "level" => Some(Field::Level),
            "sequence" => Some(Field::Sequence),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// First substitution pass: expand every named field of the message,
    /// leaving the payload placeholder in place for the renderer's second
    /// pass.
    pub(crate) fn expand(&self, message: &Message) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Field(Field::Timestamp) => {
                    line.push_str(&self.timestamp_format.format(&message.timestamp));
                }
                Segment::Field(Field::Prefix) => line.push_str(&message.prefix),
                Segment::Field(Field::Level) => line.push_str(&message.level.name),
                Segment::Field(Field::Sequence) => {
                    line.push_str(&message.sequence.to_string());
                }
                Segment::Field(Field::Message) => line.push_str(PAYLOAD_PLACEHOLDER),
            }
        }
        line
    }

    /// Whether the template has a payload slot. A template without one drops
    /// the message text entirely, which is legal but usually a mistake.
    pub fn has_payload_slot(&self) -> bool {
        self.segments.contains(&Segment::Field(Field::Message))
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
