//! Message rendering: template expansion plus SGR painting

use super::color::paint;
use super::message::Message;
use super::template::{Template, PAYLOAD_PLACEHOLDER};

/// Render a message into a finished, ANSI-colored line.
///
/// Two substitution passes — named fields first, then the payload text into
/// the remaining `{message}` slot — followed by a paint pass with the
/// message level's color attributes. Pure: identical inputs produce
/// byte-identical output.
#[must_use]
pub fn render(message: &Message, template: &Template) -> String {
    let line = template.expand(message);
    let line = line.replacen(PAYLOAD_PLACEHOLDER, &message.text, 1);
    paint(
        &line,
        message.level.foreground,
        message.level.foreground_hi,
        message.level.background,
        message.level.background_hi,
    )
}
