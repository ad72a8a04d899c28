//! Template-driven event formatter.

use std::fmt;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::config::LogLevel;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Timestamp,
    Name,
    Level,
    Message,
}

/// Formats each event by filling the placeholders of a line template.
///
/// Recognized placeholders are `%(asctime)s`, `%(name)s`, `%(levelname)s`
/// and `%(message)s`. Anything else, including unknown `%(...)s`
/// placeholders, is written verbatim.
#[derive(Clone, Debug)]
pub struct TemplateFormat {
    segments: Vec<Segment>,
}

impl TemplateFormat {
    /// Compiles a line template.
    #[must_use]
    pub fn new(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(pos) = rest.find('%') {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if let Some(after) = tail.strip_prefix("%%") {
                literal.push('%');
                rest = after;
                continue;
            }

            match Self::placeholder(tail) {
                Some((segment, len)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                    rest = &tail[len..];
                }
                None => {
                    literal.push('%');
                    rest = &tail[1..];
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Recognizes a placeholder at the start of `input`, returning it and its length.
    fn placeholder(input: &str) -> Option<(Segment, usize)> {
        let inner = input.strip_prefix("%(")?;
        let close = inner.find(")s")?;
        let segment = match &inner[..close] {
            "asctime" => Segment::Timestamp,
            "name" => Segment::Name,
            "levelname" => Segment::Level,
            "message" => Segment::Message,
            _ => return None,
        };
        Some((segment, close + 4))
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => writer.write_str(text)?,
                Segment::Timestamp => write!(
                    writer,
                    "{}",
                    Local::now().format("%Y-%m-%d %H:%M:%S,%3f")
                )?,
                Segment::Name => writer.write_str(metadata.target())?,
                Segment::Level => writer.write_str(LogLevel::from(*metadata.level()).as_str())?,
                Segment::Message => ctx.field_format().format_fields(writer.by_ref(), event)?,
            }
        }
        writeln!(writer)
    }
}
