// Text card for a resolved caller
use crate::domain::model::CallerRecord;
use crate::presentation::theme::Theme;
use std::fmt::Write;

pub fn format_record(record: &CallerRecord, theme: &Theme, enable_emoji: bool) -> String {
    let mut output = String::new();

    let title = if record.is_degraded() {
        (theme.failed)(record.display_name())
    } else {
        (theme.name)(record.display_name())
    };
    let source = if record.cached {
        if enable_emoji {
            " 💾 [cached]"
        } else {
            " [cached]"
        }
    } else {
        ""
    };
    writeln!(output, "{}{}", title, source).ok();

    if record.name.is_some() {
        writeln!(output, "  {}", (theme.number)(&record.phone_number)).ok();
    }
    if let Some(location) = &record.location {
        writeln!(output, "  {}", (theme.location)(location)).ok();
    }

    if let Some(spam) = record.spam_likelihood {
        let label = format!("Spam likelihood: {}%", spam);
        let styled = match spam {
            0..=20 => (theme.low_risk)(&label),
            21..=60 => (theme.medium_risk)(&label),
            _ => (theme.high_risk)(&label),
        };
        writeln!(output, "  {}", styled).ok();
    }

    if let Some(tags) = record.tags.as_ref().filter(|t| !t.is_empty()) {
        let joined = tags.join(" · ");
        writeln!(output, "  {}", (theme.tag)(&joined)).ok();
    }

    if record.is_likely_spam() {
        let warning = if enable_emoji {
            "⚠️  Warning: Potential Spam Call"
        } else {
            "Warning: Potential Spam Call"
        };
        writeln!(output, "  {}", (theme.high_risk)(warning)).ok();
    }

    writeln!(output, "  {}", (theme.line)(&"─".repeat(32))).ok();
    output
}
