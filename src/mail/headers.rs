//! Header-line building and body word-wrap for the sendmail path

use crate::domain::MailMessage;

/// Build the extra header lines for a message.
///
/// One line is emitted per non-empty address field; absent fields produce no
/// line at all. Emission order is fixed (From, Cc, Bcc, Reply-To,
/// Return-Path, then the content headers) so output is deterministic.
pub fn header_lines(message: &MailMessage, mailer_ident: &str) -> Vec<String> {
    let mut headers = Vec::new();

    if let Some(from) = non_empty(message.from.as_deref()) {
        headers.push(format!("From: {}", from));
    }
    if let Some(cc) = message.cc.as_ref().and_then(|r| r.join()) {
        headers.push(format!("Cc: {}", cc));
    }
    if let Some(bcc) = message.bcc.as_ref().and_then(|r| r.join()) {
        headers.push(format!("Bcc: {}", bcc));
    }
    if let Some(reply_to) = non_empty(message.reply_to.as_deref()) {
        headers.push(format!("Reply-To: {}", reply_to));
    }
    if let Some(return_path) = non_empty(message.return_path.as_deref()) {
        headers.push(format!("Return-Path: {}", return_path));
    }

    headers.push(format!(
        "Content-Type: {}; charset={}",
        message.content_type.mime(),
        message.charset
    ));
    headers.push("MIME-Version: 1.0".to_string());
    headers.push(format!("X-Mailer: {}", mailer_ident));

    headers
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Word-wrap body text to the given column.
///
/// Existing line breaks are preserved. Words are never split, so a single
/// word longer than `width` stays on its own over-long line.
pub fn wrap_body(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    text.lines()
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut out = String::new();
    let mut current_len = 0usize;

    for word in line.split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        if current_len == 0 {
            out.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            out.push(' ');
            out.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push('\n');
            out.push_str(word);
            current_len = word_len;
        }
    }

    out
}
