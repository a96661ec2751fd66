//! Submission success dialog

use super::base::{render_dialog, DialogConfig};
use crate::submission::SubmissionReceipt;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Message body for a completed submission
fn success_message(receipt: &SubmissionReceipt) -> String {
    format!(
        "\"{}\" was submitted.\nReference: {}\nAt: {}",
        receipt.title,
        receipt.id,
        receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Render the success acknowledgement centered on the screen
pub fn render_success_dialog(frame: &mut Frame, receipt: &SubmissionReceipt) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to continue"),
    ];

    let message = success_message(receipt);
    render_dialog(
        frame,
        DialogConfig {
            title: "Listing submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(hint),
            max_width: 64,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_success_message_mentions_title_and_reference() {
        let receipt = SubmissionReceipt {
            id: Uuid::nil(),
            title: "Desk".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap(),
        };
        let message = success_message(&receipt);
        assert!(message.contains("\"Desk\" was submitted."));
        assert!(message.contains("00000000-0000-0000-0000-000000000000"));
        assert!(message.contains("2024-03-09 12:30:00 UTC"));
    }
}
