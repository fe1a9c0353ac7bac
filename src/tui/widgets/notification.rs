//! Toast notification widget
//!
//! Short-lived feedback after store commands, drawn over the top-right
//! corner of the dashboard and dropped again on a later tick.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// What a toast reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Neutral feedback
    Info,
    /// A store command went through
    Success,
    /// A command failed
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Done",
            Self::Error => "Error",
        }
    }
}

/// A single toast with its expiry clock
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Override the display duration
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Renders one toast as a small bordered overlay
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.kind;

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(kind.color()))
            .title(format!(" {} ", kind.label()))
            .title_style(
                Style::default()
                    .fg(kind.color())
                    .add_modifier(Modifier::BOLD),
            );

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .block(block)
            .render(area, buf);
    }
}

/// Pending toasts, shown oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop every toast whose display time is up
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The toast currently on screen
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Logged Grocery run ($54.20)");
        assert_eq!(n.message, "Logged Grocery run ($54.20)");
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(!n.is_expired());
    }

    #[test]
    fn test_kind_styling() {
        assert_eq!(NotificationKind::Success.color(), Color::Green);
        assert_eq!(NotificationKind::Success.label(), "Done");
        assert_eq!(NotificationKind::Error.color(), Color::Red);
    }

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));
        assert_eq!(queue.current().unwrap().message, "First");
    }

    #[test]
    fn test_expired_toasts_are_dropped() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::success("Stays"));
        queue.push(Notification::error("Goes").with_ttl(Duration::ZERO));

        queue.remove_expired();
        assert_eq!(queue.current().unwrap().message, "Stays");
        queue.remove_expired();
        assert!(!queue.is_empty());
    }
}
