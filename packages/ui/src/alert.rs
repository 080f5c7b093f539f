use std::collections::VecDeque;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl AlertLevel {
    pub fn title(&self) -> &'static str {
        match self {
            AlertLevel::Info => "Info",
            AlertLevel::Success => "Success",
            AlertLevel::Warning => "Warning",
            AlertLevel::Error => "Error",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AlertLevel::Info => "alert-info",
            AlertLevel::Success => "alert-success",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

/// Blocking alerts, shown one at a time in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertQueue {
    entries: VecDeque<Alert>,
}

impl AlertQueue {
    pub fn push(&mut self, level: AlertLevel, title: &str, message: &str) {
        self.entries.push_back(Alert {
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn current(&self) -> Option<&Alert> {
        self.entries.front()
    }

    /// Close the alert on screen and reveal the next one.
    pub fn dismiss(&mut self) -> Option<Alert> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn use_alerts() -> Signal<AlertQueue> {
    use_context::<Signal<AlertQueue>>()
}

pub fn raise_alert(alerts: &mut Signal<AlertQueue>, level: AlertLevel, message: &str) {
    match level {
        AlertLevel::Error => tracing::error!("{message}"),
        AlertLevel::Warning => tracing::warn!("{message}"),
        _ => tracing::info!("{message}"),
    }
    alerts.write().push(level, level.title(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_are_fifo() {
        let mut queue = AlertQueue::default();
        queue.push(AlertLevel::Error, "Error", "Failed to delete book");
        queue.push(AlertLevel::Success, "Success", "Saved");
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "Failed to delete book");
        queue.dismiss();
        assert_eq!(queue.current().unwrap().level, AlertLevel::Success);
        queue.dismiss();
        assert!(queue.is_empty());
        assert_eq!(queue.dismiss(), None);
    }
}
