//! NotificationSink implementations.

use kindred_core::notification::{Notification, NotificationKind, NotificationSink};
use tokio::sync::mpsc;

/// Writes notifications to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(kind = %notification.kind, "{}", notification.message)
            }
            NotificationKind::Error => {
                tracing::warn!(kind = %notification.kind, "{}", notification.message)
            }
        }
    }
}

/// Forwards notifications to an unbounded channel for a front end to drain.
///
/// Sending never blocks; notifications are dropped once the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelNotificationSink {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotificationSink {
    pub fn new(sender: mpsc::UnboundedSender<Notification>) -> Self {
        Self { sender }
    }

    /// Creates a sink together with the receiving end of its channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn notify(&self, notification: Notification) {
        let _ = self.sender.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_delivers_in_order() {
        let (sink, mut receiver) = ChannelNotificationSink::channel();
        sink.success("Simulation started!");
        sink.error("Failed to send response");

        assert_eq!(
            receiver.try_recv().unwrap(),
            Notification::new(NotificationKind::Success, "Simulation started!")
        );
        assert_eq!(receiver.try_recv().unwrap().kind, NotificationKind::Error);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_sink_survives_dropped_receiver() {
        let (sink, receiver) = ChannelNotificationSink::channel();
        drop(receiver);
        sink.info("nobody is listening");
    }
}
