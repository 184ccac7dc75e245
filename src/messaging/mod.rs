// Messaging - Lock-free notifications from the command layer to UI consumers

pub mod channels;
pub mod notification;

pub use channels::{NotificationConsumer, NotificationProducer, create_notification_channel};
pub use notification::{HistoryEventKind, HistoryNotification};
