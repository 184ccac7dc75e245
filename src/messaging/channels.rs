// Communication channels lock-free

use crate::messaging::notification::HistoryNotification;
use ringbuf::{HeapRb, traits::Split};

pub type NotificationProducer = ringbuf::HeapProd<HistoryNotification>;
pub type NotificationConsumer = ringbuf::HeapCons<HistoryNotification>;

pub fn create_notification_channel(
    capacity: usize,
) -> (NotificationProducer, NotificationConsumer) {
    let rb = HeapRb::<HistoryNotification>::new(capacity.max(1));
    rb.split()
}
