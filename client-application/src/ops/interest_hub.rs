use tokio::sync::broadcast;

use client_domain::ports::InterestPublisher;
use client_domain::InterestChange;

const CHANNEL_BUFFER: usize = 64;

pub struct InterestHub {
    tx: broadcast::Sender<InterestChange>,
}

impl InterestHub {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_BUFFER);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InterestChange> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for InterestHub {
    fn default() -> Self {
        Self::new()
    }
}

impl InterestPublisher for InterestHub {
    fn publish(&self, change: InterestChange) {
        let _ = self.tx.send(change);
    }
}
