use crate::entities::InterestChange;

// Fire-and-forget; correctness never depends on delivery.
pub trait InterestPublisher: Send + Sync {
    fn publish(&self, change: InterestChange);
}
