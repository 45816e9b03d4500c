//! Latest-value observable built on [`tokio::sync::watch`].

use tokio::sync::watch;

/// Single-writer cell that fans its latest value out to any number of
/// subscribers.
///
/// A new subscriber can read the current value right away through
/// [`watch::Receiver::borrow`] and is woken for every later publish.
/// Publishing never blocks and works with zero subscribers; a slow
/// subscriber skips intermediate values but never sees them out of order.
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Clone of the latest value
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Replace the value and notify subscribers
    pub fn publish(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Modify the value in place and notify subscribers
    pub fn update(&self, modify: impl FnOnce(&mut T)) {
        self.sender.send_modify(modify);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_without_subscribers() {
        let observable = Observable::new(1);
        observable.publish(2);
        assert_eq!(observable.get(), 2);
        assert_eq!(observable.subscriber_count(), 0);
    }

    #[test]
    fn test_new_subscriber_sees_latest_value() {
        let observable = Observable::new("a".to_string());
        observable.publish("b".to_string());

        let receiver = observable.subscribe();
        assert_eq!(*receiver.borrow(), "b");
    }

    #[tokio::test]
    async fn test_subscriber_is_notified() {
        let observable = Observable::new(0);
        let mut receiver = observable.subscribe();

        observable.update(|v| *v += 5);

        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), 5);
    }

    #[tokio::test]
    async fn test_many_subscribers_see_same_value() {
        let observable = Observable::new(0);
        let mut first = observable.subscribe();
        let mut second = observable.subscribe();

        observable.publish(7);

        first.changed().await.unwrap();
        second.changed().await.unwrap();
        assert_eq!(*first.borrow(), 7);
        assert_eq!(*second.borrow(), 7);
    }
}
