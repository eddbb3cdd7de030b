/// Handle returned by [`Published::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverId(usize);

/// A single authoritative value with read-only observers.
///
/// Observers run synchronously inside `set`, in registration order, and only
/// when the value actually changes.
pub struct Published<T> {
    value: T,
    version: u64,
    next_id: usize,
    observers: Vec<(ObserverId, Box<dyn FnMut(&T)>)>,
}

impl<T: PartialEq> Published<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Bumped on every change; lets pollers detect updates without observing.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        for (_, observer) in &mut self.observers {
            observer(&self.value);
        }
        true
    }

    pub fn observe(&mut self, observer: impl FnMut(&T) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
