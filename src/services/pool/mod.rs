// Recycle pool
// Free list of display elements, one pool per element type

/// An element that can be detached from display and handed out again.
pub trait Reusable: Default {
    /// Called when the element is released; it stops being displayed but
    /// keeps its allocation.
    fn detach(&mut self);

    /// Called when a released element is acquired again.
    fn prepare_for_reuse(&mut self);
}

/// Take-one, return-many cache of reusable elements.
///
/// Unaware of events or layout: it only trades elements of type `T`.
#[derive(Debug)]
pub struct RecyclePool<T: Reusable> {
    storage: Vec<T>,
}

impl<T: Reusable> Default for RecyclePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Reusable> RecyclePool<T> {
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Most recently released element, or a fresh one when the pool is empty.
    pub fn acquire(&mut self) -> T {
        match self.storage.pop() {
            Some(mut element) => {
                element.prepare_for_reuse();
                element
            }
            None => T::default(),
        }
    }

    pub fn release(&mut self, elements: impl IntoIterator<Item = T>) {
        for mut element in elements {
            element.detach();
            self.storage.push(element);
        }
    }

    /// Number of released elements waiting to be reused.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}
