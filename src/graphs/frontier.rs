use std::mem;

/// Breadth-first frontier that hands out whole layers.
///
/// The caller expands the current layer into the next one; the frontier
/// only swaps buffers and counts how many layers have been expanded.
pub struct LayeredFrontier<T> {
    frontier: Vec<T>,
    next: Vec<T>,
    depth: usize,
}

impl<T> Default for LayeredFrontier<T> {
    fn default() -> Self {
        Self {
            frontier: Vec::new(),
            next: Vec::new(),
            depth: 0,
        }
    }
}

impl<T> LayeredFrontier<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self {
            frontier: initial.into_iter().collect(),
            next: Vec::new(),
            depth: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn layer(&self) -> &[T] {
        &self.frontier
    }

    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of non-empty layers produced after the initial one.
    pub fn depth(&self) -> usize {
        self.depth.saturating_sub(1)
    }

    /// Expands the current layer and returns it.
    ///
    /// `expand` receives the current layer and an empty buffer for the next
    /// one. Returns `None` once the frontier is exhausted.
    pub fn step<F>(&mut self, expand: F) -> Option<Vec<T>>
    where
        F: FnOnce(&[T], &mut Vec<T>),
    {
        if self.frontier.is_empty() {
            return None;
        }

        let current = mem::take(&mut self.frontier);
        self.next.clear();

        expand(&current, &mut self.next);

        self.frontier = mem::take(&mut self.next);
        self.depth += 1;
        Some(current)
    }
}
