/// In-memory navigation history with a cursor, like a browser tab's.
///
/// Pushing truncates any forward entries. The history is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn push(&mut self, entry: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor += 1;
    }

    pub fn replace(&mut self, entry: T) {
        self.entries[self.cursor] = entry;
    }

    /// Step back one entry. Returns `None` at the start.
    pub fn back(&mut self) -> Option<&T> {
        self.go(-1)
    }

    /// Step forward one entry. Returns `None` at the end.
    pub fn forward(&mut self) -> Option<&T> {
        self.go(1)
    }

    /// Move the cursor by `delta`. Out-of-range moves leave it in place.
    pub fn go(&mut self, delta: isize) -> Option<&T> {
        let target = self.cursor.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = target;
        Some(&self.entries[target])
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
