use crate::element::Drawable;

/// Ordered log of committed drawables plus a redo stack.
///
/// Undo and redo move whole drawables between the two stacks; the stacks are
/// disjoint and every drawable belongs to exactly one. This is linear undo:
/// committing anything new invalidates the redo stack.
#[derive(Debug, Default)]
pub struct CommandHistory {
    committed: Vec<Drawable>,
    redo_stack: Vec<Drawable>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drawable to the committed log and invalidate redo state.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.redo_stack.clear();
    }

    /// Move the most recent drawable onto the redo stack. Returns `false`
    /// (a no-op, not an error) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back onto the committed log.
    /// Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empty both stacks. Redo entries are dropped too; a stale redo after
    /// clearing would resurrect wiped drawables.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_stack.clear();
    }

    /// The drawables to render, in insertion order. Later entries paint on
    /// top of earlier ones.
    pub fn snapshot(&self) -> &[Drawable] {
        &self.committed
    }

    /// Mutable access to the in-progress drawable (the one most recently
    /// committed), used to grow a stroke or drag a sticker while the
    /// pointer is held.
    pub fn last_mut(&mut self) -> Option<&mut Drawable> {
        self.committed.last_mut()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
