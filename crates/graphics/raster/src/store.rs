use crate::{draw_line, Algorithm, LineSegment, Surface};

/// An append-only record of the lines drawn during a session.
///
/// Lines are kept in the order they were added. The store can only be emptied as
/// a whole.
#[derive(Clone, Debug, Default)]
pub struct LineStore {
    lines: Vec<LineSegment>,
}

impl LineStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, segment: LineSegment) {
        self.lines.push(segment);
    }

    /// Forget all stored lines.
    ///
    /// The allocated storage is kept around for the lines that follow.
    pub fn clear(&mut self) {
        log::debug!("Discarding {} stored lines", self.lines.len());
        self.lines.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineSegment> {
        self.lines.iter()
    }

    /// Draw every stored line again, in insertion order.
    ///
    /// Lines are always redrawn with [Algorithm::IncrementalError], no matter which
    /// algorithm originally drew them. Use [LineStore::replay_recorded] to honour the
    /// recorded algorithm instead.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        log::debug!("Replaying {} stored lines", self.lines.len());

        for line in &self.lines {
            draw_line(
                surface,
                Algorithm::IncrementalError,
                line.from(),
                line.to(),
                line.color(),
            );
        }
    }

    /// Draw every stored line again using the algorithm that originally drew it
    pub fn replay_recorded<S: Surface + ?Sized>(&self, surface: &mut S) {
        log::debug!(
            "Replaying {} stored lines with their original algorithms",
            self.lines.len()
        );

        for line in &self.lines {
            line.draw(surface);
        }
    }
}

impl<'a> IntoIterator for &'a LineStore {
    type Item = &'a LineSegment;
    type IntoIter = std::slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
