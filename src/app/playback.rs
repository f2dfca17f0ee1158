//! Sample-by-sample cursor over the current curve

/// Position of the playback cursor on a curve of `len` samples
///
/// # Example
///
/// ```rust
/// use photolysis_rs::app::Playback;
///
/// let mut playback = Playback::new(3);
/// assert_eq!(playback.advance(1), 1);
/// assert_eq!(playback.advance(5), 2);
/// assert!(playback.is_complete());
/// playback.rewind();
/// assert_eq!(playback.position(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    position: usize,
    len: usize,
}

impl Playback {
    pub fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    /// Back to the first sample of a (possibly new) curve
    pub fn reset(&mut self, len: usize) {
        self.position = 0;
        self.len = len;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True on the last sample
    pub fn is_complete(&self) -> bool {
        self.len == 0 || self.position + 1 >= self.len
    }

    /// Move `steps` samples forward, stopping on the last one
    pub fn advance(&mut self, steps: usize) -> usize {
        let last = self.len.saturating_sub(1);
        self.position = self.position.saturating_add(steps).min(last);
        self.position
    }

    /// Move one sample back, stopping on the first one
    pub fn step_back(&mut self) -> usize {
        self.position = self.position.saturating_sub(1);
        self.position
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }
}
