#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTier {
    Normal,
    Warning,
    Over,
}

/// Live character counter for the message field. Purely cosmetic; the limit
/// itself is enforced by the validation chain.
#[derive(Debug, Clone, Copy)]
pub struct CharCounter {
    len: usize,
    max: usize,
}

impl CharCounter {
    pub fn new(max: usize) -> Self {
        Self { len: 0, max }
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn tier(&self) -> CounterTier {
        if self.len > self.max {
            CounterTier::Over
        } else if self.len * 10 > self.max * 9 {
            CounterTier::Warning
        } else {
            CounterTier::Normal
        }
    }

    pub fn text(&self) -> String {
        format!("{} / {} characters", self.len, self.max)
    }
}
