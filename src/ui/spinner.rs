const FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: u8,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len() as u8;
    }

    pub fn glyph(&self) -> char {
        FRAMES[self.frame as usize % FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::{FRAMES, Spinner};

    #[test]
    fn spinner_wraps_around() {
        let mut spinner = Spinner::new();
        let first = spinner.glyph();
        for _ in 0..FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.glyph(), first);
    }
}
