/// Per-character color ramp driven by section progress.
///
/// With `speed > 1` the wavefront reaches the last character before
/// progress reaches 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub speed: f64,
    pub start_gray: u8,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            speed: 1.2,
            start_gray: 160,
        }
    }
}

impl RevealConfig {
    pub fn char_progress(&self, index: usize, len: usize, progress: f64) -> f64 {
        (progress * len as f64 * self.speed - index as f64).clamp(0.0, 1.0)
    }

    pub fn gray(&self, index: usize, len: usize, progress: f64) -> u8 {
        let remaining = 1.0 - self.char_progress(index, len, progress);
        (f64::from(self.start_gray) * remaining).round() as u8
    }

    pub fn color(&self, index: usize, len: usize, progress: f64) -> String {
        let g = self.gray(index, len, progress);
        format!("rgb({}, {}, {})", g, g, g)
    }

    /// Progress at which every character is fully revealed.
    #[cfg(test)]
    pub fn completion(&self) -> f64 {
        1.0 / self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 10;

    #[test]
    fn nothing_revealed_at_zero() {
        let reveal = RevealConfig::default();
        for i in 0..N {
            assert_eq!(reveal.gray(i, N, 0.0), 160);
        }
        assert_eq!(reveal.color(0, N, 0.0), "rgb(160, 160, 160)");
    }

    #[test]
    fn everything_black_at_one() {
        let reveal = RevealConfig::default();
        for i in 0..N {
            assert_eq!(reveal.gray(i, N, 1.0), 0);
        }
    }

    #[test]
    fn last_character_completes_early() {
        let reveal = RevealConfig::default();
        let p = reveal.completion() + 1e-9;
        assert!(p < 1.0);
        assert!(reveal.char_progress(N - 1, N, p) >= 1.0);
        assert_eq!(reveal.gray(N - 1, N, p), 0);
        assert!(reveal.char_progress(N - 1, N, reveal.completion() - 0.05) < 1.0);
    }

    #[test]
    fn wavefront_moves_left_to_right() {
        let reveal = RevealConfig::default();
        let p = 0.4;
        let grays: Vec<u8> = (0..N).map(|i| reveal.gray(i, N, p)).collect();
        assert!(grays.windows(2).all(|w| w[0] <= w[1]));
        // 0.4 * 10 * 1.2 = 4.8: chars 0..4 are done, char 4 is 80% in.
        assert_eq!(&grays[..4], &[0, 0, 0, 0]);
        assert_eq!(grays[4], 32);
        assert_eq!(grays[5], 160);
    }

    #[test]
    fn constants_are_tunable() {
        let reveal = RevealConfig {
            speed: 1.0,
            start_gray: 200,
        };
        assert_eq!(reveal.gray(0, N, 0.0), 200);
        assert_eq!(reveal.gray(0, N, 0.05), 100);
        assert_eq!(reveal.completion(), 1.0);
    }

    #[test]
    fn empty_text_has_no_characters_to_color() {
        let reveal = RevealConfig::default();
        assert_eq!(reveal.char_progress(0, 0, 1.0), 0.0);
    }
}
