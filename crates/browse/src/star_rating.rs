//! Personal star rating shown on the detail screen.
//!
//! Tapping star N sets the rating to N; tapping the star that is already
//! the current rating clears it back to zero.

/// Number of stars in the control
pub const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRating {
    rating: u8,
}

impl StarRating {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rating, 0 meaning unrated
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Tap a star (1-based). Out-of-range taps are ignored.
    pub fn tap(&mut self, star: u8) -> u8 {
        if (1..=MAX_STARS).contains(&star) {
            self.rating = if star == self.rating { 0 } else { star };
        }
        self.rating
    }

    /// Whether the star at a 0-based position is drawn filled
    pub fn is_filled(&self, position: u8) -> bool {
        position < self.rating
    }

    /// Fill state of every star, left to right
    pub fn stars(&self) -> [bool; MAX_STARS as usize] {
        std::array::from_fn(|position| self.is_filled(position as u8))
    }
}
