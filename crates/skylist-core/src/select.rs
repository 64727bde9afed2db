use crate::error::{Result, SkylistError};
use crate::star::Star;

/// Bounded top-K selector: keeps the `capacity` brightest stars seen so
/// far, sorted descending by brightness.
///
/// Insertion is O(capacity), but once the set is full the common case is
/// a single comparison against `min_brightness` with no allocation and
/// no structural change. Overall cost over a catalog of N rows is
/// O(N * K) with K records resident, never the whole catalog.
pub struct BrightestSet {
    stars: Vec<Star>,
    min_brightness: f64,
    capacity: usize,
}

impl BrightestSet {
    pub fn new(capacity: usize) -> Result<BrightestSet> {
        if capacity < 1 {
            return Err(SkylistError::InvalidCapacity(capacity));
        }
        Ok(BrightestSet {
            stars: Vec::with_capacity(capacity),
            min_brightness: f64::NEG_INFINITY,
            capacity,
        })
    }

    /// Offer one star. Kept only if the set is not yet full or the star
    /// is strictly brighter than the dimmest held one; a star exactly as
    /// bright as the current minimum cannot improve the worst held
    /// record and is rejected without touching the sequence.
    pub fn offer(&mut self, star: Star) {
        if self.stars.len() == self.capacity && star.brightness <= self.min_brightness {
            return;
        }
        self.insert(star);
    }

    fn insert(&mut self, star: Star) {
        // Insert before the first strictly dimmer star; ties keep
        // arrival order.
        let pos = self
            .stars
            .iter()
            .position(|held| held.brightness < star.brightness)
            .unwrap_or(self.stars.len());
        self.stars.insert(pos, star);

        if self.stars.len() > self.capacity {
            self.stars.pop();
        }
        if self.stars.len() == self.capacity {
            if let Some(last) = self.stars.last() {
                self.min_brightness = last.brightness;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Star> {
        self.stars.iter()
    }

    /// Consume the selector, yielding the held stars in brightness
    /// order, brightest first.
    pub fn into_stars(self) -> Vec<Star> {
        self.stars
    }

    /// Diagnostic re-check of the descending-order invariant. Test-suite
    /// material only; never called on the streaming hot path.
    pub fn validate(&self) -> bool {
        self.stars
            .windows(2)
            .all(|pair| pair[0].brightness >= pair[1].brightness)
    }
}
