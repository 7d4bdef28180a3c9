//! Paging state for the special-events carousel and the gallery track.

use std::time::Duration;

/// Time each page stays on screen before autoplay moves on.
pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(1500);

/// `(min viewport width in px, slides per view)`, widest first.
const BREAKPOINTS: [(u32, usize); 2] = [(1024, 3), (768, 2)];

/// Slides shown side by side at a given viewport width.
pub fn slides_per_view(viewport_width: u32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(min, _)| viewport_width >= *min)
        .map(|(_, per_view)| *per_view)
        .unwrap_or(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    slides: usize,
    per_view: usize,
    page: usize,
}

impl Carousel {
    pub fn new(slides: usize, per_view: usize) -> Self {
        Self {
            slides,
            per_view: per_view.max(1),
            page: 0,
        }
    }

    /// Number of distinct positions; never zero.
    pub fn pages(&self) -> usize {
        self.slides.saturating_sub(self.per_view) + 1
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// Autoplay step; wraps to the first page.
    pub fn advance(&mut self) -> usize {
        self.page = (self.page + 1) % self.pages();
        self.page
    }

    /// Pagination click. Out-of-range pages are clamped to the last one.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page = page.min(self.pages() - 1);
        self.page
    }

    /// Viewport resize; keeps the current page when it still exists.
    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
        self.page = self.page.min(self.pages() - 1);
    }

    /// Width of one slide as a percentage of the viewport.
    pub fn slide_width_percent(&self) -> f64 {
        100.0 / self.per_view as f64
    }

    /// `translateX` offset of the slide strip, in percent of the viewport.
    pub fn offset_percent(&self) -> f64 {
        -(self.page as f64) * self.slide_width_percent()
    }
}

/// Items laid out twice so a track translated by -50% loops seamlessly.
pub fn looped_track<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(slides_per_view(375), 1);
        assert_eq!(slides_per_view(767), 1);
        assert_eq!(slides_per_view(768), 2);
        assert_eq!(slides_per_view(1023), 2);
        assert_eq!(slides_per_view(1440), 3);
    }

    #[test]
    fn autoplay_wraps() {
        let mut carousel = Carousel::new(3, 1);
        assert_eq!(carousel.pages(), 3);
        assert_eq!(carousel.advance(), 1);
        assert_eq!(carousel.advance(), 2);
        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn all_slides_visible_means_one_page() {
        let mut carousel = Carousel::new(3, 3);
        assert_eq!(carousel.pages(), 1);
        assert_eq!(carousel.advance(), 0);

        let carousel = Carousel::new(2, 3);
        assert_eq!(carousel.pages(), 1);
    }

    #[test]
    fn go_to_clamps() {
        let mut carousel = Carousel::new(3, 2);
        assert_eq!(carousel.go_to(1), 1);
        assert_eq!(carousel.go_to(9), 1);
    }

    #[test]
    fn resize_keeps_page_in_range() {
        let mut carousel = Carousel::new(3, 1);
        carousel.go_to(2);
        carousel.set_per_view(2);
        assert_eq!(carousel.page(), 1);
        assert_eq!(carousel.offset_percent(), -50.0);
    }

    #[test]
    fn looped_track_repeats_in_order() {
        assert_eq!(looped_track(&[1, 2, 3]), vec![1, 2, 3, 1, 2, 3]);
        assert!(looped_track::<u8>(&[]).is_empty());
    }
}
