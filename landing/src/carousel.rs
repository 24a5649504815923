//! Screenshot carousel state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screenshot {
    pub url: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SCREENSHOTS: [Screenshot; 5] = [
    Screenshot {
        url: "https://images.pexels.com/photos/5691468/pexels-photo-5691468.jpeg",
        title: "Dashboard Overview",
        description: "Comprehensive farm analytics and monitoring dashboard",
    },
    Screenshot {
        url: "https://images.pexels.com/photos/4112236/pexels-photo-4112236.jpeg",
        title: "Crop Recommendations",
        description: "AI-powered crop selection interface",
    },
    Screenshot {
        url: "https://images.pexels.com/photos/5632402/pexels-photo-5632402.jpeg",
        title: "Plant Diagnosis",
        description: "Advanced disease detection and analysis",
    },
    Screenshot {
        url: "https://images.pexels.com/photos/3935350/pexels-photo-3935350.jpeg",
        title: "Weather Integration",
        description: "Real-time weather data and forecasting",
    },
    Screenshot {
        url: "https://images.pexels.com/photos/4992464/pexels-photo-4992464.jpeg",
        title: "Mobile App",
        description: "Field-ready mobile application",
    },
];

/// Wrapping cursor over `len` slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_slide(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev_slide(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Device frame drawn around the active screenshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Device {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Mobile => "Mobile",
        }
    }

    /// Frame modifier class, narrowest for mobile.
    pub fn frame_class(self) -> &'static str {
        match self {
            Device::Desktop => "device-frame device-desktop",
            Device::Tablet => "device-frame device-tablet",
            Device::Mobile => "device-frame device-mobile",
        }
    }

    /// Desktop gets browser chrome; handhelds get a notch bar.
    pub fn has_browser_chrome(self) -> bool {
        matches!(self, Device::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut c = Carousel::new(SCREENSHOTS.len());
        c.prev_slide();
        assert_eq!(c.index(), SCREENSHOTS.len() - 1);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut c = Carousel::new(5);
        c.go_to(4);
        c.next_slide();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn full_lap_returns_home_both_ways() {
        let mut c = Carousel::new(5);
        for expected in [1, 2, 3, 4, 0] {
            c.next_slide();
            assert_eq!(c.index(), expected);
        }
        for expected in [4, 3, 2, 1, 0] {
            c.prev_slide();
            assert_eq!(c.index(), expected);
        }
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(5);
        c.go_to(2);
        c.go_to(5);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = Carousel::new(1);
        c.next_slide();
        c.prev_slide();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_carousel_does_not_panic() {
        let mut c = Carousel::new(0);
        c.next_slide();
        c.prev_slide();
        assert!(c.is_empty());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn only_desktop_has_browser_chrome() {
        assert!(Device::default().has_browser_chrome());
        assert!(!Device::Tablet.has_browser_chrome());
        assert!(!Device::Mobile.has_browser_chrome());
    }
}
