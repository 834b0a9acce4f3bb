use rand::Rng;

/// How long a detection stays acknowledged on screen.
pub const HOLD_MS: u64 = 500;

/// A timer that is active until a deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hold {
    until: Option<u64>,
}

impl Hold {
    pub fn arm(&mut self, now: u64, duration_ms: u64) {
        self.until = Some(now.saturating_add(duration_ms));
    }

    /// Check the timer, clearing it once the deadline has passed.
    pub fn is_active(&mut self, now: u64) -> bool {
        match self.until {
            Some(until) if now < until => true,
            Some(_) => {
                self.until = None;
                false
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.until.is_some()
    }
}

/// Colour used for the detection flash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlashColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FlashColor {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

/// What the display should show this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckView {
    /// Fill the screen with this colour
    Flash(FlashColor),
    /// Show the detection banner
    Banner,
    /// Normal live meter
    Idle,
}

/// Visual acknowledgment of a detection: a coloured flash plus a banner.
#[derive(Debug, Clone)]
pub struct Acknowledgment {
    flash: Hold,
    banner: Hold,
    color: FlashColor,
    flash_ms: u64,
    banner_ms: u64,
}

impl Acknowledgment {
    pub fn new(flash_ms: u64, banner_ms: u64) -> Self {
        Self {
            flash: Hold::default(),
            banner: Hold::default(),
            color: FlashColor::default(),
            flash_ms,
            banner_ms,
        }
    }

    pub fn trigger<R: Rng>(&mut self, now: u64, rng: &mut R) {
        self.color = FlashColor::random(rng);
        self.flash.arm(now, self.flash_ms);
        self.banner.arm(now, self.banner_ms);
    }

    /// Resolve the view for `now`. The flash takes priority over the banner.
    pub fn view(&mut self, now: u64) -> AckView {
        let flashing = self.flash.is_active(now);
        let banner = self.banner.is_active(now);
        if flashing {
            AckView::Flash(self.color)
        } else if banner {
            AckView::Banner
        } else {
            AckView::Idle
        }
    }
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Self::new(HOLD_MS, HOLD_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn hold_expires_and_clears() {
        let mut hold = Hold::default();
        assert!(!hold.is_active(0));

        hold.arm(1000, HOLD_MS);
        assert!(hold.is_active(1000));
        assert!(hold.is_active(1499));
        assert!(!hold.is_active(1500));
        assert!(!hold.is_armed());
    }

    #[test]
    fn flash_then_banner_then_idle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ack = Acknowledgment::new(100, 300);
        assert_eq!(ack.view(0), AckView::Idle);

        ack.trigger(1000, &mut rng);
        assert!(matches!(ack.view(1050), AckView::Flash(_)));
        assert_eq!(ack.view(1100), AckView::Banner);
        assert_eq!(ack.view(1300), AckView::Idle);
    }

    #[test]
    fn retrigger_extends_hold() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ack = Acknowledgment::default();
        ack.trigger(0, &mut rng);
        ack.trigger(400, &mut rng);
        assert!(matches!(ack.view(800), AckView::Flash(_)));
    }
}
