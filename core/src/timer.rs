use serde::{Deserialize, Serialize};

/// Escalating hint shown to a solo player as the clock runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintStage {
    /// Up to 5 seconds.
    Warmup,
    /// 6 to 20 seconds.
    Steady,
    /// 21 to 40 seconds.
    Pressing,
    /// Past 40 seconds.
    Overtime,
}

impl HintStage {
    pub const fn from_elapsed(secs: u8) -> Self {
        match secs {
            0..=5 => Self::Warmup,
            6..=20 => Self::Steady,
            21..=40 => Self::Pressing,
            _ => Self::Overtime,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Warmup => "Take a good look at the board",
            Self::Steady => "Keep going, find the pairs",
            Self::Pressing => "Pick up the pace",
            Self::Overtime => "Hurry, time is almost up",
        }
    }
}

/// Seconds counter for solo games. Counts up and stops at its cap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloTimer {
    elapsed_secs: u8,
    cap_secs: u8,
}

impl SoloTimer {
    pub const fn new(cap_secs: u8) -> Self {
        Self {
            elapsed_secs: 0,
            cap_secs,
        }
    }

    pub const fn elapsed_secs(&self) -> u8 {
        self.elapsed_secs
    }

    pub const fn cap_secs(&self) -> u8 {
        self.cap_secs
    }

    pub const fn is_capped(&self) -> bool {
        self.elapsed_secs >= self.cap_secs
    }

    pub const fn remaining_secs(&self) -> u8 {
        self.cap_secs.saturating_sub(self.elapsed_secs)
    }

    /// Share of the budget already used, `0..=100`.
    pub const fn progress_percent(&self) -> u8 {
        if self.cap_secs == 0 {
            return 100;
        }
        let elapsed = if self.elapsed_secs > self.cap_secs {
            self.cap_secs
        } else {
            self.elapsed_secs
        };
        ((elapsed as u16 * 100) / self.cap_secs as u16) as u8
    }

    pub const fn hint(&self) -> HintStage {
        HintStage::from_elapsed(self.elapsed_secs)
    }

    /// Advances one second unless capped. Returns whether the counter moved.
    pub fn tick(&mut self) -> bool {
        if self.is_capped() {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_thresholds() {
        assert_eq!(HintStage::from_elapsed(0), HintStage::Warmup);
        assert_eq!(HintStage::from_elapsed(5), HintStage::Warmup);
        assert_eq!(HintStage::from_elapsed(6), HintStage::Steady);
        assert_eq!(HintStage::from_elapsed(20), HintStage::Steady);
        assert_eq!(HintStage::from_elapsed(21), HintStage::Pressing);
        assert_eq!(HintStage::from_elapsed(40), HintStage::Pressing);
        assert_eq!(HintStage::from_elapsed(41), HintStage::Overtime);
        assert_eq!(HintStage::from_elapsed(60), HintStage::Overtime);
    }

    #[test]
    fn tick_stops_at_cap() {
        let mut timer = SoloTimer::new(3);

        assert!(timer.tick());
        assert!(timer.tick());
        assert!(timer.tick());
        assert!(!timer.tick());

        assert_eq!(timer.elapsed_secs(), 3);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.progress_percent(), 100);
    }

    #[test]
    fn progress_is_proportional() {
        let mut timer = SoloTimer::new(60);
        for _ in 0..15 {
            timer.tick();
        }

        assert_eq!(timer.progress_percent(), 25);
        assert_eq!(timer.remaining_secs(), 45);
        assert_eq!(timer.hint(), HintStage::Steady);
    }
}
