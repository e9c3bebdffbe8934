#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTick {
    Advanced(u8),
    /// The counter just reached its cap; the loaded delay should start.
    Capped,
    Halted,
}

/// One-shot cosmetic progress counter in front of the main view.
///
/// The counter stops just short of completion; the switch to "loaded" is
/// driven by a separate delay once the cap is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    progress: u8,
    cap: u8,
    loaded: bool,
}

impl LoadingGate {
    pub fn new(cap: u8) -> Self {
        Self {
            progress: 0,
            cap,
            loaded: false,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn cap(&self) -> u8 {
        self.cap
    }

    pub fn is_capped(&self) -> bool {
        self.progress >= self.cap
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn tick(&mut self) -> GateTick {
        if self.is_capped() {
            return GateTick::Halted;
        }
        self.progress += 1;
        if self.is_capped() {
            GateTick::Capped
        } else {
            GateTick::Advanced(self.progress)
        }
    }

    pub fn finish(&mut self) {
        self.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_min_of_ticks_and_cap() {
        for n in [0usize, 1, 50, 98, 99, 100, 250] {
            let mut gate = LoadingGate::new(99);
            for _ in 0..n {
                gate.tick();
            }
            assert_eq!(gate.progress() as usize, n.min(99));
            assert!(gate.progress() <= gate.cap());
        }
    }

    #[test]
    fn test_caps_once() {
        let mut gate = LoadingGate::new(3);
        assert_eq!(gate.tick(), GateTick::Advanced(1));
        assert_eq!(gate.tick(), GateTick::Advanced(2));
        assert_eq!(gate.tick(), GateTick::Capped);
        assert_eq!(gate.tick(), GateTick::Halted);
        assert_eq!(gate.progress(), 3);
        assert!(!gate.is_loaded());
    }

    #[test]
    fn test_zero_cap() {
        let mut gate = LoadingGate::new(0);
        assert!(gate.is_capped());
        assert_eq!(gate.tick(), GateTick::Halted);
        assert_eq!(gate.progress(), 0);
    }

    #[test]
    fn test_default_timeline() {
        // 30ms ticks, cap 99, 1000ms delay
        let tick_ms = 30;
        let mut gate = LoadingGate::new(99);
        let mut elapsed = 0;
        let capped_at = loop {
            elapsed += tick_ms;
            if gate.tick() == GateTick::Capped {
                break elapsed;
            }
        };
        assert_eq!(capped_at, 2970);
        assert_eq!(gate.progress(), 99);

        gate.finish();
        assert!(gate.is_loaded());
        assert_eq!(gate.tick(), GateTick::Halted);
        assert!(gate.is_loaded());
    }
}
