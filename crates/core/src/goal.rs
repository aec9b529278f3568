//! Home slots and the bonus-fly lifecycle.

use arrayvec::ArrayVec;
use tui_frogger_types::{FLY_PERIOD, HOME_SLOT_X};

use crate::rng::Lcg;

/// One of the five landing targets at the top of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeSlot {
    pub x: i32,
    pub filled: bool,
}

/// Fresh set of slots for a new game.
pub fn new_slots() -> [HomeSlot; 5] {
    HOME_SLOT_X.map(|x| HomeSlot { x, filled: false })
}

/// The bonus fly: toggles visibility on a fixed period and, on each
/// transition to visible, perches on a uniformly chosen unfilled slot.
#[derive(Debug, Clone, Copy)]
pub struct Fly {
    pub visible: bool,
    pub target: Option<usize>,
    timer: u32,
}

impl Fly {
    pub fn new() -> Self {
        Self {
            visible: true,
            target: None,
            timer: 0,
        }
    }

    /// Whether the fly currently sits on slot `i`.
    pub fn targets(&self, i: usize) -> bool {
        self.visible && self.target == Some(i)
    }

    /// Reset the toggle phase without despawning (frog respawn).
    pub fn reset_phase(&mut self) {
        self.timer = 0;
        self.visible = true;
    }

    /// Despawn immediately (the fly's slot was captured).
    pub fn despawn(&mut self) {
        self.visible = false;
        self.target = None;
        self.timer = 0;
    }

    /// Advance one tick. Retargeting happens only at the moment the fly
    /// becomes visible; with every slot filled it stays hidden.
    pub fn tick(&mut self, slots: &[HomeSlot; 5], rng: &mut Lcg) {
        self.timer += 1;
        if self.timer < FLY_PERIOD {
            return;
        }
        self.timer = 0;
        self.visible = !self.visible;

        if self.visible {
            let open: ArrayVec<usize, 5> = (0..slots.len()).filter(|&i| !slots[i].filled).collect();
            if open.is_empty() {
                self.visible = false;
                self.target = None;
            } else {
                let pick = rng.next_range(open.len() as u32) as usize;
                self.target = Some(open[pick]);
            }
        } else {
            self.target = None;
        }
    }
}

impl Default for Fly {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slots_match_layout() {
        let slots = new_slots();
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].x, 8);
        assert_eq!(slots[4].x, 200);
        assert!(slots.iter().all(|s| !s.filled));
    }

    #[test]
    fn test_fly_toggles_on_period() {
        let slots = new_slots();
        let mut rng = Lcg::new(1);
        let mut fly = Fly::new();
        assert!(fly.visible);

        for _ in 0..FLY_PERIOD {
            fly.tick(&slots, &mut rng);
        }
        assert!(!fly.visible);
        assert_eq!(fly.target, None);

        for _ in 0..FLY_PERIOD {
            fly.tick(&slots, &mut rng);
        }
        assert!(fly.visible);
        assert!(fly.target.is_some());
    }

    #[test]
    fn test_fly_targets_only_unfilled_slots() {
        let mut slots = new_slots();
        for i in 0..4 {
            slots[i].filled = true;
        }
        let mut rng = Lcg::new(99);
        let mut fly = Fly::new();

        // Run several full cycles; every target must be the open slot.
        for _ in 0..10 * FLY_PERIOD {
            fly.tick(&slots, &mut rng);
            if fly.visible {
                if let Some(t) = fly.target {
                    assert_eq!(t, 4);
                }
            }
        }
    }

    #[test]
    fn test_fly_stays_hidden_with_all_slots_filled() {
        let mut slots = new_slots();
        for s in &mut slots {
            s.filled = true;
        }
        let mut rng = Lcg::new(5);
        let mut fly = Fly::new();

        for _ in 0..10 * FLY_PERIOD {
            fly.tick(&slots, &mut rng);
            assert!(fly.target.is_none());
        }
    }

    #[test]
    fn test_fly_target_sequence_is_deterministic() {
        let slots = new_slots();
        let mut collect = |seed: u32| {
            let mut rng = Lcg::new(seed);
            let mut fly = Fly::new();
            let mut targets = Vec::new();
            for _ in 0..40 * FLY_PERIOD {
                let was_visible = fly.visible;
                fly.tick(&slots, &mut rng);
                if fly.visible && !was_visible {
                    targets.push(fly.target);
                }
            }
            targets
        };
        assert_eq!(collect(12345), collect(12345));
        assert_ne!(collect(12345), collect(54321));
    }
}
