//! Display-surface capability seam
//!
//! The meter ticker does not know where SMU readings live. Anything that
//! exposes counter displays implements `DisplaySurface`, which keeps the
//! tick logic independent of the fleet registry and lets tests substitute
//! an in-memory fake.

use crate::meter::SmuValue;
use tracing::debug;

/// Opaque identifier for one counter display on a surface.
///
/// Handles are only meaningful to the surface that issued them; a stale
/// handle is answered with None / false rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterHandle(pub(crate) u64);

impl CounterHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id, for surfaces that key their own storage by it.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Capability interface over a set of SMU counter displays.
pub trait DisplaySurface {
    /// Every counter display currently present, in display order.
    fn counter_handles(&self) -> Vec<CounterHandle>;

    /// Current displayed text for a handle, None if the handle is stale.
    fn value(&self, handle: CounterHandle) -> Option<String>;

    /// Replace the displayed text. Returns false for a stale handle.
    fn set_value(&mut self, handle: CounterHandle, value: String) -> bool;
}

/// Apply `ticks` simulated intervals to every counter on the surface.
///
/// Each display is read, parsed, advanced, and rewritten with two-decimal
/// formatting. Displays that fail to parse are left untouched; an empty
/// surface is a no-op. Returns how many displays were updated.
pub fn apply_tick(surface: &mut dyn DisplaySurface, ticks: u32) -> usize {
    if ticks == 0 {
        return 0;
    }

    let mut updated = 0;
    for handle in surface.counter_handles() {
        let Some(text) = surface.value(handle) else {
            continue;
        };
        match SmuValue::parse(&text) {
            Some(value) => {
                if surface.set_value(handle, value.tick(ticks).to_string()) {
                    updated += 1;
                }
            }
            None => {
                debug!("Skipping unparseable meter display {:?}: {:?}", handle, text);
            }
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSurface {
        cells: Vec<String>,
    }

    impl FakeSurface {
        fn new(cells: &[&str]) -> Self {
            Self {
                cells: cells.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl DisplaySurface for FakeSurface {
        fn counter_handles(&self) -> Vec<CounterHandle> {
            (0..self.cells.len() as u64).map(CounterHandle::new).collect()
        }

        fn value(&self, handle: CounterHandle) -> Option<String> {
            self.cells.get(handle.0 as usize).cloned()
        }

        fn set_value(&mut self, handle: CounterHandle, value: String) -> bool {
            match self.cells.get_mut(handle.0 as usize) {
                Some(cell) => {
                    *cell = value;
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn test_tick_updates_every_counter() {
        let mut surface = FakeSurface::new(&["120.00", "8900.50"]);
        let updated = apply_tick(&mut surface, 1);
        assert_eq!(updated, 2);
        assert_eq!(surface.cells, vec!["120.01", "8900.51"]);
    }

    #[test]
    fn test_three_ticks_add_three_centihours() {
        let mut surface = FakeSurface::new(&["120.00"]);
        apply_tick(&mut surface, 3);
        assert_eq!(surface.cells[0], "120.03");
    }

    #[test]
    fn test_unparseable_display_is_skipped() {
        let mut surface = FakeSurface::new(&["offline", "42.00"]);
        let updated = apply_tick(&mut surface, 1);
        assert_eq!(updated, 1);
        assert_eq!(surface.cells, vec!["offline", "42.01"]);
    }

    #[test]
    fn test_empty_surface_is_a_no_op() {
        let mut surface = FakeSurface::new(&[]);
        assert_eq!(apply_tick(&mut surface, 5), 0);
    }

    #[test]
    fn test_zero_ticks_touch_nothing() {
        let mut surface = FakeSurface::new(&["120.00"]);
        assert_eq!(apply_tick(&mut surface, 0), 0);
        assert_eq!(surface.cells[0], "120.00");
    }
}
