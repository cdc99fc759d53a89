//! Display-mode state machine driven by leveled button inputs.

/// Snapshot of the two mode-select buttons for one tick.
///
/// Levels, not edges: a held button reads `true` every tick and re-applies
/// the same transition at no additional cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStates {
    /// Button A: select the steady color-temperature display.
    pub steady: bool,
    /// Button B: select the pulsing display.
    pub pulsing: bool,
}

impl ButtonStates {
    pub const IDLE: Self = Self {
        steady: false,
        pulsing: false,
    };
}

/// Source of leveled button samples.
///
/// Firmware reads two GPIO levels; tests and the simulator script presses.
pub trait ButtonSource {
    fn read(&mut self) -> ButtonStates;
}

/// Active display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Constant color from the smoothed temperature, brightness from the
    /// smoothed light level.
    #[default]
    Steady,
    /// Same hue, but brightness ramps up and down on a fixed internal cycle
    /// independent of ambient light.
    Pulsing,
    /// Unused third state; drains back to `Steady` on the next transition.
    Reserved,
}

impl DisplayMode {
    /// Apply one tick's button levels and return the resulting mode.
    ///
    /// The steady button is checked first, then the pulsing button, so when
    /// both are held the pulsing assignment runs last and wins.
    pub fn next(self, buttons: ButtonStates) -> Self {
        let mut mode = match self {
            Self::Reserved => Self::Steady,
            current => current,
        };
        if buttons.steady {
            mode = Self::Steady;
        }
        if buttons.pulsing {
            mode = Self::Pulsing;
        }
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEADY_HELD: ButtonStates = ButtonStates {
        steady: true,
        pulsing: false,
    };
    const PULSING_HELD: ButtonStates = ButtonStates {
        steady: false,
        pulsing: true,
    };
    const BOTH_HELD: ButtonStates = ButtonStates {
        steady: true,
        pulsing: true,
    };

    #[test]
    fn test_initial_mode_is_steady() {
        assert_eq!(DisplayMode::default(), DisplayMode::Steady);
    }

    #[test]
    fn test_idle_buttons_keep_current_mode() {
        assert_eq!(
            DisplayMode::Pulsing.next(ButtonStates::IDLE),
            DisplayMode::Pulsing
        );
        assert_eq!(
            DisplayMode::Steady.next(ButtonStates::IDLE),
            DisplayMode::Steady
        );
    }

    #[test]
    fn test_buttons_switch_modes_unconditionally() {
        assert_eq!(DisplayMode::Steady.next(PULSING_HELD), DisplayMode::Pulsing);
        assert_eq!(DisplayMode::Pulsing.next(STEADY_HELD), DisplayMode::Steady);
    }

    #[test]
    fn test_both_buttons_held_pulsing_wins() {
        // Steady is checked first; the later pulsing assignment sticks.
        assert_eq!(DisplayMode::Steady.next(BOTH_HELD), DisplayMode::Pulsing);
        assert_eq!(DisplayMode::Pulsing.next(BOTH_HELD), DisplayMode::Pulsing);
    }

    #[test]
    fn test_reserved_drains_to_steady() {
        assert_eq!(
            DisplayMode::Reserved.next(ButtonStates::IDLE),
            DisplayMode::Steady
        );
    }

    #[test]
    fn test_held_button_reapplies_transition() {
        let mut mode = DisplayMode::Steady;
        for _ in 0..5 {
            mode = mode.next(PULSING_HELD);
            assert_eq!(mode, DisplayMode::Pulsing);
        }
    }
}
