//! Mode-select buttons.

use chroma_core::{ButtonSource, ButtonStates};
use esp_hal::gpio::Input;

/// Two leveled push buttons: A selects the steady display, B the pulsing one.
///
/// Levels are sampled once per read with no debouncing or edge detection;
/// the mode machine simply re-applies the same transition while a button is
/// held.
pub struct BoardButtons<'a> {
    button_a: Input<'a>,
    button_b: Input<'a>,
}

impl<'a> BoardButtons<'a> {
    pub fn new(button_a: Input<'a>, button_b: Input<'a>) -> Self {
        Self { button_a, button_b }
    }
}

impl ButtonSource for BoardButtons<'_> {
    fn read(&mut self) -> ButtonStates {
        ButtonStates {
            steady: self.button_a.is_high(),
            pulsing: self.button_b.is_high(),
        }
    }
}
