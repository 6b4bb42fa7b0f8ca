//! Enabled/disabled state of a navigation control.

/// Whether a control can currently be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Enabled,
    Disabled,
}

impl Affordance {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Affordance::Enabled
        } else {
            Affordance::Disabled
        }
    }
}
