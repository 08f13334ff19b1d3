//! Checkout wizard: contact → payment → review.
//!
//! Pure view state over one underlying form. Nothing here validates or
//! stores field values.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WizardStep {
    #[default]
    Contact,
    Payment,
    Review,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardMove {
    Next,
    Prev,
}

/// Which controls and field groups are shown at a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepVisibility {
    pub contact_fields: bool,
    pub payment_fields: bool,
    pub submit_visible: bool,
    pub next_visible: bool,
    pub prev_enabled: bool,
}

impl WizardStep {
    pub fn index(self) -> usize {
        match self {
            Self::Contact => 0,
            Self::Payment => 1,
            Self::Review => 2,
        }
    }

    /// Saturates at `Review`.
    pub fn next(self) -> Self {
        match self {
            Self::Contact => Self::Payment,
            Self::Payment | Self::Review => Self::Review,
        }
    }

    /// Saturates at `Contact`.
    pub fn prev(self) -> Self {
        match self {
            Self::Contact | Self::Payment => Self::Contact,
            Self::Review => Self::Payment,
        }
    }

    pub fn apply(self, mv: WizardMove) -> Self {
        match mv {
            WizardMove::Next => self.next(),
            WizardMove::Prev => self.prev(),
        }
    }

    pub const fn visibility(self) -> StepVisibility {
        match self {
            Self::Contact => StepVisibility {
                contact_fields: true,
                payment_fields: false,
                submit_visible: false,
                next_visible: true,
                prev_enabled: false,
            },
            Self::Payment => StepVisibility {
                contact_fields: false,
                payment_fields: true,
                submit_visible: false,
                next_visible: true,
                prev_enabled: true,
            },
            Self::Review => StepVisibility {
                contact_fields: false,
                payment_fields: false,
                submit_visible: true,
                next_visible: false,
                prev_enabled: true,
            },
        }
    }

    /// Step indicator `i` is lit for every step reached so far.
    pub fn indicator_active(self, i: usize) -> bool {
        i <= self.index()
    }
}
