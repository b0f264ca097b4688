use placemap_entities::id::Id;

/// State of the detail dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(Id),
}

impl Modal {
    /// Opening an already open dialog replaces its content.
    pub fn open(&mut self, id: Id) {
        *self = Self::Open(id);
    }

    /// Returns `false` if the dialog was already closed.
    pub fn close(&mut self) -> bool {
        match self {
            Self::Closed => false,
            Self::Open(_) => {
                *self = Self::Closed;
                true
            }
        }
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}
