use rust_decimal::Decimal;
use serde::Serialize;

/// One slice of a progressive rate table.
///
/// `width` is the size of the slice, not a cumulative ceiling. `None` marks the
/// open-ended top band. Tables are applied in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBand {
    pub width: Option<Decimal>,
    pub rate: Decimal,
    pub note: Option<&'static str>,
}

impl TaxBand {
    pub const fn new(
        width: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            width: Some(width),
            rate,
            note: None,
        }
    }

    /// The open-ended band that absorbs whatever income is left.
    pub const fn open(rate: Decimal) -> Self {
        Self {
            width: None,
            rate,
            note: None,
        }
    }

    pub const fn with_note(
        self,
        note: &'static str,
    ) -> Self {
        Self {
            note: Some(note),
            ..self
        }
    }

    pub fn is_open_ended(&self) -> bool {
        self.width.is_none()
    }
}
