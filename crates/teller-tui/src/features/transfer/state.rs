//! Transfer form state.

use crate::common::FieldBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferField {
    #[default]
    Recipient,
    Amount,
}

/// The two transfer fields and which of them has focus.
#[derive(Debug, Default)]
pub struct TransferFormState {
    pub recipient: FieldBuffer,
    pub amount: FieldBuffer,
    pub focus: TransferField,
}

impl TransferFormState {
    pub fn clear(&mut self) {
        self.recipient.clear();
        self.amount.clear();
        self.focus = TransferField::Recipient;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            TransferField::Recipient => TransferField::Amount,
            TransferField::Amount => TransferField::Recipient,
        };
    }

    pub fn focused_mut(&mut self) -> &mut FieldBuffer {
        match self.focus {
            TransferField::Recipient => &mut self.recipient,
            TransferField::Amount => &mut self.amount,
        }
    }
}
