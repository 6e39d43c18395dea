//! Login form state.

use crate::common::FieldBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Pin,
}

/// The two login fields and which of them has focus.
#[derive(Debug, Default)]
pub struct LoginFormState {
    pub name: FieldBuffer,
    pub pin: FieldBuffer,
    pub focus: LoginField,
}

impl LoginFormState {
    pub fn clear(&mut self) {
        self.name.clear();
        self.pin.clear();
        self.focus = LoginField::Name;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Name => LoginField::Pin,
            LoginField::Pin => LoginField::Name,
        };
    }

    pub fn focused_mut(&mut self) -> &mut FieldBuffer {
        match self.focus {
            LoginField::Name => &mut self.name,
            LoginField::Pin => &mut self.pin,
        }
    }
}
