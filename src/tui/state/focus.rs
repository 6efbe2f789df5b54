//! Keyboard focus state machines.
//!
//! Both machines consume [`Key`] values rather than toolkit events; the event
//! loop maps raw terminal input to a `Key` and lets these types decide what
//! the key means for focus.

/// Key identity as seen by the focus controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Backspace,
    Delete,
    Escape,
    CtrlN,
    Char(char),
    Other,
}

impl Key {
    pub(crate) fn is_printable(self) -> bool {
        matches!(self, Key::Char(ch) if !ch.is_control())
    }
}

/// Every element that can hold focus, across the main screen and the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FocusTarget {
    SearchBox,
    ResultList,
    AddHostNameField,
    AddHostAddressField,
    AddHostUserField,
    AddHostSaveButton,
}

impl From<MainFocus> for FocusTarget {
    fn from(focus: MainFocus) -> Self {
        match focus {
            MainFocus::SearchBox => FocusTarget::SearchBox,
            MainFocus::ResultList => FocusTarget::ResultList,
        }
    }
}

impl From<FormField> for FocusTarget {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Name => FocusTarget::AddHostNameField,
            FormField::Address => FocusTarget::AddHostAddressField,
            FormField::User => FocusTarget::AddHostUserField,
            FormField::Save => FocusTarget::AddHostSaveButton,
        }
    }
}

/// Focus on the main screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum MainFocus {
    #[default]
    SearchBox,
    ResultList,
}

/// What the shell should do after the main screen saw a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainTransition {
    Quit,
    OpenAddHost,
    /// Focus moved; the key is consumed.
    Moved,
    /// Focus moved; replay the key into the newly focused widget.
    MovedAndForward,
    /// The key belongs to the focused widget.
    Forward,
    /// The highlighted host was chosen.
    Activate,
}

impl MainFocus {
    /// Apply `key`. `list_at_top` tells whether the result list selection sits
    /// on its first row (an empty list counts as at the top).
    pub(crate) fn on_key(&mut self, key: Key, list_at_top: bool) -> MainTransition {
        match key {
            Key::Escape => return MainTransition::Quit,
            Key::CtrlN => return MainTransition::OpenAddHost,
            _ => {}
        }

        match *self {
            MainFocus::SearchBox => match key {
                Key::Down => {
                    *self = MainFocus::ResultList;
                    MainTransition::Moved
                }
                _ => MainTransition::Forward,
            },
            // `q` is query text in the search box and only quits from the list.
            MainFocus::ResultList => match key {
                Key::Char('q') => MainTransition::Quit,
                Key::Up if list_at_top => {
                    *self = MainFocus::SearchBox;
                    MainTransition::Moved
                }
                Key::Backspace => {
                    *self = MainFocus::SearchBox;
                    MainTransition::MovedAndForward
                }
                _ if key.is_printable() => {
                    *self = MainFocus::SearchBox;
                    MainTransition::MovedAndForward
                }
                Key::Enter => MainTransition::Activate,
                _ => MainTransition::Forward,
            },
        }
    }
}

/// Focus ring inside the add-host modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FormField {
    #[default]
    Name,
    Address,
    User,
    Save,
}

/// What the modal should do after it saw a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormTransition {
    Moved,
    Forward,
    Submit,
    Cancel,
}

impl FormField {
    pub(crate) const ALL: [FormField; 4] = [FormField::Name, FormField::Address, FormField::User, FormField::Save];

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Name => Self::Address,
            Self::Address => Self::User,
            Self::User => Self::Save,
            Self::Save => Self::Name,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Name => Self::Save,
            Self::Address => Self::Name,
            Self::User => Self::Address,
            Self::Save => Self::User,
        }
    }

    pub(crate) fn is_text(self) -> bool {
        !matches!(self, Self::Save)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "IP/URL",
            Self::User => "User",
            Self::Save => "Save",
        }
    }

    pub(crate) fn on_key(&mut self, key: Key) -> FormTransition {
        match key {
            Key::Down => {
                *self = self.next();
                FormTransition::Moved
            }
            Key::Up => {
                *self = self.prev();
                FormTransition::Moved
            }
            Key::Escape => FormTransition::Cancel,
            Key::Enter if *self == FormField::Save => FormTransition::Submit,
            Key::Enter => {
                *self = self.next();
                FormTransition::Moved
            }
            _ => FormTransition::Forward,
        }
    }
}

#[cfg(test)]
#[path = "../../test/tui/state/focus.rs"]
mod tests;
