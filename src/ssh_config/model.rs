//! SSH config domain models.

/// Host block collected by the add-host form.
///
/// Fields are written verbatim; nothing is escaped or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewHostEntry {
    /// Alias written on the `Host` line.
    pub name: String,
    /// Value for `HostName` (IP address or DNS name).
    pub address: String,
    /// Value for `User`.
    pub user: String,
}

impl NewHostEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            user: user.into(),
        }
    }
}
