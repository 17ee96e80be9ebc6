//! Account identity returned by the remote `user` resource.

/// The authenticated account and the group its links live in.
///
/// Fetched once per aggregation run. Only the default group is used to
/// scope the link listing; `name` is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInfo {
    pub default_group_guid: String,
    pub name: String,
}

impl UserInfo {
    /// Creates a new identity value.
    pub fn new(default_group_guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            default_group_guid: default_group_guid.into(),
            name: name.into(),
        }
    }
}
