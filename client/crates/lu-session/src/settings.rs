use lu_config::Config;
use lu_core::FieldLimits;

/// Tunables for [`SessionManager`](crate::SessionManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub limits: FieldLimits,
    /// Copy an unreadable stored identity aside before removing it.
    pub backup_corrupted: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            limits: FieldLimits::default(),
            backup_corrupted: true,
        }
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            limits: config.validation.field_limits(),
            backup_corrupted: config.session.backup_corrupted,
        }
    }
}
