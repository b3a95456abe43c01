//! Appearance preference kept next to the session in client storage.

use crate::{ClientStorage, StorageResult, THEME_KEY};

use std::str::FromStr;
use std::sync::Arc;

use log::{info, warn};
use lu_core::Theme;

pub struct ThemeStore {
    storage: Arc<dyn ClientStorage>,
}

impl ThemeStore {
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self { storage }
    }

    /// Stored theme, or the default when missing or unreadable.
    pub fn load(&self) -> Theme {
        match self.storage.get(THEME_KEY) {
            Ok(Some(value)) => Theme::from_str(value.trim()).unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Could not read stored theme: {e}");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> StorageResult<()> {
        self.storage.set(THEME_KEY, theme.as_str())?;
        info!("Theme set to {theme}");
        Ok(())
    }

    /// Switch to the other theme and store it.
    pub fn toggle(&self) -> StorageResult<Theme> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}
