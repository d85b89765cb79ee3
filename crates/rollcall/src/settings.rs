//! Tenant settings: selected preset plus label overrides

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::RollcallConfig;
use crate::error::Result;
use crate::theme::{preset_defaults, resolve_theme, EffectiveTheme, LabelOverrides, PresetCatalog};

/// What the settings store keeps for one tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantSettings {
    /// Selected preset, if any
    pub theme_id: Option<String>,

    /// Label overrides, if any
    pub custom_labels: Option<LabelOverrides>,
}

impl TenantSettings {
    /// Create settings from a preset id and optional overrides.
    pub fn new(theme_id: impl Into<String>, custom_labels: Option<LabelOverrides>) -> Self {
        Self {
            theme_id: Some(theme_id.into()),
            custom_labels,
        }
    }

    /// Build settings from their stored form, where the labels are a JSON
    /// string.
    ///
    /// Labels that fail to parse are dropped with a warning so one corrupt row
    /// never blocks a tenant's dashboard.
    pub fn from_stored(theme_id: Option<String>, stored_labels: Option<&str>) -> Self {
        let custom_labels = stored_labels
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match serde_json::from_str::<LabelOverrides>(raw) {
                Ok(labels) => Some(labels),
                Err(e) => {
                    warn!("ignoring unreadable stored labels: {e}");
                    None
                }
            });

        Self {
            theme_id,
            custom_labels,
        }
    }

    /// Apply a partial update: only the fields set in `update` change.
    pub fn apply_update(&mut self, update: TenantSettings) {
        if let Some(theme_id) = update.theme_id {
            self.theme_id = Some(theme_id);
        }
        if let Some(labels) = update.custom_labels {
            self.custom_labels = Some(labels);
        }
    }

    /// The preset id to resolve: the stored one if the catalog knows it,
    /// otherwise the configured default.
    pub fn effective_preset_id<'a>(
        &'a self,
        catalog: &PresetCatalog,
        config: &'a RollcallConfig,
    ) -> &'a str {
        match self.theme_id.as_deref() {
            Some(id) if catalog.contains(id) => id,
            Some(id) => {
                warn!(
                    "unknown theme id {id:?}, using {:?}",
                    config.default_preset_id
                );
                &config.default_preset_id
            }
            None => &config.default_preset_id,
        }
    }

    /// Resolve the theme this tenant sees.
    pub fn effective_theme(
        &self,
        catalog: &PresetCatalog,
        config: &RollcallConfig,
    ) -> Result<EffectiveTheme> {
        let preset_id = self.effective_preset_id(catalog, config);
        resolve_theme(preset_id, self.custom_labels.as_ref(), catalog)
    }

    /// Initial contents of the label editor.
    ///
    /// Stored overrides when there are any, otherwise the defaults of the
    /// effective preset. Empty when even the fallback preset is missing.
    pub fn editor_draft(&self, catalog: &PresetCatalog, config: &RollcallConfig) -> LabelOverrides {
        if let Some(labels) = &self.custom_labels {
            return labels.clone();
        }
        catalog
            .get(self.effective_preset_id(catalog, config))
            .map(preset_defaults)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_corrupt_json() {
        let settings = TenantSettings::from_stored(Some("medical".into()), Some("{not json"));
        assert_eq!(settings.theme_id.as_deref(), Some("medical"));
        assert_eq!(settings.custom_labels, None);
    }

    #[test]
    fn test_apply_update_keeps_unset_fields() {
        let labels = LabelOverrides::new().with(crate::theme::LabelField::IdLabel, "Badge #");
        let mut settings = TenantSettings::new("medical", Some(labels.clone()));
        settings.apply_update(TenantSettings {
            theme_id: Some("government".into()),
            custom_labels: None,
        });
        assert_eq!(settings.theme_id.as_deref(), Some("government"));
        assert_eq!(settings.custom_labels, Some(labels));
    }
}
