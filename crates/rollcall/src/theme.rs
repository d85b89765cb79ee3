//! Occupation themes: presets, overrides and the effective label set

mod labels;
mod preset;

pub use labels::{LabelField, LabelOverrides, LabelSet};
pub use preset::{DisplayMeta, PresetCatalog, ThemePreset};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RollcallError};

/// The terminology and styling a tenant actually sees.
///
/// Every label is non-empty: a usable override wins, then the preset's own
/// value, then [`LabelField::fallback`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveTheme {
    /// Id of the preset the theme was resolved from
    pub preset_id: String,
    /// Resolved labels
    pub labels: LabelSet,
    /// Preset styling, unmodified
    pub display: DisplayMeta,
}

impl EffectiveTheme {
    /// Resolved value of one label field.
    pub fn label(&self, field: LabelField) -> &str {
        self.labels.get(field)
    }
}

/// Resolve the effective theme for a preset id and optional overrides.
///
/// Fails with [`RollcallError::UnknownPreset`] when `preset_id` is not in the
/// catalog. Picking a fallback id is up to the caller.
///
/// # Example
///
/// ```
/// use rollcall::{resolve_theme, LabelField, LabelOverrides, PresetCatalog};
///
/// let catalog = PresetCatalog::builtin();
/// let overrides = LabelOverrides::new().with(LabelField::IdLabel, "Badge #");
///
/// let theme = resolve_theme("corporate", Some(&overrides), &catalog).unwrap();
/// assert_eq!(theme.labels.id_label, "Badge #");
/// assert_eq!(theme.labels.member_label, "Employee");
/// ```
pub fn resolve_theme(
    preset_id: &str,
    overrides: Option<&LabelOverrides>,
    catalog: &PresetCatalog,
) -> Result<EffectiveTheme> {
    let preset = catalog
        .get(preset_id)
        .ok_or_else(|| RollcallError::UnknownPreset(preset_id.to_string()))?;

    let labels = LabelSet::from_fn(|field| {
        overrides
            .and_then(|o| o.get(field))
            .or_else(|| Some(preset.labels.get(field)).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| field.fallback())
            .to_string()
    });

    Ok(EffectiveTheme {
        preset_id: preset.id.clone(),
        labels,
        display: preset.display.clone(),
    })
}

/// Presets in declaration order, for rendering pickers.
pub fn list_presets(catalog: &PresetCatalog) -> Vec<&ThemePreset> {
    catalog.iter().collect()
}

/// A preset's own labels as a full overrides record.
///
/// Used to reset a label editor's draft when the user picks another preset.
pub fn preset_defaults(preset: &ThemePreset) -> LabelOverrides {
    LabelOverrides::from(&preset.labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_preset_label_uses_fallback() {
        let mut catalog = PresetCatalog::builtin();
        let mut bare = catalog.get("learning").unwrap().clone();
        bare.id = "bare".into();
        bare.labels.group_label = String::new();
        catalog.insert(bare);

        let theme = resolve_theme("bare", None, &catalog).unwrap();
        assert_eq!(theme.label(LabelField::GroupLabel), "Group");
        assert_eq!(theme.label(LabelField::MemberLabel), "Student");
    }

    #[test]
    fn test_unknown_preset() {
        let err = resolve_theme("aviation", None, &PresetCatalog::builtin()).unwrap_err();
        assert!(matches!(err, RollcallError::UnknownPreset(id) if id == "aviation"));
    }
}
