//! Theme resolution and settings tests

use pretty_assertions::assert_eq;
use rollcall::*;

// ═══════════════════════════════════════════════════════════════════════
// Resolve
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_no_overrides_matches_preset() {
    let catalog = PresetCatalog::builtin();
    for preset in list_presets(&catalog) {
        let theme = resolve_theme(&preset.id, None, &catalog).unwrap();
        assert_eq!(theme.labels, preset.labels);
        assert_eq!(theme.display, preset.display);
        assert_eq!(theme.preset_id, preset.id);
    }
}

#[test]
fn test_empty_string_override_is_ignored() {
    let catalog = PresetCatalog::builtin();
    let overrides = LabelOverrides::new().with(LabelField::MemberLabel, "");
    for preset in list_presets(&catalog) {
        assert_eq!(
            resolve_theme(&preset.id, Some(&overrides), &catalog).unwrap(),
            resolve_theme(&preset.id, None, &catalog).unwrap(),
        );
    }
}

#[test]
fn test_corporate_badge_override() {
    let catalog = PresetCatalog::builtin();
    let corporate = catalog.get("corporate").unwrap();
    assert_eq!(corporate.labels.id_label, "Employee ID");

    let overrides: LabelOverrides = serde_json::from_str(r#"{"id_label": "Badge #"}"#).unwrap();
    let theme = resolve_theme("corporate", Some(&overrides), &catalog).unwrap();

    assert_eq!(theme.labels.id_label, "Badge #");
    for field in LabelField::ALL {
        if field != LabelField::IdLabel {
            assert_eq!(theme.label(field), corporate.labels.get(field));
        }
    }
    assert_eq!(theme.display, corporate.display);
}

#[test]
fn test_malformed_override_falls_back() {
    let catalog = PresetCatalog::builtin();
    let overrides: LabelOverrides =
        serde_json::from_str(r#"{"member_label": 7, "group_label": null, "id_label": " "}"#)
            .unwrap();
    let theme = resolve_theme("medical", Some(&overrides), &catalog).unwrap();

    assert_eq!(theme.labels.member_label, "Staff Member");
    assert_eq!(theme.labels.group_label, "Ward / Department");
    assert_eq!(theme.labels.id_label, "Staff ID");
}

#[test]
fn test_unknown_preset_is_an_error() {
    let result = resolve_theme("aviation", None, &PresetCatalog::builtin());
    assert!(matches!(result, Err(RollcallError::UnknownPreset(_))));
}

#[test]
fn test_every_label_non_empty() {
    let catalog = PresetCatalog::builtin();
    let overrides = LabelField::ALL
        .iter()
        .fold(LabelOverrides::new(), |o, f| o.with(*f, ""));
    for preset in list_presets(&catalog) {
        let theme = resolve_theme(&preset.id, Some(&overrides), &catalog).unwrap();
        for field in LabelField::ALL {
            assert!(!theme.label(field).is_empty());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Catalog
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_list_presets_is_stable() {
    let catalog = PresetCatalog::builtin();
    let first: Vec<_> = list_presets(&catalog).iter().map(|p| p.id.clone()).collect();
    let second: Vec<_> = list_presets(&catalog).iter().map(|p| p.id.clone()).collect();
    assert_eq!(first, vec!["medical", "corporate", "government", "learning"]);
    assert_eq!(first, second);
}

#[test]
fn test_preset_defaults_replace_draft() {
    let catalog = PresetCatalog::builtin();
    let government = catalog.get("government").unwrap();
    let draft = preset_defaults(government);

    assert_eq!(draft.member_label.as_deref(), Some("Officer"));
    assert_eq!(draft.id_label.as_deref(), Some("Employee No."));
    assert_eq!(
        draft.group_placeholder.as_deref(),
        Some("e.g. Revenue, Health, Education")
    );

    let theme = resolve_theme("medical", Some(&draft), &catalog).unwrap();
    assert_eq!(theme.labels, government.labels);
}

// ═══════════════════════════════════════════════════════════════════════
// Tenant Settings
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_settings_fallback_preset() {
    let catalog = PresetCatalog::builtin();
    let config = RollcallConfig::default();

    let unset = TenantSettings::default();
    assert_eq!(unset.effective_preset_id(&catalog, &config), "corporate");

    let stale = TenantSettings::new("aviation", None);
    let theme = stale.effective_theme(&catalog, &config).unwrap();
    assert_eq!(theme.preset_id, "corporate");

    let learning = RollcallConfig::with_default_preset("learning");
    assert_eq!(stale.effective_preset_id(&catalog, &learning), "learning");
}

#[test]
fn test_settings_stored_labels_round_trip() {
    let catalog = PresetCatalog::builtin();
    let config = RollcallConfig::default();
    let labels = LabelOverrides::new()
        .with(LabelField::MemberLabel, "Volunteer")
        .with(LabelField::MemberLabelPlural, "Volunteers");

    let stored = labels.to_json().unwrap();
    let settings = TenantSettings::from_stored(Some("government".into()), Some(&stored));
    assert_eq!(settings.custom_labels, Some(labels));

    let theme = settings.effective_theme(&catalog, &config).unwrap();
    assert_eq!(theme.labels.member_label_plural, "Volunteers");
    assert_eq!(theme.labels.id_label, "Employee No.");
}

#[test]
fn test_editor_draft() {
    let catalog = PresetCatalog::builtin();
    let config = RollcallConfig::default();

    let fresh = TenantSettings::new("learning", None);
    assert_eq!(
        fresh.editor_draft(&catalog, &config),
        preset_defaults(catalog.get("learning").unwrap())
    );

    let custom = LabelOverrides::new().with(LabelField::IdLabel, "Admission No.");
    let customized = TenantSettings::new("learning", Some(custom.clone()));
    assert_eq!(customized.editor_draft(&catalog, &config), custom);

    let empty_catalog = PresetCatalog::new();
    assert!(fresh.editor_draft(&empty_catalog, &config).is_empty());
}
