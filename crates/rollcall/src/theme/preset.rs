//! Built-in occupation presets

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::labels::LabelSet;

/// Display-only metadata of a preset. Overrides never touch these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMeta {
    /// Short name shown on picker cards
    pub name: String,
    /// Long name shown in page headers
    pub full_name: String,
    /// Picker icon
    pub emoji: String,
    /// One-line description
    pub tagline: String,
    /// CSS gradient for hero areas
    pub gradient: String,
    /// CSS accent color
    pub accent_color: String,
}

/// A named bundle of terminology and styling for one occupation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreset {
    /// Catalog key
    pub id: String,
    /// Default label values
    pub labels: LabelSet,
    /// Styling and picker text
    pub display: DisplayMeta,
}

/// Ordered, read-only table of presets keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: IndexMap<String, ThemePreset>,
}

impl PresetCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four presets shipped with the dashboard, in picker order.
    pub fn builtin() -> Self {
        [medical(), corporate(), government(), learning()]
            .into_iter()
            .collect()
    }

    /// Add or replace a preset.
    pub fn insert(&mut self, preset: ThemePreset) {
        self.presets.insert(preset.id.clone(), preset);
    }

    /// Look up a preset by id.
    pub fn get(&self, id: &str) -> Option<&ThemePreset> {
        self.presets.get(id)
    }

    /// Check if the catalog has a preset with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.presets.contains_key(id)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Iterate presets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ThemePreset> {
        self.presets.values()
    }
}

impl FromIterator<ThemePreset> for PresetCatalog {
    fn from_iter<I: IntoIterator<Item = ThemePreset>>(iter: I) -> Self {
        let mut catalog = PresetCatalog::new();
        for preset in iter {
            catalog.insert(preset);
        }
        catalog
    }
}

// ═══════════════════════════════════════════════════════════════════
// Built-in Presets
// ═══════════════════════════════════════════════════════════════════

struct PresetSpec {
    id: &'static str,
    labels: [&'static str; 7],
    display: [&'static str; 6],
}

impl From<PresetSpec> for ThemePreset {
    fn from(spec: PresetSpec) -> Self {
        let [member, plural, id_label, group, name_ph, id_ph, group_ph] = spec.labels;
        let [name, full_name, emoji, tagline, gradient, accent_color] = spec.display;
        ThemePreset {
            id: spec.id.to_string(),
            labels: LabelSet {
                member_label: member.to_string(),
                member_label_plural: plural.to_string(),
                id_label: id_label.to_string(),
                group_label: group.to_string(),
                name_placeholder: name_ph.to_string(),
                id_placeholder: id_ph.to_string(),
                group_placeholder: group_ph.to_string(),
            },
            display: DisplayMeta {
                name: name.to_string(),
                full_name: full_name.to_string(),
                emoji: emoji.to_string(),
                tagline: tagline.to_string(),
                gradient: gradient.to_string(),
                accent_color: accent_color.to_string(),
            },
        }
    }
}

fn medical() -> ThemePreset {
    PresetSpec {
        id: "medical",
        labels: [
            "Staff Member",
            "Staff Members",
            "Staff ID",
            "Ward / Department",
            "e.g. Dr. Ananya Krishnan",
            "e.g. MED-2024-001",
            "e.g. Cardiology, ICU, Emergency",
        ],
        display: [
            "Medical",
            "Healthcare & Medical",
            "🏥",
            "Manage staff attendance across wards & departments",
            "linear-gradient(135deg, #0ea5e9 0%, #06b6d4 50%, #0891b2 100%)",
            "#0ea5e9",
        ],
    }
    .into()
}

fn corporate() -> ThemePreset {
    PresetSpec {
        id: "corporate",
        labels: [
            "Employee",
            "Employees",
            "Employee ID",
            "Team / Division",
            "e.g. Priya Mehta",
            "e.g. EMP-2024-042",
            "e.g. Engineering, Product, Sales",
        ],
        display: [
            "Corporate",
            "Corporate & Business",
            "💼",
            "Track employee attendance across teams & divisions",
            "linear-gradient(135deg, #f59e0b 0%, #d97706 50%, #b45309 100%)",
            "#f59e0b",
        ],
    }
    .into()
}

fn government() -> ThemePreset {
    PresetSpec {
        id: "government",
        labels: [
            "Officer",
            "Officers",
            "Employee No.",
            "Department / Ministry",
            "e.g. Rajesh Kumar Singh",
            "e.g. GOV-IAS-2024-007",
            "e.g. Revenue, Health, Education",
        ],
        display: [
            "Government",
            "Government & Public Sector",
            "🏛️",
            "Official attendance tracking for government departments",
            "linear-gradient(135deg, #16a34a 0%, #15803d 40%, #f97316 100%)",
            "#16a34a",
        ],
    }
    .into()
}

fn learning() -> ThemePreset {
    PresetSpec {
        id: "learning",
        labels: [
            "Student",
            "Students",
            "Roll Number",
            "Class / Course",
            "e.g. Arjun Sharma",
            "e.g. CS2024001",
            "e.g. B.Tech CSE, NEET Batch, MBA Finance",
        ],
        display: [
            "Education",
            "Education & Learning",
            "🎓",
            "Attendance for students across courses & institutions",
            "linear-gradient(135deg, #8b5cf6 0%, #7c3aed 50%, #6d28d9 100%)",
            "#8b5cf6",
        ],
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let ids: Vec<_> = PresetCatalog::builtin().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["medical", "corporate", "government", "learning"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut catalog = PresetCatalog::builtin();
        let mut medical = catalog.get("medical").unwrap().clone();
        medical.display.emoji = "⚕️".into();
        catalog.insert(medical);

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.iter().next().unwrap().display.emoji, "⚕️");
    }
}
