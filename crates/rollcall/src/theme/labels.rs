//! Label fields, full label sets and per-tenant overrides

use serde::{Deserialize, Deserializer, Serialize};

/// The seven terminology fields a theme controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    /// Singular member noun ("Employee")
    MemberLabel,
    /// Plural member noun ("Employees")
    MemberLabelPlural,
    /// Heading of the ID column ("Employee ID")
    IdLabel,
    /// Heading of the group column ("Team / Division")
    GroupLabel,
    /// Example text for the name input
    NamePlaceholder,
    /// Example text for the ID input
    IdPlaceholder,
    /// Example text for the group input
    GroupPlaceholder,
}

impl LabelField {
    /// Every field, in editor order.
    pub const ALL: [LabelField; 7] = [
        LabelField::MemberLabel,
        LabelField::MemberLabelPlural,
        LabelField::IdLabel,
        LabelField::GroupLabel,
        LabelField::NamePlaceholder,
        LabelField::IdPlaceholder,
        LabelField::GroupPlaceholder,
    ];

    /// Key used in stored settings.
    pub fn key(self) -> &'static str {
        match self {
            LabelField::MemberLabel => "member_label",
            LabelField::MemberLabelPlural => "member_label_plural",
            LabelField::IdLabel => "id_label",
            LabelField::GroupLabel => "group_label",
            LabelField::NamePlaceholder => "name_placeholder",
            LabelField::IdPlaceholder => "id_placeholder",
            LabelField::GroupPlaceholder => "group_placeholder",
        }
    }

    /// Last-resort value when neither override nor preset has one.
    pub fn fallback(self) -> &'static str {
        match self {
            LabelField::MemberLabel => "Member",
            LabelField::MemberLabelPlural => "Members",
            LabelField::IdLabel => "ID",
            LabelField::GroupLabel => "Group",
            LabelField::NamePlaceholder => "Full name",
            LabelField::IdPlaceholder => "ID number",
            LabelField::GroupPlaceholder => "Group name",
        }
    }
}

/// A complete set of label values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    /// Singular member noun
    pub member_label: String,
    /// Plural member noun
    pub member_label_plural: String,
    /// ID column heading
    pub id_label: String,
    /// Group column heading
    pub group_label: String,
    /// Name input placeholder
    pub name_placeholder: String,
    /// ID input placeholder
    pub id_placeholder: String,
    /// Group input placeholder
    pub group_placeholder: String,
}

impl LabelSet {
    /// Build a set by asking `value` for each field.
    pub fn from_fn(mut value: impl FnMut(LabelField) -> String) -> Self {
        Self {
            member_label: value(LabelField::MemberLabel),
            member_label_plural: value(LabelField::MemberLabelPlural),
            id_label: value(LabelField::IdLabel),
            group_label: value(LabelField::GroupLabel),
            name_placeholder: value(LabelField::NamePlaceholder),
            id_placeholder: value(LabelField::IdPlaceholder),
            group_placeholder: value(LabelField::GroupPlaceholder),
        }
    }

    /// Value of one field.
    pub fn get(&self, field: LabelField) -> &str {
        match field {
            LabelField::MemberLabel => &self.member_label,
            LabelField::MemberLabelPlural => &self.member_label_plural,
            LabelField::IdLabel => &self.id_label,
            LabelField::GroupLabel => &self.group_label,
            LabelField::NamePlaceholder => &self.name_placeholder,
            LabelField::IdPlaceholder => &self.id_placeholder,
            LabelField::GroupPlaceholder => &self.group_placeholder,
        }
    }
}

/// Tenant-specific replacements for any subset of the label fields.
///
/// Deserialization is lenient: a field that is missing, not a string, or
/// blank comes back as `None`, so a bad stored value can never blank out a
/// label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    /// Singular member noun
    #[serde(deserialize_with = "lenient_label")]
    pub member_label: Option<String>,
    /// Plural member noun
    #[serde(deserialize_with = "lenient_label")]
    pub member_label_plural: Option<String>,
    /// ID column heading
    #[serde(deserialize_with = "lenient_label")]
    pub id_label: Option<String>,
    /// Group column heading
    #[serde(deserialize_with = "lenient_label")]
    pub group_label: Option<String>,
    /// Name input placeholder
    #[serde(deserialize_with = "lenient_label")]
    pub name_placeholder: Option<String>,
    /// ID input placeholder
    #[serde(deserialize_with = "lenient_label")]
    pub id_placeholder: Option<String>,
    /// Group input placeholder
    #[serde(deserialize_with = "lenient_label")]
    pub group_placeholder: Option<String>,
}

impl LabelOverrides {
    /// Overrides with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field, builder style.
    pub fn with(mut self, field: LabelField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    /// The usable override for a field: set and not blank.
    pub fn get(&self, field: LabelField) -> Option<&str> {
        let slot = match field {
            LabelField::MemberLabel => &self.member_label,
            LabelField::MemberLabelPlural => &self.member_label_plural,
            LabelField::IdLabel => &self.id_label,
            LabelField::GroupLabel => &self.group_label,
            LabelField::NamePlaceholder => &self.name_placeholder,
            LabelField::IdPlaceholder => &self.id_placeholder,
            LabelField::GroupPlaceholder => &self.group_placeholder,
        };
        slot.as_deref().filter(|value| !value.trim().is_empty())
    }

    /// Check if no field carries a usable override.
    pub fn is_empty(&self) -> bool {
        LabelField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Serialize for the settings store.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn slot_mut(&mut self, field: LabelField) -> &mut Option<String> {
        match field {
            LabelField::MemberLabel => &mut self.member_label,
            LabelField::MemberLabelPlural => &mut self.member_label_plural,
            LabelField::IdLabel => &mut self.id_label,
            LabelField::GroupLabel => &mut self.group_label,
            LabelField::NamePlaceholder => &mut self.name_placeholder,
            LabelField::IdPlaceholder => &mut self.id_placeholder,
            LabelField::GroupPlaceholder => &mut self.group_placeholder,
        }
    }
}

impl From<&LabelSet> for LabelOverrides {
    fn from(labels: &LabelSet) -> Self {
        LabelField::ALL
            .iter()
            .fold(LabelOverrides::new(), |overrides, field| {
                overrides.with(*field, labels.get(*field))
            })
    }
}

fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    })
}
