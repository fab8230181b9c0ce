use serde::{Deserialize, Serialize};

/// The four semantic fields an invoice line needs from the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Date,
    Description,
    Amount,
    Reference,
}

impl RequiredField {
    pub const ALL: [RequiredField; 4] = [
        Self::Date,
        Self::Description,
        Self::Amount,
        Self::Reference,
    ];

    /// Stable lowercase id, also the substring used for auto-detection.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Reference => "reference",
        }
    }
}

/// Mapping from each required field to a source header name.
///
/// The mapper is stateless: [`FieldMapping::suggest`] computes a one-shot
/// proposal and the caller owns every edit after that. User overrides are
/// plain assignments via [`FieldMapping::set`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub reference: Option<String>,
}

impl FieldMapping {
    /// Best-effort proposal: for each field, the first header (in given
    /// order) whose lowercased text contains the field id as a substring.
    /// First match wins — deterministic, not "best" match.
    pub fn suggest(headers: &[String]) -> Self {
        let mut mapping = Self::default();
        for field in RequiredField::ALL {
            let hit = headers
                .iter()
                .find(|h| h.to_lowercase().contains(field.id()));
            if let Some(header) = hit {
                mapping.set(field, header.clone());
            }
        }
        mapping
    }

    pub fn get(&self, field: RequiredField) -> Option<&str> {
        match field {
            RequiredField::Date => self.date.as_deref(),
            RequiredField::Description => self.description.as_deref(),
            RequiredField::Amount => self.amount.as_deref(),
            RequiredField::Reference => self.reference.as_deref(),
        }
    }

    pub fn set(&mut self, field: RequiredField, header: impl Into<String>) {
        let slot = match field {
            RequiredField::Date => &mut self.date,
            RequiredField::Description => &mut self.description,
            RequiredField::Amount => &mut self.amount,
            RequiredField::Reference => &mut self.reference,
        };
        *slot = Some(header.into());
    }

    /// True iff every required field maps to a non-empty header name.
    pub fn is_complete(&self) -> bool {
        RequiredField::ALL
            .iter()
            .all(|f| self.get(*f).is_some_and(|h| !h.is_empty()))
    }

    /// The fields still unset (or set to an empty name), in declaration order.
    pub fn missing(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none_or(str::is_empty))
            .collect()
    }
}
