use serde::{Deserialize, Serialize};

/// Structured business details extracted from a free-text block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub name: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl BusinessProfile {
    /// Classify the free-text block line by line.
    ///
    /// The first line, trimmed, becomes the name regardless of content.
    /// Every line (the first included) then goes to the first matching rule
    /// below; a field once assigned is never overwritten, and a line whose
    /// rule's field is already taken is dropped:
    ///
    /// 1. contains "tax"/"vat"/"btw" (case-insensitive) → tax id
    /// 2. email shape → email
    /// 3. phone shape → phone
    /// 4. otherwise → address, if still unset, non-empty, not identical to
    ///    the name and not a substring of the tax id
    ///
    /// Infallible: empty input yields an all-empty profile.
    pub fn parse(details: &str) -> Self {
        let mut profile = Self::default();

        let lines: Vec<&str> = details.lines().map(str::trim).collect();
        if let Some(first) = lines.first() {
            if !first.is_empty() {
                profile.name = Some((*first).to_string());
            }
        }

        for line in lines {
            if line.is_empty() {
                continue;
            }
            let lower = line.to_lowercase();
            if lower.contains("tax") || lower.contains("vat") || lower.contains("btw") {
                if profile.tax_id.is_none() {
                    profile.tax_id = Some(line.to_string());
                }
            } else if looks_like_email(line) {
                if profile.email.is_none() {
                    profile.email = Some(line.to_string());
                }
            } else if looks_like_phone(line) {
                if profile.phone.is_none() {
                    profile.phone = Some(line.to_string());
                }
            } else if profile.address.is_none()
                && profile.name.as_deref() != Some(line)
                && profile.tax_id.as_deref().is_none_or(|t| !t.contains(line))
            {
                profile.address = Some(line.to_string());
            }
        }

        profile
    }

    /// Replace the parsed name with a caller-supplied one, when non-empty.
    /// The business name entered in the wizard wins over the free text.
    pub fn with_name_override(mut self, name: &str) -> Self {
        let name = name.trim();
        if !name.is_empty() {
            self.name = Some(name.to_string());
        }
        self
    }
}

/// `local@domain.tld` with a 2+ letter alphabetic TLD.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if host.is_empty()
        || !host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Optional leading `+`, then at least 8 characters, all of them digits,
/// spaces, hyphens or parentheses.
fn looks_like_phone(s: &str) -> bool {
    let rest = s.strip_prefix('+').unwrap_or(s);
    rest.len() >= 8
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')')
}
