use super::record::{LeaveEntry, LeaveKind};
use super::status::{normalize_status, NormalizedStatus};
use chrono::Datelike;
use serde::{de::Error as _, Deserialize, Deserializer};
use std::str::FromStr;

/// Dashboard filters. Every field is optional and unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeaveFilter {
    pub search: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub month: Option<u32>,
    #[serde(deserialize_with = "lenient_number")]
    pub year: Option<i32>,
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient_kind")]
    pub kind: Option<LeaveKind>,
}

impl LeaveFilter {
    pub fn matches(&self, entry: &LeaveEntry) -> bool {
        self.matches_search(entry)
            && self.matches_period(entry)
            && self.matches_status(entry)
            && self.kind.map_or(true, |kind| kind == entry.kind)
    }

    pub fn apply<'a>(
        &'a self,
        entries: &'a [LeaveEntry],
    ) -> impl Iterator<Item = &'a LeaveEntry> {
        entries.iter().filter(move |entry| self.matches(entry))
    }

    fn matches_search(&self, entry: &LeaveEntry) -> bool {
        let Some(needle) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
        else {
            return true;
        };

        let needle = needle.to_lowercase();
        [
            &entry.id,
            &entry.applicant,
            &entry.leave_type,
            &entry.reason,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_period(&self, entry: &LeaveEntry) -> bool {
        if self.month.is_none() && self.year.is_none() {
            return true;
        }

        let Some(date) = entry.from_date else {
            return false;
        };

        self.month.map_or(true, |month| date.month() == month)
            && self.year.map_or(true, |year| date.year() == year)
    }

    fn matches_status(&self, entry: &LeaveEntry) -> bool {
        match self.status_predicate() {
            Some(wanted) => normalize_status(&entry.status.raw_status) == wanted,
            None => true,
        }
    }

    fn status_predicate(&self) -> Option<NormalizedStatus> {
        let raw = self.status.as_deref()?.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return None;
        }
        Some(normalize_status(raw))
    }
}

// Accepts "od", "on-duty", "leave" and friends; blank means unset.
fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<LeaveKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => LeaveKind::parse(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown leave kind '{value}'"))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

// Query strings carry numbers as text and send blanks for "all"; JSON bodies carry real numbers.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => T::try_from(value)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("number {value} is out of range"))),
        Some(NumberOrText::Text(text)) => {
            let value = text.trim();
            if value.is_empty() {
                return Ok(None);
            }
            value
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected a number, got '{value}'")))
        }
    }
}
