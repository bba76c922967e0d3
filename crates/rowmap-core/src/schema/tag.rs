use crate::{
    error::{Error, UnsupportedReason},
    model::{Annotation, FieldAttr, MemberModel, RecordModel},
};
use std::collections::BTreeMap;

const TRUTHY: [&str; 6] = ["true", "1", "yes", "on", "y", "t"];

/// Split a raw mapping tag into upper-cased keys and their values.
///
/// Segments are separated by `sep`; a segment ending in `\` continues into
/// the next one with a literal separator. A bare key maps to itself.
#[must_use]
pub fn parse_field_tag(raw: &str, sep: char) -> BTreeMap<String, String> {
    let mut settings = BTreeMap::new();
    let mut segments = raw.split(sep);

    while let Some(first) = segments.next() {
        let mut segment = first.to_string();
        while segment.ends_with('\\') {
            segment.pop();
            segment.push(sep);
            match segments.next() {
                Some(next) => segment.push_str(next),
                None => break,
            }
        }

        let (key, value) = match segment.split_once(':') {
            Some((key, value)) => (key.trim().to_uppercase(), Some(value)),
            None => (segment.trim().to_uppercase(), None),
        };

        match value {
            Some(value) => {
                settings.insert(key, value.to_string());
            }
            None if !key.is_empty() => {
                settings.insert(key.clone(), key);
            }
            None => {}
        }
    }

    settings
}

///
/// FieldTag
/// Mapping metadata for one member, whichever way it was declared.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldTag {
    pub column: String,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub statement: bool,
    pub sort: Option<i32>,
}

impl FieldTag {
    pub(crate) fn from_member(record: &RecordModel, member: &MemberModel) -> Result<Self, Error> {
        match member.annotation {
            Annotation::None => Ok(Self::default()),
            Annotation::Attr(attr) => Ok(Self::from(attr)),
            Annotation::Tag(raw) => Self::from_raw(raw).map_err(|detail| {
                Error::unsupported(
                    record.path,
                    UnsupportedReason::InvalidTag {
                        member: member.name,
                        detail,
                    },
                )
            }),
        }
    }

    /// Interpret a raw tag string. Unknown keys are ignored.
    pub fn from_raw(raw: &str) -> Result<Self, String> {
        let settings = parse_field_tag(raw, ';');
        let flag = |key: &str| {
            settings
                .get(key)
                .is_some_and(|v| v == key || TRUTHY.contains(&v.trim().to_lowercase().as_str()))
        };

        let sort = match settings.get("SORT") {
            Some(v) => Some(
                v.trim()
                    .parse::<i32>()
                    .map_err(|e| format!("sort '{v}' is not an integer: {e}"))?,
            ),
            None => None,
        };

        Ok(Self {
            column: settings.get("COLUMN").cloned().unwrap_or_default(),
            primary_key: flag("PRIMARYKEY"),
            auto_increment: flag("AUTOINCREMENT"),
            statement: flag("STATEMENT"),
            sort,
        })
    }
}

impl From<FieldAttr> for FieldTag {
    fn from(attr: FieldAttr) -> Self {
        Self {
            column: attr.column.unwrap_or_default().to_string(),
            primary_key: attr.primary_key,
            auto_increment: attr.auto_increment,
            statement: attr.statement,
            sort: attr.sort,
        }
    }
}
