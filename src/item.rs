//! Identifiers and flags shared by every kind of record

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as _;


/// The identifier of a record inside a [`Collection`](crate::collection::Collection).
///
/// Identifiers are allocated by the collection that owns the record, and are never reused,
/// even after the record has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "#{}", self.0)
    }
}



bitflags! {
    /// Named booleans that can be toggled independently on a record
    pub struct Flags: u8 {
        /// The record has been starred by the user
        const STARRED = 1;
        /// The record is shared with other people
        const SHARED = 2;
        /// A message has been read
        const READ = 4;
        /// A contact is currently online
        const ONLINE = 8;
        /// An event spans whole days
        const ALL_DAY = 16;
    }
}

const FLAG_NAMES: [(&str, Flags); 5] = [
    ("starred", Flags::STARRED),
    ("shared", Flags::SHARED),
    ("read", Flags::READ),
    ("online", Flags::ONLINE),
    ("all_day", Flags::ALL_DAY),
];

impl Flags {
    /// Returns the flag that has this name (e.g. `"starred"`), if any
    pub fn from_name(name: &str) -> Option<Self> {
        FLAG_NAMES.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
    }

    /// The names of every flag that is set, in declaration order
    pub fn names(&self) -> Vec<&'static str> {
        FLAG_NAMES.iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Flags are (de)serialized as a list of names, e.g. `["read", "starred"]`
impl Serialize for Flags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D>(deserializer: D) -> Result<Flags, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut flags = Flags::empty();
        for name in names {
            match Flags::from_name(&name) {
                Some(flag) => flags.insert(flag),
                None => return Err(D::Error::custom(format!("unknown flag {:?}", name))),
            }
        }
        Ok(flags)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}



/// The status type of records that have no status at all.
///
/// This enum has no variant, so that no value of it can ever exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoStatus {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_names() {
        assert_eq!(Flags::from_name("read"), Some(Flags::READ));
        assert_eq!(Flags::from_name("unknown"), None);

        let flags = Flags::STARRED | Flags::READ;
        assert_eq!(flags.names(), vec!["starred", "read"]);
    }

    #[test]
    fn serde_flags() {
        let flags: Flags = serde_json::from_str(r#"["shared", "starred"]"#).unwrap();
        assert_eq!(flags, Flags::SHARED | Flags::STARRED);
        assert_eq!(serde_json::to_string(&flags).unwrap(), r#"["starred","shared"]"#);

        assert!(serde_json::from_str::<Flags>(r#"["pinned"]"#).is_err());
    }

    #[test]
    fn item_id_display() {
        let id: ItemId = "42".parse().unwrap();
        assert_eq!(id, ItemId::from(42));
        assert_eq!(id.to_string(), "#42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
