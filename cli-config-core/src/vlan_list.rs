use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

/// Lowest and highest usable 802.1Q VLAN ids.
pub const VLAN_ID_MIN: u16 = 1;
pub const VLAN_ID_MAX: u16 = 4094;

/// A merge-accumulating VLAN membership list.
///
/// Ids keep the order in which they were first seen; rendering sorts them.
/// `All` absorbs every later merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VlanList {
    #[default]
    Unset,
    All,
    Ids(Vec<u16>),
}

impl VlanList {
    /// Build a list from ids, dropping duplicates but keeping first-seen order.
    pub fn from_ids<I: IntoIterator<Item = u16>>(ids: I) -> Self {
        let mut list = VlanList::Unset;
        list.merge(ids);
        list
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, VlanList::Unset)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, VlanList::All)
    }

    /// Union `ids` into the list, appending unseen ids in the given order.
    pub fn merge<I: IntoIterator<Item = u16>>(&mut self, ids: I) {
        match self {
            VlanList::All => {}
            VlanList::Ids(current) => {
                for id in ids {
                    if !current.contains(&id) {
                        current.push(id);
                    }
                }
            }
            VlanList::Unset => {
                let mut current = Vec::new();
                for id in ids {
                    if !current.contains(&id) {
                        current.push(id);
                    }
                }
                if !current.is_empty() {
                    *self = VlanList::Ids(current);
                }
            }
        }
    }

    /// Ids in first-seen order. Empty for `Unset` and `All`.
    pub fn ids(&self) -> &[u16] {
        match self {
            VlanList::Ids(ids) => ids,
            _ => &[],
        }
    }

    /// The most recently added id, in source order.
    pub fn last(&self) -> Option<u16> {
        self.ids().last().copied()
    }

    pub fn first(&self) -> Option<u16> {
        self.ids().first().copied()
    }

    /// Ids sorted numerically.
    pub fn sorted(&self) -> Vec<u16> {
        let mut ids = self.ids().to_vec();
        ids.sort_unstable();
        ids
    }

    /// True when the list holds exactly the single id `id`.
    pub fn is_exactly(&self, id: u16) -> bool {
        self.ids() == [id]
    }
}

impl Display for VlanList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VlanList::Unset => write!(f, "-"),
            VlanList::All => write!(f, "all"),
            VlanList::Ids(_) => write!(f, "{}", join_ids(&self.sorted())),
        }
    }
}

impl Serialize for VlanList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Extract every maximal digit run of `text` that is a valid VLAN id.
///
/// Tokens such as `to` or malformed numbers are simply absent from the result.
pub fn extract_vlan_ids(text: &str) -> Vec<u16> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<u16>().ok())
        .filter(|id| (VLAN_ID_MIN..=VLAN_ID_MAX).contains(id))
        .collect()
}

/// Render ids as a comma-joined, space-free list.
pub fn join_ids(ids: &[u16]) -> String {
    ids.iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Union several id slices, deduplicated and sorted numerically.
pub fn union_sorted(parts: &[&[u16]]) -> Vec<u16> {
    let mut out: Vec<u16> = parts.iter().flat_map(|p| p.iter().copied()).collect();
    out.sort_unstable();
    out.dedup();
    out
}
