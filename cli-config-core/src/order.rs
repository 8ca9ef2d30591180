//! Canonical ordering of interface identifiers.
//!
//! Every stage that emits or displays interfaces sorts them through
//! [`compare_interface_names`], so table views, SFP allocation and generated
//! output all agree on one order.

use std::cmp::Ordering;

/// Rank assigned to prefixes without a dedicated slot.
const UNRANKED: u16 = 999;

/// Compare two interface identifiers.
///
/// The prefix (name with digits, `/` and `-` removed) is ranked first:
/// VLAN interfaces, then aggregations, then gigabit ports, then uplink-class
/// ports, then everything else. Equal ranks fall back to the prefix text,
/// then to the embedded numbers compared element-wise (missing elements
/// count as zero), and finally to the raw string so the order is total.
pub fn compare_interface_names(a: &str, b: &str) -> Ordering {
    let prefix_a = prefix_of(a);
    let prefix_b = prefix_of(b);

    prefix_rank(&prefix_a)
        .cmp(&prefix_rank(&prefix_b))
        .then_with(|| prefix_a.cmp(&prefix_b))
        .then_with(|| compare_numbers(&numbers_of(a), &numbers_of(b)))
        .then_with(|| a.cmp(b))
}

/// Sort any slice of keyed items by interface order of the key.
pub fn sort_by_interface_name<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|x, y| compare_interface_names(key(x), key(y)));
}

/// Return the keys of an iterator sorted in interface order.
pub fn sorted_names<'a, I>(names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut out: Vec<&str> = names.into_iter().map(String::as_str).collect();
    out.sort_by(|a, b| compare_interface_names(a, b));
    out
}

fn prefix_of(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_ascii_digit() && *c != '/' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn prefix_rank(prefix: &str) -> u16 {
    match prefix {
        "vlaninterface" | "vlan" => 0,
        "bridgeaggregation" | "lag" => 1,
        "gigabitethernet" => 2,
        "tengigabitethernet" | "twentyfivegige" | "fortygige" | "hundredgige" => 3,
        _ => UNRANKED,
    }
}

fn numbers_of(name: &str) -> Vec<u64> {
    name.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<u64>().unwrap_or(u64::MAX))
        .collect()
}

fn compare_numbers(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for idx in 0..len {
        let left = a.get(idx).copied().unwrap_or(0);
        let right = b.get(idx).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
