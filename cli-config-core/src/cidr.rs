use std::net::Ipv4Addr;

/// Render an address and mask as `ip/prefix`.
///
/// The mask may be dotted (`255.255.255.0`) or a bare prefix length (`24`).
/// The prefix is the number of set bits in the mask. Anything unparseable is
/// rendered literally as `ip/mask`.
pub fn to_cidr(ip: &str, mask: &str) -> String {
    match prefix_len(mask) {
        Some(len) => format!("{ip}/{len}"),
        None => format!("{ip}/{mask}"),
    }
}

fn prefix_len(mask: &str) -> Option<u32> {
    if let Ok(dotted) = mask.parse::<Ipv4Addr>() {
        return Some(u32::from(dotted).count_ones());
    }
    mask.parse::<u32>().ok().filter(|len| *len <= 32)
}
