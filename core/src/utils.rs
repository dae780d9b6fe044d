//! Small helpers shared across modules.

/// True when `s` is empty or whitespace only.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Compose a contract name from a naming attribute.
///
/// - `namespace` blank → `name`
/// - otherwise → `namespace.name`
///
/// A blank `name` yields an empty string; the registry rejects it.
pub fn compose_contract_name(namespace: &str, name: &str) -> String {
    if is_blank(name) {
        return String::new();
    }
    if is_blank(namespace) {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

/// Last path segment of a Rust type name, generics kept.
/// `alloc::string::String` → `String`, `my::Msg<u8>` → `Msg<u8>`.
pub fn short_type_name(full: &str) -> &str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

/// Hex preview of a byte buffer for logs, truncated to `max` bytes.
pub fn fmt_bytes(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        hex::encode(bytes)
    } else {
        format!("{}…(+{} bytes)", hex::encode(&bytes[..max]), bytes.len() - max)
    }
}
