//! Preset global-variable tables
//!
//! Config files commonly splice shared environment presets into a fragment's
//! `globals` map instead of listing every identifier by hand. These presets
//! are modeled as plain ordered maps combined with [`merge`], an explicit
//! mapping-union where the later source wins on key collision.

use indexmap::IndexMap;

use super::fragment::GlobalValue;

/// Globals table type used by presets and fragments alike
pub type GlobalsMap = IndexMap<String, GlobalValue>;

fn table(entries: &[(&str, GlobalValue)]) -> GlobalsMap {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

/// Identifiers provided by browser environments
pub fn browser() -> GlobalsMap {
    use GlobalValue::*;
    table(&[
        ("window", Readonly),
        ("document", Readonly),
        ("navigator", Readonly),
        ("location", Writable),
        ("history", Readonly),
        ("console", Readonly),
        ("fetch", Readonly),
        ("alert", Readonly),
        ("localStorage", Readonly),
        ("sessionStorage", Readonly),
        ("setTimeout", Readonly),
        ("clearTimeout", Readonly),
        ("setInterval", Readonly),
        ("clearInterval", Readonly),
        ("requestAnimationFrame", Readonly),
        ("URL", Readonly),
        ("URLSearchParams", Readonly),
        ("Event", Readonly),
        ("CustomEvent", Readonly),
        ("XMLHttpRequest", Readonly),
    ])
}

/// Identifiers provided by the Node.js runtime
pub fn node() -> GlobalsMap {
    use GlobalValue::*;
    table(&[
        ("process", Readonly),
        ("console", Readonly),
        ("Buffer", Readonly),
        ("global", Readonly),
        ("__dirname", Readonly),
        ("__filename", Readonly),
        ("require", Readonly),
        ("module", Writable),
        ("exports", Writable),
        ("setTimeout", Readonly),
        ("clearTimeout", Readonly),
        ("setInterval", Readonly),
        ("clearInterval", Readonly),
        ("setImmediate", Readonly),
        ("clearImmediate", Readonly),
        ("queueMicrotask", Readonly),
        ("URL", Readonly),
        ("URLSearchParams", Readonly),
        ("TextEncoder", Readonly),
        ("TextDecoder", Readonly),
    ])
}

/// ECMAScript language builtins present in every environment
pub fn es_builtin() -> GlobalsMap {
    use GlobalValue::*;
    table(&[
        ("Array", Readonly),
        ("Object", Readonly),
        ("Function", Readonly),
        ("String", Readonly),
        ("Number", Readonly),
        ("Boolean", Readonly),
        ("Symbol", Readonly),
        ("BigInt", Readonly),
        ("Math", Readonly),
        ("JSON", Readonly),
        ("Date", Readonly),
        ("RegExp", Readonly),
        ("Error", Readonly),
        ("Promise", Readonly),
        ("Map", Readonly),
        ("Set", Readonly),
        ("WeakMap", Readonly),
        ("WeakSet", Readonly),
        ("Proxy", Readonly),
        ("Reflect", Readonly),
        ("globalThis", Readonly),
        ("Infinity", Readonly),
        ("NaN", Readonly),
        ("undefined", Readonly),
    ])
}

/// Union of several globals tables; later sources win on key collision
pub fn merge<I>(sources: I) -> GlobalsMap
where
    I: IntoIterator<Item = GlobalsMap>,
{
    let mut merged = GlobalsMap::new();
    for source in sources {
        merged.extend(source);
    }
    merged
}
