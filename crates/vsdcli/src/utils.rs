//! Small helpers shared by the resource commands: parent-ID selection,
//! `key:value` parsing and IPv4 netmask conversions.

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Pick the single parent scope from a set of mutually-exclusive `--xxx-id`
/// options. Returns the resource type (singular) and the ID; callers build
/// paths like `{type}s/{id}/children` from it.
pub fn check_id(ids: &[(&str, Option<&str>)]) -> Result<(String, String)> {
    match check_id_optional(ids)? {
        Some(found) => Ok(found),
        None => bail!("You must specify one and only one id in [{}]", flags(ids)),
    }
}

/// Same as [`check_id`] but zero IDs is allowed (unscoped collections such
/// as `domains` or `staticroutes`).
pub fn check_id_optional(ids: &[(&str, Option<&str>)]) -> Result<Option<(String, String)>> {
    let mut found = None;
    for (name, value) in ids {
        if let Some(value) = value {
            if found.is_some() {
                bail!("You must specify one and only one id in [{}]", flags(ids));
            }
            found = Some(((*name).to_string(), (*value).to_string()));
        }
    }
    Ok(found)
}

fn flags(ids: &[(&str, Option<&str>)]) -> String {
    ids.iter()
        .map(|(name, _)| format!("--{name}-id"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse repeated `--key-value k:v` options into a JSON object. Values stay
/// strings; VSD coerces server-side.
pub fn key_value_params(pairs: &[String]) -> Result<Value> {
    let mut params = serde_json::Map::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once(':')
            .with_context(|| format!("Invalid key/value pair: {pair}"))?;
        params.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(Value::Object(params))
}

/// Split a repeated `--header name:value` option.
pub fn header_pairs(pairs: &[String]) -> Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| {
            let (name, value) = pair
                .split_once(':')
                .with_context(|| format!("Invalid header: {pair}"))?;
            Ok((name.to_string(), value.trim_start().to_string()))
        })
        .collect()
}

/// `255.255.255.0` -> `24`. Only contiguous masks are representable.
pub fn netmask_to_length(netmask: &str) -> Result<u32> {
    let mut length = 0;
    let octets: Vec<&str> = netmask.split('.').collect();
    if octets.len() != 4 {
        bail!("Invalid netmask: {netmask}");
    }
    for octet in octets {
        length += match octet {
            "0" => 0,
            "128" => 1,
            "192" => 2,
            "224" => 3,
            "240" => 4,
            "248" => 5,
            "252" => 6,
            "254" => 7,
            "255" => 8,
            _ => bail!("Invalid netmask: {netmask}"),
        };
    }
    Ok(length)
}

/// `24` -> `255.255.255.0`.
pub fn length_to_netmask(length: u32) -> Result<String> {
    if length > 32 {
        bail!("Invalid mask length: {length}");
    }
    let mask: u64 = (0xffff_ffff_u64 << (32 - length)) & 0xffff_ffff;
    let octets: Vec<String> = [3, 2, 1, 0]
        .iter()
        .map(|shift| ((mask >> (shift * 8)) & 0xff).to_string())
        .collect();
    Ok(octets.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_id_picks_the_single_given_id() {
        let (kind, id) = check_id(&[
            ("subnet", None),
            ("zone", Some("z1")),
            ("domain", None),
        ])
        .unwrap();
        assert_eq!((kind.as_str(), id.as_str()), ("zone", "z1"));
    }

    #[test]
    fn check_id_rejects_zero_and_multiple_ids() {
        assert!(check_id(&[("subnet", None), ("zone", None)]).is_err());
        assert!(check_id(&[("subnet", Some("s1")), ("zone", Some("z1"))]).is_err());
        // the optional variant allows zero but still rejects two
        assert!(check_id_optional(&[("subnet", None)]).unwrap().is_none());
        assert!(check_id_optional(&[("subnet", Some("s1")), ("zone", Some("z1"))]).is_err());
    }

    #[test]
    fn key_value_splits_on_first_colon_only() {
        let params = key_value_params(&["description:a:b".to_string()]).unwrap();
        assert_eq!(params, json!({"description": "a:b"}));
        assert!(key_value_params(&["no-separator".to_string()]).is_err());
    }

    #[test]
    fn netmask_round_trip() {
        assert_eq!(netmask_to_length("255.255.255.0").unwrap(), 24);
        assert_eq!(netmask_to_length("255.255.240.0").unwrap(), 20);
        assert_eq!(netmask_to_length("0.0.0.0").unwrap(), 0);
        assert_eq!(length_to_netmask(24).unwrap(), "255.255.255.0");
        assert_eq!(length_to_netmask(20).unwrap(), "255.255.240.0");
        assert_eq!(length_to_netmask(0).unwrap(), "0.0.0.0");
        assert_eq!(length_to_netmask(32).unwrap(), "255.255.255.255");
        assert!(netmask_to_length("255.0.255.0").is_ok()); // per-octet table, as the API accepts
        assert!(netmask_to_length("255.255.251.0").is_err());
        assert!(length_to_netmask(33).is_err());
    }
}
