use crate::error::{GeneratorError, Result};

/// Create a resource identifier the target dialect accepts from a record
/// name. Identifiers allow only letters, numbers, dashes and underscores,
/// while DNS names allow far more.
///
/// 1. One trailing dot is stripped, remaining dots become `-`
/// 2. `*` becomes the string "wildcard"
/// 3. Internationalized names are punycode-converted
/// 4. Any remaining disallowed character becomes `_`
/// 5. If the result does not start with a letter or underscore, one is
///    prepended
///
/// Punycode comes before the blanket substitution so recognizable non-ASCII
/// labels survive as their `xn--` form.
pub fn sanitize_record_name(name: &str) -> Result<String> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let replaced = trimmed.replace('.', "-").replace('*', "wildcard");

    let ascii = if replaced.is_ascii() {
        replaced
    } else {
        match idna::punycode::encode_str(&replaced) {
            Some(encoded) => format!("xn--{encoded}"),
            None => {
                return Err(GeneratorError::InvalidName {
                    name: name.to_string(),
                });
            }
        }
    };

    let mut id: String = ascii
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let legal_start = id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !legal_start {
        id.insert(0, '_');
    }

    Ok(id)
}
