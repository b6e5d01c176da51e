use serde::{Deserialize, Deserializer};

/// Deserializes an explicit JSON `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so that absent fields are covered too:
///
/// ```ignore
/// #[serde(default, deserialize_with = "null_as_default")]
/// pub technologies: Vec<String>,
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
