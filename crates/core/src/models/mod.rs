pub mod career_mode;
pub mod finance;
pub mod player;
pub mod season;
pub mod settings;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing key.
///
/// Older blobs carry `null` for collections that never got initialised.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
