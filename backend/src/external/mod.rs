//! External API integrations

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub mod ml;
pub mod nws;
pub mod spc;

pub use ml::MlClient;
pub use nws::AlertClient;
pub use spc::OutlookClient;

/// Deserialize a field, treating a value of the wrong shape as absent
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize an array, dropping elements that do not fit `T`
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}
