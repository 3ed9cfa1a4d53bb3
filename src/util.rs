//! Small helpers with no hex knowledge of their own

/// Trait for any type that is addressed by a hex coordinate. Used to recover
/// map keys when deserializing a coordinate-keyed map from a list.
pub trait HasCoord {
    type Coord;

    fn coord(&self) -> Self::Coord;
}

/// Macro to time some expression, then log the expression and how long it
/// took to execute. Takes an optional log level, which defaults to `Debug`.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

// Serialize a coordinate-keyed map as a list instead of a map. This is useful
// because hex coordinates generally shouldn't be used as serialized map keys,
// since JSON and other formats don't support complex keys. The key is
// redundant anyway: every stored element carries its own coordinate.
pub mod coord_map_to_vec_serde {
    use crate::util::HasCoord;
    use fnv::FnvBuildHasher;
    use indexmap::IndexMap;
    use serde::{
        ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
    };
    use std::hash::Hash;

    /// Serialize a coordinate-keyed map as a list
    pub fn serialize<C, T, S>(
        map: &IndexMap<C, T, FnvBuildHasher>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        C: Hash + Eq,
        T: Serialize,
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for element in map.values() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }

    /// Deserialize a list of values into a map. The deserialized type must
    /// implement [HasCoord] so that we can derive a key for each element.
    pub fn deserialize<'de, C, T, D>(
        deserializer: D,
    ) -> Result<IndexMap<C, T, FnvBuildHasher>, D::Error>
    where
        C: Hash + Eq,
        T: Deserialize<'de> + HasCoord<Coord = C>,
        D: Deserializer<'de>,
    {
        let vec: Vec<T> = Vec::deserialize(deserializer)?;
        Ok(vec
            .into_iter()
            .map(|element| (element.coord(), element))
            .collect())
    }
}
