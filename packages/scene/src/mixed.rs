use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A property value that may differ across sub-parts of a node.
///
/// On the wire the heterogeneous case is the bare string `"mixed"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Mixed<T> {
    Uniform(T),
    Heterogeneous,
}

impl<T> Mixed<T> {
    pub fn uniform(&self) -> Option<&T> {
        match self {
            Mixed::Uniform(value) => Some(value),
            Mixed::Heterogeneous => None,
        }
    }

    pub fn is_heterogeneous(&self) -> bool {
        matches!(self, Mixed::Heterogeneous)
    }
}

impl<T: Default> Default for Mixed<T> {
    fn default() -> Self {
        Mixed::Uniform(T::default())
    }
}

impl<T> From<T> for Mixed<T> {
    fn from(value: T) -> Self {
        Mixed::Uniform(value)
    }
}

#[derive(Serialize, Deserialize)]
enum Sentinel {
    #[serde(rename = "mixed")]
    Mixed,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Wire<T> {
    Uniform(T),
    Sentinel(Sentinel),
}

impl<T: Serialize> Serialize for Mixed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mixed::Uniform(value) => value.serialize(serializer),
            Mixed::Heterogeneous => Sentinel::Mixed.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Mixed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Uniform(value) => Mixed::Uniform(value),
            Wire::Sentinel(Sentinel::Mixed) => Mixed::Heterogeneous,
        })
    }
}
