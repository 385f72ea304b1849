use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The authenticated identity the console executes scripts as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound_partition_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub output_text: String,
    /// Set when the engine could not be reached and `output_text` is the
    /// client's own failure message.
    failed: bool,
}

impl ExecutionResult {
    pub fn new(output_text: impl Into<String>) -> Self {
        Self {
            output_text: output_text.into(),
            failed: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            output_text: message.into(),
            failed: true,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failed
    }

    pub fn is_empty(&self) -> bool {
        self.output_text.is_empty()
    }
}

/// Disk allocation fit as reported by the engine.
///
/// The engine emits either a word (`first`) or its short code (`FF`); the
/// original spelling is kept so the client displays back exactly what it got.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fit {
    First(String),
    Best(String),
    Worst(String),
    Other(String),
}

impl Fit {
    pub fn parse(raw: &str) -> Self {
        let code = raw.trim().to_ascii_lowercase();
        match code.as_str() {
            "first" | "ff" | "f" => Fit::First(raw.to_string()),
            "best" | "bf" | "b" => Fit::Best(raw.to_string()),
            "worst" | "wf" | "w" => Fit::Worst(raw.to_string()),
            _ => Fit::Other(raw.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Fit::First(s) | Fit::Best(s) | Fit::Worst(s) | Fit::Other(s) => s,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Fit::First(_) => "first",
            Fit::Best(_) => "best",
            Fit::Worst(_) => "worst",
            Fit::Other(_) => "other",
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Fit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// The engine sends fit either as text or as the raw byte of its code
/// (`70` for `F`).
#[derive(Deserialize)]
#[serde(untagged)]
enum WireFit {
    Text(String),
    Byte(u64),
}

impl<'de> Deserialize<'de> for Fit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match WireFit::deserialize(deserializer)? {
            WireFit::Text(s) => s,
            WireFit::Byte(n) => match u8::try_from(n) {
                Ok(b) if b.is_ascii_graphic() => char::from(b).to_string(),
                _ => n.to_string(),
            },
        };
        Ok(Fit::parse(&raw))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireSize {
    Whole(u64),
    Fractional(f64),
}

fn size_from_any_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match WireSize::deserialize(deserializer)? {
        WireSize::Whole(n) => n,
        // Saturating cast: negatives and NaN become 0.
        WireSize::Fractional(f) => f.round() as u64,
    })
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A virtual disk as listed by the engine's catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskDescriptor {
    pub name: String,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(deserialize_with = "size_from_any_number")]
    pub size: u64,
    pub fit: Fit,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub mounted_partitions: Vec<String>,
}

/// Decode a `GET /disks` body entry by entry. A malformed entry is skipped
/// with a warning instead of failing the whole catalog; a `null` body is an
/// empty catalog.
pub fn decode_disks(body: serde_json::Value) -> anyhow::Result<Vec<DiskDescriptor>> {
    let entries = match body {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Array(entries) => entries,
        other => anyhow::bail!("expected a list of disks, got {}", json_kind(&other)),
    };

    let mut disks = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<DiskDescriptor>(entry) {
            Ok(disk) => disks.push(disk),
            Err(err) => tracing::warn!(index, error = %err, "skipping malformed disk entry"),
        }
    }
    Ok(disks)
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

impl DiskDescriptor {
    pub fn partitions_label(&self) -> String {
        if self.mounted_partitions.is_empty() {
            "Ninguna".to_string()
        } else {
            self.mounted_partitions.join(", ")
        }
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
