use std::ops::Deref;

use serde::Deserialize;

/// Duration deserialized from a human readable string like `"30s"` or
/// `"1h 30m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.split_whitespace()
            .map(parse_component)
            .try_fold(std::time::Duration::default(), |acc, seconds| {
                seconds.map(|seconds| acc + std::time::Duration::from_secs(seconds))
            })
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom("Invalid duration"))
    }
}

fn parse_component(component: &str) -> Option<u64> {
    let (digits, unit) = match component.as_bytes().last()? {
        b's' => (&component[..component.len() - 1], 1),
        b'm' => (&component[..component.len() - 1], 60),
        b'h' => (&component[..component.len() - 1], 60 * 60),
        b'd' => (&component[..component.len() - 1], 24 * 60 * 60),
        // bare numbers count as seconds
        b'0'..=b'9' => (component, 1),
        _ => return None,
    };
    digits.parse::<u64>().ok().map(|value| value * unit)
}
