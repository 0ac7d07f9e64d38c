use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Content hash version of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DocumentVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Index of a section inside its forest arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub(crate) usize);

impl SectionId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address is empty")]
    Empty,
    #[error("Invalid address component {component:?} in {address:?}")]
    InvalidComponent { address: String, component: String },
}

/// Dotted, 1-based hierarchical path of a section, e.g. `2.3.1`.
///
/// Ordering compares components numerically, so `1.2 < 1.10 < 2` and the
/// natural order of a set of addresses is document pre-order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionAddress(Vec<u32>);

impl SectionAddress {
    /// Address of the root at zero-based position `index`.
    pub fn root(index: usize) -> Self {
        SectionAddress(vec![ordinal(index)])
    }

    /// Address of this node's child at zero-based position `index`.
    pub fn child(&self, index: usize) -> Self {
        let mut components = self.0.clone();
        components.push(ordinal(index));
        SectionAddress(components)
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Number of components; roots have depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn parent(&self) -> Option<SectionAddress> {
        if self.is_root() {
            None
        } else {
            Some(SectionAddress(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }
}

fn ordinal(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

impl FromStr for SectionAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }

        let components = trimmed
            .split('.')
            .map(|part| {
                let valid = !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
                match part.parse::<u32>() {
                    Ok(n) if valid && n > 0 => Ok(n),
                    _ => Err(AddressError::InvalidComponent {
                        address: trimmed.to_string(),
                        component: part.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<u32>, AddressError>>()?;

        Ok(SectionAddress(components))
    }
}

impl TryFrom<String> for SectionAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SectionAddress> for String {
    fn from(address: SectionAddress) -> Self {
        address.to_string()
    }
}

impl fmt::Display for SectionAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
