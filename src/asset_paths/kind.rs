use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of pre-rendered result image published for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Endmember signature plot.
    Signature,
    /// Abundance map.
    Abundance,
}

impl AssetKind {
    /// Lowercase fragments that mark a file name as this kind.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            AssetKind::Signature => &["sign", "signature", "endmember"],
            AssetKind::Abundance => &["abund", "abundance"],
        }
    }

    /// Returns `true` when the lowercased file name contains any keyword of this kind.
    pub fn matches(self, lowered_name: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| lowered_name.contains(keyword))
    }

    /// Identifier used on the command line and in manifests.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Signature => "signature",
            AssetKind::Abundance => "abundance",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an asset kind argument is neither a signature nor an abundance alias.
#[derive(Debug, Error)]
#[error("unknown asset kind `{0}`, expected `signature` or `abundance`")]
pub struct ParseAssetKindError(String);

impl FromStr for AssetKind {
    type Err = ParseAssetKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "sign" | "signature" | "signatures" | "endmember" | "endmembers" => {
                Ok(AssetKind::Signature)
            }
            "abund" | "abundance" | "abundances" => Ok(AssetKind::Abundance),
            _ => Err(ParseAssetKindError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("sign".parse::<AssetKind>().unwrap(), AssetKind::Signature);
        assert_eq!("Endmember".parse::<AssetKind>().unwrap(), AssetKind::Signature);
        assert_eq!("ABUND".parse::<AssetKind>().unwrap(), AssetKind::Abundance);
        assert!("spectrum".parse::<AssetKind>().is_err());
    }

    #[test]
    fn keyword_sets_do_not_cross_match() {
        assert!(AssetKind::Signature.matches("urban_endmember_map.png"));
        assert!(!AssetKind::Abundance.matches("urban_endmember_map.png"));
        assert!(AssetKind::Abundance.matches("urban_abundance.png"));
        assert!(!AssetKind::Signature.matches("urban_abundance.png"));
    }
}
