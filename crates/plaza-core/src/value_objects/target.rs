//! Target kind - discriminator for reaction targets
//!
//! Post ids and comment ids live in independent numeric spaces, so a target
//! id is only meaningful together with its kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity a reaction is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    /// Wire/storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Comment => "COMMENT",
        }
    }

    #[inline]
    pub fn is_post(&self) -> bool {
        matches!(self, Self::Post)
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, Self::Comment)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a TargetKind from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target kind: {0}")]
pub struct TargetKindParseError(pub String);

impl std::str::FromStr for TargetKind {
    type Err = TargetKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POST" => Ok(Self::Post),
            "COMMENT" => Ok(Self::Comment),
            other => Err(TargetKindParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        assert_eq!("POST".parse::<TargetKind>().unwrap(), TargetKind::Post);
        assert_eq!(
            "COMMENT".parse::<TargetKind>().unwrap(),
            TargetKind::Comment
        );
        assert!("MESSAGE".parse::<TargetKind>().is_err());
    }

    #[test]
    fn test_serde_representation() {
        assert_eq!(
            serde_json::to_string(&TargetKind::Post).unwrap(),
            "\"POST\""
        );
        let kind: TargetKind = serde_json::from_str("\"COMMENT\"").unwrap();
        assert_eq!(kind, TargetKind::Comment);
    }

    #[test]
    fn test_predicates() {
        assert!(TargetKind::Post.is_post());
        assert!(!TargetKind::Post.is_comment());
        assert!(TargetKind::Comment.is_comment());
    }
}
