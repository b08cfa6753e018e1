//! Animation clip selection for the fox character.

use serde::{Deserialize, Serialize};

/// Clip the character currently plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    /// Nothing focused
    #[default]
    Idle,
    /// A form control has focus
    Walk,
    /// Submit in progress
    Hit,
}

impl AnimationState {
    /// Clip name understood by the rendering surface
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Walk => "walk",
            AnimationState::Hit => "hit",
        }
    }
}

impl std::fmt::Display for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_names() {
        assert_eq!(AnimationState::default(), AnimationState::Idle);
        assert_eq!(AnimationState::Walk.as_str(), "walk");
        assert_eq!(AnimationState::Hit.to_string(), "hit");
        assert_eq!(serde_json::to_string(&AnimationState::Idle).unwrap(), "\"idle\"");
    }
}
