//! ToolKind - The closed set of tools the assistant may call

use serde::{Deserialize, Serialize};

/// Tools declared to the language model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    RecordUserDetails,
    RecordUnknownQuestion,
}

impl ToolKind {
    pub const ALL: [ToolKind; 2] = [ToolKind::RecordUserDetails, ToolKind::RecordUnknownQuestion];

    /// Wire name used in tool declarations and calls
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::RecordUserDetails => "record_user_details",
            ToolKind::RecordUnknownQuestion => "record_unknown_question",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "record_user_details" => Ok(ToolKind::RecordUserDetails),
            "record_unknown_question" => Ok(ToolKind::RecordUnknownQuestion),
            _ => Err(format!("Unknown tool: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_wire_names() {
        for kind in ToolKind::ALL {
            assert_eq!(kind.as_str().parse::<ToolKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Record_User_Details".parse::<ToolKind>().is_err());
    }
}
