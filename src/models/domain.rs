use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Regional routing value used to pick the Riot API cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    #[default]
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Americas, Region::Asia, Region::Europe, Region::Sea];

    /// Host prefix of the regional cluster, e.g. `americas` in `americas.api.riotgames.com`
    pub fn routing_value(&self) -> &'static str {
        match self {
            Region::Americas => "americas",
            Region::Asia => "asia",
            Region::Europe => "europe",
            Region::Sea => "sea",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Americas => "AMERICAS",
            Region::Asia => "ASIA",
            Region::Europe => "EUROPE",
            Region::Sea => "SEA",
        }
    }

    /// Human-readable label listing the platform shards served by the cluster
    pub fn label(&self) -> &'static str {
        match self {
            Region::Americas => "AMERICAS (NA, LAN, LAS, BR)",
            Region::Asia => "ASIA (KR, JP)",
            Region::Europe => "EUROPE (EUW, EUNE, TR, RU)",
            Region::Sea => "SEA (OCE, PH, SG, TH, TW, VN)",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AMERICAS" => Ok(Region::Americas),
            "ASIA" => Ok(Region::Asia),
            "EUROPE" => Ok(Region::Europe),
            "SEA" => Ok(Region::Sea),
            _ => Err(UnknownRegion(s.to_string())),
        }
    }
}

/// Accepts any case, like [`FromStr`]
impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Minimum number of characters in a tag line
pub const MIN_TAG_LENGTH: usize = 3;

/// Errors produced while parsing a `Name#Tag` identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiotIdError {
    #[error("Invalid format. Use Gamename#TAG format.")]
    InvalidFormat,

    #[error("TAG must contain at least 3 characters.")]
    TagTooShort,
}

/// A player identifier in `Name#Tag` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiotId {
    #[serde(rename = "gameName")]
    pub game_name: String,
    #[serde(rename = "tagLine")]
    pub tag_line: String,
}

impl RiotId {
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }

    /// Parse `Name#Tag`: exactly one separator, both halves non-empty,
    /// tag at least [`MIN_TAG_LENGTH`] characters long.
    pub fn parse(input: &str) -> Result<Self, RiotIdError> {
        let (game_name, tag_line) = input.split_once('#').ok_or(RiotIdError::InvalidFormat)?;

        if game_name.is_empty() || tag_line.is_empty() || tag_line.contains('#') {
            return Err(RiotIdError::InvalidFormat);
        }

        if tag_line.chars().count() < MIN_TAG_LENGTH {
            return Err(RiotIdError::TagTooShort);
        }

        Ok(Self::new(game_name, tag_line))
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

impl FromStr for RiotId {
    type Err = RiotIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiotId::parse(s)
    }
}

/// Account returned by the account lookup, carrying the player's PUUID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub puuid: String,
    #[serde(rename = "gameName", default)]
    pub game_name: String,
    #[serde(rename = "tagLine", default)]
    pub tag_line: String,
}

impl Account {
    pub fn riot_id(&self) -> RiotId {
        RiotId::new(self.game_name.clone(), self.tag_line.clone())
    }
}

/// Full match detail as returned by the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
    /// PUUIDs of everyone in the match
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchInfo {
    /// Milliseconds since the epoch; 0 when the API omitted it
    pub game_start_timestamp: i64,
    /// Seconds
    pub game_duration: i64,
    pub game_mode: String,
    pub game_version: String,
    pub queue_id: i64,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub puuid: String,
    pub riot_id_game_name: String,
    pub riot_id_tagline: String,
    pub champion_name: String,
    pub team_id: i64,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub win: bool,
}

impl MatchRecord {
    pub fn match_id(&self) -> &str {
        &self.metadata.match_id
    }

    pub fn start_timestamp_ms(&self) -> Option<i64> {
        Some(self.info.game_start_timestamp).filter(|ts| *ts > 0)
    }

    pub fn participant(&self, puuid: &str) -> Option<&Participant> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }
}
