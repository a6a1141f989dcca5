use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeroRole {
    Tank,
    Fighter,
    Assassin,
    Mage,
    Marksman,
    Support,
    None,
}

impl<'de> Deserialize<'de> for HeroRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        // Catalog role strings are free-form; anything unrecognized renders
        // as a blank badge instead of failing the whole catalog load.
        let role = match s.trim() {
            "Tank" => HeroRole::Tank,
            "Fighter" => HeroRole::Fighter,
            "Assassin" => HeroRole::Assassin,
            "Mage" => HeroRole::Mage,
            "Marksman" => HeroRole::Marksman,
            "Support" => HeroRole::Support,
            _ => HeroRole::None,
        };

        Ok(role)
    }
}

impl Display for HeroRole {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            HeroRole::Tank => write!(f, "{:^10}", "Tank"),
            HeroRole::Fighter => write!(f, "{:^10}", "Fighter"),
            HeroRole::Assassin => write!(f, "{:^10}", "Assassin"),
            HeroRole::Mage => write!(f, "{:^10}", "Mage"),
            HeroRole::Marksman => write!(f, "{:^10}", "Marksman"),
            HeroRole::Support => write!(f, "{:^10}", "Support"),
            HeroRole::None => write!(f, "{:^10}", " "),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub role: HeroRole,
    #[serde(default = "no_image")]
    pub image: String,
}

fn no_image() -> String {
    String::from("placeholder.png")
}
