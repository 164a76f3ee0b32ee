use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Farmer,
    Consumer,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Farmer => write!(f, "FARMER"),
            UserType::Consumer => write!(f, "CONSUMER"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FARMER" => Ok(UserType::Farmer),
            "CONSUMER" => Ok(UserType::Consumer),
            _ => Err(format!("Invalid user type: {}", s)),
        }
    }
}
