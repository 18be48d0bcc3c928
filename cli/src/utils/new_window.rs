use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How recently a recipe must have been added to count as "new"
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum NewWindow {
    Today,
    Week,
    Month,
    Days(u32),
}

impl NewWindow {
    pub fn days(&self) -> u32 {
        match self {
            NewWindow::Today => 1,
            NewWindow::Week => 7,
            NewWindow::Month => 30,
            NewWindow::Days(days) => *days,
        }
    }
}

impl FromStr for NewWindow {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "week" | "last week" => Ok(Self::Week),
            "month" | "last month" => Ok(Self::Month),
            _ => match s.parse::<u32>() {
                Ok(0) => anyhow::bail!("Invalid new window: must be at least one day"),
                Ok(days) => Ok(Self::Days(days)),
                Err(e) => anyhow::bail!("Invalid new window: {}", e),
            },
        }
    }
}

impl fmt::Display for NewWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewWindow::Today => f.write_str("today"),
            NewWindow::Week => f.write_str("week"),
            NewWindow::Month => f.write_str("month"),
            NewWindow::Days(days) => write!(f, "{}", days),
        }
    }
}

impl Serialize for NewWindow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
