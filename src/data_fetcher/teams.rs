//! Read-only team reference table.
//!
//! The directory is passed explicitly to whatever needs it. Game records keep the
//! abbreviations exactly as the feed sends them; the directory only helps display.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamInfo {
    pub abbr: &'static str,
    pub name: &'static str,
}

const NFL_TEAMS: &[TeamInfo] = &[
    TeamInfo { abbr: "ARI", name: "Arizona Cardinals" },
    TeamInfo { abbr: "ATL", name: "Atlanta Falcons" },
    TeamInfo { abbr: "BAL", name: "Baltimore Ravens" },
    TeamInfo { abbr: "BUF", name: "Buffalo Bills" },
    TeamInfo { abbr: "CAR", name: "Carolina Panthers" },
    TeamInfo { abbr: "CHI", name: "Chicago Bears" },
    TeamInfo { abbr: "CIN", name: "Cincinnati Bengals" },
    TeamInfo { abbr: "CLE", name: "Cleveland Browns" },
    TeamInfo { abbr: "DAL", name: "Dallas Cowboys" },
    TeamInfo { abbr: "DEN", name: "Denver Broncos" },
    TeamInfo { abbr: "DET", name: "Detroit Lions" },
    TeamInfo { abbr: "GB", name: "Green Bay Packers" },
    TeamInfo { abbr: "HOU", name: "Houston Texans" },
    TeamInfo { abbr: "IND", name: "Indianapolis Colts" },
    TeamInfo { abbr: "JAX", name: "Jacksonville Jaguars" },
    TeamInfo { abbr: "JAC", name: "Jacksonville Jaguars" },
    TeamInfo { abbr: "KC", name: "Kansas City Chiefs" },
    TeamInfo { abbr: "LA", name: "Los Angeles Rams" },
    TeamInfo { abbr: "STL", name: "St. Louis Rams" },
    TeamInfo { abbr: "LAC", name: "Los Angeles Chargers" },
    TeamInfo { abbr: "SD", name: "San Diego Chargers" },
    TeamInfo { abbr: "LV", name: "Las Vegas Raiders" },
    TeamInfo { abbr: "OAK", name: "Oakland Raiders" },
    TeamInfo { abbr: "MIA", name: "Miami Dolphins" },
    TeamInfo { abbr: "MIN", name: "Minnesota Vikings" },
    TeamInfo { abbr: "NE", name: "New England Patriots" },
    TeamInfo { abbr: "NO", name: "New Orleans Saints" },
    TeamInfo { abbr: "NYG", name: "New York Giants" },
    TeamInfo { abbr: "NYJ", name: "New York Jets" },
    TeamInfo { abbr: "PHI", name: "Philadelphia Eagles" },
    TeamInfo { abbr: "PIT", name: "Pittsburgh Steelers" },
    TeamInfo { abbr: "SEA", name: "Seattle Seahawks" },
    TeamInfo { abbr: "SF", name: "San Francisco 49ers" },
    TeamInfo { abbr: "TB", name: "Tampa Bay Buccaneers" },
    TeamInfo { abbr: "TEN", name: "Tennessee Titans" },
    TeamInfo { abbr: "WAS", name: "Washington Commanders" },
];

#[derive(Debug, Clone)]
pub struct TeamDirectory {
    teams: Vec<TeamInfo>,
}

impl TeamDirectory {
    pub fn new(teams: Vec<TeamInfo>) -> Self {
        TeamDirectory { teams }
    }

    /// Current franchises plus abbreviations used before relocations.
    pub fn nfl() -> Self {
        TeamDirectory::new(NFL_TEAMS.to_vec())
    }

    /// Case-sensitive lookup, matching the feed's own spelling.
    pub fn lookup(&self, abbr: &str) -> Option<&TeamInfo> {
        self.teams.iter().find(|t| t.abbr == abbr)
    }

    /// Full name for display, or the abbreviation itself when unknown.
    pub fn display_name<'a>(&'a self, abbr: &'a str) -> &'a str {
        self.lookup(abbr).map(|t| t.name).unwrap_or(abbr)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Default for TeamDirectory {
    fn default() -> Self {
        TeamDirectory::nfl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_abbreviations_are_unique() {
        let directory = TeamDirectory::nfl();
        let unique: HashSet<&str> = NFL_TEAMS.iter().map(|t| t.abbr).collect();
        assert_eq!(unique.len(), directory.len());
    }

    #[test]
    fn test_lookup_known_and_relocated() {
        let directory = TeamDirectory::nfl();
        assert_eq!(directory.lookup("NE").unwrap().name, "New England Patriots");
        assert_eq!(directory.lookup("STL").unwrap().name, "St. Louis Rams");
        assert!(directory.lookup("ne").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_abbreviation() {
        let directory = TeamDirectory::nfl();
        assert_eq!(directory.display_name("GB"), "Green Bay Packers");
        assert_eq!(directory.display_name("XYZ"), "XYZ");
    }

    #[test]
    fn test_custom_directory() {
        let directory = TeamDirectory::new(vec![TeamInfo { abbr: "AFC", name: "AFC Pro Bowl" }]);
        assert_eq!(directory.display_name("AFC"), "AFC Pro Bowl");
        assert_eq!(directory.display_name("NE"), "NE");
    }
}
