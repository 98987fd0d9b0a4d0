//! URL building utilities for API endpoints

/// Builds the game-center document URL for one game.
///
/// # Arguments
/// * `api_domain` - Base URL including scheme; a trailing slash is ignored
/// * `game_id` - Full game id, including any discriminator suffix
///
/// # Returns
/// * `String` - `{api_domain}/liveupdate/game-center/{game_id}/{game_id}_gtd.json`
///
/// # Example
/// ```
/// use nfl_season_games::data_fetcher::api::build_game_url;
///
/// let url = build_game_url("http://www.nfl.com", "2015091000");
/// assert_eq!(url, "http://www.nfl.com/liveupdate/game-center/2015091000/2015091000_gtd.json");
/// ```
pub fn build_game_url(api_domain: &str, game_id: &str) -> String {
    let api_domain = api_domain.trim_end_matches('/');
    format!("{api_domain}/liveupdate/game-center/{game_id}/{game_id}_gtd.json")
}

/// Builds the regular season schedule page URL for one week.
///
/// # Arguments
/// * `api_domain` - Base URL including scheme; a trailing slash is ignored
/// * `season` - Season year
/// * `week` - Regular season week, 1-based
///
/// # Returns
/// * `String` - `{api_domain}/schedules/{season}/REG{week}`
///
/// # Example
/// ```
/// use nfl_season_games::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("http://www.nfl.com", 2015, 3);
/// assert_eq!(url, "http://www.nfl.com/schedules/2015/REG3");
/// ```
pub fn build_schedule_url(api_domain: &str, season: i32, week: u32) -> String {
    let api_domain = api_domain.trim_end_matches('/');
    format!("{api_domain}/schedules/{season}/REG{week}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_url_keeps_discriminator() {
        assert_eq!(
            build_game_url("http://localhost:8080/", "20151213001"),
            "http://localhost:8080/liveupdate/game-center/20151213001/20151213001_gtd.json"
        );
    }

    #[test]
    fn test_schedule_url_trailing_slash() {
        assert_eq!(
            build_schedule_url("https://example.com/", 2019, 17),
            "https://example.com/schedules/2019/REG17"
        );
    }
}
