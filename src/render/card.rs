use std::fmt::Write;

use tracing::{debug, warn};

use crate::models::{GamePrediction, Side, Team};
use crate::render::escape::Escaped;
use crate::render::time::TimeFormat;
use crate::view::Region;

/// Class applied to the predicted winner's team block
pub const WINNER_CLASS: &str = "winner";

/// Renders prediction records into game-card markup
#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    time_format: TimeFormat,
}

impl CardRenderer {
    pub fn new(time_format: TimeFormat) -> Self {
        Self { time_format }
    }

    /// Replace the container's contents with one card per prediction, in order
    pub fn mount<R: Region>(&self, predictions: &[GamePrediction], container: &mut R) {
        let cards = self.render_cards(predictions);
        debug!("Mounting {} game cards", cards.len());
        container.set_html(cards.concat());
    }

    pub fn render_cards(&self, predictions: &[GamePrediction]) -> Vec<String> {
        predictions.iter().map(|game| self.render_card(game)).collect()
    }

    /// Markup for a single game
    pub fn render_card(&self, game: &GamePrediction) -> String {
        if !game.winner_is_known() {
            warn!(
                "Predicted winner {:?} matches neither {:?} nor {:?}",
                game.prediction.winner, game.home_team.name, game.away_team.name
            );
        }

        let winning_side = game.winning_side();
        let prediction = &game.prediction;

        let winner_label = match &prediction.winner_abbreviation {
            Some(abbr) if !abbr.is_empty() => {
                format!("{} ({})", Escaped(&prediction.winner), Escaped(abbr))
            }
            _ => Escaped(&prediction.winner).to_string(),
        };

        let mut html = String::new();
        html.push_str("<div class=\"game-card\">\n");
        let _ = write!(
            html,
            "  <div class=\"game-header\">\n    <h2 class=\"game-name\">{}</h2>\n    <span class=\"game-time\">{}</span>\n  </div>\n",
            Escaped(game.display_name()),
            Escaped(&self.time_format.format(game.raw_time())),
        );
        html.push_str("  <div class=\"teams\">\n");
        html.push_str(&render_team(&game.home_team, Side::Home, winning_side == Side::Home));
        html.push_str("    <div class=\"vs\">VS</div>\n");
        html.push_str(&render_team(&game.away_team, Side::Away, winning_side == Side::Away));
        html.push_str("  </div>\n");
        let _ = write!(
            html,
            concat!(
                "  <div class=\"prediction\">\n",
                "    <div class=\"prediction-winner\">Predicted winner: <strong>{}</strong></div>\n",
                "    <div class=\"confidence\">\n",
                "      <span class=\"confidence-label\">Confidence: {}%</span>\n",
                "      <div class=\"confidence-bar\"><div class=\"confidence-fill\" style=\"width: {}%\"></div></div>\n",
                "    </div>\n",
                "    <div class=\"score-diff\">Predicted margin: {} points</div>\n",
                "  </div>\n",
            ),
            winner_label,
            prediction.confidence,
            prediction.bar_width(),
            prediction.score_difference,
        );
        html.push_str("</div>\n");
        html
    }
}

fn render_team(team: &Team, side: Side, is_winner: bool) -> String {
    let mut classes = format!("team {}", side.as_str());
    if is_winner {
        classes.push(' ');
        classes.push_str(WINNER_CLASS);
    }

    let mut html = String::new();
    let _ = writeln!(html, "    <div class=\"{}\">", classes);
    if !team.logo.is_empty() {
        let _ = writeln!(
            html,
            "      <img class=\"team-logo\" src=\"{}\" alt=\"{}\">",
            Escaped(&team.logo),
            Escaped(&team.abbreviation)
        );
    }
    let label = match side {
        Side::Home => "Home",
        Side::Away => "Away",
    };
    let _ = writeln!(html, "      <div class=\"team-label\">{}</div>", label);
    let _ = writeln!(html, "      <div class=\"team-name\">{}</div>", Escaped(&team.name));
    let _ = writeln!(
        html,
        "      <div class=\"team-abbr\">{}</div>",
        Escaped(&team.abbreviation)
    );
    html.push_str("      <div class=\"team-stats\">\n");
    for (label, value) in [
        ("FG%", stat(team.stats.fg_pct)),
        ("PPG", stat(team.stats.ppg)),
        ("RPG", stat(team.stats.rpg)),
        ("APG", stat(team.stats.apg)),
    ] {
        let _ = writeln!(
            html,
            "        <div class=\"stat\"><span class=\"stat-label\">{}</span><span class=\"stat-value\">{}</span></div>",
            label, value
        );
    }
    html.push_str("      </div>\n");
    let _ = writeln!(
        html,
        "      <div class=\"predictor-score\">Predictor score: {}</div>",
        team.predictor_score
    );
    html.push_str("    </div>\n");
    html
}

/// Stat value or "N/A" when the feed omitted it
pub(crate) fn stat(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Outcome, TeamStats};
    use crate::view::HtmlRegion;

    fn team(name: &str, abbreviation: &str) -> Team {
        Team {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            logo: format!("https://a.espncdn.com/{}.png", abbreviation.to_lowercase()),
            stats: TeamStats {
                fg_pct: Some(45.3),
                ppg: Some(121.1),
                rpg: None,
                apg: Some(27.6),
                ..TeamStats::default()
            },
            predictor_score: 336.05,
        }
    }

    fn game(winner: &str, confidence: f64) -> GamePrediction {
        GamePrediction {
            game_id: Some("1".to_string()),
            game_name: Some("Milwaukee Bucks at Cleveland Cavaliers".to_string()),
            game_time: Some("2025-11-18T00:00Z".to_string()),
            home_team: team("Cleveland Cavaliers", "CLE"),
            away_team: team("Milwaukee Bucks", "MIL"),
            prediction: Outcome {
                winner: winner.to_string(),
                winner_abbreviation: None,
                confidence,
                score_difference: 12.35,
            },
        }
    }

    #[test]
    fn test_home_winner_marker() {
        let html = CardRenderer::default().render_card(&game("Cleveland Cavaliers", 37.4));
        assert!(html.contains("class=\"team home winner\""));
        assert!(html.contains("class=\"team away\""));
        assert!(!html.contains("class=\"team away winner\""));
    }

    #[test]
    fn test_away_winner_marker() {
        let html = CardRenderer::default().render_card(&game("Milwaukee Bucks", 37.4));
        assert!(html.contains("class=\"team away winner\""));
        assert!(html.contains("class=\"team home\""));
    }

    #[test]
    fn test_unknown_winner_marks_away() {
        let html = CardRenderer::default().render_card(&game("Boston Celtics", 10.0));
        assert_eq!(html.matches(" winner\"").count(), 1);
        assert!(html.contains("class=\"team away winner\""));
    }

    #[test]
    fn test_confidence_bar_width() {
        for confidence in [0.0, 12.5, 37.4, 99.9, 100.0] {
            let html = CardRenderer::default().render_card(&game("Milwaukee Bucks", confidence));
            assert!(html.contains(&format!("style=\"width: {}%\"", confidence)));
        }
    }

    #[test]
    fn test_missing_stat_shows_na() {
        let html = CardRenderer::default().render_card(&game("Milwaukee Bucks", 50.0));
        assert!(html.contains("<span class=\"stat-label\">RPG</span><span class=\"stat-value\">N/A</span>"));
        assert!(html.contains("<span class=\"stat-value\">45.3</span>"));
    }

    #[test]
    fn test_empty_logo_omits_img() {
        let mut g = game("Milwaukee Bucks", 50.0);
        g.home_team.logo.clear();
        let html = CardRenderer::default().render_card(&g);
        assert_eq!(html.matches("<img").count(), 1);
    }

    #[test]
    fn test_winner_abbreviation() {
        let mut g = game("Milwaukee Bucks", 50.0);
        g.prediction.winner_abbreviation = Some("MIL".to_string());
        let html = CardRenderer::default().render_card(&g);
        assert!(html.contains("<strong>Milwaukee Bucks (MIL)</strong>"));
    }

    #[test]
    fn test_null_name_and_time_fall_back() {
        let mut g = game("Milwaukee Bucks", 50.0);
        g.game_name = None;
        g.game_time = None;
        let html = CardRenderer::default().render_card(&g);
        assert!(html.contains("<h2 class=\"game-name\">Unknown Game</h2>"));
        assert!(html.contains("<span class=\"game-time\">TBD</span>"));
    }

    #[test]
    fn test_mount_replaces_contents() {
        let renderer = CardRenderer::default();
        let mut container = HtmlRegion::new("predictions-container");
        container.set_html("<p>stale</p>".to_string());

        renderer.mount(&[game("Milwaukee Bucks", 1.0), game("Cleveland Cavaliers", 2.0)], &mut container);
        assert!(!container.inner_html().contains("stale"));
        assert_eq!(container.inner_html().matches("class=\"game-card\"").count(), 2);

        renderer.mount(&[], &mut container);
        assert_eq!(container.inner_html(), "");
    }
}
