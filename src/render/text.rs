use std::fmt::Write;

use crate::models::{GamePrediction, Team};
use crate::render::card::stat;
use crate::render::time::TimeFormat;

const RULE_WIDTH: usize = 80;

/// Plain-text report of the predictions, for terminals
pub fn render_report(predictions: &[GamePrediction], time_format: &TimeFormat) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "{:^width$}", "NBA GAME PREDICTIONS", width = RULE_WIDTH);
    let _ = writeln!(out, "{}", heavy);
    let _ = writeln!(out, "Found {} scheduled game(s)", predictions.len());

    for (i, game) in predictions.iter().enumerate() {
        let _ = writeln!(out, "\n{}", light);
        let _ = writeln!(out, "GAME {}: {}", i + 1, game.display_name());
        let _ = writeln!(out, "{}", light);
        let _ = writeln!(out, "Scheduled: {}\n", time_format.format(game.raw_time()));

        write_team(&mut out, "HOME", &game.home_team);
        out.push('\n');
        write_team(&mut out, "AWAY", &game.away_team);

        let prediction = &game.prediction;
        let _ = writeln!(out, "\n{}", light);
        match &prediction.winner_abbreviation {
            Some(abbr) if !abbr.is_empty() => {
                let _ = writeln!(out, "PREDICTION: {} ({}) wins", prediction.winner, abbr);
            }
            _ => {
                let _ = writeln!(out, "PREDICTION: {} wins", prediction.winner);
            }
        }
        let _ = writeln!(out, "Confidence: {}%", prediction.confidence);
        let _ = writeln!(out, "Score Difference: {} points", prediction.score_difference);
        let _ = writeln!(out, "{}", light);
    }

    out
}

/// One-line report for the empty and error states
pub fn render_notice(message: &str) -> String {
    format!("{}\n{}\n", message, "=".repeat(RULE_WIDTH))
}

fn write_team(out: &mut String, label: &str, team: &Team) {
    let stats = &team.stats;
    let _ = writeln!(out, "{}: {} ({})", label, team.name, team.abbreviation);
    let _ = writeln!(out, "   Season Stats:");
    let _ = writeln!(
        out,
        "      FG%: {}% | PPG: {} | RPG: {} | APG: {}",
        stat(stats.fg_pct),
        stat(stats.ppg),
        stat(stats.rpg),
        stat(stats.apg)
    );
    if stats.three_pct.is_some() || stats.ft_pct.is_some() {
        let _ = writeln!(
            out,
            "      3P%: {}% | FT%: {}%",
            stat(stats.three_pct),
            stat(stats.ft_pct)
        );
    }
    let _ = writeln!(out, "   Predictor Score: {}", team.predictor_score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Outcome, TeamStats};

    fn game() -> GamePrediction {
        let team = |name: &str, abbreviation: &str, three_pct: Option<f64>| Team {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            logo: String::new(),
            stats: TeamStats {
                fg_pct: Some(50.2),
                ppg: Some(118.4),
                rpg: Some(40.2),
                apg: None,
                three_pct,
                ft_pct: None,
            },
            predictor_score: 323.7,
        };
        GamePrediction {
            game_id: None,
            game_name: Some("Milwaukee Bucks at Cleveland Cavaliers".to_string()),
            game_time: Some("not a time".to_string()),
            home_team: team("Cleveland Cavaliers", "CLE", None),
            away_team: team("Milwaukee Bucks", "MIL", Some(36.1)),
            prediction: Outcome {
                winner: "Milwaukee Bucks".to_string(),
                winner_abbreviation: Some("MIL".to_string()),
                confidence: 12.5,
                score_difference: 4.2,
            },
        }
    }

    #[test]
    fn test_render_report() {
        let report = render_report(&[game()], &TimeFormat::utc());
        assert!(report.contains("GAME 1: Milwaukee Bucks at Cleveland Cavaliers"));
        assert!(report.contains("Scheduled: not a time"));
        assert!(report.contains("HOME: Cleveland Cavaliers (CLE)"));
        assert!(report.contains("FG%: 50.2% | PPG: 118.4 | RPG: 40.2 | APG: N/A"));
        assert!(report.contains("PREDICTION: Milwaukee Bucks (MIL) wins"));
        assert!(report.contains("Confidence: 12.5%"));
        assert!(report.contains("Score Difference: 4.2 points"));
        // Shooting splits only for the team that has them
        assert_eq!(report.matches("3P%: 36.1% | FT%: N/A%").count(), 1);
        assert_eq!(report.matches("3P%").count(), 1);
    }

    #[test]
    fn test_render_report_counts_games() {
        let report = render_report(&[game(), game()], &TimeFormat::utc());
        assert!(report.contains("Found 2 scheduled game(s)"));
        assert!(report.contains("GAME 2:"));
    }
}
