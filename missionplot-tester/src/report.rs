use colored::Colorize;
use missionplot_core::{
    Bound, ChartOptions, ControlState, Game, Mission, MissionData, chart_options, filter_by_authors,
};
use serde::Serialize;
use std::io::{self, Write};

/// Per-game figures over the plotted missions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub game: String,
    pub missions: usize,
    pub mean_rating: f64,
    pub min_rating: f64,
    pub max_rating: f64,
    pub total_ratings: u64,
    pub first_release: String,
    pub last_release: String,
}

/// A mission whose vote histogram disagrees with its rating count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionMismatch {
    pub mission: String,
    pub rating_count: u32,
    pub distribution_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSummary {
    pub selection: String,
    pub data_type: String,
    pub points: usize,
    pub x_min: Option<Bound>,
    pub x_max: Option<Bound>,
    pub y_min: Bound,
    pub y_max: Option<Bound>,
    pub symbol_size: Option<f64>,
    pub games: Vec<GameSummary>,
    pub mismatches: Vec<DistributionMismatch>,
}

fn summarize_game(game: Game, missions: &[&Mission]) -> Option<GameSummary> {
    let first = missions.first()?;
    let ratings = missions.iter().map(|m| m.rating_average);
    #[allow(clippy::cast_precision_loss)]
    let mean_rating = ratings.clone().sum::<f64>() / missions.len() as f64;
    Some(GameSummary {
        game: game.name().to_string(),
        missions: missions.len(),
        mean_rating,
        min_rating: ratings.clone().fold(first.rating_average, f64::min),
        max_rating: ratings.fold(first.rating_average, f64::max),
        total_ratings: missions.iter().map(|m| u64::from(m.rating_count)).sum(),
        first_release: missions
            .iter()
            .map(|m| m.release_date)
            .min()
            .unwrap_or(first.release_date)
            .to_string(),
        last_release: missions
            .iter()
            .map(|m| m.release_date)
            .max()
            .unwrap_or(first.release_date)
            .to_string(),
    })
}

/// Run the chart pipeline for `controls` and describe what would be drawn.
#[must_use]
pub fn summarize(missions: &[Mission], controls: &ControlState) -> PlotSummary {
    let options = chart_options(missions, controls);
    let selected = filter_by_authors(controls.filter().apply(missions), &controls.selected_authors);

    let games = Game::all()
        .iter()
        .filter(|game| !game.is_wildcard())
        .filter_map(|game| {
            let of_game: Vec<&Mission> = selected
                .iter()
                .copied()
                .filter(|m| m.game == *game)
                .collect();
            summarize_game(*game, &of_game)
        })
        .collect();

    let mismatches = selected
        .iter()
        .filter(|m| m.distribution_total() != m.rating_count)
        .map(|m| DistributionMismatch {
            mission: m.name.clone(),
            rating_count: m.rating_count,
            distribution_total: m.distribution_total(),
        })
        .collect();

    PlotSummary {
        selection: controls.game.name().to_string(),
        data_type: controls.data_type.label().to_string(),
        points: options.series.iter().map(|s| s.data.len()).sum(),
        x_min: options.x_axis.min,
        x_max: options.x_axis.max,
        y_min: options.y_axis.min,
        y_max: options.y_axis.max,
        symbol_size: options.series.first().and_then(|s| s.symbol_size),
        games,
        mismatches,
    }
}

fn describe_bound(bound: Option<&Bound>) -> String {
    match bound {
        None => "auto".to_string(),
        Some(Bound::Number(n)) => n.to_string(),
        Some(Bound::Text(text)) => text.clone(),
    }
}

pub fn write_console_report(
    out: &mut dyn Write,
    summary: &PlotSummary,
    points: Option<&[MissionData]>,
) -> io::Result<()> {
    writeln!(
        out,
        "📊 {} ({})",
        summary.selection.bright_white().bold(),
        summary.data_type
    )?;
    writeln!(out, "   Points:  {}", summary.points)?;
    writeln!(
        out,
        "   X axis:  {} .. {}",
        describe_bound(summary.x_min.as_ref()),
        describe_bound(summary.x_max.as_ref())
    )?;
    writeln!(
        out,
        "   Y axis:  {} .. {}",
        describe_bound(Some(&summary.y_min)),
        describe_bound(summary.y_max.as_ref())
    )?;
    match summary.symbol_size {
        Some(size) => writeln!(out, "   Markers: fixed {size}")?,
        None => writeln!(out, "   Markers: scaled by rating count")?,
    }
    writeln!(out)?;

    if summary.games.is_empty() {
        writeln!(out, "{}", "No missions to plot.".yellow())?;
    }
    for game in &summary.games {
        writeln!(out, "🎮 {}", game.game.cyan().bold())?;
        writeln!(
            out,
            "   {} missions, mean {:.2} (min {:.1}, max {:.1}), {} ratings",
            game.missions, game.mean_rating, game.min_rating, game.max_rating, game.total_ratings
        )?;
        writeln!(
            out,
            "   Released {} to {}",
            game.first_release, game.last_release
        )?;
    }

    if let Some(points) = points {
        writeln!(out)?;
        for point in points {
            writeln!(
                out,
                "   {} {:>4.1} {:>5}  {}",
                point.release_date(),
                point.rating_average(),
                point.rating_count(),
                point.name()
            )?;
        }
    }

    if !summary.mismatches.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "⚠️  Rating histograms out of sync:".yellow().bold())?;
        for mismatch in &summary.mismatches {
            writeln!(
                out,
                "   {}: {} ratings, histogram sums to {}",
                mismatch.mission, mismatch.rating_count, mismatch.distribution_total
            )?;
        }
    }
    Ok(())
}

pub fn write_json_report(out: &mut dyn Write, summary: &PlotSummary) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// Dump the options object the web front end would hand to the chart.
pub fn write_options_report(out: &mut dyn Write, options: &ChartOptions) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, options)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::load_dataset;
    use missionplot_core::ControlEvent;

    fn render(summary: &PlotSummary) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_console_report(&mut buf, summary, None).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn wildcard_summary_covers_every_rated_mission() {
        let missions = load_dataset(None).unwrap();
        let summary = summarize(&missions, &ControlState::default());
        assert_eq!(summary.points, missions.len());
        assert_eq!(
            summary.games.iter().map(|g| g.missions).sum::<usize>(),
            missions.len()
        );
        assert_eq!(summary.games.len(), 5);
        assert_eq!(summary.y_min, Bound::Number(1.0));
        assert!(summary.x_min.is_none());
        assert!(summary.symbol_size.is_none());
        assert!(summary.mismatches.is_empty());
    }

    #[test]
    fn single_game_summary_lists_only_that_game() {
        let missions = load_dataset(None).unwrap();
        let controls = ControlState::default().with(ControlEvent::SelectGame(Game::TDM));
        let summary = summarize(&missions, &controls);
        assert_eq!(summary.games.len(), 1);
        assert_eq!(summary.games[0].game, "The Dark Mod");
        assert_eq!(summary.points, 5);
        assert_eq!(summary.games[0].first_release, "2012-06-03");
        assert_eq!(summary.games[0].last_release, "2023-08-19");
    }

    #[test]
    fn x_limits_use_whole_years() {
        let missions = load_dataset(None).unwrap();
        let controls = ControlState::default()
            .with(ControlEvent::XLeft("2001".into()))
            .with(ControlEvent::XRight("2010".into()));
        let summary = summarize(&missions, &controls);
        assert_eq!(summary.x_min, Some(Bound::Text("2001-01-01".into())));
        assert_eq!(summary.x_max, Some(Bound::Text("2010-12-31".into())));
        assert_eq!(summary.points, missions.len());
    }

    #[test]
    fn console_report_names_games_and_markers() {
        let missions = load_dataset(None).unwrap();
        let controls = ControlState::default().with(ControlEvent::ScaleByRatings(false));
        let text = render(&summarize(&missions, &controls));
        assert!(text.contains("All Games"));
        assert!(text.contains("Thief II: The Metal Age"));
        assert!(text.contains("Markers: fixed 20"));
        assert!(text.contains("X axis:  auto .. auto"));
    }

    #[test]
    fn empty_selection_is_reported() {
        let text = render(&summarize(&[], &ControlState::default()));
        assert!(text.contains("No missions to plot."));
    }

    #[test]
    fn json_report_is_parseable() {
        let missions = load_dataset(None).unwrap();
        let summary = summarize(&missions, &ControlState::default());
        let mut buf = Vec::new();
        write_json_report(&mut buf, &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["selection"], "All Games");
        assert!(value["x_min"].is_null());
    }
}
