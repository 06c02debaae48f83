mod assets;
mod report;
mod util;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use missionplot_core::{ControlEvent, ControlState, DataType, Game, chart_options};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use report::{summarize, write_console_report, write_json_report, write_options_report};
use util::{split_csv, split_pair};

#[derive(Debug, Parser)]
#[command(name = "missionplot-tester", version = "0.1.0")]
#[command(about = "Runs the mission chart pipeline headlessly and reports what would be plotted")]
struct Args {
    /// Mission dataset (JSON array); defaults to the dataset bundled with the web app
    #[arg(long)]
    data: Option<PathBuf>,

    /// Game to plot, by display name
    #[arg(long, default_value = "All Games")]
    game: String,

    /// Series display mode
    #[arg(long, default_value = "Marker")]
    #[arg(value_parser = ["Marker", "Line", "Both"])]
    data_type: String,

    /// Limit the rating axis (BOTTOM,TOP)
    #[arg(long)]
    limit_y: Option<String>,

    /// Limit the release-year axis (LEFT,RIGHT)
    #[arg(long)]
    limit_x: Option<String>,

    /// Draw every marker at the same size instead of scaling by rating count
    #[arg(long)]
    fixed_size: bool,

    /// Only plot missions by these authors (comma-separated)
    #[arg(long)]
    authors: Option<String>,

    /// List the registered games and exit
    #[arg(long)]
    list_games: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "options"])]
    report: String,

    /// Verbose output (lists every plotted point)
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_games(&args)? {
        return Ok(());
    }

    let controls = build_controls(&args)?;
    let missions = assets::load_dataset(args.data.as_deref())?;
    log::debug!("controls: {controls:?}");

    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => write_json_report(output_target.writer(), &summarize(&missions, &controls))?,
        "options" => {
            write_options_report(output_target.writer(), &chart_options(&missions, &controls))?;
        }
        _ => {
            announce_banner();
            let summary = summarize(&missions, &controls);
            let points = args
                .verbose
                .then(|| chart_options(&missions, &controls))
                .map(|options| {
                    options
                        .series
                        .into_iter()
                        .flat_map(|series| series.data)
                        .collect::<Vec<_>>()
                });
            write_console_report(output_target.writer(), &summary, points.as_deref())?;
        }
    }
    output_target.flush_inner()?;
    Ok(())
}

fn maybe_list_games(args: &Args) -> Result<bool> {
    if !args.list_games {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available games:")?;
    for game in Game::all() {
        let note = if game.is_wildcard() { " (every game)" } else { "" };
        writeln!(output_target.writer(), "  {}{note}", game.name())?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🗺️  Missionplot Tester".bright_cyan().bold());
    println!("{}", "=====================".cyan());
}

/// Replay the arguments as form events so the tester sees the same state the page would.
fn build_controls(args: &Args) -> Result<ControlState> {
    let game = Game::parse_by_name(&args.game)
        .with_context(|| format!("--game {:?}", args.game))?;
    let data_type = DataType::from_label(&args.data_type)
        .ok_or_else(|| anyhow!("unknown data type {:?}", args.data_type))?;

    let mut controls = ControlState::default()
        .with(ControlEvent::SelectGame(game))
        .with(ControlEvent::SelectDataType(data_type))
        .with(ControlEvent::ScaleByRatings(!args.fixed_size));

    if let Some(raw) = &args.limit_y {
        let (bottom, top) =
            split_pair(raw).ok_or_else(|| anyhow!("--limit-y expects BOTTOM,TOP, got {raw:?}"))?;
        controls.apply(ControlEvent::YBottom(bottom));
        controls.apply(ControlEvent::YTop(top));
    }
    if let Some(raw) = &args.limit_x {
        let (left, right) =
            split_pair(raw).ok_or_else(|| anyhow!("--limit-x expects LEFT,RIGHT, got {raw:?}"))?;
        controls.apply(ControlEvent::XLeft(left));
        controls.apply(ControlEvent::XRight(right));
    }
    for author in args.authors.as_deref().map(split_csv).unwrap_or_default() {
        controls.apply(ControlEvent::ToggleAuthor(author));
    }
    Ok(controls)
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use missionplot_core::Bound;

    fn base_args() -> Args {
        Args {
            data: None,
            game: "All Games".to_string(),
            data_type: "Marker".to_string(),
            limit_y: None,
            limit_x: None,
            fixed_size: false,
            authors: None,
            list_games: false,
            report: "console".to_string(),
            verbose: false,
            output: None,
        }
    }

    #[test]
    fn default_args_match_the_initial_page() {
        let controls = build_controls(&base_args()).unwrap();
        assert_eq!(controls, ControlState::default());
    }

    #[test]
    fn limits_switch_their_axis_on() {
        let args = Args {
            limit_y: Some("5,9.5".to_string()),
            limit_x: Some("2005,2015".to_string()),
            ..base_args()
        };
        let controls = build_controls(&args).unwrap();
        assert!(controls.limit_y && controls.limit_x);
        let options = chart_options(&[], &controls);
        assert_eq!(options.y_axis.min, Bound::Number(5.0));
        assert_eq!(options.x_axis.max, Some(Bound::Text("2015-12-31".into())));
    }

    #[test]
    fn malformed_limit_is_rejected() {
        let args = Args {
            limit_y: Some("5".to_string()),
            ..base_args()
        };
        let err = build_controls(&args).unwrap_err();
        assert!(err.to_string().contains("--limit-y"));
    }

    #[test]
    fn unknown_game_is_rejected() {
        let args = Args {
            game: "Thief 4".to_string(),
            ..base_args()
        };
        let err = build_controls(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Thief 4"));
    }

    #[test]
    fn fixed_size_and_authors_are_replayed() {
        let args = Args {
            fixed_size: true,
            authors: Some("Fidcal, Gecko".to_string()),
            ..base_args()
        };
        let controls = build_controls(&args).unwrap();
        assert!(!controls.scale_by_ratings);
        assert_eq!(controls.selected_authors, vec!["Fidcal", "Gecko"]);
    }

    #[test]
    fn maybe_list_games_writes_output() {
        let temp = std::env::temp_dir().join("missionplot-games.txt");
        let args = Args {
            list_games: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_games(&args).unwrap());
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Available games"));
        assert!(content.contains("The Dark Mod"));
    }

    #[test]
    fn maybe_list_games_returns_false_when_disabled() {
        assert!(!maybe_list_games(&base_args()).unwrap());
    }
}
