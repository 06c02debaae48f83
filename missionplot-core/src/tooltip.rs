//! Hover tooltip state for one chart
use std::fmt::Write as _;

use crate::projection::MissionData;

const THUMBNAIL_WIDTH: u32 = 640;
const THUMBNAIL_HEIGHT: u32 = 360;

/// The HTML shown by the chart's tooltip formatter.
///
/// Written by pointer enter/leave notifications and read whenever the chart
/// renders its tooltip; the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipState {
    html: String,
    show_thumbnails: bool,
}

impl TooltipState {
    #[must_use]
    pub fn new(show_thumbnails: bool) -> Self {
        Self {
            html: String::new(),
            show_thumbnails,
        }
    }

    /// Pointer entered a marker.
    pub fn enter(&mut self, data: &MissionData) {
        self.html = describe(data, self.show_thumbnails);
    }

    /// Pointer left a marker.
    pub fn leave(&mut self) {
        self.html.clear();
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn set_show_thumbnails(&mut self, show: bool) {
        self.show_thumbnails = show;
    }

    #[must_use]
    pub const fn show_thumbnails(&self) -> bool {
        self.show_thumbnails
    }
}

fn describe(data: &MissionData, show_thumbnails: bool) -> String {
    let mut html = format!(
        "<h1>{}</h1></br>Released: <b>{}</b></br>Rating: <b>{}</b> out of <b>{}</b> user ratings</br>Author(s): <b>{}</b></br>",
        data.name(),
        data.release_date(),
        data.rating_average(),
        data.rating_count(),
        data.authors(),
    );
    #[cfg(feature = "tooltip-genres")]
    {
        let _ = write!(html, "Genres: {}</br>", data.genres());
    }
    if show_thumbnails {
        let _ = write!(
            html,
            r#"<img src="{}" width="{THUMBNAIL_WIDTH}" height="{THUMBNAIL_HEIGHT}">"#,
            data.thumbnail_url()
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point() -> MissionData {
        MissionData(
            NaiveDate::from_ymd_opt(2006, 3, 4).unwrap(),
            8.5,
            120,
            "The Seven Sisters".to_string(),
            "Eshaktaar".to_string(),
            "https://example.org/seven.jpg".to_string(),
            "Mansion, Story".to_string(),
        )
    }

    #[test]
    fn enter_describes_the_point() {
        let mut state = TooltipState::new(false);
        state.enter(&point());
        let html = state.html();
        assert!(html.starts_with("<h1>The Seven Sisters</h1></br>"));
        assert!(html.contains("Released: <b>2006-03-04</b>"));
        assert!(html.contains("Rating: <b>8.5</b> out of <b>120</b> user ratings"));
        assert!(html.contains("Author(s): <b>Eshaktaar</b>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn thumbnails_append_an_image_tag() {
        let mut state = TooltipState::new(true);
        state.enter(&point());
        assert!(state.html().ends_with(
            r#"<img src="https://example.org/seven.jpg" width="640" height="360">"#
        ));
    }

    #[test]
    fn leave_clears_and_last_write_wins() {
        let mut state = TooltipState::default();
        state.enter(&point());
        state.leave();
        assert_eq!(state.html(), "");

        let mut other = point();
        other.3 = "Ominous Bequest".to_string();
        state.enter(&point());
        state.enter(&other);
        assert!(state.html().contains("Ominous Bequest"));
        assert!(!state.html().contains("Seven Sisters"));
    }

    #[test]
    fn toggling_thumbnails_affects_next_enter_only() {
        let mut state = TooltipState::new(false);
        state.enter(&point());
        state.set_show_thumbnails(true);
        assert!(!state.html().contains("<img"));
        state.enter(&point());
        assert!(state.html().contains("<img"));
    }

    #[cfg(not(feature = "tooltip-genres"))]
    #[test]
    fn genre_line_is_not_rendered() {
        let mut state = TooltipState::new(true);
        state.enter(&point());
        assert!(!state.html().contains("Genres:"));
    }
}
