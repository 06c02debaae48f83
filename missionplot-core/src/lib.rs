//! missionplot core
//!
//! Platform-agnostic data handling for the mission scatter plot: loading the
//! bundled dataset, filtering it by game, projecting it into chart points and
//! building the declarative chart options. Rendering is delegated to a
//! [`ChartAdapter`] supplied by the platform layer.

use std::cell::RefCell;
use std::rc::Rc;

pub mod controls;
pub mod error;
pub mod filter;
pub mod game;
pub mod mission;
pub mod options;
pub mod projection;
pub mod tooltip;

pub use controls::{ControlEvent, ControlState};
pub use error::DataError;
pub use filter::{DataType, Filter, apply_filter, filter_by_authors};
pub use game::Game;
pub use mission::{
    Mission, RawMission, UNRATED_SENTINEL, load_missions, load_missions_from_json, unique_authors,
};
pub use options::{AxisConfig, Bound, ChartOptions, FIXED_SYMBOL_SIZE, SizeMode, build_options};
pub use projection::{MissionData, field, join_with_line_break, project_for_chart};
pub use tooltip::TooltipState;

/// Series type the hover handlers react to.
pub const SCATTER_SERIES: &str = "scatter";

/// Trait for abstracting where the mission dataset comes from
/// Platform-specific implementations should provide this
pub trait MissionSource {
    type Error: std::error::Error + 'static;

    /// Load the rated missions.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be read or a record is malformed.
    fn load_missions(&self) -> Result<Vec<Mission>, Self::Error>;
}

/// The charting library seen as an opaque renderer of [`ChartOptions`].
pub trait ChartAdapter {
    type Error: std::error::Error + 'static;

    /// Push a full set of options to the chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying chart rejects the update.
    fn set_option(&self, options: &ChartOptions) -> Result<(), Self::Error>;

    /// Re-layout after the viewport changed size.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying chart cannot be resized.
    fn resize(&self) -> Result<(), Self::Error>;
}

/// Pointer notifications coming back from rendered points.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    PointerEnter {
        series_type: String,
        data: MissionData,
    },
    PointerLeave,
}

impl TooltipState {
    /// Update the tooltip for one pointer notification. Entering a point of
    /// a non-scatter series leaves the current text alone.
    pub fn handle(&mut self, event: &ChartEvent) {
        match event {
            ChartEvent::PointerEnter { series_type, data } if series_type == SCATTER_SERIES => {
                self.enter(data);
            }
            ChartEvent::PointerEnter { .. } => {}
            ChartEvent::PointerLeave => self.leave(),
        }
    }
}

/// Run the whole filter → project → build pipeline for one control snapshot.
#[must_use]
pub fn chart_options(missions: &[Mission], controls: &ControlState) -> ChartOptions {
    let filtered = controls.filter().apply(missions);
    let filtered = filter_by_authors(filtered, &controls.selected_authors);
    build_options(
        project_for_chart(filtered),
        &controls.axis_config(),
        controls.size_mode(),
    )
}

/// Owns one chart: its adapter, the loaded missions and the tooltip state
/// shared with the adapter's hover callbacks.
pub struct ChartController<A>
where
    A: ChartAdapter,
{
    adapter: A,
    missions: Vec<Mission>,
    tooltip: Rc<RefCell<TooltipState>>,
}

impl<A> ChartController<A>
where
    A: ChartAdapter,
{
    pub const fn new(adapter: A, missions: Vec<Mission>, tooltip: Rc<RefCell<TooltipState>>) -> Self {
        Self {
            adapter,
            missions,
            tooltip,
        }
    }

    /// Recompute the chart for `controls` and push it to the adapter.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter rejects the options.
    pub fn refresh(&self, controls: &ControlState) -> Result<(), A::Error> {
        let options = chart_options(&self.missions, controls);
        log::debug!(
            "pushing {} points for {}",
            options.series.first().map_or(0, |s| s.data.len()),
            controls.game
        );
        self.adapter.set_option(&options)
    }

    /// The thumbnail toggle only changes what the next hover shows.
    pub fn set_show_thumbnails(&self, show: bool) {
        self.tooltip.borrow_mut().set_show_thumbnails(show);
    }

    pub fn handle_event(&self, event: &ChartEvent) {
        self.tooltip.borrow_mut().handle(event);
    }

    /// # Errors
    ///
    /// Returns an error if the adapter cannot resize.
    pub fn resize(&self) -> Result<(), A::Error> {
        self.adapter.resize()
    }

    #[must_use]
    pub fn tooltip_html(&self) -> String {
        self.tooltip.borrow().html().to_string()
    }

    #[must_use]
    pub fn tooltip(&self) -> Rc<RefCell<TooltipState>> {
        Rc::clone(&self.tooltip)
    }

    #[must_use]
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    #[must_use]
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }
}
