//! Form control state and the events that change it
use crate::filter::{DataType, Filter};
use crate::game::Game;
use crate::options::{AxisConfig, SizeMode};

/// Current values of every form control on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub game: Game,
    pub data_type: DataType,
    pub limit_y: bool,
    pub y_bottom: String,
    pub y_top: String,
    pub limit_x: bool,
    pub x_left: String,
    pub x_right: String,
    pub show_thumbnails: bool,
    pub scale_by_ratings: bool,
    pub selected_authors: Vec<String>,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            game: Game::All,
            data_type: DataType::Marker,
            limit_y: false,
            y_bottom: "1".to_string(),
            y_top: "10".to_string(),
            limit_x: false,
            x_left: "2000".to_string(),
            x_right: "2024".to_string(),
            show_thumbnails: false,
            scale_by_ratings: true,
            selected_authors: Vec::new(),
        }
    }
}

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    SelectGame(Game),
    SelectDataType(DataType),
    SetLimitY(bool),
    YBottom(String),
    YTop(String),
    SetLimitX(bool),
    XLeft(String),
    XRight(String),
    ShowThumbnails(bool),
    ScaleByRatings(bool),
    ToggleAuthor(String),
}

impl ControlEvent {
    /// Whether the chart must be rebuilt after this event. The thumbnail
    /// toggle only affects the next hover.
    #[must_use]
    pub const fn redraws(&self) -> bool {
        !matches!(self, Self::ShowThumbnails(_))
    }
}

impl ControlState {
    /// Apply one event. Editing a bound switches its axis limit on.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SelectGame(game) => self.game = game,
            ControlEvent::SelectDataType(data_type) => self.data_type = data_type,
            ControlEvent::SetLimitY(on) => self.limit_y = on,
            ControlEvent::YBottom(value) => {
                self.y_bottom = value;
                self.limit_y = true;
            }
            ControlEvent::YTop(value) => {
                self.y_top = value;
                self.limit_y = true;
            }
            ControlEvent::SetLimitX(on) => self.limit_x = on,
            ControlEvent::XLeft(value) => {
                self.x_left = value;
                self.limit_x = true;
            }
            ControlEvent::XRight(value) => {
                self.x_right = value;
                self.limit_x = true;
            }
            ControlEvent::ShowThumbnails(on) => self.show_thumbnails = on,
            ControlEvent::ScaleByRatings(on) => self.scale_by_ratings = on,
            ControlEvent::ToggleAuthor(author) => {
                if let Some(idx) = self.selected_authors.iter().position(|a| *a == author) {
                    self.selected_authors.remove(idx);
                } else {
                    self.selected_authors.push(author);
                }
            }
        }
    }

    #[must_use]
    pub fn with(mut self, event: ControlEvent) -> Self {
        self.apply(event);
        self
    }

    #[must_use]
    pub const fn filter(&self) -> Filter {
        Filter {
            game: self.game,
            data_type: self.data_type,
        }
    }

    #[must_use]
    pub fn axis_config(&self) -> AxisConfig {
        AxisConfig {
            limit_x: self.limit_x,
            x_left: self.x_left.clone(),
            x_right: self.x_right.clone(),
            limit_y: self.limit_y,
            y_bottom: self.y_bottom.clone(),
            y_top: self.y_top.clone(),
        }
    }

    #[must_use]
    pub const fn size_mode(&self) -> SizeMode {
        SizeMode::from_scale_by_ratings(self.scale_by_ratings)
    }
}
