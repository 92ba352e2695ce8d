use crate::config::{
    CHECK_BUTTON_LABEL, FETCH_FAILED_MESSAGE, STATUS_CHECKED, STATUS_INITIAL, WINDOW_TITLE,
};
use crate::presenter::build_day_blocks;

use iced::widget::{Column, button, scrollable, text};
use iced::{Application, Command, Element, Theme, executor};
use serde_json::Value;

/// What the window shows, decided once before it opens
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loaded { blocks: Vec<String> },
    FetchFailed,
}

impl Screen {
    /// An empty document counts as a failed fetch
    pub fn from_fetch(data: Option<Value>) -> Screen {
        match data {
            Some(data) if is_empty_document(&data) => {
                warn!("Forecast document is empty");
                Screen::FetchFailed
            }
            Some(data) => Screen::Loaded {
                blocks: timed!(build_day_blocks(&data), "Building forecast blocks"),
            },
            None => Screen::FetchFailed,
        }
    }
}

fn is_empty_document(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CheckPressed,
}

pub struct ForecastApp {
    screen: Screen,
    status: String,
}

impl Application for ForecastApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Screen;

    fn new(screen: Screen) -> (Self, Command<Message>) {
        let app = ForecastApp {
            screen,
            status: STATUS_INITIAL.to_string(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CheckPressed => {
                debug!("Check button pressed");
                self.status = STATUS_CHECKED.to_string();
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Loaded { blocks } => {
                let content = blocks
                    .iter()
                    .fold(
                        Column::new().spacing(12.0).padding(20.0).push(text(&self.status)),
                        |column, block| column.push(text(block)),
                    )
                    .push(button(CHECK_BUTTON_LABEL).on_press(Message::CheckPressed));
                scrollable(content).into()
            }
            Screen::FetchFailed => text(FETCH_FAILED_MESSAGE).into(),
        }
    }
}
