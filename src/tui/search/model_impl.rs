//! `Model` trait implementation for the search view.

use std::any::Any;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};

use super::SearchApp;
use super::input::map_key_to_message;
use super::messages::SearchMsg;
use crate::auctions::SearchState;
use crate::tui::storage::{get_search_context, get_telemetry_sink};
use crate::tui::viewport::normalise_viewport;

impl Model for SearchApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = get_search_context().map_or_else(
            || Self::new(SearchState::default()),
            |context| Self::from_context(&context),
        );

        // The first fetch is issued when `SearchMsg::Initialized` arrives so
        // the loading frame renders before any network work starts.
        let cmd: Cmd = Box::pin(async {
            Some(Box::new(SearchMsg::Initialized) as Box<dyn Any + Send>)
        });

        (model.with_telemetry(get_telemetry_sink()), Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(search_msg) = msg.downcast_ref::<SearchMsg>() {
            return self.handle_message(search_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.show_help {
                return self.handle_message(&SearchMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context())?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.handle_message(&SearchMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return normalise_viewport(&self.render_help_overlay(), self.width, self.height);
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_search_line());
        output.push_str(&self.render_category_line());
        output.push('\n');
        output.push_str(&self.render_results());
        output.push_str(&self.render_status_bar());

        normalise_viewport(&output, self.width, self.height)
    }
}
