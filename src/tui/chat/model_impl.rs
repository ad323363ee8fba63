//! `Model` trait implementation for the chat view.

use std::any::Any;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};

use super::ChatApp;
use super::input::map_chat_key;
use super::messages::ChatMsg;
use crate::chat::DEFAULT_CHAT_ENDPOINT;
use crate::tui::storage::{get_chat_context, get_telemetry_sink};
use crate::tui::viewport::normalise_viewport;

impl Model for ChatApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = get_chat_context()
            .map_or_else(
                || Self::new(DEFAULT_CHAT_ENDPOINT),
                |context| Self::from_context(&context),
            )
            .with_telemetry(get_telemetry_sink());

        // A display name from the identity provider skips the form.
        let cmd = model.auto_register();
        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        let other = match msg.downcast::<ChatMsg>() {
            Ok(chat_msg) => return self.handle_message(*chat_msg),
            Err(other) => other,
        };

        if let Some(key_msg) = other.downcast_ref::<KeyMsg>() {
            let mapped = map_chat_key(key_msg, self.input_context())?;
            return self.handle_message(mapped);
        }

        if let Some(size_msg) = other.downcast_ref::<WindowSizeMsg>() {
            return self.handle_message(ChatMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        let output = if self.state.is_connected() {
            self.render_chat_screen()
        } else {
            self.render_register_screen()
        };
        normalise_viewport(&output, self.width, self.height)
    }
}
