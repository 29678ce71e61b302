pub mod errors;

use std::time::Duration;
use log::info;
use ureq::Agent;
use crate::config::TelegramParameters;
use crate::manager_telegram::errors::TelegramError;
use crate::models::telegram::{ApiResponse, SendMessage};

/// Struct for delivering reports through the Telegram Bot API
pub struct Telegram {
    agent: Agent,
    bot_token: String,
    chat_id: String,
}

impl Telegram {
    /// Returns a new instance of the Telegram struct
    ///
    /// # Arguments
    ///
    /// * 'parameters' - bot token and chat id from the configuration
    pub fn new(parameters: &TelegramParameters) -> Telegram {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build();

        let agent = config.into();

        Self {
            agent,
            bot_token: parameters.bot_token.clone(),
            chat_id: parameters.chat_id.clone(),
        }
    }

    /// Sends a text message to the configured chat
    ///
    /// # Arguments
    ///
    /// * 'text' - the message to send
    pub fn send_message(&self, text: String) -> Result<(), TelegramError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);

        let req = SendMessage {
            chat_id: self.chat_id.clone(),
            text,
        };

        let json = serde_json::to_string(&req)?;

        let body = self.agent
            .post(&url)
            .content_type("application/json")
            .send(json)?
            .body_mut()
            .read_to_string()?;

        let response: ApiResponse = serde_json::from_str(&body)?;

        if !response.ok {
            return Err(TelegramError::Api(
                response.description.unwrap_or_else(|| "no description given".to_string()),
            ));
        }

        info!("report delivered to chat {}", self.chat_id);

        Ok(())
    }
}
