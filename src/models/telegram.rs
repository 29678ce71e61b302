use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Response envelope of the Telegram Bot API
#[derive(Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
