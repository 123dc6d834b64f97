//! Test doubles and Telegram payload fixtures.

use std::{path::Path, path::PathBuf, sync::Mutex, time::Duration};

use async_trait::async_trait;
use serde_json::{json, Value};

use pdfgate_core::{
    config::Config,
    domain::{ChannelRef, ChatId, MembershipStatus, MessageId, MessageRef, UserId},
    errors::Error,
    messaging::{port::MessagingPort, types::InlineKeyboard},
    Result,
};

/// One outbound call, in the order it was made.
#[derive(Clone, Debug, PartialEq)]
pub enum Sent {
    Text {
        chat_id: ChatId,
        text: String,
    },
    Keyboard {
        chat_id: ChatId,
        text: String,
        keyboard: InlineKeyboard,
    },
    Edit {
        msg: MessageRef,
        text: String,
        keyboard: InlineKeyboard,
    },
    Answer {
        callback_id: String,
    },
    Document {
        chat_id: ChatId,
        path: PathBuf,
        caption: Option<String>,
    },
}

/// How the fake answers membership lookups.
#[derive(Clone, Copy, Debug)]
pub enum Lookup {
    Status(MembershipStatus),
    Fail,
    Hang,
}

pub struct FakeMessenger {
    pub sent: Mutex<Vec<Sent>>,
    pub lookups: Mutex<Vec<(ChannelRef, UserId)>>,
    pub webhooks: Mutex<Vec<String>>,
    pub lookup: Lookup,
    pub fail_documents: bool,
    pub fail_webhook: bool,
    next_id: Mutex<i32>,
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self::with_lookup(Lookup::Status(MembershipStatus::Member))
    }

    pub fn with_lookup(lookup: Lookup) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
            webhooks: Mutex::new(Vec::new()),
            lookup,
            fail_documents: false,
            fail_webhook: false,
            next_id: Mutex::new(1),
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, chat_id: ChatId, call: Sent) -> MessageRef {
        self.sent.lock().unwrap().push(call);
        let mut id = self.next_id.lock().unwrap();
        let out = MessageRef {
            chat_id,
            message_id: MessageId(*id),
        };
        *id += 1;
        out
    }
}

#[async_trait]
impl MessagingPort for FakeMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
        Ok(self.record(
            chat_id,
            Sent::Text {
                chat_id,
                text: text.to_string(),
            },
        ))
    }

    async fn send_inline_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef> {
        Ok(self.record(
            chat_id,
            Sent::Keyboard {
                chat_id,
                text: text.to_string(),
                keyboard,
            },
        ))
    }

    async fn edit_inline_keyboard(
        &self,
        msg: MessageRef,
        text: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()> {
        self.record(
            msg.chat_id,
            Sent::Edit {
                msg,
                text: text.to_string(),
                keyboard,
            },
        );
        Ok(())
    }

    async fn answer_callback_query(&self, callback_id: &str, _text: Option<&str>) -> Result<()> {
        self.record(
            ChatId(0),
            Sent::Answer {
                callback_id: callback_id.to_string(),
            },
        );
        Ok(())
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        path: &Path,
        caption: Option<&str>,
    ) -> Result<MessageRef> {
        if self.fail_documents {
            return Err(Error::External("telegram error: file too big".to_string()));
        }
        Ok(self.record(
            chat_id,
            Sent::Document {
                chat_id,
                path: path.to_path_buf(),
                caption: caption.map(str::to_string),
            },
        ))
    }

    async fn get_chat_member(
        &self,
        channel: &ChannelRef,
        user_id: UserId,
    ) -> Result<MembershipStatus> {
        self.lookups
            .lock()
            .unwrap()
            .push((channel.clone(), user_id));
        match self.lookup {
            Lookup::Status(s) => Ok(s),
            Lookup::Fail => Err(Error::External(
                "telegram error: Bad Request: member list is inaccessible".to_string(),
            )),
            Lookup::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(MembershipStatus::Member)
            }
        }
    }

    async fn set_webhook(&self, url: &str) -> Result<()> {
        if self.fail_webhook {
            return Err(Error::External(
                "telegram error: Bad Request: bad webhook".to_string(),
            ));
        }
        self.webhooks.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        telegram_bot_token: "123456:ABC-def".to_string(),
        channel: ChannelRef::Username("@ax9_ai".to_string()),
        channel_link: "https://t.me/ax9_ai".to_string(),
        pdf_path: "/tmp/pdfgate-guide.pdf".into(),
        webhook_url: "https://bot.example.com".to_string(),
        host: [127, 0, 0, 1].into(),
        port: 5000,
        membership_timeout: Duration::from_millis(200),
    }
}

fn user() -> Value {
    json!({
        "id": 1111111,
        "is_bot": false,
        "first_name": "Test",
        "username": "tester",
        "language_code": "en"
    })
}

fn private_chat() -> Value {
    json!({
        "id": 1111111,
        "first_name": "Test",
        "username": "tester",
        "type": "private"
    })
}

pub fn text_update(text: &str) -> Value {
    json!({
        "update_id": 10000,
        "message": {
            "message_id": 1365,
            "from": user(),
            "chat": private_chat(),
            "date": 1441645532,
            "text": text
        }
    })
}

/// A text message with no `from`, as sent on behalf of a channel.
pub fn anonymous_text_update(text: &str) -> Value {
    let mut update = text_update(text);
    if let Some(msg) = update["message"].as_object_mut() {
        msg.remove("from");
    }
    update
}

pub fn callback_update(data: &str) -> Value {
    json!({
        "update_id": 10001,
        "callback_query": {
            "id": "4382bfdwdsb323b2d9",
            "from": user(),
            "message": {
                "message_id": 1366,
                "from": {
                    "id": 222222,
                    "is_bot": true,
                    "first_name": "Gate",
                    "username": "gate_bot"
                },
                "chat": private_chat(),
                "date": 1441645540,
                "text": "Get top 10 free neural networks and instructions on how to work with them"
            },
            "chat_instance": "-8811372377341133419",
            "data": data
        }
    })
}

pub fn location_update() -> Value {
    json!({
        "update_id": 10002,
        "message": {
            "message_id": 1367,
            "from": user(),
            "chat": private_chat(),
            "date": 1441645550,
            "location": { "latitude": 52.52, "longitude": 13.405 }
        }
    })
}
