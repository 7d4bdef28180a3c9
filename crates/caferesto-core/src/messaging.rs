//! Contact and reservation hand-offs.
//!
//! Neither form is stored anywhere: the contact form becomes a WhatsApp deep
//! link and the reservation form becomes a chat-bot message.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{SiteError, SiteResult};

/// Largest party the reservation form accepts.
pub const MAX_PARTY_SIZE: u8 = 12;
/// Reservation slots are this many minutes apart.
pub const SLOT_MINUTES: u32 = 15;

/// Earliest bookable time.
pub fn first_slot() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 30, 0).unwrap_or(NaiveTime::MIN)
}

/// Latest bookable time.
pub fn last_slot() -> NaiveTime {
    NaiveTime::from_hms_opt(21, 30, 0).unwrap_or(NaiveTime::MIN)
}

/// Fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn text(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nMessage: {}",
            self.name, self.email, self.phone, self.message
        )
    }

    /// WhatsApp web link carrying this message to `phone`.
    pub fn whatsapp_url(&self, phone: &str) -> String {
        whatsapp_url(phone, &self.text())
    }
}

/// `https://api.whatsapp.com/send?phone=<phone>&text=<encoded text>`
pub fn whatsapp_url(phone: &str, text: &str) -> String {
    format!(
        "https://api.whatsapp.com/send?phone={}&text={}",
        phone,
        urlencoding::encode(text)
    )
}

/// A validated table reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub party: u8,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: String,
}

/// Raw reservation form values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub party: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl ReservationForm {
    /// Check the form against the same constraints the inputs declare and
    /// build a request. `today` is the earliest bookable date.
    pub fn validate(&self, today: NaiveDate) -> SiteResult<ReservationRequest> {
        let name = required("name", &self.name)?;
        let phone = required("phone", &self.phone)?;
        let email = required("email", &self.email)?;
        if !email.contains('@') {
            return Err(invalid(format!("email {email:?} is not an address")));
        }

        let party: u8 = required("party size", &self.party)?
            .parse()
            .map_err(|_| invalid(format!("party size {:?} is not a number", self.party)))?;
        if !(1..=MAX_PARTY_SIZE).contains(&party) {
            return Err(invalid(format!(
                "party size must be between 1 and {MAX_PARTY_SIZE}"
            )));
        }

        let date = NaiveDate::parse_from_str(required("date", &self.date)?, "%Y-%m-%d")
            .map_err(|_| invalid(format!("date {:?} is not YYYY-MM-DD", self.date)))?;
        if date < today {
            return Err(invalid(format!("date {date} is in the past")));
        }

        let time = parse_time(required("time", &self.time)?)?;
        if time < first_slot() || time > last_slot() {
            return Err(invalid(format!(
                "time {} is outside opening hours {}-{}",
                time.format("%H:%M"),
                first_slot().format("%H:%M"),
                last_slot().format("%H:%M")
            )));
        }
        if time.minute() % SLOT_MINUTES != 0 || time.second() != 0 {
            return Err(invalid(format!(
                "time must be on a {SLOT_MINUTES}-minute slot"
            )));
        }

        Ok(ReservationRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            party,
            date,
            time,
            notes: self.notes.trim().to_string(),
        })
    }
}

fn required<'a>(field: &str, value: &'a str) -> SiteResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(invalid(format!("{field} is required")))
    } else {
        Ok(value)
    }
}

fn invalid(reason: String) -> SiteError {
    SiteError::InvalidReservation(reason)
}

// Time inputs send HH:MM, or HH:MM:SS when a seconds step is in play.
fn parse_time(value: &str) -> SiteResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| invalid(format!("time {value:?} is not HH:MM")))
}

impl ReservationRequest {
    /// Message text sent to the chat bot.
    pub fn text(&self) -> String {
        let notes = if self.notes.trim().is_empty() {
            "None"
        } else {
            self.notes.as_str()
        };
        format!(
            "Reservation Request:\n\n\
             Name: {}\n\
             Phone: {}\n\
             Email: {}\n\
             Party Size: {}\n\
             Date: {}\n\
             Time: {}\n\
             Special Requests: {}",
            self.name,
            self.phone,
            self.email,
            self.party,
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            notes
        )
    }

    pub fn to_chat_message(&self, chat_id: &str) -> ChatBotMessage {
        ChatBotMessage {
            chat_id: chat_id.to_string(),
            text: self.text(),
        }
    }
}

/// JSON body of the chat-bot `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatBotMessage {
    pub chat_id: String,
    pub text: String,
}

/// `sendMessage` URL for a bot token.
pub fn chat_bot_url(api_base: &str, token: &str) -> String {
    format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), token)
}
