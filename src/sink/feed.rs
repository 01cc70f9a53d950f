use crate::health::HealthState;

use super::{Result, StatusUpdate};

#[derive(serde::Serialize)]
struct FeedLine<'a> {
    target: &'a str,
    state: HealthState,
    color: &'static str,
}

/// Encodes `update` as one line of the JSON status feed read by the desktop shell.
///
/// # Errors
///
/// Returns [`super::Error::Encode`] if serialization fails.
///
/// # Example
/// ```
/// # use podwatch::health::HealthState;
/// # use podwatch::sink::{StatusUpdate, feed_line};
/// let line = feed_line(&StatusUpdate::new("ollama", HealthState::Healthy))?;
/// assert_eq!(line, r#"{"target":"ollama","state":"healthy","color":"green"}"#);
/// # Ok::<(), podwatch::sink::Error>(())
/// ```
pub fn feed_line(update: &StatusUpdate) -> Result<String> {
    let line = FeedLine {
        target: &update.target,
        state: update.state,
        color: update.state.color(),
    };
    Ok(serde_json::to_string(&line)?)
}
