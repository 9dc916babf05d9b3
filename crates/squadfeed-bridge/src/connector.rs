//! NATS feed from the game-session connector.
//!
//! The connector publishes two kinds of JSON messages:
//!
//! - a [`WoundNotification`] per "player wounded" log line, on
//!   `connector.wound_subject`
//! - the full player list whenever it changes, on `connector.roster_subject`
//!
//! [`NatsConnector::forward`] decodes both and sends them into the observer's
//! ingest channel. Messages on one subject are forwarded in the order NATS
//! delivers them.

use futures::StreamExt as _;
use squadfeed_core::config::ConnectorConfig;
use squadfeed_observer::SessionUpdate;
use squadfeed_types::{Player, WoundNotification};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::BridgeError;

/// Which subject a message arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// "Player wounded" notifications.
    Wounds,
    /// Roster snapshots.
    Roster,
}

/// NATS client wrapper for the connector feed.
pub struct NatsConnector {
    client: async_nats::Client,
}

impl NatsConnector {
    /// Connect to a NATS server.
    pub async fn connect(url: &str) -> Result<Self, BridgeError> {
        info!(url = url, "connecting to NATS server");
        let client = async_nats::connect(url).await.map_err(|e| BridgeError::Nats {
            message: format!("failed to connect to {url}: {e}"),
        })?;
        info!("NATS connection established");
        Ok(Self { client })
    }

    /// Forward connector messages into the ingest channel.
    ///
    /// Runs until both subscriptions end or the ingest side is dropped.
    /// Payloads that do not decode are logged and skipped.
    pub async fn forward(
        &self,
        config: &ConnectorConfig,
        tx: mpsc::Sender<SessionUpdate>,
    ) -> Result<(), BridgeError> {
        let wounds = self.subscribe(&config.wound_subject).await?;
        let roster = self.subscribe(&config.roster_subject).await?;

        let mut messages = futures::stream::select(
            wounds.map(|msg| (Feed::Wounds, msg)),
            roster.map(|msg| (Feed::Roster, msg)),
        );

        while let Some((feed, msg)) = messages.next().await {
            let update = match decode(feed, &msg.payload) {
                Ok(update) => update,
                Err(e) => {
                    warn!(
                        subject = %msg.subject,
                        error = %e,
                        "failed to decode connector message"
                    );
                    continue;
                }
            };
            if tx.send(update).await.is_err() {
                debug!("ingest channel closed, stopping connector feed");
                break;
            }
        }

        info!("connector feed ended");
        Ok(())
    }

    async fn subscribe(&self, subject: &str) -> Result<async_nats::Subscriber, BridgeError> {
        let subscriber = self
            .client
            .subscribe(subject.to_owned())
            .await
            .map_err(|e| BridgeError::Nats {
                message: format!("failed to subscribe to {subject}: {e}"),
            })?;
        info!(subject = subject, "subscribed to connector subject");
        Ok(subscriber)
    }
}

/// Decode a connector payload into an ingest update.
pub fn decode(feed: Feed, payload: &[u8]) -> Result<SessionUpdate, serde_json::Error> {
    Ok(match feed {
        Feed::Wounds => {
            SessionUpdate::Wounded(serde_json::from_slice::<WoundNotification>(payload)?)
        }
        Feed::Roster => SessionUpdate::Roster(serde_json::from_slice::<Vec<Player>>(payload)?),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decode_wound_payload() {
        let payload = br#"{
            "time": "2024-05-01T12:00:00Z",
            "attacker": { "name": "A", "playerID": 1, "steamID": "1", "teamID": 1 },
            "victim": { "name": "B", "playerID": 2, "steamID": "2", "teamID": 2 },
            "damage": 99.0,
            "weapon": "BP_SVD",
            "teamkill": false
        }"#;
        let update = decode(Feed::Wounds, payload).unwrap();
        assert!(matches!(update, SessionUpdate::Wounded(w) if w.weapon == "BP_SVD"));
    }

    #[test]
    fn decode_roster_payload() {
        let payload = br#"[
            { "name": "A", "playerID": 1, "steamID": "1", "teamID": 1, "isLeader": true, "squadID": 3 },
            { "name": "B", "playerID": 2, "teamID": 2 }
        ]"#;
        let update = decode(Feed::Roster, payload).unwrap();
        assert!(matches!(update, SessionUpdate::Roster(players) if players.len() == 2));
    }

    #[test]
    fn decode_rejects_mismatched_payload() {
        assert!(decode(Feed::Wounds, b"[]").is_err());
        assert!(decode(Feed::Roster, b"not json").is_err());
    }
}
