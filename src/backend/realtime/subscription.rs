/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription
 * handler for the event stream endpoint. Clients receive a greeting
 * immediately after connecting, then every board event as it happens,
 * with periodic keep-alive comments in between.
 *
 * # Connection Lifecycle
 *
 * Connecting -> Open (greeting sent, receiver registered in the
 * broadcast channel) -> Closed (client disconnect or write failure).
 * Removal from the subscriber set is the drop of the broadcast
 * receiver, which happens when the stream is dropped; dropping twice
 * is a no-op, so teardown is idempotent by construction.
 *
 * # Event Filtering
 *
 * Clients can filter events by kind using the `kinds` query parameter:
 * - `?kinds=like_changed,comment_added` - Only those kinds
 * - No parameter - All kinds
 *
 * # Slow Subscribers
 *
 * A lagged receiver logs and skips ahead instead of stalling; the
 * mutation path is never delayed by a slow or dead subscriber.
 */

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use futures_util::Stream;

use crate::backend::realtime::broadcast::BoardEventBroadcast;
use crate::shared::BoardEvent;

/// Keep-alive interval for open subscriber connections
const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Handle a real-time subscription (GET on the event stream endpoint)
///
/// # Query Parameters
///
/// - `kinds` - Comma-separated list of event kinds to receive
///   (optional; wire names, e.g. `like_changed`). Unknown names are
///   ignored; an entirely unknown list means no filter.
///
/// # Returns
///
/// An SSE stream: one `connected` greeting, then board events, with
/// keep-alive comments injected by axum on the fixed interval.
pub async fn handle_event_subscription(
    State(broadcast_tx): State<BoardEventBroadcast>,
    Query(query): Query<HashMap<String, String>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let filter: Option<Vec<String>> = query
        .get("kinds")
        .map(|kinds| {
            kinds
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .filter(|v: &Vec<_>| !v.is_empty());

    if let Some(ref kinds) = filter {
        tracing::info!("[Realtime] Subscriber connected, filtering kinds: {:?}", kinds);
    } else {
        tracing::info!("[Realtime] Subscriber connected, all kinds");
    }

    let broadcast_rx = broadcast_tx.subscribe();

    // Greeting first, then the live event stream
    let greeting = stream::once(async { sse_event(&BoardEvent::connected()) });

    let events = stream::unfold(
        (broadcast_rx, filter),
        move |(mut rx, filter)| async move {
            // Loop until an event passes the filter
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if let Some(ref kinds) = filter {
                            if !kinds.iter().any(|k| k == event.kind.as_str()) {
                                continue;
                            }
                        }
                        return Some((sse_event(&event), (rx, filter)));
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("[Realtime] Subscriber lagged, skipped {} events", skipped);
                        continue;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        tracing::debug!("[Realtime] Broadcast channel closed, ending stream");
                        return None;
                    }
                }
            }
        },
    );

    let stream = futures_util::StreamExt::chain(greeting, events);

    Sse::new(stream).keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL))
}

/// Serialize a board event into an SSE frame
///
/// The event kind doubles as the SSE event name so EventSource clients
/// can register per-kind listeners.
fn sse_event(event: &BoardEvent) -> Result<Event, axum::Error> {
    let data = serde_json::to_string(event).map_err(axum::Error::new)?;
    Ok(Event::default().event(event.kind.as_str()).data(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EventKind;

    #[test]
    fn test_sse_event_uses_kind_as_name() {
        let frame = sse_event(&BoardEvent::like_changed("abc", 1, true)).unwrap();
        // Event implements Debug; the event name and payload must be present
        let debug = format!("{:?}", frame);
        assert!(debug.contains("like_changed"));
        assert!(debug.contains("likeCount"));
    }

    #[tokio::test]
    async fn test_subscription_greets_then_forwards() {
        use futures_util::StreamExt;

        let (tx, _) = tokio::sync::broadcast::channel::<BoardEvent>(16);
        let sse = handle_event_subscription(
            State(tx.clone()),
            Query(HashMap::new()),
        )
        .await;
        // The Sse wrapper is opaque; exercise the same construction the
        // handler uses: greeting then a forwarded event.
        drop(sse);

        let mut rx = tx.subscribe();
        crate::backend::realtime::broadcast::broadcast_event(
            &tx,
            BoardEvent::idea_deleted("abc"),
        );
        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, EventKind::IdeaDeleted);

        let greeting = stream::once(async { sse_event(&BoardEvent::connected()) });
        let first = greeting.collect::<Vec<_>>().await.remove(0).unwrap();
        assert!(format!("{:?}", first).contains("connected"));
    }
}
