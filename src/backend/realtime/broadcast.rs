/**
 * Real-time Event Broadcasting
 *
 * This module provides utilities for broadcasting real-time events to
 * all subscribers. Events are fanned out using `tokio::sync::broadcast`,
 * a multi-producer, multi-consumer channel: every subscriber receives a
 * copy of each event.
 *
 * # Non-blocking Fan-out
 *
 * `broadcast::Sender::send` never blocks and never fails the caller: a
 * slow subscriber lags and skips events on its own receiver, a dead one
 * is simply dropped when its stream ends. A mutation that triggers an
 * event always reports success regardless of subscriber health.
 */

use tokio::sync::broadcast;

use crate::shared::BoardEvent;

/// Broadcast channel sender for board events
///
/// Can be cloned and shared across handlers to allow broadcasting
/// events from anywhere in the application.
pub type BoardEventBroadcast = broadcast::Sender<BoardEvent>;

/// Broadcast a board event to all subscribers
///
/// # Arguments
///
/// * `broadcast_tx` - The broadcast sender
/// * `event` - The event to broadcast
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if none).
pub fn broadcast_event(broadcast_tx: &BoardEventBroadcast, event: BoardEvent) -> usize {
    let kind = event.kind.as_str();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::debug!("[Realtime] Broadcast {} to {} subscribers", kind, subscriber_count);
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::trace!("[Realtime] No subscribers for {}", kind);
            0
        }
    }
}
