//! Background tasks feeding the event loop.
//!
//! Every task reports back through the same `std::sync::mpsc::Sender<Action>`
//! the loop drains between frames. A task stops by itself once the receiver
//! is gone.
//!
//! ```text
//! poll   : load ─► poll ─► poll ─► … (failure: wait retry_delay, load again)
//! blink  : every interval ─► BlinkTick
//! send   : POST once, log the outcome
//! list   : GET ids once
//! ```

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{Instant, interval_at};

use crate::client::ChatSource;
use crate::core::action::Action;
use crate::core::message::OutgoingMessage;

/// Aborts the task when dropped.
pub struct TaskGuard(AbortHandle);

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Poll one chat until the returned guard is dropped.
pub fn spawn_poll(
    source: Arc<dyn ChatSource>,
    chat_id: String,
    retry_delay: Duration,
    tx: mpsc::Sender<Action>,
) -> TaskGuard {
    info!("Starting poll for chat {}", chat_id);
    let handle = tokio::spawn(poll_loop(source, chat_id, retry_delay, tx));
    TaskGuard(handle.abort_handle())
}

async fn poll_loop(
    source: Arc<dyn ChatSource>,
    chat_id: String,
    retry_delay: Duration,
    tx: mpsc::Sender<Action>,
) {
    // A full load first and after every failure, long-polls otherwise.
    let mut needs_load = true;
    loop {
        let result = if needs_load {
            source.load_chat(&chat_id).await
        } else {
            source.poll_update(&chat_id).await
        };

        let action = match result {
            Ok(update) => {
                debug!("Chat {} updated", chat_id);
                needs_load = false;
                Action::ChatUpdated {
                    chat_id: chat_id.clone(),
                    update,
                }
            }
            Err(e) => {
                warn!("Poll for chat {} failed: {}", chat_id, e);
                needs_load = true;
                Action::PollFailed {
                    chat_id: chat_id.clone(),
                    error: e.to_string(),
                }
            }
        };

        if tx.send(action).is_err() {
            debug!("Poll for chat {} stopped: receiver dropped", chat_id);
            return;
        }
        if needs_load {
            tokio::time::sleep(retry_delay).await;
        }
    }
}

/// Toggle cursor visibility every `period` until the guard is dropped.
pub fn spawn_blink(period: Duration, tx: mpsc::Sender<Action>) -> TaskGuard {
    let handle = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        loop {
            ticker.tick().await;
            if tx.send(Action::BlinkTick).is_err() {
                return;
            }
        }
    });
    TaskGuard(handle.abort_handle())
}

/// Fire-and-forget send. Only failures reach the loop.
pub fn spawn_send(
    source: Arc<dyn ChatSource>,
    chat_id: String,
    message: OutgoingMessage,
    tx: mpsc::Sender<Action>,
) {
    tokio::spawn(async move {
        match source.send(&chat_id, &message).await {
            Ok(()) => info!("Sent message to chat {}", chat_id),
            Err(e) => {
                if tx.send(Action::SendFailed(e.to_string())).is_err() {
                    warn!("Failed to report send error: receiver dropped");
                }
            }
        }
    });
}

/// Fetch the chat ids once.
pub fn spawn_list(source: Arc<dyn ChatSource>, tx: mpsc::Sender<Action>) -> TaskGuard {
    let handle = tokio::spawn(async move {
        let action = match source.list_chats().await {
            Ok(ids) => Action::ChatsLoaded(ids),
            Err(e) => {
                warn!("Listing chats failed: {}", e);
                Action::ChatsFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver chat list: receiver dropped");
        }
    });
    TaskGuard(handle.abort_handle())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::core::message::ChatUpdate;
    use crate::test_support::message;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const LONG_POLL: Duration = Duration::from_millis(100);

    /// Answers calls from a script; an exhausted script never resolves.
    #[derive(Default)]
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<ChatUpdate, ClientError>>>,
        calls: Mutex<Vec<(&'static str, Instant)>>,
        sent: Mutex<Vec<OutgoingMessage>>,
        send_result: Option<ClientError>,
    }

    impl ScriptedSource {
        fn with(responses: Vec<Result<ChatUpdate, ClientError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                ..Default::default()
            }
        }

        async fn next(&self, call: &'static str) -> Result<ChatUpdate, ClientError> {
            self.calls.lock().unwrap().push((call, Instant::now()));
            tokio::time::sleep(LONG_POLL).await;
            let next = self.responses.lock().unwrap().pop_front();
            match next {
                Some(result) => result,
                None => std::future::pending().await,
            }
        }

        fn call_names(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().iter().map(|(n, _)| *n).collect()
        }
    }

    #[async_trait]
    impl ChatSource for ScriptedSource {
        async fn list_chats(&self) -> Result<Vec<String>, ClientError> {
            Ok(vec!["a".to_string(), "b".to_string()])
        }

        async fn load_chat(&self, _chat_id: &str) -> Result<ChatUpdate, ClientError> {
            self.next("load").await
        }

        async fn poll_update(&self, _chat_id: &str) -> Result<ChatUpdate, ClientError> {
            self.next("poll").await
        }

        async fn send(&self, _chat_id: &str, message: &OutgoingMessage) -> Result<(), ClientError> {
            self.sent.lock().unwrap().push(message.clone());
            match &self.send_result {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn snapshot(title: &str) -> ChatUpdate {
        ChatUpdate {
            title: Some(title.to_string()),
            messages: Some(vec![message("x", "hello")]),
        }
    }

    fn server_error() -> ClientError {
        ClientError::Status {
            status: 500,
            body: Some("server error".to_string()),
            reason: "Internal Server Error".to_string(),
        }
    }

    /// Wait (in paused time) for the next action.
    async fn next_action(rx: &mpsc::Receiver<Action>) -> Action {
        loop {
            if let Ok(action) = rx.try_recv() {
                return action;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_loads_then_long_polls() {
        let source = Arc::new(ScriptedSource::with(vec![
            Ok(snapshot("First")),
            Ok(snapshot("Second")),
        ]));
        let (tx, rx) = mpsc::channel();
        let _guard = spawn_poll(source.clone(), "c".to_string(), Duration::from_secs(1), tx);

        for title in ["First", "Second"] {
            match next_action(&rx).await {
                Action::ChatUpdated { chat_id, update } => {
                    assert_eq!(chat_id, "c");
                    assert_eq!(update.title.as_deref(), Some(title));
                }
                other => panic!("unexpected {:?}", other),
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(source.call_names(), vec!["load", "poll", "poll"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_failure_waits_then_reloads() {
        let source = Arc::new(ScriptedSource::with(vec![
            Ok(snapshot("First")),
            Err(server_error()),
            Ok(snapshot("Recovered")),
        ]));
        let (tx, rx) = mpsc::channel();
        let retry = Duration::from_secs(2);
        let _guard = spawn_poll(source.clone(), "c".to_string(), retry, tx);

        assert!(matches!(next_action(&rx).await, Action::ChatUpdated { .. }));
        match next_action(&rx).await {
            Action::PollFailed { error, .. } => assert_eq!(error, "500: server error"),
            other => panic!("unexpected {:?}", other),
        }
        match next_action(&rx).await {
            Action::ChatUpdated { update, .. } => {
                assert_eq!(update.title.as_deref(), Some("Recovered"))
            }
            other => panic!("unexpected {:?}", other),
        }

        let calls = source.calls.lock().unwrap().clone();
        let names: Vec<_> = calls.iter().map(|(n, _)| *n).collect();
        assert_eq!(names[..3], ["load", "poll", "load"]);
        // The reload starts only after the failed poll resolved and the delay passed.
        assert!(calls[2].1 - calls[1].1 >= LONG_POLL + retry);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_retry_delay_reloads_immediately() {
        let source = Arc::new(ScriptedSource::with(vec![
            Err(server_error()),
            Ok(snapshot("Recovered")),
        ]));
        let (tx, rx) = mpsc::channel();
        let _guard = spawn_poll(source.clone(), "c".to_string(), Duration::ZERO, tx);

        assert!(matches!(next_action(&rx).await, Action::PollFailed { .. }));
        assert!(matches!(next_action(&rx).await, Action::ChatUpdated { .. }));

        let calls = source.calls.lock().unwrap().clone();
        let names: Vec<_> = calls.iter().map(|(n, _)| *n).collect();
        assert_eq!(names[..2], ["load", "load"]);
        // Only the failed request's own latency separates the two loads.
        assert!(calls[1].1 - calls[0].1 < LONG_POLL + Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_guard_stops_polling() {
        let source = Arc::new(ScriptedSource::with(vec![
            Ok(snapshot("First")),
            Ok(snapshot("Second")),
            Ok(snapshot("Third")),
        ]));
        let (tx, rx) = mpsc::channel();
        let guard = spawn_poll(source.clone(), "c".to_string(), Duration::from_secs(1), tx);

        assert!(matches!(next_action(&rx).await, Action::ChatUpdated { .. }));
        drop(guard);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(rx.try_recv().is_err());
        assert_eq!(source.call_names(), vec!["load", "poll"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blink_ticks_at_interval() {
        let (tx, rx) = mpsc::channel();
        let _guard = spawn_blink(Duration::from_millis(500), tx);

        tokio::time::sleep(Duration::from_millis(1250)).await;
        let ticks: Vec<_> = rx.try_iter().collect();
        assert_eq!(ticks, vec![Action::BlinkTick, Action::BlinkTick]);
    }

    #[tokio::test]
    async fn test_send_failure_is_reported() {
        let source = Arc::new(ScriptedSource {
            send_result: Some(server_error()),
            ..Default::default()
        });
        let (tx, rx) = mpsc::channel();
        let msg = OutgoingMessage {
            from: "me".to_string(),
            text: "hi".to_string(),
            sent_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        spawn_send(source.clone(), "c".to_string(), msg.clone(), tx);

        assert_eq!(
            next_action(&rx).await,
            Action::SendFailed("500: server error".to_string())
        );
        assert_eq!(source.sent.lock().unwrap().as_slice(), &[msg]);
    }

    #[tokio::test]
    async fn test_list_reports_ids() {
        let (tx, rx) = mpsc::channel();
        let _guard = spawn_list(Arc::new(ScriptedSource::default()), tx);
        assert_eq!(
            next_action(&rx).await,
            Action::ChatsLoaded(vec!["a".to_string(), "b".to_string()])
        );
    }
}
