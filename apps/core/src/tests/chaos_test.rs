use crate::actors::messages::{ActorError, AppError, ReplySource, APOLOGY_MESSAGE};
use crate::actors::supervisor::SupervisorHandle;
use crate::actors::traits::GenerativeClient;
use crate::brain::{Category, ResponseComposer};
use crate::random::SeededRandom;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tokio::time::{sleep, Duration};

// --- Mock Components ---

struct FlakyGenerative {
    delay_ms: u64,
    should_fail: bool,
    request_count: Arc<AtomicUsize>,
}

#[async_trait]
impl GenerativeClient for FlakyGenerative {
    async fn generate(&self, _prompt: String, _system_prompt: Option<String>) -> Result<String, AppError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        sleep(Duration::from_millis(self.delay_ms)).await;
        if self.should_fail {
            return Err(AppError::Actor(ActorError::Internal("Simulated failure".to_string())));
        }
        Ok("Generated guidance".to_string())
    }
}

fn supervisor(delay_ms: u64, should_fail: bool, reply_timeout: Duration) -> (SupervisorHandle, Arc<AtomicUsize>) {
    let request_count = Arc::new(AtomicUsize::new(0));
    let collaborator = Arc::new(FlakyGenerative {
        delay_ms,
        should_fail,
        request_count: request_count.clone(),
    }) as Arc<dyn GenerativeClient>;
    let composer = ResponseComposer::with_random(Arc::new(SeededRandom::new(42))).unwrap();
    let handle = SupervisorHandle::spawn(composer, Some(collaborator), 8, reply_timeout);
    (handle, request_count)
}

#[tokio::test]
async fn test_chaos_concurrent_requests() {
    let (handle, request_count) = supervisor(20, false, Duration::from_secs(5));

    let mut tasks = Vec::new();
    for i in 0..20 {
        let handle = handle.clone();
        tasks.push(tokio::spawn(async move {
            // Even requests hit the rules, odd ones the collaborator.
            let message = if i % 2 == 0 { "calories in banana" } else { "blorp" };
            handle.process_message(message).await
        }));
    }

    for task in tasks {
        let reply = task.await.unwrap();
        assert_ne!(reply.source, ReplySource::Fallback);
        assert!(!reply.text().is_empty());
    }
    assert_eq!(request_count.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn test_chaos_failing_collaborator() {
    let (handle, request_count) = supervisor(10, true, Duration::from_secs(5));

    for _ in 0..5 {
        let reply = handle.process_message("blorp").await;
        assert_eq!(reply.source, ReplySource::Rules);
        assert_eq!(reply.response.category(), Category::General);
    }
    assert_eq!(request_count.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_chaos_slow_collaborator_times_out() {
    let (handle, _) = supervisor(2_000, false, Duration::from_millis(200));

    let reply = handle.process_message("blorp").await;
    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(reply.response.category(), Category::Analysis);
    assert_eq!(reply.text(), APOLOGY_MESSAGE);
}

#[tokio::test]
async fn test_chaos_hostile_inputs() {
    let (handle, _) = supervisor(0, false, Duration::from_secs(5));

    let long = "chest pain ".repeat(5_000);
    let inputs = [
        "",
        "\0\0\0",
        "?????",
        "((((.*))))",
        "calories in ",
        "🤒🤕🤧",
        "ＣＨＥＳＴ ＰＡＩＮ",
        long.as_str(),
    ];
    for input in inputs {
        let reply = handle.process_message(input).await;
        assert_ne!(reply.source, ReplySource::Fallback, "for {:?}", input.chars().take(20).collect::<String>());
        assert!(!reply.text().is_empty());
    }
}

#[tokio::test]
async fn test_chaos_requests_after_shutdown() {
    let (handle, request_count) = supervisor(0, false, Duration::from_secs(5));
    handle.shutdown().await;
    // Give the actor a moment to drain and drop its receiver.
    sleep(Duration::from_millis(50)).await;

    let reply = handle.process_message("hello").await;
    assert_eq!(reply.source, ReplySource::Fallback);
    assert!(handle.history().await.is_err());
    assert_eq!(request_count.load(Ordering::SeqCst), 0);
}
