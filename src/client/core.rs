//! # Client core: instance lifecycle and submission queue.
//!
//! [`Client`] gates all collector traffic behind a one-time initialization
//! handshake and preserves the arrival order of events submitted before the
//! handshake completes.
//!
//! ## Architecture
//! ```text
//! submit(event)
//!     │  (state dispatch, one synchronous critical section)
//!     ├─ Ready(id) ──────► delivery task ──► Transport::deliver
//!     ├─ Initializing ───► queue (FIFO)
//!     ├─ Uninitialized ──► queue (FIFO) ─┬─ first caller ─► NeedsBootstrap
//!     │                                  └─ others ───────► Accepted
//!     └─ Failed ─────────► Accepted (rejected: initialization failed)
//!
//! Bootstrap::run(env, schema)
//!     └─► initialize ──► Transport::create_instance
//!             ├─ success ─► state = Ready(id) ─► drain()
//!             └─ failure ─► state = Failed ───► reject queued entries
//!
//! drain()   [guard + FIFO removal under the lock, issue order preserved]
//!     └─► one batch task ──► join_all(deliver e1, deliver e2, ...)
//! ```
//!
//! ## Ordering rules
//! - The `Uninitialized → Initializing` flip happens in the same critical
//!   section as its precondition check, so a second `initialize` arriving
//!   before the first round-trip resolves is a no-op, not a double-fire.
//! - `submit`'s state dispatch and enqueue are one critical section: an
//!   entry can never slip in behind a completed drain and strand.
//! - Drain removal is FIFO and synchronous; the batch's transport calls are
//!   issued in removal order but complete independently of each other.
//! - Ordering between queued entries and events submitted after the client
//!   is already `Ready` is not defined; direct dispatch does not wait for
//!   an in-flight drain.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::config::ClientConfig;
use crate::diag::{Diag, DiagEvent, DiagKind};
use crate::error::{ConfigError, DeliverError};
use crate::events::RequestEvent;
use crate::host::HostIdentity;
use crate::transport::{DeliveryRequest, InstanceRequest, Transport};

use super::bootstrap::Bootstrap;
use super::outcome::{Outcome, PendingRequest};
use super::queue::SubmitQueue;
use super::state::InstanceState;
use super::submission::Submission;

/// Lazily-initializing telemetry client.
///
/// Cheap to clone; all clones share one lifecycle state and queue.
#[derive(Clone)]
pub struct Client {
    core: Arc<ClientCore>,
}

impl Client {
    /// Creates a client with detected host identity and no diagnostics sink.
    ///
    /// Shorthand for `Client::builder(config, transport).build()`.
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        Self::builder(config, transport).build()
    }

    /// Returns a builder for optional wiring (diagnostics sink, host
    /// identity override).
    pub fn builder(config: ClientConfig, transport: Arc<dyn Transport>) -> ClientBuilder {
        ClientBuilder {
            config,
            transport,
            diag: None,
            host: None,
        }
    }

    /// Submits one observed request.
    ///
    /// Returns synchronously; delivery happens on background tasks. See
    /// [`Submission`] for the two possible shapes. This is the client's sole
    /// entry point for event traffic.
    pub fn submit(&self, event: RequestEvent) -> Submission {
        self.core.submit(event)
    }

    /// Snapshot of the lifecycle state.
    pub fn state(&self) -> InstanceState {
        self.core.lock().state.clone()
    }

    /// Number of events currently buffered.
    pub fn queued(&self) -> usize {
        self.core.lock().queue.len()
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    diag: Option<Arc<dyn Diag>>,
    host: Option<HostIdentity>,
}

impl ClientBuilder {
    /// Installs a diagnostics sink. Without one, the channel is inert.
    pub fn with_diag(mut self, sink: Arc<dyn Diag>) -> Self {
        self.diag = Some(sink);
        self
    }

    /// Overrides the detected host identity.
    pub fn with_host(mut self, host: HostIdentity) -> Self {
        self.host = Some(host);
        self
    }

    /// Validates the configuration and builds the client.
    pub fn build(self) -> Result<Client, ConfigError> {
        self.config.validate()?;
        let host = self
            .host
            .unwrap_or_else(|| HostIdentity::detect().clone());
        let queue = SubmitQueue::new(self.config.queue_capacity);

        Ok(Client {
            core: Arc::new(ClientCore {
                config: self.config,
                transport: self.transport,
                host,
                diag: self.diag,
                inner: Mutex::new(CoreInner {
                    state: InstanceState::Uninitialized,
                    queue,
                    bootstrap_issued: false,
                }),
            }),
        })
    }
}

/// State shared by all clones of a [`Client`].
pub(super) struct ClientCore {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    host: HostIdentity,
    diag: Option<Arc<dyn Diag>>,
    inner: Mutex<CoreInner>,
}

/// Mutable core, guarded by one lock so every state decision is a single
/// synchronous critical section. The lock is never held across an await.
struct CoreInner {
    state: InstanceState,
    queue: SubmitQueue,
    bootstrap_issued: bool,
}

impl ClientCore {
    fn lock(&self) -> MutexGuard<'_, CoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: DiagEvent) {
        if let Some(sink) = &self.diag {
            sink.record(&event);
        }
    }

    fn submit(self: &Arc<Self>, event: RequestEvent) -> Submission {
        let mut inner = self.lock();
        match inner.state {
            InstanceState::Ready(ref id) => {
                let id = Arc::clone(id);
                drop(inner);
                let (pending, outcome) = PendingRequest::new(event);
                self.spawn_delivery(id, pending);
                Submission::Accepted(outcome)
            }
            InstanceState::Failed => {
                Submission::Accepted(Outcome::resolved(Err(DeliverError::InitializationFailed)))
            }
            InstanceState::Uninitialized | InstanceState::Initializing => {
                let (pending, outcome) = PendingRequest::new(event);
                match inner.queue.push(pending) {
                    Err(rejected) => {
                        drop(inner);
                        self.emit(
                            DiagEvent::new(DiagKind::QueueOverflow)
                                .with_queued(self.config.queue_capacity),
                        );
                        rejected.resolve(Err(DeliverError::QueueFull));
                        Submission::Accepted(outcome)
                    }
                    Ok(()) => {
                        let first = matches!(inner.state, InstanceState::Uninitialized)
                            && !inner.bootstrap_issued;
                        if first {
                            inner.bootstrap_issued = true;
                        }
                        let depth = inner.queue.len();
                        drop(inner);
                        self.emit(DiagEvent::new(DiagKind::EventQueued).with_queued(depth));
                        if first {
                            Submission::NeedsBootstrap(Bootstrap::new(Arc::clone(self), outcome))
                        } else {
                            Submission::Accepted(outcome)
                        }
                    }
                }
            }
        }
    }

    /// One-shot initialization handshake.
    ///
    /// The state flip to `Initializing` shares a critical section with the
    /// precondition check; everything after the transport round-trip goes
    /// through the lock again. Transport errors are recorded on the
    /// diagnostics channel and otherwise swallowed; callers observe them
    /// through their event outcomes.
    pub(super) async fn initialize(self: &Arc<Self>, environment: String, schema: Value) {
        {
            let mut inner = self.lock();
            if !matches!(inner.state, InstanceState::Uninitialized) {
                let label = inner.state.as_label();
                drop(inner);
                self.emit(DiagEvent::new(DiagKind::InitializeIgnored).with_detail(label));
                return;
            }
            inner.state = InstanceState::Initializing;
        }
        self.emit(DiagEvent::new(DiagKind::InitializeStarted).with_detail(environment.clone()));

        let request = InstanceRequest {
            app_name: self.config.app_name.clone(),
            environment,
            schema,
            host: self.host.clone(),
        };

        match self.transport.create_instance(&request).await {
            Ok(response) => {
                let id: Arc<str> = response.instance_id.into();
                self.lock().state = InstanceState::Ready(Arc::clone(&id));
                self.emit(DiagEvent::new(DiagKind::InstanceReady).with_detail(id.as_ref()));
                self.drain();
            }
            Err(error) => {
                let orphaned = {
                    let mut inner = self.lock();
                    inner.state = InstanceState::Failed;
                    inner.queue.take_all()
                };
                self.emit(DiagEvent::new(DiagKind::InstanceFailed).with_detail(error.to_string()));
                for pending in orphaned {
                    pending.resolve(Err(DeliverError::InitializationFailed));
                }
            }
        }
    }

    /// Delivers every buffered event, in arrival order, at most one pass at
    /// a time.
    ///
    /// Guard check, guard set, and FIFO removal are one critical section; a
    /// redundant trigger (or one arriving before the client is ready) returns
    /// immediately. The removed batch is issued in order on a single
    /// background task and completes concurrently; the guard is released
    /// after the batch settles, and a non-empty re-check starts another pass.
    pub(super) fn drain(self: &Arc<Self>) {
        let (instance, batch) = {
            let mut inner = self.lock();
            if inner.queue.draining || inner.queue.is_empty() {
                return;
            }
            let InstanceState::Ready(id) = &inner.state else {
                return;
            };
            let id = Arc::clone(id);
            inner.queue.draining = true;
            (id, inner.queue.take_all())
        };
        self.emit(DiagEvent::new(DiagKind::DrainStarted).with_queued(batch.len()));

        let core = Arc::clone(self);
        tokio::spawn(async move {
            // join_all first-polls in vector order: transport calls are
            // issued in removal order, completions interleave freely.
            let deliveries = batch
                .into_iter()
                .map(|pending| core.deliver_one(Arc::clone(&instance), pending));
            futures::future::join_all(deliveries).await;

            core.lock().queue.draining = false;
            core.emit(DiagEvent::new(DiagKind::DrainFinished));
            core.drain();
        });
    }

    fn spawn_delivery(self: &Arc<Self>, instance: Arc<str>, pending: PendingRequest) {
        let core = Arc::clone(self);
        tokio::spawn(async move {
            core.deliver_one(instance, pending).await;
        });
    }

    /// Hands one event to the transport and resolves its completion handle.
    ///
    /// A failed delivery is recorded and reported to its own caller only;
    /// it never touches lifecycle state or other entries.
    async fn deliver_one(&self, instance: Arc<str>, pending: PendingRequest) {
        let request = DeliveryRequest {
            event: pending.event.clone(),
            instance_id: instance.to_string(),
            host: self.host.clone(),
        };
        let result = match self.transport.deliver(&request).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.emit(DiagEvent::new(DiagKind::DeliveryFailed).with_detail(error.to_string()));
                Err(error.into())
            }
        };
        pending.resolve(result);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Notify;
    use tokio::task::yield_now;

    use super::*;
    use crate::transport::{InstanceResponse, TransportError};

    /// Scripted collector double.
    #[derive(Default)]
    struct MockTransport {
        create_calls: AtomicUsize,
        reject_create: bool,
        create_gate: Option<Arc<Notify>>,
        deliveries: StdMutex<Vec<DeliveryRequest>>,
        deliver_gate: Option<Arc<Notify>>,
        reject_paths: Vec<String>,
    }

    impl MockTransport {
        fn ok() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn delivered_paths(&self) -> Vec<String> {
            self.deliveries
                .lock()
                .unwrap()
                .iter()
                .map(|d| d.event.path.clone())
                .collect()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn create_instance(
            &self,
            _request: &InstanceRequest,
        ) -> Result<InstanceResponse, TransportError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.create_gate {
                gate.notified().await;
            }
            if self.reject_create {
                return Err(TransportError::Rejected { status: 403 });
            }
            Ok(InstanceResponse {
                instance_id: "abc123".to_string(),
            })
        }

        async fn deliver(&self, request: &DeliveryRequest) -> Result<(), TransportError> {
            self.deliveries.lock().unwrap().push(request.clone());
            if let Some(gate) = &self.deliver_gate {
                gate.notified().await;
            }
            if self.reject_paths.contains(&request.event.path) {
                return Err(TransportError::Rejected { status: 500 });
            }
            Ok(())
        }
    }

    /// Diagnostics sink that records event kinds.
    #[derive(Default)]
    struct RecordingSink {
        kinds: StdMutex<Vec<DiagKind>>,
    }

    impl Diag for RecordingSink {
        fn record(&self, event: &DiagEvent) {
            self.kinds.lock().unwrap().push(event.kind);
        }
    }

    fn client(transport: Arc<MockTransport>) -> Client {
        Client::builder(ClientConfig::new("test-key"), transport)
            .with_host(HostIdentity::named("test-host", "127.0.0.1", "linux"))
            .build()
            .unwrap()
    }

    fn event(path: &str) -> RequestEvent {
        RequestEvent::new("GET", path, 1_000, 12.5)
    }

    // The first submission returns the bootstrap; running it delivers that
    // caller's own event.
    #[tokio::test]
    async fn test_first_submission_bootstraps_and_delivers() {
        let transport = MockTransport::ok();
        let client = client(Arc::clone(&transport));

        let Submission::NeedsBootstrap(bootstrap) = client.submit(event("/x")) else {
            panic!("first submission must carry the bootstrap");
        };
        assert_eq!(client.state(), InstanceState::Uninitialized);

        assert_eq!(bootstrap.run("prod", json!({})).await, Ok(()));

        assert_eq!(client.state(), InstanceState::Ready(Arc::from("abc123")));
        let delivered = transport.deliveries.lock().unwrap().clone();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].event.path, "/x");
        assert_eq!(delivered[0].instance_id, "abc123");
        assert_eq!(delivered[0].host.hostname, "test-host");
    }

    // Exactly one bootstrap is handed out across a batch of submissions
    // that all arrive before initialization starts.
    #[tokio::test]
    async fn test_single_bootstrap_across_batch() {
        let client = client(MockTransport::ok());

        let submissions: Vec<Submission> =
            (0..5).map(|i| client.submit(event(&format!("/{i}")))).collect();

        let bootstraps = submissions.iter().filter(|s| s.needs_bootstrap()).count();
        assert_eq!(bootstraps, 1);
        assert!(submissions[0].needs_bootstrap());
        assert_eq!(client.queued(), 5);
    }

    // A second initialize arriving while the first is in flight is a
    // no-op; exactly one outbound handshake.
    #[tokio::test]
    async fn test_double_initialize_single_handshake() {
        let gate = Arc::new(Notify::new());
        let transport = Arc::new(MockTransport {
            create_gate: Some(Arc::clone(&gate)),
            ..MockTransport::default()
        });
        let client = client(Arc::clone(&transport));
        let core = Arc::clone(&client.core);

        let first = {
            let core = Arc::clone(&core);
            tokio::spawn(async move { core.initialize("prod".into(), json!({})).await })
        };
        yield_now().await;
        assert_eq!(client.state(), InstanceState::Initializing);

        // Second call sees Initializing and backs off before any I/O.
        core.initialize("prod".into(), json!({})).await;
        assert_eq!(transport.create_calls.load(Ordering::SeqCst), 1);

        // Submissions during the handshake queue up without a bootstrap and
        // without triggering a drain.
        let Submission::Accepted(later) = client.submit(event("/later")) else {
            panic!("initializing state must not issue a bootstrap");
        };
        assert_eq!(client.queued(), 1);

        gate.notify_one();
        first.await.unwrap();
        assert_eq!(transport.create_calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.state(), InstanceState::Ready(Arc::from("abc123")));
        assert_eq!(later.wait().await, Ok(()));
        assert_eq!(transport.delivered_paths(), vec!["/later"]);
    }

    // Entries queued before readiness drain in arrival order, and each
    // resolves in that order.
    #[tokio::test]
    async fn test_drain_preserves_arrival_order() {
        let transport = MockTransport::ok();
        let client = client(Arc::clone(&transport));

        let Submission::NeedsBootstrap(bootstrap) = client.submit(event("/a")) else {
            panic!("expected bootstrap");
        };
        let Submission::Accepted(second) = client.submit(event("/b")) else {
            panic!("expected plain acceptance");
        };
        let Submission::Accepted(third) = client.submit(event("/c")) else {
            panic!("expected plain acceptance");
        };
        assert_eq!(client.queued(), 3);

        assert_eq!(bootstrap.run("prod", json!({})).await, Ok(()));
        assert_eq!(second.wait().await, Ok(()));
        assert_eq!(third.wait().await, Ok(()));

        assert_eq!(transport.delivered_paths(), vec!["/a", "/b", "/c"]);
        assert_eq!(client.queued(), 0);
    }

    // A drain trigger while not ready, or while a pass is active, is a
    // no-op: no entry is issued twice.
    #[tokio::test]
    async fn test_redundant_drain_is_noop() {
        let gate = Arc::new(Notify::new());
        let transport = Arc::new(MockTransport {
            deliver_gate: Some(Arc::clone(&gate)),
            ..MockTransport::default()
        });
        let client = client(Arc::clone(&transport));
        let core = Arc::clone(&client.core);

        let Submission::NeedsBootstrap(bootstrap) = client.submit(event("/a")) else {
            panic!("expected bootstrap");
        };
        let Submission::Accepted(second) = client.submit(event("/b")) else {
            panic!("expected plain acceptance");
        };

        // Not ready yet: drain must leave the queue alone.
        core.drain();
        assert_eq!(client.queued(), 2);

        let runner = tokio::spawn(async move { bootstrap.run("prod", json!({})).await });
        // Let the handshake finish and the drain pass start (both deliveries
        // are parked on the gate).
        while transport.deliveries.lock().unwrap().len() < 2 {
            yield_now().await;
        }

        // Active pass: redundant triggers bounce off the guard.
        core.drain();
        core.drain();
        yield_now().await;
        assert_eq!(transport.deliveries.lock().unwrap().len(), 2);

        gate.notify_waiters();
        assert_eq!(runner.await.unwrap(), Ok(()));
        assert_eq!(second.wait().await, Ok(()));
        assert_eq!(transport.deliveries.lock().unwrap().len(), 2);
    }

    // A failed handshake rejects every queued entry and all later
    // submissions, with no second handshake attempt.
    #[tokio::test]
    async fn test_failed_initialization_rejects_queue_and_future_submits() {
        let transport = Arc::new(MockTransport {
            reject_create: true,
            ..MockTransport::default()
        });
        let client = client(Arc::clone(&transport));

        let Submission::NeedsBootstrap(bootstrap) = client.submit(event("/a")) else {
            panic!("expected bootstrap");
        };
        let Submission::Accepted(second) = client.submit(event("/b")) else {
            panic!("expected plain acceptance");
        };

        assert_eq!(
            bootstrap.run("prod", json!({})).await,
            Err(DeliverError::InitializationFailed)
        );
        assert_eq!(second.wait().await, Err(DeliverError::InitializationFailed));
        assert_eq!(client.state(), InstanceState::Failed);
        assert_eq!(client.queued(), 0);

        // Failed is terminal: no queueing, no retry, immediate rejection.
        let Submission::Accepted(third) = client.submit(event("/c")) else {
            panic!("failed state must not issue another bootstrap");
        };
        assert_eq!(third.wait().await, Err(DeliverError::InitializationFailed));
        assert_eq!(transport.create_calls.load(Ordering::SeqCst), 1);
        assert!(transport.deliveries.lock().unwrap().is_empty());
    }

    // Once ready, events bypass the queue entirely.
    #[tokio::test]
    async fn test_ready_submissions_bypass_queue() {
        let transport = MockTransport::ok();
        let client = client(Arc::clone(&transport));

        let Submission::NeedsBootstrap(bootstrap) = client.submit(event("/boot")) else {
            panic!("expected bootstrap");
        };
        bootstrap.run("prod", json!({})).await.unwrap();

        let Submission::Accepted(outcome) = client.submit(event("/direct")) else {
            panic!("ready state must not issue a bootstrap");
        };
        assert_eq!(client.queued(), 0);
        assert_eq!(outcome.wait().await, Ok(()));
        assert_eq!(transport.delivered_paths(), vec!["/boot", "/direct"]);
    }

    // One event's delivery failure reaches only its own caller.
    #[tokio::test]
    async fn test_delivery_failure_is_isolated() {
        let transport = Arc::new(MockTransport {
            reject_paths: vec!["/bad".to_string()],
            ..MockTransport::default()
        });
        let client = client(Arc::clone(&transport));

        let Submission::NeedsBootstrap(bootstrap) = client.submit(event("/bad")) else {
            panic!("expected bootstrap");
        };
        let Submission::Accepted(good) = client.submit(event("/good")) else {
            panic!("expected plain acceptance");
        };

        assert_eq!(
            bootstrap.run("prod", json!({})).await,
            Err(DeliverError::Rejected { status: 500 })
        );
        assert_eq!(good.wait().await, Ok(()));
        assert_eq!(transport.delivered_paths(), vec!["/bad", "/good"]);
    }

    // Queue bound: overflow rejects the incoming entry, keeps the rest.
    #[tokio::test]
    async fn test_queue_overflow_rejects_new_entry() {
        let transport = MockTransport::ok();
        let mut config = ClientConfig::new("test-key");
        config.queue_capacity = 1;
        let client = Client::builder(config, Arc::clone(&transport) as Arc<dyn Transport>)
            .with_host(HostIdentity::named("test-host", "127.0.0.1", "linux"))
            .build()
            .unwrap();

        let first = client.submit(event("/kept"));
        assert!(first.needs_bootstrap());

        let Submission::Accepted(overflow) = client.submit(event("/dropped")) else {
            panic!("overflow must not issue a bootstrap");
        };
        assert_eq!(overflow.wait().await, Err(DeliverError::QueueFull));
        assert_eq!(client.queued(), 1);
    }

    #[tokio::test]
    async fn test_unbounded_queue_sentinel() {
        let transport = MockTransport::ok();
        let mut config = ClientConfig::new("test-key");
        config.queue_capacity = 0;
        let client = Client::builder(config, transport as Arc<dyn Transport>)
            .with_host(HostIdentity::named("test-host", "127.0.0.1", "linux"))
            .build()
            .unwrap();

        for i in 0..2_000 {
            client.submit(event(&format!("/{i}")));
        }
        assert_eq!(client.queued(), 2_000);
    }

    #[test]
    fn test_missing_license_key_builds_nothing() {
        let err = Client::new(ClientConfig::new(""), MockTransport::ok() as Arc<dyn Transport>);
        assert!(matches!(err, Err(ConfigError::MissingLicenseKey)));
    }

    // Every state transition and queue operation reaches the sink, in
    // causal order.
    #[tokio::test]
    async fn test_diagnostics_observe_lifecycle() {
        let sink = Arc::new(RecordingSink::default());
        let transport = MockTransport::ok();
        let client = Client::builder(ClientConfig::new("test-key"), transport as Arc<dyn Transport>)
            .with_host(HostIdentity::named("test-host", "127.0.0.1", "linux"))
            .with_diag(Arc::clone(&sink) as Arc<dyn Diag>)
            .build()
            .unwrap();

        let Submission::NeedsBootstrap(bootstrap) = client.submit(event("/x")) else {
            panic!("expected bootstrap");
        };
        bootstrap.run("prod", json!({})).await.unwrap();
        yield_now().await;

        let kinds = sink.kinds.lock().unwrap().clone();
        let position = |k: DiagKind| kinds.iter().position(|&x| x == k);
        let queued = position(DiagKind::EventQueued).expect("queued");
        let started = position(DiagKind::InitializeStarted).expect("started");
        let ready = position(DiagKind::InstanceReady).expect("ready");
        let drain = position(DiagKind::DrainStarted).expect("drain");
        assert!(queued < started && started < ready && ready < drain);
        assert!(position(DiagKind::DrainFinished).is_some());
    }

    // The redundant initialize path is visible on the diagnostics channel.
    #[tokio::test]
    async fn test_redundant_initialize_recorded_as_ignored() {
        let sink = Arc::new(RecordingSink::default());
        let transport = MockTransport::ok();
        let client = Client::builder(ClientConfig::new("test-key"), transport as Arc<dyn Transport>)
            .with_host(HostIdentity::named("test-host", "127.0.0.1", "linux"))
            .with_diag(Arc::clone(&sink) as Arc<dyn Diag>)
            .build()
            .unwrap();
        let core = Arc::clone(&client.core);

        core.initialize("prod".into(), json!({})).await;
        core.initialize("prod".into(), json!({})).await;

        let kinds = sink.kinds.lock().unwrap().clone();
        assert_eq!(
            kinds
                .iter()
                .filter(|&&k| k == DiagKind::InitializeStarted)
                .count(),
            1
        );
        assert_eq!(
            kinds
                .iter()
                .filter(|&&k| k == DiagKind::InitializeIgnored)
                .count(),
            1
        );
    }
}
