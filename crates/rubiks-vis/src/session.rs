//! The visualiser session.
//!
//! One task owns the store, the meshes, the sequencer and the hover inspector and
//! mutates them only from its event loop. UI input, timer firings and service
//! responses all arrive as [`SessionEvent`]s on the same channel.

use std::sync::Arc;

use rubiks_topology::FaceletState;
use tokio::sync::{mpsc, watch};

use crate::camera::OrbitCamera;
use crate::client::TransformClient;
use crate::clipboard::ClipboardSink;
use crate::config::VisConfig;
use crate::error::{Error, Result};
use crate::hover::{HoverAction, HoverInspector, MarkerCloud, Tooltip, TooltipStyle};
use crate::mapper::{recolor, CubeMeshes};
use crate::sequencer::{PlaybackStatus, Sequencer};
use crate::store::{Completion, CubeStore};
use crate::timer::CancellableTimer;

/// Who asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    /// A move button
    Direct,
    /// The playback sequencer
    Playback,
}

#[derive(Debug)]
pub enum SessionEvent {
    /// A move button was pressed
    DirectMove(char),
    /// The queue text box changed
    QueueTextChanged(String),
    /// The play/pause button
    TogglePlayback,
    /// Pointer position in page pixels
    PointerMoved { x: f32, y: f32 },
    /// Rotate the camera by a pointer delta in pixels
    Orbit { dx: f32, dy: f32 },
    /// Scroll wheel
    Zoom(f32),
    PlaybackTick { generation: u64 },
    HoverReveal { generation: u64 },
    TransformDone {
        seq: u64,
        symbol: char,
        origin: RequestOrigin,
        result: Result<Vec<u8>>,
    },
    Shutdown,
}

/// What the session looks like after its latest event.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: FaceletState,
    pub playback: PlaybackStatus,
    pub tooltip: Option<Tooltip>,
    /// Responses applied so far
    pub applied: u64,
    /// Requests that failed or were rejected
    pub failed: u64,
}

/// Cloneable sender side of a running session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    events: mpsc::UnboundedSender<SessionEvent>,
    snapshot: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    pub fn send(&self, event: SessionEvent) -> Result<()> {
        self.events.send(event).map_err(|_| Error::SessionClosed)
    }

    pub fn direct_move(&self, symbol: char) -> Result<()> {
        self.send(SessionEvent::DirectMove(symbol))
    }

    pub fn set_queue_text(&self, text: impl Into<String>) -> Result<()> {
        self.send(SessionEvent::QueueTextChanged(text.into()))
    }

    pub fn toggle_playback(&self) -> Result<()> {
        self.send(SessionEvent::TogglePlayback)
    }

    pub fn pointer_moved(&self, x: f32, y: f32) -> Result<()> {
        self.send(SessionEvent::PointerMoved { x, y })
    }

    pub fn orbit(&self, dx: f32, dy: f32) -> Result<()> {
        self.send(SessionEvent::Orbit { dx, dy })
    }

    pub fn zoom(&self, delta: f32) -> Result<()> {
        self.send(SessionEvent::Zoom(delta))
    }

    pub fn shutdown(&self) -> Result<()> {
        self.send(SessionEvent::Shutdown)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Receiver that is notified after every handled event.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.clone()
    }
}

pub struct Session<C, K> {
    config: VisConfig,
    client: Arc<C>,
    clipboard: K,
    store: CubeStore,
    meshes: CubeMeshes,
    sequencer: Sequencer,
    inspector: HoverInspector,
    camera: OrbitCamera,
    tick_timer: CancellableTimer<SessionEvent>,
    hover_timer: CancellableTimer<SessionEvent>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    applied: u64,
    failed: u64,
}

impl<C: TransformClient, K: ClipboardSink> Session<C, K> {
    /// A session on the solved cube, inspecting the wireframe of a unit box.
    pub fn new(config: VisConfig, client: C, clipboard: K) -> Self {
        Self::with_markers(config, client, clipboard, MarkerCloud::box_wireframe(1.0))
    }

    pub fn with_markers(config: VisConfig, client: C, clipboard: K, markers: MarkerCloud) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let store = CubeStore::new();
        let meshes = CubeMeshes::with_state(store.state(), config.cube_spacing);
        let sequencer = Sequencer::new();
        let (snapshot_tx, _) = watch::channel(SessionSnapshot {
            state: *store.state(),
            playback: PlaybackStatus::from(&sequencer),
            tooltip: None,
            applied: 0,
            failed: 0,
        });

        Self {
            client: Arc::new(client),
            clipboard,
            store,
            meshes,
            sequencer,
            inspector: HoverInspector::new(markers, TooltipStyle::default()),
            camera: OrbitCamera::default(),
            tick_timer: CancellableTimer::new(events_tx.clone()),
            hover_timer: CancellableTimer::new(events_tx.clone()),
            events_tx,
            events_rx,
            snapshot_tx,
            applied: 0,
            failed: 0,
            config,
        }
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            events: self.events_tx.clone(),
            snapshot: self.snapshot_tx.subscribe(),
        }
    }

    pub fn state(&self) -> &FaceletState {
        self.store.state()
    }

    pub fn meshes(&self) -> &CubeMeshes {
        &self.meshes
    }

    /// For the render surface to collect dirty colour buffers.
    pub fn meshes_mut(&mut self) -> &mut CubeMeshes {
        &mut self.meshes
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn inspector(&self) -> &HoverInspector {
        &self.inspector
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn clipboard(&self) -> &K {
        &self.clipboard
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: *self.store.state(),
            playback: PlaybackStatus::from(&self.sequencer),
            tooltip: self.inspector.tooltip().cloned(),
            applied: self.applied,
            failed: self.failed,
        }
    }

    /// Handle events until [`SessionEvent::Shutdown`], then hand the session back.
    pub async fn run(mut self) -> Self {
        tracing::info!(
            service = %self.config.service_url,
            tick_ms = self.config.tick.as_millis() as u64,
            "Session started"
        );
        while let Some(event) = self.events_rx.recv().await {
            if !self.handle_event(event) {
                break;
            }
            self.snapshot_tx.send_replace(self.snapshot());
        }
        self.tick_timer.cancel();
        self.hover_timer.cancel();
        tracing::info!(applied = self.applied, failed = self.failed, "Session stopped");
        self
    }

    /// Apply one event. Returns `false` once the session should stop.
    fn handle_event(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::DirectMove(symbol) => {
                self.sequencer.direct_move();
                self.sync_tick_timer();
                self.send_move(symbol, RequestOrigin::Direct);
            }
            SessionEvent::QueueTextChanged(text) => {
                self.sequencer.set_queue_text(&text);
                self.sync_tick_timer();
                tracing::debug!(queue = %text, "Queue replaced");
            }
            SessionEvent::TogglePlayback => {
                let state = self.sequencer.toggle();
                self.sync_tick_timer();
                tracing::info!(?state, queued = self.sequencer.queued(), "Playback toggled");
            }
            SessionEvent::PlaybackTick { generation } => {
                if !self.tick_timer.accept(generation) {
                    tracing::debug!(generation, "Dropping cancelled tick");
                    return true;
                }
                if let Some(symbol) = self.sequencer.tick() {
                    self.send_move(symbol, RequestOrigin::Playback);
                }
                self.sync_tick_timer();
            }
            SessionEvent::TransformDone {
                seq,
                symbol,
                origin,
                result,
            } => self.finish_move(seq, symbol, origin, result),
            SessionEvent::PointerMoved { x, y } => self.pointer_moved(x, y),
            SessionEvent::HoverReveal { generation } => {
                if self.hover_timer.accept(generation) {
                    self.reveal();
                }
            }
            SessionEvent::Orbit { dx, dy } => {
                let viewport = self.config.viewport;
                self.camera.orbit(dx, dy, &viewport);
            }
            SessionEvent::Zoom(delta) => self.camera.zoom(delta),
            SessionEvent::Shutdown => return false,
        }
        true
    }

    /// Keep exactly one tick pending while playing and none otherwise.
    fn sync_tick_timer(&mut self) {
        if !self.sequencer.is_playing() {
            self.tick_timer.cancel();
        } else if !self.tick_timer.is_pending() {
            self.tick_timer
                .start(self.config.tick, |generation| SessionEvent::PlaybackTick { generation });
        }
    }

    fn send_move(&mut self, symbol: char, origin: RequestOrigin) {
        let request = self.store.begin(symbol);
        tracing::debug!(seq = request.seq, %symbol, ?origin, "Sending move");

        let client = Arc::clone(&self.client);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.transform(&request.state, request.symbol).await;
            let _ = events.send(SessionEvent::TransformDone {
                seq: request.seq,
                symbol: request.symbol,
                origin,
                result,
            });
        });
    }

    fn finish_move(&mut self, seq: u64, symbol: char, origin: RequestOrigin, result: Result<Vec<u8>>) {
        let completion = self.store.complete(seq, result);
        match &completion {
            Ok(Completion::Applied) => {
                recolor(self.store.state(), &mut self.meshes);
                self.applied += 1;
                tracing::info!(seq, %symbol, "Cube recoloured");
            }
            Ok(Completion::Stale) => {
                tracing::debug!(seq, %symbol, "Discarding superseded response");
            }
            Err(err) => {
                self.failed += 1;
                tracing::warn!(seq, %symbol, ?origin, error = %err, "Move failed");
            }
        }
        if origin == RequestOrigin::Playback {
            match completion {
                Ok(_) => self.sequencer.settle(),
                Err(_) => self.sequencer.halt(symbol),
            }
            self.sync_tick_timer();
        }
    }

    fn pointer_moved(&mut self, x: f32, y: f32) {
        let viewport = self.config.viewport;
        let ray = self.camera.ray_through(viewport.to_ndc(x, y), viewport.aspect());
        match self.inspector.pointer_moved(&ray) {
            HoverAction::Hide => self.hover_timer.cancel(),
            HoverAction::StartReveal => {
                self.hover_timer
                    .start(self.config.hover_delay, |generation| SessionEvent::HoverReveal { generation });
            }
            HoverAction::Track => {}
        }
    }

    fn reveal(&mut self) {
        let viewport = self.config.viewport;
        let Some(reveal) = self.inspector.reveal(&self.camera, &viewport) else {
            return;
        };
        tracing::info!(
            text = %reveal.tooltip.text,
            left = reveal.tooltip.left,
            top = reveal.tooltip.top,
            "Tooltip shown"
        );
        if let Err(err) = self.clipboard.write_text(&reveal.clipboard) {
            tracing::warn!(error = %err, "Could not copy vertex indices");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Viewport;
    use crate::clipboard::MemoryClipboard;
    use crate::sequencer::PlaybackState;
    use glam::{Vec2, Vec3};
    use rubiks_topology::engine;
    use std::future::Future;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    const TICK: Duration = Duration::from_millis(1000);

    /// Applies moves locally and records when each request was made.
    #[derive(Clone, Default)]
    struct RecordingClient {
        calls: Arc<Mutex<Vec<(char, Instant)>>>,
        fail_on: Option<usize>,
        /// Answer delay for the failing call and for every other call
        latency: (Duration, Duration),
    }

    impl RecordingClient {
        fn failing_on(call: usize) -> Self {
            Self {
                fail_on: Some(call),
                ..Self::default()
            }
        }

        fn with_latency(mut self, failing: Duration, others: Duration) -> Self {
            self.latency = (failing, others);
            self
        }

        fn calls(&self) -> Vec<(char, Instant)> {
            self.calls.lock().unwrap().clone()
        }

        fn symbols(&self) -> String {
            self.calls().into_iter().map(|(s, _)| s).collect()
        }
    }

    impl TransformClient for RecordingClient {
        fn transform(&self, state: &FaceletState, symbol: char) -> impl Future<Output = Result<Vec<u8>>> + Send {
            let mut calls = self.calls.lock().unwrap();
            let call = calls.len();
            calls.push((symbol, Instant::now()));
            let (result, delay) = if self.fail_on == Some(call) {
                (Err(Error::Service("unavailable".into())), self.latency.0)
            } else {
                (
                    Ok(engine::apply_sequence(state, &symbol.to_string()).state.to_vec()),
                    self.latency.1,
                )
            };
            async move {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                result
            }
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(Error::Clipboard("denied".into()))
        }
    }

    fn start<K: ClipboardSink>(
        client: RecordingClient,
        clipboard: K,
        markers: MarkerCloud,
    ) -> (SessionHandle, tokio::task::JoinHandle<Session<RecordingClient, K>>) {
        let session = Session::with_markers(VisConfig::default(), client, clipboard, markers);
        let handle = session.handle();
        (handle, tokio::spawn(session.run()))
    }

    fn start_default(client: RecordingClient) -> (SessionHandle, tokio::task::JoinHandle<Session<RecordingClient, MemoryClipboard>>) {
        start(client, MemoryClipboard::new(), MarkerCloud::box_wireframe(1.0))
    }

    /// Pointer position whose ray passes through `point` with the default camera.
    fn pointer_over(point: Vec3) -> Vec2 {
        let viewport = Viewport::default();
        let ndc = OrbitCamera::default().project(point, viewport.aspect()).truncate();
        viewport.pointer_at(ndc)
    }

    #[tokio::test(start_paused = true)]
    async fn queue_sends_one_move_per_tick() {
        let client = RecordingClient::default();
        let (handle, task) = start_default(client.clone());
        let started = Instant::now();

        handle.set_queue_text("FRUB").unwrap();
        handle.toggle_playback().unwrap();

        sleep(TICK / 2).await;
        assert_eq!(client.symbols(), "", "nothing before the first tick");

        sleep(TICK * 4).await;
        assert_eq!(client.symbols(), "FRUB");
        for (i, (_, at)) in client.calls().into_iter().enumerate() {
            assert!(at - started >= TICK * (i as u32 + 1), "move {i} sent early");
        }

        handle.shutdown().unwrap();
        let session = task.await.unwrap();
        let expected = engine::apply_sequence(&FaceletState::SOLVED, "FRUB").state;
        assert_eq!(session.state(), &expected);
        assert_eq!(session.sequencer().state(), PlaybackState::Idle);
        assert_eq!(session.snapshot().applied, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_keeps_unsent_moves() {
        let client = RecordingClient::default();
        let (handle, task) = start_default(client.clone());

        handle.set_queue_text("FRUB").unwrap();
        handle.toggle_playback().unwrap();
        sleep(TICK * 2 + TICK / 2).await;
        handle.toggle_playback().unwrap();

        sleep(TICK * 5).await;
        assert_eq!(client.symbols(), "FR");
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.playback.state, PlaybackState::Paused);
        assert_eq!(snapshot.playback.queue, "UB");

        handle.toggle_playback().unwrap();
        sleep(TICK * 2 + TICK / 2).await;
        assert_eq!(client.symbols(), "FRUB");

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn direct_move_interrupts_playback() {
        let client = RecordingClient::default();
        let (handle, task) = start_default(client.clone());

        handle.set_queue_text("FRUB").unwrap();
        handle.toggle_playback().unwrap();
        sleep(TICK + TICK / 2).await;
        handle.direct_move('l').unwrap();

        sleep(TICK * 3).await;
        assert_eq!(client.symbols(), "Fl");
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.playback.state, PlaybackState::Paused);
        assert_eq!(snapshot.playback.queue, "RUB");
        assert_eq!(snapshot.state, engine::apply_sequence(&FaceletState::SOLVED, "Fl").state);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn editing_queue_stops_playback() {
        let client = RecordingClient::default();
        let (handle, task) = start_default(client.clone());

        handle.set_queue_text("FR").unwrap();
        handle.toggle_playback().unwrap();
        sleep(TICK / 2).await;
        handle.set_queue_text("UU").unwrap();

        sleep(TICK * 3).await;
        assert_eq!(client.symbols(), "");
        assert_eq!(handle.snapshot().playback.queue, "UU");

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn playback_failure_halts_and_keeps_state() {
        let client = RecordingClient::failing_on(1);
        let (handle, task) = start_default(client.clone());

        handle.set_queue_text("FRUB").unwrap();
        handle.toggle_playback().unwrap();
        sleep(TICK * 6).await;

        assert_eq!(client.symbols(), "FR");
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.state, engine::apply_sequence(&FaceletState::SOLVED, "F").state);
        assert_eq!(snapshot.playback.state, PlaybackState::Paused);
        assert_eq!(snapshot.playback.queue, "RUB");
        assert_eq!(snapshot.failed, 1);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn slow_failure_halts_before_later_moves_are_sent() {
        let client = RecordingClient::failing_on(0)
            .with_latency(Duration::from_millis(1500), Duration::from_millis(100));
        let (handle, task) = start_default(client.clone());

        handle.set_queue_text("FRUB").unwrap();
        handle.toggle_playback().unwrap();
        sleep(Duration::from_millis(2600)).await;

        // The second tick came while F was unanswered and sent nothing
        assert_eq!(client.symbols(), "F");
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.state, FaceletState::SOLVED);
        assert_eq!(snapshot.playback.state, PlaybackState::Paused);
        assert_eq!(snapshot.playback.queue, "FRUB");
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.applied, 0);

        handle.toggle_playback().unwrap();
        sleep(TICK * 5).await;
        assert_eq!(client.symbols(), "FFRUB");
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.state, engine::apply_sequence(&FaceletState::SOLVED, "FRUB").state);
        assert_eq!(snapshot.playback.state, PlaybackState::Idle);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failure_after_newer_direct_move_is_still_counted() {
        let client = RecordingClient::failing_on(0)
            .with_latency(Duration::from_millis(500), Duration::from_millis(10));
        let (handle, task) = start_default(client.clone());

        handle.set_queue_text("FR").unwrap();
        handle.toggle_playback().unwrap();
        sleep(TICK + Duration::from_millis(100)).await;
        handle.direct_move('U').unwrap();
        sleep(TICK * 3).await;

        assert_eq!(client.symbols(), "FU");
        let snapshot = handle.snapshot();
        assert_eq!(snapshot.applied, 1);
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.state, engine::apply_sequence(&FaceletState::SOLVED, "U").state);
        // The user took over, so the queue is left as it was
        assert_eq!(snapshot.playback.state, PlaybackState::Paused);
        assert_eq!(snapshot.playback.queue, "R");

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn pause_and_resume_within_a_tick_keeps_one_move_per_tick() {
        let client = RecordingClient::default();
        let (handle, task) = start_default(client.clone());
        let started = Instant::now();

        handle.set_queue_text("FRUB").unwrap();
        handle.toggle_playback().unwrap();
        sleep(TICK / 4).await;
        handle.toggle_playback().unwrap();
        handle.toggle_playback().unwrap();
        sleep(TICK / 4).await;
        handle.toggle_playback().unwrap();
        handle.toggle_playback().unwrap();

        sleep(TICK * 5).await;
        let calls = client.calls();
        assert_eq!(calls.len(), 4);
        for pair in calls.windows(2) {
            assert!(pair[1].1 - pair[0].1 >= TICK, "two moves inside one tick");
        }
        assert!(calls[0].1 - started >= TICK / 2 + TICK);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failed_direct_move_is_dropped() {
        let client = RecordingClient::failing_on(0);
        let (handle, task) = start_default(client.clone());

        handle.direct_move('F').unwrap();
        sleep(Duration::from_millis(50)).await;
        handle.direct_move('F').unwrap();
        sleep(Duration::from_millis(50)).await;

        let snapshot = handle.snapshot();
        assert_eq!(client.symbols(), "FF");
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.applied, 1);
        assert_eq!(snapshot.state, engine::apply_sequence(&FaceletState::SOLVED, "F").state);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn applied_move_recolours_meshes() {
        let (handle, task) = start_default(RecordingClient::default());
        handle.direct_move('U').unwrap();
        sleep(Duration::from_millis(10)).await;
        handle.shutdown().unwrap();

        let mut session = task.await.unwrap();
        let expected = CubeMeshes::with_state(session.state(), 1.0);
        for ((_, got), (_, want)) in session.meshes().iter().zip(expected.iter()) {
            assert_eq!(got.colours(), want.colours());
        }
        assert!(!session.meshes_mut().take_dirty().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn hovering_elsewhere_before_delay_never_reveals_first_marker() {
        let a = Vec3::new(0.5, 0.5, 0.5);
        let b = Vec3::new(-0.5, -0.5, 0.5);
        let clipboard = MemoryClipboard::new();
        let markers = MarkerCloud::from_vertices(&[a.to_array(), b.to_array(), a.to_array()]);
        let (handle, task) = start(RecordingClient::default(), clipboard.clone(), markers);

        let pa = pointer_over(a);
        let pb = pointer_over(b);

        handle.pointer_moved(pa.x, pa.y).unwrap();
        sleep(Duration::from_millis(5)).await;
        handle.pointer_moved(pb.x, pb.y).unwrap();
        sleep(Duration::from_millis(7)).await;

        // A's reveal would have fired by now
        assert_eq!(handle.snapshot().tooltip, None);
        assert_eq!(clipboard.contents(), None);

        sleep(Duration::from_millis(10)).await;
        let tooltip = handle.snapshot().tooltip.unwrap();
        assert_eq!(tooltip.text, "idx: 3, pos: [-0.500,-0.500,0.500]");
        assert_eq!(clipboard.contents().as_deref(), Some("[3]"));

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_copies_every_index_at_the_vertex() {
        let a = Vec3::new(0.5, 0.5, 0.5);
        let clipboard = MemoryClipboard::new();
        let markers = MarkerCloud::from_vertices(&[a.to_array(), [0.0; 3], a.to_array()]);
        let (handle, task) = start(RecordingClient::default(), clipboard.clone(), markers);

        let pa = pointer_over(a);
        handle.pointer_moved(pa.x, pa.y).unwrap();
        sleep(Duration::from_millis(20)).await;

        let tooltip = handle.snapshot().tooltip.unwrap();
        assert_eq!(tooltip.text, "idx: 0, pos: [0.500,0.500,0.500]");
        assert_eq!(clipboard.contents().as_deref(), Some("[0,6]"));

        // Tooltip sits centred above the hovered point
        let anchor_x = tooltip.left + tooltip.width / 2.0;
        assert!((anchor_x - pa.x).abs() < 2.0);
        assert!(tooltip.top + tooltip.height < pa.y);

        // Moving off every marker hides it again
        handle.pointer_moved(1.0, 1.0).unwrap();
        sleep(Duration::from_millis(20)).await;
        assert_eq!(handle.snapshot().tooltip, None);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn clipboard_failure_keeps_tooltip() {
        let a = Vec3::new(0.5, 0.5, 0.5);
        let markers = MarkerCloud::from_vertices(&[a.to_array()]);
        let (handle, task) = start(RecordingClient::default(), BrokenClipboard, markers);

        let pa = pointer_over(a);
        handle.pointer_moved(pa.x, pa.y).unwrap();
        sleep(Duration::from_millis(20)).await;
        assert!(handle.snapshot().tooltip.is_some());

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn handle_errors_once_session_is_gone() {
        let (handle, task) = start_default(RecordingClient::default());
        handle.zoom(-1.0).unwrap();
        handle.shutdown().unwrap();

        let session = task.await.unwrap();
        assert!(session.camera().distance < 5.0);
        drop(session);

        assert!(matches!(handle.direct_move('F'), Err(Error::SessionClosed)));
    }
}
