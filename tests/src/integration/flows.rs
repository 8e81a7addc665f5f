//! # Integration Test Flows
//!
//! Key press → command → controller/dispatcher → model, against a
//! [`FixtureBackend`](super::backend::FixtureBackend).
//!
//! ## Flows Tested:
//!
//! 1. **Navigation**: page hotkeys activate exactly one page and run its loads
//! 2. **Controllers**: scripts, logs and health panels render fixtures or errors
//! 3. **Actions**: execute/clear buttons, confirmation, restore timing
//! 4. **Scheduling**: polling follows the active page, stale responses dropped
//! 5. **Rendering**: headless frames show what the model holds

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use tokio::sync::{watch, Mutex};
    use tokio::time::Instant;

    use admin_console::api::LogChannel;
    use admin_console::domain::{
        App, ButtonRef, Command, HealthClass, HealthId, InMemoryProjects, NotificationKind, Page,
        ProjectStatus, ScriptsState, SequencePolicy, ServerStatus, EXECUTE_LABEL,
    };
    use admin_console::sync::{
        ActionOutcome, AutoConfirm, ModalConfirm, Poller, StatusSimulator, StatusUpdate,
        StatusUpdateSource, SyncContext,
    };
    use admin_console::ui;

    use crate::integration::backend::FixtureBackend;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn console(backend: Arc<FixtureBackend>, policy: SequencePolicy) -> SyncContext {
        let app = Arc::new(Mutex::new(App::new(
            policy,
            Box::new(InMemoryProjects::demo()),
        )));
        SyncContext::new(app, backend, Arc::new(AutoConfirm(true)))
    }

    /// Backend with healthy fixtures on every read endpoint.
    fn healthy_backend() -> Arc<FixtureBackend> {
        let backend = Arc::new(FixtureBackend::new());
        backend
            .reply(
                "/api/scripts",
                json!({"scripts": [
                    {"name": "a.py", "exists": false},
                    {"name": "b.py", "exists": true, "size": 2048, "path": "/srv/b.py", "modified": 0.0}
                ]}),
            )
            .reply("/api/logs", json!({"logs": "boot\nready\n", "size": 11}))
            .reply("/api/ws-logs", json!({"logs": "ws: client connected"}))
            .reply("/api/orchestrator-logs", json!({"logs": null}))
            .reply(
                "/api/health-status",
                json!({"health": {"1.py": {"status": "OK", "healthy": true}}}),
            )
            .reply(
                "/api/health",
                json!({"status": "healthy", "message": "Admin backend is running", "version": "1.0.0"}),
            );
        backend
    }

    /// Press `key` and run whatever command it produced to completion.
    async fn press(ctx: &SyncContext, key: KeyCode) -> Option<Command> {
        let command = ctx.app.lock().await.handle_key(key);
        if let Some(command) = command.clone() {
            ctx.execute(command).await;
        }
        command
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|frame| ui::render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    struct Scripted(VecDeque<StatusUpdate>);

    impl StatusUpdateSource for Scripted {
        fn next_update(&mut self, _project_count: usize) -> Option<StatusUpdate> {
            self.0.pop_front()
        }
    }

    // =============================================================================
    // NAVIGATION
    // =============================================================================

    #[tokio::test]
    async fn test_page_hotkeys_keep_exactly_one_active_page() {
        let backend = healthy_backend();
        let ctx = console(backend.clone(), SequencePolicy::default());

        for (key, page) in [
            (KeyCode::Char('s'), Page::Scripts),
            (KeyCode::Char('l'), Page::Logs),
            (KeyCode::Char('f'), Page::Faqs),
            (KeyCode::Char('d'), Page::Dashboard),
        ] {
            assert_eq!(press(&ctx, key).await, Some(Command::LoadPage(page)));
            let app = ctx.app.lock().await;
            let active: Vec<Page> = Page::ALL
                .into_iter()
                .filter(|p| app.router.is_active(*p))
                .collect();
            assert_eq!(active, vec![page]);
        }
    }

    #[tokio::test]
    async fn test_page_loads_hit_their_endpoints() {
        let backend = healthy_backend();
        let ctx = console(backend.clone(), SequencePolicy::default());

        press(&ctx, KeyCode::Char('s')).await;
        assert_eq!(backend.calls(), vec!["GET /api/scripts".to_string()]);

        press(&ctx, KeyCode::Char('f')).await;
        assert_eq!(backend.calls().len(), 1);

        press(&ctx, KeyCode::Char('d')).await;
        assert_eq!(backend.count("GET /api/ws-logs"), 1);
        assert_eq!(backend.count("GET /api/orchestrator-logs"), 1);
        assert_eq!(backend.count("GET /api/health-status"), 1);
    }

    #[tokio::test]
    async fn test_unknown_page_id_is_ignored() {
        let ctx = console(healthy_backend(), SequencePolicy::default());
        let mut app = ctx.app.lock().await;
        app.router.select("logs");
        assert_eq!(app.router.select("settings"), None);
        assert_eq!(app.active_page(), Page::Logs);
    }

    #[tokio::test]
    async fn test_startup_preloads_scripts() {
        let backend = healthy_backend();
        let ctx = console(backend.clone(), SequencePolicy::default());

        ctx.load_initial().await;

        let mut calls = backend.calls();
        calls.sort();
        assert_eq!(
            calls,
            vec![
                "GET /api/health".to_string(),
                "GET /api/health-status".to_string(),
                "GET /api/orchestrator-logs".to_string(),
                "GET /api/scripts".to_string(),
                "GET /api/ws-logs".to_string(),
            ]
        );
        let app = ctx.app.lock().await;
        assert_eq!(app.active_page(), Page::Dashboard);
        assert_eq!(app.bindings.scripts.cards().len(), 2);
        assert_eq!(app.bindings.log(LogChannel::WebSocket).text(), "ws: client connected");
    }

    #[tokio::test]
    async fn test_refresh_probes_backend() {
        let backend = healthy_backend();
        let ctx = console(backend.clone(), SequencePolicy::default());

        press(&ctx, KeyCode::Char('r')).await;

        let app = ctx.app.lock().await;
        assert_eq!(
            app.server,
            ServerStatus::Online {
                version: "1.0.0".into()
            }
        );
        assert!(app.last_refresh.is_some());
    }

    #[tokio::test]
    async fn test_offline_backend_is_reported() {
        let backend = Arc::new(FixtureBackend::new());
        backend.unreachable("/api/health", "Cannot connect to http://127.0.0.1:8000/");
        let ctx = console(backend, SequencePolicy::default());

        ctx.probe_server().await;

        assert!(matches!(
            ctx.app.lock().await.server,
            ServerStatus::Offline(_)
        ));
    }

    // =============================================================================
    // CONTROLLERS
    // =============================================================================

    #[tokio::test]
    async fn test_health_fixture_updates_first_card_only() {
        let ctx = console(healthy_backend(), SequencePolicy::default());

        ctx.update_health_cards().await;

        let app = ctx.app.lock().await;
        let one = app.bindings.health_card(HealthId::One);
        assert_eq!(one.status, "OK");
        assert_eq!(one.card, HealthClass::Healthy);
        assert_eq!(one.indicator, HealthClass::Healthy);
        for id in [HealthId::Two, HealthId::Three] {
            let card = app.bindings.health_card(id);
            assert_eq!(card.status, "Checking...");
            assert_eq!(card.card, HealthClass::Unknown);
        }
    }

    #[tokio::test]
    async fn test_missing_script_is_not_runnable() {
        let backend = healthy_backend();
        let ctx = console(backend.clone(), SequencePolicy::default());

        press(&ctx, KeyCode::Char('s')).await;
        {
            let app = ctx.app.lock().await;
            let cards = app.bindings.scripts.cards();
            assert_eq!(cards[0].name, "a.py");
            assert_eq!(cards[0].badge.text, "Not Found");
            assert_eq!(cards[0].size, "N/A");
            assert!(app.bindings.scripts.button("a.py").unwrap().is_disabled());
            assert_eq!(cards[1].size, "2.00 KB");
            assert_eq!(cards[1].modified, "1970-01-01 00:00:00 UTC");
        }

        // Enter on the missing script sends nothing.
        assert_eq!(
            press(&ctx, KeyCode::Enter).await,
            Some(Command::RunScript("a.py".into()))
        );
        assert_eq!(backend.count("GET /run/a.py"), 0);
    }

    #[tokio::test]
    async fn test_rejected_fetch_shows_error_and_recovers() {
        let backend = healthy_backend();
        backend.unreachable("/api/logs", "connection refused");
        let ctx = console(backend.clone(), SequencePolicy::default());

        press(&ctx, KeyCode::Char('l')).await;
        {
            let app = ctx.app.lock().await;
            let view = app.bindings.log(LogChannel::General);
            assert!(view.is_error());
            assert!(view.text().starts_with("Error loading logs: "));
            assert!(view.text().contains("connection refused"));
        }

        backend.reply("/api/logs", json!({"logs": "back online"}));
        ctx.refresh_log(LogChannel::General).await;
        let app = ctx.app.lock().await;
        assert_eq!(app.bindings.log(LogChannel::General).text(), "back online");
        assert!(app.bindings.log(LogChannel::General).is_at_bottom());
    }

    #[tokio::test]
    async fn test_malformed_scripts_payload_is_an_error() {
        let backend = Arc::new(FixtureBackend::new());
        backend.reply("/api/scripts", json!({"unexpected": true}));
        let ctx = console(backend, SequencePolicy::default());

        ctx.load_scripts().await;

        let app = ctx.app.lock().await;
        assert!(matches!(
            &app.bindings.scripts.state,
            ScriptsState::Failed(msg) if msg.starts_with("Failed to load scripts")
        ));
    }

    #[tokio::test]
    async fn test_empty_logs_fall_back_to_message() {
        let backend = Arc::new(FixtureBackend::new());
        backend.reply(
            "/api/logs",
            json!({"logs": "", "message": "Log file does not exist"}),
        );
        backend.reply("/api/orchestrator-logs", json!({"logs": null}));
        let ctx = console(backend, SequencePolicy::default());

        ctx.refresh_log(LogChannel::General).await;
        ctx.refresh_log(LogChannel::Orchestrator).await;

        let app = ctx.app.lock().await;
        assert_eq!(
            app.bindings.log(LogChannel::General).text(),
            "Log file does not exist"
        );
        assert_eq!(
            app.bindings.log(LogChannel::Orchestrator).text(),
            "No logs available"
        );
    }

    // =============================================================================
    // ACTIONS
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_execute_button_disabled_then_restored() {
        let backend = healthy_backend();
        backend.reply("/run/b.py", json!({"success": true, "message": "Script b.py started"}));
        let ctx = console(backend.clone(), SequencePolicy::default());
        press(&ctx, KeyCode::Char('s')).await;
        press(&ctx, KeyCode::Down).await;

        let command = ctx.app.lock().await.handle_key(KeyCode::Enter).unwrap();
        let task = ctx.spawn(command);
        tokio::time::sleep(Duration::from_millis(50)).await;
        {
            let app = ctx.app.lock().await;
            let button = app.bindings.scripts.button("b.py").unwrap();
            assert!(button.is_disabled());
            assert_eq!(button.label(), "✓ Executed");
            let (note, _) = app.notifications.current(Instant::now()).unwrap();
            assert_eq!(note.kind, NotificationKind::Success);
            assert_eq!(note.message, "✅ Script b.py started");
        }

        tokio::time::sleep(Duration::from_millis(1900)).await;
        task.await.unwrap();

        let app = ctx.app.lock().await;
        let button = app.bindings.scripts.button("b.py").unwrap();
        assert!(!button.is_disabled());
        assert_eq!(button.label(), EXECUTE_LABEL);
        assert_eq!(backend.count("GET /run/b.py"), 1);
    }

    #[tokio::test]
    async fn test_http_error_detail_is_reported() {
        let backend = healthy_backend();
        backend.reply("/run/b.py", json!({"detail": "Script not found: b.py"}));
        let ctx = console(backend, SequencePolicy::default());
        ctx.load_scripts().await;

        let outcome = ctx.run_script("b.py").await;

        assert_eq!(outcome, ActionOutcome::Failed("Script not found: b.py".into()));
        let app = ctx.app.lock().await;
        let (note, _) = app.notifications.current(Instant::now()).unwrap();
        assert_eq!(note.message, "❌ Error: Script not found: b.py");
        assert!(!app.bindings.scripts.button("b.py").unwrap().is_disabled());
    }

    #[tokio::test]
    async fn test_declined_clear_issues_no_request() {
        let backend = healthy_backend();
        backend.reply("/clear-logs", json!({"success": true}));
        let app = Arc::new(Mutex::new(App::default()));
        let ctx = SyncContext::new(
            app.clone(),
            backend.clone(),
            Arc::new(ModalConfirm::new(app.clone())),
        );
        press(&ctx, KeyCode::Char('l')).await;

        let command = app.lock().await.handle_key(KeyCode::Char('c')).unwrap();
        let task = ctx.spawn(command);
        while app.lock().await.pending_confirm().is_none() {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            app.lock().await.pending_confirm(),
            Some("Are you sure you want to clear all logs?")
        );
        app.lock().await.handle_key(KeyCode::Char('n'));
        task.await.unwrap();

        assert_eq!(backend.count("POST /clear-logs"), 0);
        let app = app.lock().await;
        let button = app
            .button(&ButtonRef::ClearLogs(LogChannel::General))
            .unwrap();
        assert!(!button.is_disabled());
        assert!(app.notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmed_clear_refreshes_viewer() {
        let backend = healthy_backend();
        backend.reply("/api/clear-ws-logs", json!({"success": true, "message": "cleared"}));
        let ctx = console(backend.clone(), SequencePolicy::default());
        press(&ctx, KeyCode::Char('d')).await;
        backend.reply("/api/ws-logs", json!({"logs": ""}));

        assert_eq!(
            ctx.clear_logs(LogChannel::WebSocket).await,
            ActionOutcome::Succeeded
        );

        let calls = backend.calls();
        let clear_at = calls
            .iter()
            .position(|c| c == "POST /api/clear-ws-logs")
            .unwrap();
        assert_eq!(calls[clear_at + 1], "GET /api/ws-logs");
        let app = ctx.app.lock().await;
        assert_eq!(
            app.bindings.log(LogChannel::WebSocket).text(),
            "No logs available"
        );
    }

    #[tokio::test]
    async fn test_clear_failure_message() {
        let backend = healthy_backend();
        backend.reply(
            "/api/clear-orchestrator-logs",
            json!({"success": false, "error": "Permission denied"}),
        );
        let ctx = console(backend, SequencePolicy::default());

        let outcome = ctx.clear_logs(LogChannel::Orchestrator).await;

        assert_eq!(outcome, ActionOutcome::Failed("Permission denied".into()));
        let app = ctx.app.lock().await;
        let (note, _) = app.notifications.current(Instant::now()).unwrap();
        assert_eq!(note.message, "❌ Error clearing logs: Permission denied");
    }

    // =============================================================================
    // SCHEDULING
    // =============================================================================

    #[tokio::test(start_paused = true)]
    async fn test_poller_follows_active_page() {
        let backend = healthy_backend();
        let ctx = console(backend.clone(), SequencePolicy::default());
        ctx.app.lock().await.router.activate(Page::Logs);
        let (tx, rx) = watch::channel(false);
        let poller = tokio::spawn(Poller::new(ctx.clone(), Duration::from_secs(3)).run(rx));

        tokio::time::sleep(Duration::from_millis(6100)).await;
        assert_eq!(backend.count("GET /api/logs"), 2);

        ctx.app.lock().await.router.activate(Page::Faqs);
        tokio::time::sleep(Duration::from_secs(9)).await;
        assert_eq!(backend.calls().len(), 2);

        tx.send(true).unwrap();
        poller.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reject_stale_keeps_newest_response() {
        let backend = healthy_backend();
        backend
            .reply("/api/ws-logs", json!({"logs": "old"}))
            .delay("/api/ws-logs", Duration::from_millis(800));
        let ctx = console(backend.clone(), SequencePolicy::RejectStale);

        let slow = {
            let ctx = ctx.clone();
            tokio::spawn(async move { ctx.refresh_log(LogChannel::WebSocket).await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        backend
            .reply("/api/ws-logs", json!({"logs": "new"}))
            .delay("/api/ws-logs", Duration::from_millis(10));
        ctx.refresh_log(LogChannel::WebSocket).await;
        slow.await.unwrap();

        let app = ctx.app.lock().await;
        assert_eq!(app.bindings.log(LogChannel::WebSocket).text(), "new");
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_resolved_wins_by_default() {
        let backend = healthy_backend();
        backend
            .reply("/api/ws-logs", json!({"logs": "old"}))
            .delay("/api/ws-logs", Duration::from_millis(800));
        let ctx = console(backend.clone(), SequencePolicy::default());

        let slow = {
            let ctx = ctx.clone();
            tokio::spawn(async move { ctx.refresh_log(LogChannel::WebSocket).await })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;

        backend
            .reply("/api/ws-logs", json!({"logs": "new"}))
            .delay("/api/ws-logs", Duration::from_millis(10));
        ctx.refresh_log(LogChannel::WebSocket).await;
        slow.await.unwrap();

        let app = ctx.app.lock().await;
        assert_eq!(app.bindings.log(LogChannel::WebSocket).text(), "old");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulator_updates_dashboard() {
        let app = Arc::new(Mutex::new(App::default()));
        let source = Scripted(VecDeque::from(vec![StatusUpdate {
            index: 2,
            status: ProjectStatus::Healthy,
        }]));
        let (tx, rx) = watch::channel(false);
        let simulator = tokio::spawn(
            StatusSimulator::new(app.clone(), Box::new(source), Duration::from_secs(10)).run(rx),
        );

        tokio::time::sleep(Duration::from_millis(10_050)).await;
        {
            let app = app.lock().await;
            assert_eq!(app.summary.healthy, 7);
            assert_eq!(app.project_cards[2].badge.text, "Healthy");
        }

        tx.send(true).unwrap();
        simulator.await.unwrap();
    }

    // =============================================================================
    // RENDERING
    // =============================================================================

    #[tokio::test]
    async fn test_dashboard_frame_shows_loaded_data() {
        let backend = healthy_backend();
        let ctx = console(backend, SequencePolicy::default());
        press(&ctx, KeyCode::Char('r')).await;

        let app = ctx.app.lock().await;
        let frame = screen(&app);
        assert!(frame.contains("ws: client connected"));
        assert!(frame.contains("Main API Server"));
        assert!(frame.contains("connected v1.0.0"));
    }

    #[tokio::test]
    async fn test_faq_accordion_shows_one_answer() {
        let ctx = console(healthy_backend(), SequencePolicy::default());
        press(&ctx, KeyCode::Char('f')).await;
        press(&ctx, KeyCode::Enter).await;
        press(&ctx, KeyCode::Down).await;
        press(&ctx, KeyCode::Enter).await;

        let app = ctx.app.lock().await;
        assert_eq!(app.accordion.open_index(), Some(1));
        let frame = screen(&app);
        assert!(frame.contains("Health checks are performed every 30 seconds"));
        assert!(!frame.contains("continuously tracks the status"));
    }

    #[test]
    fn test_fixture_shapes_decode() {
        let health: admin_console::api::HealthStatusResponse = tokio_test::assert_ok!(
            serde_json::from_value(json!({"health": {"2.py": {"status": "Down", "healthy": false}}}))
        );
        assert!(!health.health["2.py"].healthy);
    }
}
