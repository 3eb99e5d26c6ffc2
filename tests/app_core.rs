mod common;

use common::{make_series, make_stats, sym, test_app, test_app_with_symbols};
use stockdash::api::SourceError;
use stockdash::app::{AppEvent, ChartMode, Control, InputMode, Trigger};
use stockdash::chart::build_single_spec;

// --- request_render ---

#[test]
fn render_without_primary_is_noop() {
    let mut app = test_app();
    app.request_render(Trigger::Refresh);
    assert!(app.take_requests().is_empty());
    assert!(!app.loading);
}

#[test]
fn render_queues_request_and_shows_loading() {
    let mut app = test_app();
    app.view.primary = Some(sym("AAPL"));
    app.request_render(Trigger::Refresh);
    let requests = app.take_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].primary, sym("AAPL"));
    assert_eq!(requests[0].compare, None);
    assert_eq!(requests[0].window_days, 30);
    assert!(app.loading);
}

#[test]
fn cycle_ids_increase() {
    let mut app = test_app();
    app.view.primary = Some(sym("AAPL"));
    app.refresh();
    app.refresh();
    let ids: Vec<u64> = app.take_requests().iter().map(|r| r.cycle).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(app.take_requests().is_empty());
}

#[test]
fn compare_request_carries_second_symbol() {
    let mut app = test_app();
    app.view.primary = Some(sym("AAPL"));
    app.view.compare = Some(sym("MSFT"));
    app.view.mode = ChartMode::Compare;
    app.refresh();
    assert_eq!(app.take_requests()[0].compare, Some(sym("MSFT")));
}

// --- apply ---

#[test]
fn symbols_loaded_selects_first_and_renders() {
    let mut app = test_app();
    app.begin_initial_load();
    assert!(app.loading);
    app.apply(AppEvent::SymbolsLoaded(vec![sym("TCS"), sym("INFY")]));
    assert_eq!(app.view.primary, Some(sym("TCS")));
    let requests = app.take_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].trigger, Trigger::InitialLoad);
    assert!(app.loading);
}

#[test]
fn symbols_loaded_keeps_existing_primary() {
    let mut app = test_app();
    app.view.primary = Some(sym("INFY"));
    app.apply(AppEvent::SymbolsLoaded(vec![sym("TCS"), sym("INFY")]));
    assert_eq!(app.view.primary, Some(sym("INFY")));
}

#[test]
fn empty_symbol_list_hides_loading_without_render() {
    let mut app = test_app();
    app.begin_initial_load();
    app.apply(AppEvent::SymbolsLoaded(Vec::new()));
    assert!(app.symbols.is_empty());
    assert!(app.take_requests().is_empty());
    assert!(!app.loading);
    assert!(app.status_message.is_some());
}

#[test]
fn chart_ready_replaces_chart() {
    let mut app = test_app();
    app.apply(AppEvent::ChartReady { cycle: 1, spec: build_single_spec(&make_series(3), "A") });
    app.apply(AppEvent::ChartReady { cycle: 2, spec: build_single_spec(&make_series(5), "B") });
    assert_eq!(app.chart().unwrap().spec().series[0].name, "B");
    assert_eq!(app.renderer.disposed_count(), 1);
    assert!(app.last_updated.is_some());
}

#[test]
fn last_chart_written_wins() {
    let mut app = test_app();
    // Cycle 2 finishes before cycle 1.
    app.apply(AppEvent::ChartReady { cycle: 2, spec: build_single_spec(&make_series(5), "NEW") });
    app.apply(AppEvent::ChartReady { cycle: 1, spec: build_single_spec(&make_series(3), "OLD") });
    assert_eq!(app.chart().unwrap().spec().series[0].name, "OLD");
}

#[test]
fn failure_keeps_previous_chart_and_summary() {
    let mut app = test_app();
    app.apply(AppEvent::SummaryLoaded { cycle: 1, symbol: sym("A"), stats: make_stats(3.0, 1.0, 2.0) });
    app.apply(AppEvent::ChartReady { cycle: 1, spec: build_single_spec(&make_series(3), "A") });
    app.loading = true;

    app.apply(AppEvent::CycleFailed { cycle: 2, error: SourceError::Unavailable("timeout".to_string()) });
    app.apply(AppEvent::CycleFinished { cycle: 2 });

    assert_eq!(app.chart().unwrap().spec().series[0].name, "A");
    assert_eq!(app.summary, Some(make_stats(3.0, 1.0, 2.0)));
    assert!(app.status_message.as_deref().unwrap().contains("timeout"));
    assert!(!app.loading);
}

#[test]
fn first_finished_cycle_hides_loading() {
    let mut app = test_app();
    app.view.primary = Some(sym("AAPL"));
    app.refresh();
    app.refresh();
    app.apply(AppEvent::CycleFinished { cycle: 1 });
    assert!(!app.loading);
}

// --- controls ---

#[test]
fn focus_cycles_through_controls() {
    let mut app = test_app();
    assert_eq!(app.focus, Control::Primary);
    app.focus_next();
    assert_eq!(app.focus, Control::Compare);
    app.focus_prev();
    app.focus_prev();
    assert_eq!(app.focus, Control::Range);
}

#[test]
fn changing_primary_triggers_render() {
    let mut app = test_app_with_symbols(&["AAPL", "MSFT"]);
    app.change_focused(true);
    assert_eq!(app.view.primary, Some(sym("AAPL")));
    let requests = app.take_requests();
    assert_eq!(requests[0].trigger, Trigger::PrimaryChanged);
}

#[test]
fn clearing_primary_renders_nothing() {
    let mut app = test_app_with_symbols(&["AAPL"]);
    app.view.primary = Some(sym("AAPL"));
    app.cycle_primary(true);
    assert_eq!(app.view.primary, None);
    assert!(app.take_requests().is_empty());
}

#[test]
fn changing_compare_triggers_render() {
    let mut app = test_app_with_symbols(&["AAPL", "MSFT"]);
    app.view.primary = Some(sym("AAPL"));
    app.view.mode = ChartMode::Compare;
    app.focus = Control::Compare;
    app.change_focused(false);
    assert_eq!(app.view.compare, Some(sym("MSFT")));
    let requests = app.take_requests();
    assert_eq!(requests[0].trigger, Trigger::CompareChanged);
    assert_eq!(requests[0].compare, Some(sym("MSFT")));
}

#[test]
fn mode_toggle_triggers_render() {
    let mut app = test_app();
    app.view.primary = Some(sym("AAPL"));
    app.focus = Control::Mode;
    app.change_focused(true);
    assert_eq!(app.view.mode, ChartMode::Compare);
    assert_eq!(app.take_requests()[0].trigger, Trigger::ModeChanged);
}

#[test]
fn range_step_triggers_render_only_on_change() {
    let mut app = test_app();
    app.view.primary = Some(sym("AAPL"));
    app.step_range(true);
    let requests = app.take_requests();
    assert_eq!(requests[0].trigger, Trigger::RangeChanged);
    assert_eq!(requests[0].window_days, 90);

    app.view.set_window_days(365);
    app.step_range(true);
    assert!(app.take_requests().is_empty());
}

#[test]
fn help_toggle() {
    let mut app = test_app();
    app.show_help();
    assert_eq!(app.input_mode, InputMode::Help);
    app.close_help();
    assert_eq!(app.input_mode, InputMode::Normal);
}
