//! Integration tests for WatchFace

mod common;
use common::*;

use analog_face::{
    EngineError, FaceConfig, Hand, HostEvent, PowerPhase, RenderDetail, ScheduleError, Viewport,
    WatchFace,
};

fn face<'a>(
    clock: &'a MockTimeSource,
    scheduler: &'a MockScheduler,
    host: &'a MockHost,
) -> WatchFace<'a, MockTimeSource, &'a MockScheduler, &'a MockHost> {
    WatchFace::new(FaceConfig::default(), clock, scheduler, host)
}

#[test]
fn starts_hidden_with_no_timer() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let face = face(&clock, &scheduler, &host);

    assert_eq!(face.phase(), PowerPhase::InteractiveHidden);
    assert!(!face.should_run());
    assert!(!face.timer_pending());
    assert!(scheduler.delays().is_empty());
}

#[test]
fn becoming_visible_arms_timer_immediately() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();

    assert!(face.timer_pending());
    assert_eq!(scheduler.live().len(), 1);
    assert_eq!(scheduler.last_delay(), Some(0));
}

#[test]
fn timer_fire_redraws_and_rearms_on_second_boundary() {
    let clock = MockTimeSource::new();
    clock.set_millis(12_345);
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();
    let handle = scheduler.fire().unwrap();
    face.on_timer_fired(handle).unwrap();

    assert_eq!(host.redraws(), 1);
    assert_eq!(scheduler.last_delay(), Some(655));
    assert_eq!(scheduler.live().len(), 1);

    // Next fire lands exactly on the boundary: wait a full period
    clock.set_millis(13_000);
    let handle = scheduler.fire().unwrap();
    face.on_timer_fired(handle).unwrap();

    assert_eq!(host.redraws(), 2);
    assert_eq!(scheduler.last_delay(), Some(1_000));
}

#[test]
fn hiding_cancels_pending_timer_and_stops_redraws() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();
    let pending = scheduler.live()[0];

    face.on_visibility_changed(false).unwrap();
    assert!(!face.timer_pending());
    assert!(scheduler.live().is_empty());
    assert!(scheduler.cancelled().contains(&pending));

    // Host delivers the cancelled callback anyway
    face.on_timer_fired(pending).unwrap();
    assert_eq!(host.redraws(), 0);
    assert!(scheduler.live().is_empty());
}

#[test]
fn entering_ambient_redraws_once_and_stops_timer() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();
    face.on_ambient_mode_changed(true).unwrap();

    assert_eq!(host.redraws(), 1);
    assert_eq!(face.phase(), PowerPhase::AmbientVisible);
    assert!(!face.timer_pending());
    assert!(scheduler.live().is_empty());

    // Duplicate notification: no redraw
    face.on_ambient_mode_changed(true).unwrap();
    assert_eq!(host.redraws(), 1);
}

#[test]
fn leaving_ambient_rearms_timer() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();
    face.on_ambient_mode_changed(true).unwrap();
    face.on_ambient_mode_changed(false).unwrap();

    assert_eq!(host.redraws(), 2);
    assert!(face.timer_pending());
    assert_eq!(scheduler.live().len(), 1);
}

#[test]
fn at_most_one_callback_is_ever_pending() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();
    face.on_visibility_changed(true).unwrap();
    face.on_ambient_mode_changed(false).unwrap();
    face.update_timer().unwrap();
    assert_eq!(scheduler.live().len(), 1);

    for _ in 0..5 {
        clock.advance(1_000);
        let handle = scheduler.fire().unwrap();
        face.on_timer_fired(handle).unwrap();
        assert_eq!(scheduler.live().len(), 1);
    }
    assert_eq!(host.redraws(), 5);
}

#[test]
fn schedule_failure_is_reported_and_retry_rearms() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    scheduler.set_refuse(true);
    assert_eq!(face.on_visibility_changed(true), Err(ScheduleError::Rejected));
    assert!(face.should_run());
    assert!(!face.timer_pending());

    scheduler.set_refuse(false);
    face.update_timer().unwrap();
    assert!(face.timer_pending());
}

#[test]
fn properties_do_not_redraw() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_properties_discovered(true);
    assert_eq!(host.redraws(), 0);
    assert!(face.power().state().low_bit_ambient);
}

#[test]
fn low_bit_ambient_disables_anti_aliasing() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_properties_discovered(true);
    face.on_ambient_mode_changed(true).unwrap();
    assert_eq!(face.render_detail(), RenderDetail::Reduced { anti_alias: false });

    let plan = face.draw(Viewport::new(200, 200).unwrap()).unwrap();
    assert!(plan.hands().all(|h| !h.paint.anti_alias));
    assert!(plan.hand(Hand::Second).is_none());
}

#[test]
fn time_tick_and_time_zone_change_redraw() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_time_tick();
    face.on_time_zone_changed();
    assert_eq!(host.redraws(), 2);
}

#[test]
fn destroy_cancels_timer() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();
    face.on_destroy();
    assert!(!face.timer_pending());
    assert!(scheduler.live().is_empty());
}

#[test]
fn draw_samples_time_fresh_each_frame() {
    let clock = MockTimeSource::at(3, 15, 45, 0);
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);
    let viewport = Viewport::new(200, 200).unwrap();

    let plan = face.draw(viewport).unwrap();
    assert_eq!(plan.hand(Hand::Second).unwrap().rotation(), 270.0);

    clock.advance(1_000);
    let plan = face.draw(viewport).unwrap();
    assert_eq!(plan.hand(Hand::Second).unwrap().rotation(), 276.0);
}

#[test]
fn handle_event_dispatches_to_handlers() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.handle_event(HostEvent::PropertiesDiscovered {
        low_bit_ambient: false,
    })
    .unwrap();
    face.handle_event(HostEvent::VisibilityChanged(true)).unwrap();
    let handle = scheduler.fire().unwrap();
    face.handle_event(HostEvent::TimerFired(handle)).unwrap();
    face.handle_event(HostEvent::AmbientModeChanged(true)).unwrap();
    face.handle_event(HostEvent::TimeTick).unwrap();
    face.handle_event(HostEvent::Destroy).unwrap();

    assert_eq!(host.redraws(), 3);
    assert_eq!(face.phase(), PowerPhase::AmbientVisible);
    assert!(scheduler.live().is_empty());
}

#[test]
fn handle_event_wraps_schedule_errors() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    scheduler.set_refuse(true);
    let result = face.handle_event(HostEvent::VisibilityChanged(true));
    assert_eq!(result, Err(EngineError::Schedule(ScheduleError::Rejected)));
}

#[test]
fn rearm_failure_after_fire_still_redraws_and_recovers() {
    let clock = MockTimeSource::new();
    let scheduler = MockScheduler::new();
    let host = MockHost::new();
    let mut face = face(&clock, &scheduler, &host);

    face.on_visibility_changed(true).unwrap();
    let handle = scheduler.fire().unwrap();

    scheduler.set_refuse(true);
    assert_eq!(face.on_timer_fired(handle), Err(ScheduleError::Rejected));
    assert_eq!(host.redraws(), 1);
    assert!(!face.timer_pending());
    assert!(scheduler.live().is_empty());
    assert!(face.should_run());

    scheduler.set_refuse(false);
    face.update_timer().unwrap();
    assert!(face.timer_pending());
    assert_eq!(scheduler.live().len(), 1);
    assert_eq!(scheduler.last_delay(), Some(0));
}
