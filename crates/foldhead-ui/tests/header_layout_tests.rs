use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use foldhead_core::{DefaultScheduler, Runtime};
use foldhead_testing::{FakeRegion, FakeRegionHost, HeaderTestRule};
use foldhead_ui::{
    AnimationConfig, ArbiterConfig, GestureSession, HeaderLayout, HeaderStatus, MissingRegion,
    ModifyOriginalPolicy, OverlapPolicy, PointerSample, RegionHost, CONTENT_REGION,
    HEADER_REGION,
};

const TICK: Duration = Duration::from_millis(10);

fn collapse_by_drag(rule: &mut HeaderTestRule) {
    rule.drag(50, &[300, 290, 230, 220]).expect("regions present");
    rule.advance_until_idle(TICK);
}

#[test]
fn missing_content_region_is_reported() {
    let host = FakeRegionHost::new();
    host.insert(HEADER_REGION, FakeRegion::new(120));
    let mut rule = HeaderTestRule::with_host(
        Rc::clone(&host),
        ArbiterConfig::default(),
        AnimationConfig::default(),
    );

    let err = rule.down(10, 300).unwrap_err();
    assert_eq!(err.missing, MissingRegion::Content);
    assert!(err.to_string().starts_with("content region not found"));
    assert_eq!(rule.layout().header_height(), None);

    host.insert(CONTENT_REGION, FakeRegion::new(0));
    assert_eq!(rule.down(10, 300), Ok(false));
    assert_eq!(rule.layout().header_height(), Some(120));
}

#[test]
fn both_regions_missing_fails_every_entry_point() {
    let rule = HeaderTestRule::with_host(
        FakeRegionHost::new(),
        ArbiterConfig::default(),
        AnimationConfig::default(),
    );
    let layout = rule.layout();

    let err = layout.on_window_focus_changed(true).unwrap_err();
    assert_eq!(err.missing, MissingRegion::Both);
    assert!(layout.set_header_height(10).is_err());
    assert!(layout.set_original_header_height(10).is_err());
    assert!(layout.smooth_set_header_height(0, 10, 100).is_err());
    assert!(layout
        .on_intercept_touch_event(PointerSample::down(0, 0))
        .is_err());
    assert!(!layout.is_animating());
}

#[test]
fn focus_resolves_regions_once() {
    let rule = HeaderTestRule::new(120);

    rule.layout().on_window_focus_changed(false).unwrap();
    assert_eq!(rule.host().lookups(), 0);

    rule.layout().on_window_focus_changed(true).unwrap();
    rule.layout().on_window_focus_changed(true).unwrap();
    assert_eq!(rule.host().lookups(), 2);
    assert_eq!(rule.layout().original_header_height(), Some(120));
    assert_eq!(rule.layout().status(), HeaderStatus::Expanded);
}

#[test]
fn release_below_half_animates_to_collapsed() {
    let mut rule = HeaderTestRule::new(120);

    rule.down(50, 300).unwrap();
    assert!(rule.move_to(50, 290).unwrap());
    // The intercepting move only claims the gesture.
    assert_eq!(rule.header().layout_requests(), 0);

    rule.move_to(50, 230).unwrap();
    rule.move_to(50, 220).unwrap();
    assert_eq!(rule.header().layout_heights(), vec![60, 50]);

    rule.up(50, 220).unwrap();
    assert!(rule.layout().is_animating());
    rule.header().clear_layout_heights();

    rule.advance_until_idle(TICK);

    let heights = rule.header().layout_heights();
    assert_eq!(heights.len(), 16);
    assert_eq!(heights.first(), Some(&50));
    assert_eq!(heights.last(), Some(&0));
    assert!(heights.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(rule.layout().status(), HeaderStatus::Collapsed);
    assert_eq!(rule.layout().original_header_height(), Some(120));
    assert!(!rule.layout().is_animating());
}

#[test]
fn release_above_half_animates_back_to_expanded() {
    let mut rule = HeaderTestRule::new(120);

    assert!(rule.drag(50, &[300, 290, 250]).unwrap());
    assert_eq!(rule.layout().header_height(), Some(80));

    rule.advance_until_idle(TICK);
    assert_eq!(rule.layout().header_height(), Some(120));
    assert_eq!(rule.layout().status(), HeaderStatus::Expanded);
}

#[test]
fn cancel_settles_like_release() {
    let mut rule = HeaderTestRule::new(120);
    rule.down(50, 300).unwrap();
    rule.move_to(50, 290).unwrap();
    rule.move_to(50, 200).unwrap();

    assert!(rule.dispatch(PointerSample::cancel(50, 200)).unwrap());
    rule.advance_until_idle(TICK);
    assert_eq!(rule.layout().header_height(), Some(0));
}

#[test]
fn drag_beyond_bounds_is_clamped() {
    let mut rule = HeaderTestRule::new(120);
    rule.down(50, 600).unwrap();
    rule.move_to(50, 590).unwrap();
    rule.move_to(50, 100).unwrap();
    assert_eq!(rule.layout().header_height(), Some(0));
    assert_eq!(rule.layout().status(), HeaderStatus::Collapsed);

    rule.move_to(50, 900).unwrap();
    assert_eq!(rule.layout().header_height(), Some(120));
}

#[test]
fn gesture_starting_on_visible_header_stays_with_its_children() {
    let mut rule = HeaderTestRule::new(120);

    assert!(!rule.drag(50, &[100, 90, 20]).unwrap());
    assert_eq!(rule.header().layout_requests(), 0);
    assert!(rule.is_idle());
}

#[test]
fn horizontal_drag_is_left_to_content() {
    let mut rule = HeaderTestRule::new(120);
    rule.down(50, 300).unwrap();

    assert!(!rule.move_to(90, 280).unwrap());
    assert!(!rule.layout().is_intercepting());
}

#[test]
fn non_sticky_header_ignores_drags() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout().set_sticky(false);

    assert!(!rule.drag(50, &[300, 290, 200]).unwrap());
    assert_eq!(rule.layout().header_height(), Some(120));

    // Gestures nobody claimed still land on the header and are swallowed.
    let layout = rule.layout();
    assert_eq!(layout.on_touch_event(PointerSample::down(0, 300)), Ok(true));
    assert_eq!(layout.on_touch_event(PointerSample::moved(0, 200)), Ok(true));
    assert_eq!(layout.on_touch_event(PointerSample::up(0, 200)), Ok(true));
    assert_eq!(rule.header().layout_requests(), 0);
    assert!(rule.is_idle());
}

#[test]
fn collapsed_header_needs_hook_to_expand_by_drag() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout().set_header_height(0).unwrap();

    assert!(!rule.drag(50, &[300, 320, 400]).unwrap());
    assert_eq!(rule.layout().header_height(), Some(0));

    rule.layout().set_delegation_hook(Some(Rc::new(
        |_: &PointerSample, session: &GestureSession| session.start_y > 200,
    )));
    assert!(rule.drag(50, &[300, 320, 400]).unwrap());
    assert_eq!(rule.layout().header_height(), Some(80));

    rule.advance_until_idle(TICK);
    assert_eq!(rule.layout().header_height(), Some(120));
    assert_eq!(rule.layout().status(), HeaderStatus::Expanded);
}

#[test]
fn delegation_hook_can_read_the_layout_back() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let host: Rc<dyn RegionHost> = FakeRegionHost::with_header(120);
    let layout = Rc::new(HeaderLayout::new(host, runtime.handle()));
    layout.set_header_height(0).unwrap();

    let weak = Rc::downgrade(&layout);
    layout.set_delegation_hook(Some(Rc::new(
        move |_: &PointerSample, _: &GestureSession| {
            weak.upgrade().is_some_and(|layout| {
                layout.arbiter_config().sticky
                    && !layout.is_intercepting()
                    && layout.header_height() == Some(0)
            })
        },
    )));

    assert_eq!(layout.on_intercept_touch_event(PointerSample::down(50, 300)), Ok(false));
    assert_eq!(layout.on_intercept_touch_event(PointerSample::moved(50, 340)), Ok(true));
    assert!(layout.is_intercepting());
}

#[test]
fn raw_touch_path_drags_without_interception() {
    let rule = HeaderTestRule::new(120);
    let layout = rule.layout();

    layout.on_touch_event(PointerSample::down(0, 500)).unwrap();
    layout.on_touch_event(PointerSample::moved(0, 470)).unwrap();
    assert_eq!(layout.header_height(), Some(90));
    layout.on_touch_event(PointerSample::moved(0, 480)).unwrap();
    assert_eq!(layout.header_height(), Some(100));
}

#[test]
fn direct_writes_clamp_and_derive_status() {
    let rule = HeaderTestRule::new(120);
    let layout = rule.layout();

    layout.set_header_height(500).unwrap();
    assert_eq!(layout.header_height(), Some(120));
    layout.set_header_height(-5).unwrap();
    assert_eq!(layout.header_height(), Some(0));
    assert_eq!(layout.status(), HeaderStatus::Collapsed);
    assert_eq!(rule.header().layout_heights(), vec![120, 0]);
}

#[test]
fn modify_original_clamps_against_previous_bound() {
    let rule = HeaderTestRule::new(120);
    let layout = rule.layout();

    layout.set_header_height_with(200, true).unwrap();
    assert_eq!(layout.header_height(), Some(120));
    assert_eq!(layout.original_header_height(), Some(200));

    layout.set_header_height(180).unwrap();
    assert_eq!(layout.header_height(), Some(180));
}

#[test]
fn lowering_original_height_shrinks_header() {
    let rule = HeaderTestRule::new(120);
    rule.layout().set_original_header_height(60).unwrap();

    assert_eq!(rule.layout().header_height(), Some(60));
    assert_eq!(rule.header().layout_height(), Some(60));
}

#[test]
fn header_measured_empty_is_remeasured_on_write() {
    let rule = HeaderTestRule::new(0);
    rule.layout().set_header_height(50).unwrap();
    assert_eq!(rule.layout().header_height(), Some(0));

    rule.header().set_measured_height(120);
    rule.layout().set_header_height(50).unwrap();
    assert_eq!(rule.layout().original_header_height(), Some(120));
    assert_eq!(rule.layout().header_height(), Some(50));

    // Once shown, later writes keep the known original height.
    rule.header().set_measured_height(300);
    rule.layout().set_header_height(110).unwrap();
    assert_eq!(rule.layout().original_header_height(), Some(120));
}

#[test]
fn smooth_set_lands_exactly_on_target() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout().smooth_set_header_height(120, 37, 700).unwrap();

    let frames = rule.advance_until_idle(TICK);
    assert!(frames > 1);
    assert_eq!(rule.layout().header_height(), Some(37));
    assert_eq!(rule.header().layout_requests(), 22);
    assert_eq!(rule.layout().original_header_height(), Some(120));
}

#[test]
fn zero_duration_jumps_in_one_frame() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout().smooth_set_header_height(120, 0, 0).unwrap();

    assert_eq!(rule.advance_until_idle(TICK), 1);
    assert_eq!(rule.header().layout_heights(), vec![0]);
}

#[test]
fn growing_with_every_frame_policy_follows_the_new_bound() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout()
        .smooth_set_header_height_with(120, 200, 500, true)
        .unwrap();
    rule.advance_until_idle(TICK);

    let heights = rule.header().layout_heights();
    assert_eq!(heights.first(), Some(&120));
    assert!(heights.iter().any(|&height| height > 120 && height < 200));
    assert_eq!(rule.layout().header_height(), Some(200));
    assert_eq!(rule.layout().original_header_height(), Some(200));
}

#[test]
fn shrinking_with_every_frame_policy_jumps_to_target() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout()
        .smooth_set_header_height_with(120, 60, 500, true)
        .unwrap();
    rule.advance_until_idle(TICK);

    let heights = rule.header().layout_heights();
    assert!(heights.iter().all(|&height| height == 60));
    assert_eq!(rule.layout().original_header_height(), Some(60));
}

#[test]
fn final_frame_policy_moves_bound_only_at_the_end() {
    let mut rule = HeaderTestRule::with_config(
        120,
        ArbiterConfig::default(),
        AnimationConfig::default().with_modify_policy(ModifyOriginalPolicy::FinalFrame),
    );
    rule.layout()
        .smooth_set_header_height_with(120, 200, 500, true)
        .unwrap();
    rule.advance_until_idle(TICK);

    let heights = rule.header().layout_heights();
    let (last, intermediate) = heights.split_last().expect("frames written");
    assert_eq!(*last, 200);
    assert!(intermediate.iter().all(|&height| height == 120));
    assert_eq!(rule.layout().original_header_height(), Some(200));
}

#[test]
fn new_animation_supersedes_running_one() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout().smooth_set_header_height(120, 0, 500).unwrap();
    rule.advance_frame_by(TICK);
    rule.advance_frame_by(Duration::from_millis(100));

    rule.layout().smooth_set_header_height(60, 120, 100).unwrap();
    rule.advance_until_idle(TICK);

    assert_eq!(rule.layout().header_height(), Some(120));
    assert!(!rule.layout().is_animating());
}

#[test]
fn concurrent_animations_interleave_and_last_writer_wins() {
    let mut rule = HeaderTestRule::with_config(
        120,
        ArbiterConfig::default(),
        AnimationConfig::default().with_overlap(OverlapPolicy::Concurrent),
    );
    rule.layout().smooth_set_header_height(120, 0, 500).unwrap();
    rule.layout().smooth_set_header_height(0, 60, 100).unwrap();

    rule.advance_until_idle(TICK);
    assert_eq!(rule.header().layout_requests(), 16 + 4);
    assert_eq!(rule.layout().header_height(), Some(0));
}

#[test]
fn geometry_change_cancels_animation_and_remeasures() {
    let mut rule = HeaderTestRule::new(120);
    rule.layout().smooth_set_header_height(120, 0, 500).unwrap();
    rule.advance_frame_by(TICK);

    rule.layout().on_geometry_changed();
    assert!(!rule.layout().is_animating());
    assert_eq!(rule.layout().header_height(), None);

    rule.header().set_measured_height(200);
    rule.advance_until_idle(TICK);
    rule.layout().ensure_initialized().unwrap();
    assert_eq!(rule.layout().original_header_height(), Some(200));
    assert_eq!(rule.layout().header_height(), Some(200));
}

#[test]
fn touch_slop_follows_arbiter_config() {
    let mut rule = HeaderTestRule::with_config(
        120,
        ArbiterConfig::default().with_touch_slop(30),
        AnimationConfig::default(),
    );

    rule.down(50, 300).unwrap();
    assert!(!rule.move_to(50, 280).unwrap());
    assert!(rule.move_to(50, 270).unwrap());
    assert_eq!(rule.layout().header_state().map(|state| state.touch_slop()), Some(30));
}
