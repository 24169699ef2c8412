use crate::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
struct FakePage {
    scroll_y: f64,
    reduced_motion: bool,
    // Document-space tops.
    root_top: Option<f64>,
    headers: Vec<(&'static str, f64)>,
    cards: Vec<(&'static str, f64)>,
    // Viewport-space bottoms of the fixed bars.
    nav_bottom: Option<f64>,
    pill_bottom: Option<f64>,
    writes: Vec<f64>,
}

impl FakePage {
    fn menu() -> Self {
        Self {
            root_top: Some(600.0),
            headers: vec![("entrantes", 640.0), ("burritos", 2400.0)],
            cards: vec![("entrantes", 700.0), ("ensaladas", 1500.0), ("burritos", 2450.0)],
            nav_bottom: Some(64.0),
            pill_bottom: Some(112.0),
            ..Self::default()
        }
    }

    fn content_rect(&self, doc_top: f64) -> BoundingRect {
        let top = doc_top - self.scroll_y;
        BoundingRect::new(top, top + 40.0)
    }
}

impl ScrollSurface for FakePage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
        self.writes.push(self.scroll_y);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

impl PageLayout for FakePage {
    fn bounding_rect(&self, element: Element<'_>) -> Option<BoundingRect> {
        let find = |list: &[(&str, f64)], key: &str| {
            list.iter().find(|(k, _)| *k == key).map(|(_, top)| *top)
        };
        match element {
            Element::Root => self.root_top.map(|t| self.content_rect(t)),
            Element::SectionHeader(key) => find(&self.headers, key).map(|t| self.content_rect(t)),
            Element::Card(key) => find(&self.cards, key).map(|t| self.content_rect(t)),
            Element::NavBar => self.nav_bottom.map(|b| BoundingRect::new(0.0, b)),
            Element::PillBar => self.pill_bottom.map(|b| BoundingRect::new(b - 48.0, b)),
        }
    }
}

fn counter() -> (Rc<Cell<u32>>, impl FnOnce(Outcome) + 'static) {
    let calls = Rc::new(Cell::new(0u32));
    let c = Rc::clone(&calls);
    (calls, move |_| c.set(c.get() + 1))
}

fn run_frames(engine: &mut ScrollEngine<FakePage>, page: &mut FakePage, from_ms: u64) -> u64 {
    let mut now = from_ms;
    let mut frames = 0;
    while engine.is_animating() {
        now += 16;
        frames += 1;
        engine.tick(page, now);
        assert!(frames < 1000, "animation never finished");
    }
    now
}

#[test]
fn ease_out_cubic_shape() {
    let e = Easing::EaseOutCubic;
    assert_eq!(e.sample(0.0), 0.0);
    assert_eq!(e.sample(1.0), 1.0);
    assert!((e.sample(0.5) - 0.875).abs() < 1e-12);
    assert_eq!(e.sample(-3.0), 0.0);
    assert_eq!(e.sample(7.0), 1.0);
    assert_eq!(Easing::default(), Easing::EaseOutCubic);

    let mut prev = 0.0;
    for i in 1..=100 {
        let v = e.sample(i as f64 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn session_follows_configured_easing_curve() {
    let o = ScrollOptions::default().with_easing(Easing::EaseOutCubic);
    let mut s = AnimationSession::new(0.0, 1000.0, 0, 200, &o);
    assert_eq!(s.easing, Easing::EaseOutCubic);
    match s.step(100, 1000.0) {
        Step::Write(y) => assert!((y - 875.0).abs() < 1e-9),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn duration_scales_with_distance_and_is_clamped() {
    let o = ScrollOptions::default();
    assert_eq!(o.duration_for(100.0), 180);
    assert_eq!(o.duration_for(1000.0), 240);
    assert_eq!(o.duration_for(1500.0), 360);
    assert_eq!(o.duration_for(50_000.0), 480);
    assert_eq!(o.duration_for(f64::INFINITY), 480);

    let o = o.with_duration_range(500, 100);
    assert_eq!(o.duration_for(0.0), 500);
    assert_eq!(o.duration_for(1e9), 500);
}

#[test]
fn smoothing_is_kept_in_unit_interval() {
    assert_eq!(ScrollOptions::default().effective_smoothing(), 0.35);
    assert_eq!(ScrollOptions::default().with_smoothing(0.0).effective_smoothing(), 1.0);
    assert_eq!(ScrollOptions::default().with_smoothing(4.0).effective_smoothing(), 1.0);
    assert_eq!(ScrollOptions::default().with_smoothing(f64::NAN).effective_smoothing(), 1.0);
}

#[test]
fn session_finishes_on_exact_desired_target() {
    let o = ScrollOptions::default();
    let mut s = AnimationSession::new(0.0, 1000.0, 0, 200, &o);

    let mut last = 0.0;
    for now in [16u64, 32, 48, 64, 96, 128, 160, 192] {
        match s.step(now, 1000.0) {
            Step::Write(y) => {
                assert!(y > last && y < 1000.0);
                last = y;
            }
            Step::Hold => {}
            Step::Finish(_) => panic!("finished early at {now}"),
        }
    }
    assert_eq!(s.step(200, 1000.0), Step::Finish(1000.0));
    assert_eq!(s.last_written, 1000.0);
}

#[test]
fn session_smooths_a_jumping_target() {
    let o = ScrollOptions::default();
    let mut s = AnimationSession::new(0.0, 1000.0, 0, 400, &o);
    s.step(16, 1000.0);
    assert_eq!(s.smoothed_target, 1000.0);

    // Target jumps by 100 px: the filter closes 35% of the gap per frame, not all of it.
    s.step(32, 900.0);
    assert!((s.smoothed_target - 965.0).abs() < 1e-9);
    s.step(48, 900.0);
    assert!((s.smoothed_target - 942.25).abs() < 1e-9);

    // The final frame still lands exactly on the desired value.
    assert_eq!(s.step(400, 900.0), Step::Finish(900.0));
}

#[test]
fn session_suppresses_sub_pixel_writes() {
    let o = ScrollOptions::default();
    let mut s = AnimationSession::new(0.0, 1000.0, 0, 100, &o);
    assert!(matches!(s.step(50, 1000.0), Step::Write(_)));
    assert_eq!(s.step(50, 1000.0), Step::Hold);
}

#[test]
fn session_ignores_non_finite_and_negative_targets() {
    let o = ScrollOptions::default();
    let mut s = AnimationSession::new(500.0, -20.0, 0, 100, &o);
    assert_eq!(s.smoothed_target, 0.0);
    s.step(10, f64::NAN);
    assert_eq!(s.smoothed_target, 0.0);
    assert_eq!(s.step(100, -5.0), Step::Finish(0.0));
}

#[test]
fn resolve_prefers_header_then_card_then_root() {
    let page = FakePage::menu();
    assert_eq!(
        resolve_anchor(&page, "entrantes"),
        Anchor::SectionHeader("entrantes".into())
    );
    assert_eq!(resolve_anchor(&page, "ensaladas"), Anchor::Card("ensaladas".into()));
    assert_eq!(resolve_anchor(&page, "postres"), Anchor::Root);
    assert_eq!(resolve_anchor(&page, SHOW_ALL), Anchor::Root);
    assert_eq!(resolve_anchor(&page, ""), Anchor::Root);
}

#[test]
fn show_all_ignores_a_header_named_all() {
    let mut page = FakePage::menu();
    page.headers.push(("all", 3000.0));
    assert_eq!(resolve_anchor(&page, "all"), Anchor::Root);
}

#[test]
fn card_only_category_targets_the_card() {
    let page = FakePage::menu();
    let r = TargetResolver::resolve(&page, "ensaladas");
    // Card at 1500, lowest fixed bar bottom at 112.
    assert_eq!(r.target_y(&page), Some(1388.0));
}

#[test]
fn unknown_category_targets_the_root() {
    let mut page = FakePage::menu();
    page.scroll_y = 2000.0;
    let r = TargetResolver::resolve(&page, "postres");
    assert_eq!(r.anchor(), &Anchor::Root);
    assert_eq!(r.target_y(&page), Some(488.0));
}

#[test]
fn offset_is_max_of_bars_not_sum() {
    let mut page = FakePage::menu();
    assert_eq!(compute_offset(&page), 112.0);

    page.pill_bottom = Some(40.0);
    assert_eq!(compute_offset(&page), 64.0);

    page.nav_bottom = None;
    page.pill_bottom = None;
    assert_eq!(compute_offset(&page), 0.0);

    page.nav_bottom = Some(-30.0);
    page.pill_bottom = Some(f64::NAN);
    assert_eq!(compute_offset(&page), 0.0);
}

#[test]
fn target_is_floored_at_zero() {
    let mut page = FakePage::menu();
    page.root_top = Some(20.0);
    assert_eq!(compute_target_y(&page, &Anchor::Root), Some(0.0));
}

#[test]
fn target_fn_holds_last_known_target_when_anchor_disappears() {
    let mut page = FakePage::menu();
    let mut f = TargetResolver::resolve(&page, "ensaladas").into_target_fn::<FakePage>();
    assert_eq!(f(&page), 1388.0);
    page.cards.clear();
    assert_eq!(f(&page), 1388.0);

    let mut g = TargetResolver::new(Anchor::Card("ghost".into())).into_target_fn::<FakePage>();
    page.scroll_y = 77.0;
    assert_eq!(g(&page), 77.0);
}

#[test]
fn short_distance_jumps_synchronously() {
    let mut page = FakePage::menu();
    page.scroll_y = 1300.0;
    let mut engine = ScrollEngine::default();
    let (calls, done) = counter();

    let target = TargetResolver::resolve(&page, "ensaladas").into_target_fn::<FakePage>();
    let h = engine.animate_to(&mut page, 0, None, target, done);

    assert_eq!(h.outcome(), Some(Outcome::Jumped(JumpReason::ShortDistance)));
    assert!(!engine.is_animating());
    assert_eq!(page.scroll_y, 1388.0);
    assert_eq!(page.writes.len(), 1);
    assert_eq!(calls.get(), 1);
}

#[test]
fn reduced_motion_jumps_to_exact_target_with_no_frames() {
    let mut page = FakePage::menu();
    page.reduced_motion = true;
    let mut engine = ScrollEngine::default();
    let (calls, done) = counter();

    let target = TargetResolver::resolve(&page, "burritos").into_target_fn::<FakePage>();
    let h = engine.animate_to(&mut page, 0, None, target, done);

    assert_eq!(h.outcome(), Some(Outcome::Jumped(JumpReason::ReducedMotion)));
    assert!(!engine.is_animating());
    assert_eq!(page.scroll_y, 2400.0 - 112.0);
    assert_eq!(page.writes, vec![2288.0]);
    assert_eq!(engine.tick(&mut page, 16), None);
    assert_eq!(calls.get(), 1);
}

#[test]
fn animation_runs_over_frames_and_lands_exactly() {
    let mut page = FakePage::menu();
    let mut engine = ScrollEngine::default();
    let (calls, done) = counter();

    let target = TargetResolver::resolve(&page, "burritos").into_target_fn::<FakePage>();
    let h = engine.animate_to(&mut page, 1000, None, target, done);

    assert!(engine.is_animating());
    assert!(page.writes.is_empty(), "nothing is written before the first frame");
    assert_eq!(engine.session().map(|s| s.duration_ms), Some(480));

    let end = run_frames(&mut engine, &mut page, 1000);
    assert!(end >= 1480);
    assert!(page.writes.len() > 2);
    assert!(page.writes.windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(page.scroll_y, 2288.0);
    assert_eq!(h.outcome(), Some(Outcome::Completed));
    assert_eq!(calls.get(), 1);
}

#[test]
fn explicit_duration_overrides_distance_scaling() {
    let mut page = FakePage::menu();
    let mut engine = ScrollEngine::default();
    engine.animate_to(&mut page, 0, Some(64), |_: &FakePage| 5000.0, |_| {});
    assert_eq!(engine.session().map(|s| s.duration_ms), Some(64));
    assert_eq!(run_frames(&mut engine, &mut page, 0), 64);
    assert_eq!(page.scroll_y, 5000.0);
}

#[test]
fn animation_follows_chrome_that_shrinks_mid_flight() {
    let mut page = FakePage::menu();
    let mut engine = ScrollEngine::default();
    let target = TargetResolver::resolve(&page, "burritos").into_target_fn::<FakePage>();
    engine.animate_to(&mut page, 0, None, target, |_| {});

    let mut now = 0;
    for _ in 0..5 {
        now += 16;
        engine.tick(&mut page, now);
    }
    // The nav bar collapses and the pill bar moves up with it.
    page.nav_bottom = Some(40.0);
    page.pill_bottom = Some(88.0);
    run_frames(&mut engine, &mut page, now);

    assert_eq!(page.scroll_y, 2400.0 - 88.0);
}

#[test]
fn cancel_finalizes_once_and_reports_cancelled() {
    let mut page = FakePage::menu();
    let mut engine = ScrollEngine::default();
    let (calls, done) = counter();
    let h = engine.animate_to(&mut page, 0, None, |_: &FakePage| 3000.0, done);
    engine.tick(&mut page, 16);

    assert!(engine.cancel());
    assert_eq!(h.outcome(), Some(Outcome::Cancelled));
    assert_eq!(calls.get(), 1);
    assert!(!engine.cancel());
    assert!(!engine.cancel_handle(&h));
    assert_eq!(engine.tick(&mut page, 32), None);
    assert_eq!(calls.get(), 1);
}

#[test]
fn cancel_handle_only_touches_its_own_session() {
    let mut page = FakePage::menu();
    let mut engine = ScrollEngine::default();
    let first = engine.animate_to(&mut page, 0, None, |_: &FakePage| 3000.0, |_| {});
    let second = engine.animate_to(&mut page, 0, None, |_: &FakePage| 4000.0, |_| {});
    assert_ne!(first.id(), second.id());
    assert_eq!(first.outcome(), Some(Outcome::Cancelled));

    assert!(!engine.cancel_handle(&first));
    assert!(engine.is_animating());
    assert!(engine.cancel_handle(&second));
    assert_eq!(second.outcome(), Some(Outcome::Cancelled));
}

#[test]
fn new_animation_cancels_previous_before_its_first_frame() {
    let mut page = FakePage::menu();
    let mut engine = ScrollEngine::default();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();

    let first = {
        let log = Rc::clone(&log);
        let log_done = Rc::clone(&log);
        engine.animate_to(
            &mut page,
            0,
            None,
            move |_: &FakePage| {
                log.borrow_mut().push("first:target");
                2400.0
            },
            move |outcome| {
                assert_eq!(outcome, Outcome::Cancelled);
                log_done.borrow_mut().push("first:done");
            },
        )
    };
    engine.tick(&mut page, 16);

    {
        let log = Rc::clone(&log);
        engine.animate_to(
            &mut page,
            16,
            None,
            move |_: &FakePage| {
                log.borrow_mut().push("second:target");
                1388.0
            },
            |_| {},
        );
    }
    engine.tick(&mut page, 32);

    let log = log.borrow();
    let done: Vec<_> = log.iter().enumerate().filter(|(_, e)| **e == "first:done").collect();
    assert_eq!(done.len(), 1);
    let first_second = log.iter().position(|e| *e == "second:target");
    assert!(first_second.is_some_and(|i| i > done[0].0));
    assert_eq!(first.outcome(), Some(Outcome::Cancelled));
}

#[test]
fn dropping_the_engine_releases_the_gate() {
    let gate = SelectionGate::new();
    let mut page = FakePage::menu();
    {
        let mut engine = ScrollEngine::default();
        let release = gate.try_acquire();
        assert!(release.is_some());
        engine.animate_to(&mut page, 0, None, |_: &FakePage| 3000.0, move |_| drop(release));
        assert!(gate.is_busy());
    }
    assert!(!gate.is_busy());
}

#[test]
fn gate_rejects_while_held_and_clones_share_state() {
    let gate = SelectionGate::new();
    let other = gate.clone();
    assert_eq!(gate.state(), GateState::Idle);

    let release = gate.try_acquire();
    assert!(release.is_some());
    assert!(other.is_busy());
    assert!(other.try_acquire().is_none());

    if let Some(r) = release {
        r.release();
    }
    assert_eq!(other.state(), GateState::Idle);
    assert!(other.try_acquire().is_some());
    // The token above was dropped immediately.
    assert!(!gate.is_busy());
}

#[test]
fn debouncer_fires_last_value_after_quiet_period() {
    let mut d = Debouncer::new(80);
    d.trigger(1, 0);
    d.trigger(2, 30);
    d.trigger(3, 60);
    assert_eq!(d.deadline(), Some(140));
    assert_eq!(d.poll(100), None);
    assert_eq!(d.poll(139), None);
    assert_eq!(d.poll(140), Some(3));
    assert_eq!(d.poll(500), None);
    assert!(!d.is_pending());
}

#[test]
fn debouncer_cancel_drops_pending_value() {
    let mut d = Debouncer::new(10);
    d.trigger("x", 0);
    assert_eq!(d.cancel(), Some("x"));
    assert_eq!(d.poll(100), None);
}

#[test]
fn debounced_action_runs_once_with_last_arguments() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut d = debounce(move |v: u32| sink.borrow_mut().push(v), 80);

    for (i, now) in [0u64, 20, 40, 60].into_iter().enumerate() {
        d.trigger(i as u32, now);
        assert!(!d.tick(now));
    }
    assert!(d.is_pending());
    assert!(!d.tick(139));
    assert!(d.tick(140));
    assert!(!d.tick(400));
    assert_eq!(*seen.borrow(), vec![3]);

    d.trigger(9, 1000);
    d.trigger(10, 1100);
    assert!(d.tick(1180));
    assert_eq!(*seen.borrow(), vec![3, 10]);
}

#[test]
fn highlight_is_exclusive_and_expires() {
    let mut h = SectionHighlight::new(1200);
    assert_eq!(h.apply("entrantes", 0), None);
    assert_eq!(h.current(), Some("entrantes"));
    assert_eq!(h.apply("burritos", 500), Some("entrantes".to_owned()));
    assert_eq!(h.current(), Some("burritos"));
    assert_eq!(h.expire(1699), None);
    assert_eq!(h.expire(1700), Some("burritos".to_owned()));
    assert_eq!(h.current(), None);
    assert_eq!(h.clear(), None);
}
