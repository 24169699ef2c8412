use pillnav::{
    BoundingRect, Element, PageLayout, ScrollEngine, ScrollOptions, ScrollSurface, TargetResolver,
};

/// A fixed 64px bar over a document where section "b" starts at 2000px.
struct Doc {
    y: f64,
}

impl ScrollSurface for Doc {
    fn scroll_y(&self) -> f64 {
        self.y
    }

    fn scroll_to(&mut self, y: f64) {
        self.y = y;
    }
}

impl PageLayout for Doc {
    fn bounding_rect(&self, element: Element<'_>) -> Option<BoundingRect> {
        let top = match element {
            Element::NavBar => return Some(BoundingRect::new(0.0, 64.0)),
            Element::Root => 100.0,
            Element::SectionHeader("b") => 2000.0,
            _ => return None,
        };
        Some(BoundingRect::new(top - self.y, top - self.y + 40.0))
    }
}

fn main() {
    // The host owns the frame clock: start a scroll, then tick once per frame until it finishes.
    let mut doc = Doc { y: 0.0 };
    let mut engine: ScrollEngine<Doc> = ScrollEngine::new(ScrollOptions::default());

    let resolver = TargetResolver::resolve(&doc, "b");
    println!("anchor={:?} target={:?}", resolver.anchor(), resolver.target_y(&doc));

    let handle = engine.animate_to(
        &mut doc,
        0,
        None,
        resolver.into_target_fn::<Doc>(),
        |outcome| println!("completed: {outcome:?}"),
    );

    let mut now_ms = 0u64;
    while engine.is_animating() {
        now_ms += 16;
        engine.tick(&mut doc, now_ms);
        if now_ms.is_multiple_of(96) {
            println!("t={now_ms} y={:.1}", doc.y);
        }
    }
    println!("done: y={} outcome={:?}", doc.y, handle.outcome());
}
