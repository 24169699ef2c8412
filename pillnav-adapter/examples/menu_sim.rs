use pillnav::{Element, PageLayout, ScrollSurface, compute_offset};
use pillnav_adapter::sim::{SimPage, run_until_idle};
use pillnav_adapter::{Controller, ControllerOptions, KeyAction};

fn main() {
    // A keyboard user walks the pill bar and commits a category with Enter.
    //
    // The host would:
    // - forward keydown events with the focused pill's index
    // - move DOM focus on KeyAction::Focus
    // - call tick(now_ms) from requestAnimationFrame
    // - mirror aria-selected / tabindex and the live region after each tick
    let mut page = SimPage::bar_kaixo(900.0);
    let keys = ["all", "entrantes-raciones", "ensaladas", "burritos-wraps", "brasil"];
    let options = ControllerOptions::default().with_on_selection_change(Some(
        |change: &pillnav_adapter::SelectionChange| {
            println!("selected {} (was {:?})", change.key, change.previous);
        },
    ));
    let mut c: Controller<SimPage> = Controller::new(keys, options);

    let mut now_ms = 0u64;
    let mut focused = 0usize;
    for name in ["ArrowRight", "ArrowRight", "End", "ArrowLeft", "Enter"] {
        now_ms += 40;
        match c.handle_key_name(name, focused, now_ms) {
            Some(KeyAction::Focus(i)) => focused = i,
            Some(KeyAction::Activate(i)) => println!("activate {i} at t={now_ms}"),
            None => {}
        }
        println!("{name}: focus={focused} selected={:?}", c.controls().selected_key());
    }

    let end = run_until_idle(&mut c, &mut page, now_ms, 16, 2000);
    for a in c.announcements() {
        println!("live region ({}): {}", a.politeness.as_str(), a.text);
    }
    for pill in c.controls().iter() {
        println!(
            "{:<20} aria-selected={} tabindex={}",
            pill.key(),
            pill.aria_selected(),
            pill.tab_index()
        );
    }

    let header = page.bounding_rect(Element::SectionHeader("burritos-wraps"));
    println!(
        "t={end} scroll_y={:.1} writes={} header_top={:?} clearance={}",
        page.scroll_y(),
        page.scroll_writes(),
        header.map(|r| r.top),
        compute_offset(&page)
    );
    println!("highlighted={:?}", c.highlighted_section());
}
