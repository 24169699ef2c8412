//! A headless model of the menu page, for demos and tests.
//!
//! It reproduces the page behaviors that move the fixed chrome while a scroll is running:
//! - the nav bar collapses to a shorter height once the page is scrolled past a threshold
//! - the pill bar sticks under the nav bar once it reaches it, and gets shorter when stuck,
//!   which also shifts the content below it
//! - blocks can be resized at any time, the way late-loading images resize cards
//!
//! Nothing here is needed to use the controller against a real page.

use pillnav::{BoundingRect, Element, PageLayout, ScrollSurface};

use crate::Controller;

/// One block inside the menu's content container, in document order.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Header {
        key: String,
        height: f64,
        /// Distance from the header's top edge to its title's top edge.
        title_inset: f64,
    },
    Card {
        key: String,
        height: f64,
    },
}

impl Block {
    pub fn key(&self) -> &str {
        match self {
            Self::Header { key, .. } | Self::Card { key, .. } => key,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Self::Header { height, .. } | Self::Card { height, .. } => *height,
        }
    }

    fn set_height(&mut self, h: f64) {
        match self {
            Self::Header { height, .. } | Self::Card { height, .. } => *height = h.max(0.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SimPage {
    viewport_height: f64,
    scroll_y: f64,
    reduced_motion: bool,
    hero_height: f64,
    nav_height: f64,
    nav_collapsed_height: f64,
    nav_collapse_after_px: f64,
    pill_height: f64,
    pill_stuck_height: f64,
    footer_height: f64,
    has_root: bool,
    blocks: Vec<Block>,
    scroll_writes: usize,
}

impl SimPage {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height: viewport_height.max(0.0),
            scroll_y: 0.0,
            reduced_motion: false,
            hero_height: 560.0,
            nav_height: 72.0,
            nav_collapsed_height: 48.0,
            nav_collapse_after_px: 80.0,
            pill_height: 56.0,
            pill_stuck_height: 44.0,
            footer_height: viewport_height.max(0.0),
            has_root: true,
            blocks: Vec::new(),
            scroll_writes: 0,
        }
    }

    /// The restaurant menu: one header per category, except salads, which only have cards.
    pub fn bar_kaixo(viewport_height: f64) -> Self {
        Self::new(viewport_height)
            .with_section("entrantes-raciones", 64.0, 12.0, &[320.0; 6])
            .with_cards("ensaladas", &[320.0; 4])
            .with_section("burritos-wraps", 64.0, 12.0, &[320.0; 4])
            .with_section("sandwich", 64.0, 12.0, &[320.0; 3])
            .with_section("hamburguesas", 64.0, 12.0, &[320.0; 5])
            .with_section("bocadillos", 64.0, 12.0, &[320.0; 4])
            .with_section("platos-combinados", 64.0, 12.0, &[320.0; 4])
            .with_section("brasil", 64.0, 12.0, &[320.0; 3])
    }

    pub fn with_hero_height(mut self, height: f64) -> Self {
        self.hero_height = height.max(0.0);
        self
    }

    pub fn with_nav(mut self, height: f64, collapsed_height: f64, collapse_after_px: f64) -> Self {
        self.nav_height = height.max(0.0);
        self.nav_collapsed_height = collapsed_height.max(0.0);
        self.nav_collapse_after_px = collapse_after_px;
        self
    }

    pub fn with_pills(mut self, height: f64, stuck_height: f64) -> Self {
        self.pill_height = height.max(0.0);
        self.pill_stuck_height = stuck_height.max(0.0);
        self
    }

    pub fn with_footer_height(mut self, height: f64) -> Self {
        self.footer_height = height.max(0.0);
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    /// Removes the content container, for testing pages with broken markup.
    pub fn without_root(mut self) -> Self {
        self.has_root = false;
        self
    }

    pub fn with_section(
        mut self,
        key: &str,
        header_height: f64,
        title_inset: f64,
        cards: &[f64],
    ) -> Self {
        self.blocks.push(Block::Header {
            key: key.to_owned(),
            height: header_height.max(0.0),
            title_inset: title_inset.max(0.0),
        });
        self.with_cards(key, cards)
    }

    pub fn with_cards(mut self, key: &str, cards: &[f64]) -> Self {
        self.blocks.extend(cards.iter().map(|h| Block::Card {
            key: key.to_owned(),
            height: h.max(0.0),
        }));
        self
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn resize_block(&mut self, index: usize, height: f64) -> bool {
        let Some(block) = self.blocks.get_mut(index) else {
            return false;
        };
        block.set_height(height);
        true
    }

    /// Resizes every card of a category. Returns how many cards changed.
    pub fn resize_cards(&mut self, key: &str, height: f64) -> usize {
        let mut n = 0;
        for block in &mut self.blocks {
            if matches!(block, Block::Card { key: k, .. } if k == key) {
                block.set_height(height);
                n += 1;
            }
        }
        n
    }

    pub fn nav_collapsed(&self) -> bool {
        self.scroll_y > self.nav_collapse_after_px
    }

    pub fn current_nav_height(&self) -> f64 {
        if self.nav_collapsed() {
            self.nav_collapsed_height
        } else {
            self.nav_height
        }
    }

    pub fn pills_stuck(&self) -> bool {
        self.scroll_y + 1.0 >= self.hero_height - self.current_nav_height()
    }

    pub fn current_pill_height(&self) -> f64 {
        if self.pills_stuck() {
            self.pill_stuck_height
        } else {
            self.pill_height
        }
    }

    fn root_top(&self) -> f64 {
        self.hero_height + self.current_pill_height()
    }

    fn block_tops(&self) -> impl Iterator<Item = (f64, &Block)> {
        self.blocks.iter().scan(self.root_top(), |top, block| {
            let this = *top;
            *top += block.height();
            Some((this, block))
        })
    }

    pub fn document_height(&self) -> f64 {
        let content: f64 = self.blocks.iter().map(Block::height).sum();
        self.root_top() + content + self.footer_height
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    fn find_block(&self, element: Element<'_>) -> Option<(f64, &Block)> {
        if !self.has_root {
            return None;
        }
        self.block_tops().find(|(_, b)| match (element, b) {
            (Element::SectionHeader(key), Block::Header { key: k, .. }) => k == key,
            (Element::Card(key), Block::Card { key: k, .. }) => k == key,
            _ => false,
        })
    }

    /// Top edge of a content element in document coordinates.
    ///
    /// For a section header this is the top of its title.
    pub fn document_top(&self, element: Element<'_>) -> Option<f64> {
        if let Element::Root = element {
            return self.has_root.then(|| self.root_top());
        }
        let (top, block) = self.find_block(element)?;
        match block {
            Block::Header { title_inset, .. } => Some(top + title_inset),
            Block::Card { .. } => Some(top),
        }
    }

    /// Number of times the scroll position was written.
    pub fn scroll_writes(&self) -> usize {
        self.scroll_writes
    }

    fn pill_rect(&self) -> BoundingRect {
        let natural = self.hero_height - self.scroll_y;
        let top = if self.pills_stuck() {
            natural.max(self.current_nav_height())
        } else {
            natural
        };
        BoundingRect::new(top, top + self.current_pill_height())
    }
}

impl ScrollSurface for SimPage {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        let y = if y.is_finite() { y } else { self.scroll_y };
        self.scroll_y = y.clamp(0.0, self.max_scroll());
        self.scroll_writes += 1;
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

impl PageLayout for SimPage {
    fn bounding_rect(&self, element: Element<'_>) -> Option<BoundingRect> {
        match element {
            Element::NavBar => Some(BoundingRect::new(0.0, self.current_nav_height())),
            Element::PillBar => Some(self.pill_rect()),
            Element::Root => {
                let top = self.document_top(element)? - self.scroll_y;
                let content: f64 = self.blocks.iter().map(Block::height).sum();
                Some(BoundingRect::new(top, top + content))
            }
            Element::SectionHeader(_) | Element::Card(_) => {
                let (block_top, block) = self.find_block(element)?;
                let top = self.document_top(element)? - self.scroll_y;
                let bottom = block_top + block.height() - self.scroll_y;
                Some(BoundingRect::new(top, bottom.max(top)))
            }
        }
    }
}

/// Ticks `controller` every `frame_ms` until it is idle. Returns the last timestamp used.
///
/// Gives up after `max_frames` frames.
pub fn run_until_idle(
    controller: &mut Controller<SimPage>,
    page: &mut SimPage,
    mut now_ms: u64,
    frame_ms: u64,
    max_frames: usize,
) -> u64 {
    for _ in 0..max_frames {
        if controller.is_idle() {
            break;
        }
        now_ms = now_ms.saturating_add(frame_ms.max(1));
        controller.tick(page, now_ms);
    }
    now_ms
}
