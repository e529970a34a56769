//! Panel - the base primitive
//!
//! A panel is a rectangular region with a background and optional border and
//! title. Widgets embed a `Panel` for their geometry, border, focus state and
//! input capture, and draw their own content inside `inner_rect()`.
//!
//! Drawing order per frame:
//! 1. background fill (unless `dont_clear`)
//! 2. border and title
//! 3. inner rect: derived from border and padding, or taken from the draw hook
//! 4. inner rect clipped to the screen (unless `animating`)

mod border;
mod capture;
mod focus;
mod overflow;

pub use capture::{KeyCapture, MouseCapture, MouseFallback};
pub use focus::FocusDirection;
pub use overflow::ScrollPosition;

use std::collections::HashMap;

use log::{debug, trace};

use crate::core::{Align, Attrs, BorderGlyphs, Color, InnerRect, Padding, Rect, Screen, Style};
use crate::event::{ChangeEvent, ChangeListener};
use crate::input::{KeyEvent, MouseAction, MouseEvent};
use crate::primitive::{MouseOutcome, Primitive, SetFocus, WeakPrimitive};
use crate::theme::Theme;

/// Replaces the inner-rect derivation for a frame.
///
/// Called after background and border are drawn with the outer rect; returns
/// the inner rect content should use.
pub trait DrawHook {
    fn draw(&mut self, screen: &mut dyn Screen, rect: Rect) -> Rect;
}

impl<F> DrawHook for F
where
    F: FnMut(&mut dyn Screen, Rect) -> Rect,
{
    fn draw(&mut self, screen: &mut dyn Screen, rect: Rect) -> Rect {
        self(screen, rect)
    }
}

/// Receives the text of a finished bracketed paste
pub trait PasteHandler {
    fn paste(&mut self, text: &[char]);
}

impl<F> PasteHandler for F
where
    F: FnMut(&[char]),
{
    fn paste(&mut self, text: &[char]) {
        self(text)
    }
}

/// The base primitive
pub struct Panel {
    /// Outer rect
    rect: Rect,
    /// Content rect as of the last draw
    inner: InnerRect,
    padding: Padding,

    /// Whether a border is drawn at all
    border: bool,
    border_top: bool,
    border_bottom: bool,
    border_left: bool,
    border_right: bool,
    /// When false the border keeps its space but is drawn blank
    border_visible: bool,
    border_blinking: bool,
    /// Extra attributes for border cells
    border_attrs: Attrs,
    border_color: Color,
    border_focus_color: Color,
    glyphs: &'static BorderGlyphs,

    background_color: Color,
    /// Reverse video background
    reverse: bool,

    /// Only visible with a border
    title: String,
    title_color: Color,
    title_align: Align,

    visible: bool,
    /// Skip the background fill
    dont_clear: bool,
    /// Skip clipping the inner rect to the screen
    animating: bool,
    indicate_overflow: bool,
    overflow_text: Color,
    overflow_track: Color,
    overflow_thumb: Color,
    overflow_dim: Color,

    has_focus: bool,
    /// Receives focus in place of this panel
    focus_target: Option<WeakPrimitive>,
    on_focus: Option<Box<dyn FnMut()>>,
    on_blur: Option<Box<dyn FnMut()>>,
    parent: Option<WeakPrimitive>,
    next_focusable: HashMap<FocusDirection, Vec<WeakPrimitive>>,

    input_capture: Option<Box<dyn KeyCapture>>,
    mouse_capture: Option<Box<dyn MouseCapture>>,
    mouse_fallback: Option<Box<dyn MouseFallback>>,
    draw_func: Option<Box<dyn DrawHook>>,
    on_paste: Option<Box<dyn PasteHandler>>,
    listener: Option<Box<dyn ChangeListener>>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    /// Create a panel with the default theme.
    ///
    /// The border is off; once enabled, all four sides are drawn.
    pub fn new() -> Self {
        Self::with_theme(&Theme::default())
    }

    /// Create a panel taking colors and glyphs from `theme`
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            rect: Rect::new(0, 0, 15, 10),
            inner: InnerRect::Stale,
            padding: Padding::default(),
            border: false,
            border_top: true,
            border_bottom: true,
            border_left: true,
            border_right: true,
            border_visible: true,
            border_blinking: false,
            border_attrs: Attrs::default(),
            border_color: theme.border_color,
            border_focus_color: theme.border_focus_color,
            glyphs: theme.glyphs.glyphs(),
            background_color: theme.primitive_background_color,
            reverse: false,
            title: String::new(),
            title_color: theme.title_color,
            title_align: Align::Center,
            visible: true,
            dont_clear: false,
            animating: false,
            indicate_overflow: false,
            overflow_text: theme.inverse_text_color,
            overflow_track: theme.overflow_track,
            overflow_thumb: theme.overflow_thumb,
            overflow_dim: theme.overflow_dim,
            has_focus: false,
            focus_target: None,
            on_focus: None,
            on_blur: None,
            parent: None,
            next_focusable: HashMap::new(),
            input_capture: None,
            mouse_capture: None,
            mouse_fallback: None,
            draw_func: None,
            on_paste: None,
            listener: None,
        }
    }

    // ---- geometry ----

    /// Outer rect as last set
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move and resize.
    ///
    /// A change listener sees the new values before they are stored.
    /// The inner rect is stale until the next draw.
    pub fn set_rect(&mut self, rect: Rect) {
        if rect != self.rect {
            debug!(
                "set.rect ({},{} {}x{}) -> ({},{} {}x{})",
                self.rect.x, self.rect.y, self.rect.width, self.rect.height,
                rect.x, rect.y, rect.width, rect.height
            );
            if let Some(mut listener) = self.listener.take() {
                listener.on_change(self, &ChangeEvent::set_rect(rect));
                self.listener = Some(listener);
            }
        }
        self.rect = rect;
        self.inner = InnerRect::Stale;
    }

    /// Content rect: the outer rect minus border and padding.
    ///
    /// Returns what the last draw stored if the rect has not changed since;
    /// otherwise derives it fresh without caching. Width and height are
    /// never negative.
    pub fn inner_rect(&self) -> Rect {
        self.inner.get().unwrap_or_else(|| self.derive_inner_rect())
    }

    /// State of the inner-rect cache
    pub fn inner_rect_state(&self) -> InnerRect {
        self.inner
    }

    fn derive_inner_rect(&self) -> Rect {
        let Rect { mut x, mut y, mut width, mut height } = self.rect;
        if self.border {
            let (top, bottom) = (self.border_top as i32, self.border_bottom as i32);
            let (left, right) = (self.border_left as i32, self.border_right as i32);
            x = x.saturating_add(left);
            y = y.saturating_add(top);
            width = width.saturating_sub(left + right);
            height = height.saturating_sub(top + bottom);
        }
        let p = self.padding;
        x = x.saturating_add(p.left as i32);
        y = y.saturating_add(p.top as i32);
        width = width.saturating_sub(p.left as i32 + p.right as i32);
        height = height.saturating_sub(p.top as i32 + p.bottom as i32);
        Rect::new(x, y, width.max(0), height.max(0))
    }

    /// Check if a point lies within the outer rect
    pub fn in_rect(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x, y)
    }

    /// Current border padding
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Space between border and content
    pub fn set_border_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    // ---- flags ----

    /// Whether the panel draws at all
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the panel
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the background fill is skipped
    pub fn dont_clear(&self) -> bool {
        self.dont_clear
    }

    /// Leave the background alone when drawing
    pub fn set_dont_clear(&mut self, dont_clear: bool) {
        self.dont_clear = dont_clear;
    }

    /// Whether the inner rect skips screen clipping
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// While animating, the inner rect may extend past the screen
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Whether `draw_overflow` draws
    pub fn indicate_overflow(&self) -> bool {
        self.indicate_overflow
    }

    /// Allow `draw_overflow` to draw
    pub fn set_indicate_overflow(&mut self, indicate: bool) {
        self.indicate_overflow = indicate;
    }

    // ---- colors ----

    /// Fill color
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Set the fill color
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Whether fill and border use reverse video
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Reverse video for the background fill and border
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Background style used for fill, border and title
    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background_color).reverse(self.reverse)
    }

    // ---- border ----

    /// Whether a border is drawn
    pub fn is_border(&self) -> bool {
        self.border
    }

    /// Turn the border on or off; enabled sides are kept
    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// Choose which sides are drawn when the border is on
    pub fn set_border_sides(&mut self, top: bool, left: bool, bottom: bool, right: bool) {
        self.border_top = top;
        self.border_left = left;
        self.border_bottom = bottom;
        self.border_right = right;
    }

    /// Top side drawn (border on and side enabled)
    pub fn is_border_top(&self) -> bool {
        self.border && self.border_top
    }

    /// Bottom side drawn (border on and side enabled)
    pub fn is_border_bottom(&self) -> bool {
        self.border && self.border_bottom
    }

    /// Left side drawn (border on and side enabled)
    pub fn is_border_left(&self) -> bool {
        self.border && self.border_left
    }

    /// Right side drawn (border on and side enabled)
    pub fn is_border_right(&self) -> bool {
        self.border && self.border_right
    }

    /// Whether border glyphs are shown
    pub fn is_border_visible(&self) -> bool {
        self.border_visible
    }

    /// Hide border glyphs while keeping their space
    pub fn set_border_visible(&mut self, visible: bool) {
        self.border_visible = visible;
    }

    /// Whether border cells blink
    pub fn is_border_blinking(&self) -> bool {
        self.border_blinking
    }

    /// Make border cells blink
    pub fn set_border_blinking(&mut self, blinking: bool) {
        self.border_blinking = blinking;
    }

    /// Extra attributes merged into border cells
    pub fn border_attributes(&self) -> Attrs {
        self.border_attrs
    }

    /// Set extra attributes for border cells
    pub fn set_border_attributes(&mut self, attrs: Attrs) {
        self.border_attrs = attrs;
    }

    /// Border color when unfocused
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Set the border color used when unfocused
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    /// Border color while focused
    pub fn border_focus_color(&self) -> Color {
        self.border_focus_color
    }

    /// Set the border color used while focused
    pub fn set_border_focus_color(&mut self, color: Color) {
        self.border_focus_color = color;
    }

    /// Glyph set the border is drawn with
    pub fn border_glyphs(&self) -> &'static BorderGlyphs {
        self.glyphs
    }

    /// Use a shared glyph set
    pub fn set_border_glyphs(&mut self, glyphs: &'static BorderGlyphs) {
        self.glyphs = glyphs;
    }

    // ---- title ----

    /// Title text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title shown in the top border
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Title text color
    pub fn title_color(&self) -> Color {
        self.title_color
    }

    /// Set the title text color
    pub fn set_title_color(&mut self, color: Color) {
        self.title_color = color;
    }

    /// Title alignment within the top border
    pub fn title_align(&self) -> Align {
        self.title_align
    }

    /// Set the title alignment
    pub fn set_title_align(&mut self, align: Align) {
        self.title_align = align;
    }

    // ---- hooks ----

    /// Replace the inner-rect derivation during draw
    pub fn set_draw_func(&mut self, hook: impl DrawHook + 'static) {
        self.draw_func = Some(Box::new(hook));
    }

    /// Go back to deriving the inner rect
    pub fn clear_draw_func(&mut self) {
        self.draw_func = None;
    }

    /// Whether a draw hook is installed
    pub fn has_draw_func(&self) -> bool {
        self.draw_func.is_some()
    }

    /// Observe geometry changes
    pub fn set_change_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Stop observing geometry changes
    pub fn clear_change_listener(&mut self) {
        self.listener = None;
    }

    /// Receive finished bracketed pastes
    pub fn set_on_paste(&mut self, handler: impl PasteHandler + 'static) {
        self.on_paste = Some(Box::new(handler));
    }

    /// A bracketed paste finished
    pub fn on_paste(&mut self, text: &[char]) {
        if let Some(handler) = self.on_paste.as_mut() {
            handler.paste(text);
        }
    }

    // ---- drawing ----

    /// Draw background and border and settle the inner rect for this frame
    pub fn draw(&mut self, screen: &mut dyn Screen) {
        if self.rect.is_empty() || !self.visible {
            return;
        }

        let background = self.background_style();
        if !self.dont_clear {
            // Only the on-screen part of the rect
            let (cols, rows) = screen.size();
            let Rect { x, y, .. } = self.rect;
            for row in y.max(0)..self.rect.bottom().min(rows) {
                for col in x.max(0)..self.rect.right().min(cols) {
                    screen.set_content(col, row, ' ', &[], background);
                }
            }
        }

        self.draw_border(screen);

        self.inner = match self.draw_func.as_mut() {
            Some(hook) => {
                let inner = hook.draw(screen, self.rect);
                trace!("draw hook set inner rect {:?}", inner);
                InnerRect::Override(inner)
            }
            None => InnerRect::Derived(self.derive_inner_rect()),
        };

        if !self.animating {
            let (cols, rows) = screen.size();
            self.inner = match self.inner {
                InnerRect::Derived(rect) => InnerRect::Derived(rect.clamp_to(cols, rows)),
                InnerRect::Override(rect) => InnerRect::Override(rect.clamp_to(cols, rows)),
                InnerRect::Stale => InnerRect::Stale,
            };
        }
    }
}

impl Primitive for Panel {
    fn draw(&mut self, screen: &mut dyn Screen) {
        Panel::draw(self, screen)
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        Panel::set_rect(self, rect)
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn has_focus(&self) -> bool {
        self.has_focus
    }

    fn focus(&mut self, delegate: &mut SetFocus<'_>) {
        Panel::focus(self, delegate)
    }

    fn blur(&mut self) {
        Panel::blur(self)
    }

    fn input_handler(&mut self, event: KeyEvent, set_focus: &mut SetFocus<'_>) {
        self.wrap_input_handler(event, set_focus, |_, _| {});
    }

    fn mouse_handler(
        &mut self,
        action: MouseAction,
        event: MouseEvent,
        set_focus: &mut SetFocus<'_>,
    ) -> MouseOutcome {
        match self.capture_mouse(action, event) {
            Some((action, event)) => self.default_mouse_handler(action, event, set_focus),
            None => MouseOutcome::ignored(),
        }
    }

    fn on_paste(&mut self, text: &[char]) {
        Panel::on_paste(self, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn bordered(x: i32, y: i32, w: i32, h: i32) -> Panel {
        let mut panel = Panel::new();
        panel.set_rect(Rect::new(x, y, w, h));
        panel.set_border(true);
        panel
    }

    #[test]
    fn test_defaults() {
        let panel = Panel::new();
        assert_eq!(panel.rect(), Rect::new(0, 0, 15, 10));
        assert!(panel.is_visible());
        assert!(!panel.is_border());
        assert!(panel.is_border_visible());
        assert_eq!(panel.title_align(), Align::Center);
        assert_eq!(panel.background_color(), Theme::default().primitive_background_color);
        assert!(!panel.is_border_top());

        let mut panel = panel;
        panel.set_border(true);
        assert!(panel.is_border_top() && panel.is_border_bottom());
        assert!(panel.is_border_left() && panel.is_border_right());
    }

    #[test]
    fn test_inner_rect_all_borders() {
        let panel = bordered(0, 0, 10, 5);
        assert_eq!(panel.inner_rect(), Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn test_inner_rect_border_disabled() {
        let mut panel = bordered(0, 0, 10, 5);
        panel.set_border(false);
        assert_eq!(panel.inner_rect(), Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_inner_rect_top_only() {
        let mut panel = bordered(0, 0, 10, 5);
        panel.set_border_sides(true, false, false, false);
        assert_eq!(panel.inner_rect(), Rect::new(0, 1, 10, 4));
    }

    #[test]
    fn test_inner_rect_padding() {
        let mut panel = bordered(2, 3, 20, 10);
        panel.set_border_padding(Padding::new(1, 2, 3, 4));
        assert_eq!(panel.inner_rect(), Rect::new(6, 5, 11, 5));
    }

    #[test]
    fn test_inner_rect_never_negative() {
        for w in 0..4 {
            for h in 0..4 {
                let mut panel = bordered(0, 0, w, h);
                panel.set_border_padding(Padding::uniform(2));
                let inner = panel.inner_rect();
                assert!(inner.width >= 0 && inner.height >= 0, "{}x{} -> {:?}", w, h, inner);
            }
        }
    }

    #[test]
    fn test_set_rect_round_trip() {
        let mut panel = Panel::new();
        panel.set_rect(Rect::new(-3, 7, 42, 0));
        assert_eq!(panel.rect(), Rect::new(-3, 7, 42, 0));
    }

    #[test]
    fn test_inner_rect_idempotent() {
        let mut panel = bordered(0, 0, 10, 5);
        let mut grid = Grid::new(80, 24);
        assert_eq!(panel.inner_rect(), panel.inner_rect());
        panel.draw(&mut grid);
        assert_eq!(panel.inner_rect(), panel.inner_rect());
    }

    #[test]
    fn test_cache_follows_draw_not_mutation() {
        let mut panel = bordered(0, 0, 10, 5);
        let mut grid = Grid::new(80, 24);
        panel.draw(&mut grid);
        assert_eq!(panel.inner_rect_state(), InnerRect::Derived(Rect::new(1, 1, 8, 3)));

        // Border changes alone do not invalidate the frame's inner rect
        panel.set_border(false);
        assert_eq!(panel.inner_rect(), Rect::new(1, 1, 8, 3));

        panel.set_rect(Rect::new(0, 0, 10, 5));
        assert_eq!(panel.inner_rect_state(), InnerRect::Stale);
        assert_eq!(panel.inner_rect(), Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn test_draw_clamps_to_screen() {
        let mut panel = bordered(-2, 20, 10, 10);
        let mut grid = Grid::new(80, 24);
        panel.draw(&mut grid);
        assert_eq!(panel.inner_rect(), Rect::new(0, 21, 7, 3));
    }

    #[test]
    fn test_animating_skips_clamp() {
        let mut panel = bordered(-2, 20, 10, 10);
        panel.set_animating(true);
        let mut grid = Grid::new(80, 24);
        panel.draw(&mut grid);
        assert_eq!(panel.inner_rect(), Rect::new(-1, 21, 8, 8));
    }

    #[test]
    fn test_draw_hook_overrides_inner_rect() {
        let mut panel = bordered(0, 0, 10, 5);
        let seen = Rc::new(RefCell::new(None));
        let seen_in_hook = Rc::clone(&seen);
        panel.set_draw_func(move |_screen: &mut dyn Screen, rect: Rect| -> Rect {
            *seen_in_hook.borrow_mut() = Some(rect);
            Rect::new(rect.x + 2, rect.y + 2, rect.width + 100, 1)
        });
        let mut grid = Grid::new(40, 10);
        panel.draw(&mut grid);
        assert_eq!(*seen.borrow(), Some(Rect::new(0, 0, 10, 5)));
        assert_eq!(panel.inner_rect_state(), InnerRect::Override(Rect::new(2, 2, 38, 1)));
    }

    #[test]
    fn test_draw_fills_background() {
        let mut panel = Panel::new();
        panel.set_rect(Rect::new(1, 1, 3, 2));
        panel.set_background_color(Color::Blue);
        let mut grid = Grid::new(6, 4);
        panel.draw(&mut grid);
        assert_eq!(grid.get(1, 1).unwrap().bg, Color::Blue);
        assert_eq!(grid.get(3, 2).unwrap().bg, Color::Blue);
        assert_eq!(grid.get(4, 2).unwrap().bg, Color::Default);
        assert_eq!(grid.get(0, 0).unwrap().bg, Color::Default);
    }

    #[test]
    fn test_reverse_fill_and_border() {
        let mut panel = bordered(0, 0, 4, 3);
        panel.set_reverse(true);
        let mut grid = Grid::new(6, 4);
        panel.draw(&mut grid);
        let fill = grid.get(1, 1).unwrap();
        assert!(fill.attrs.reverse);
        assert_eq!(fill.char, ' ');
        let corner = grid.get(0, 0).unwrap();
        assert!(corner.attrs.reverse);
        assert_eq!(corner.char, '┌');
        assert!(!grid.get(5, 3).unwrap().attrs.reverse);
    }

    #[test]
    fn test_title_hidden_without_border() {
        let mut panel = Panel::new();
        panel.set_rect(Rect::new(0, 0, 10, 3));
        panel.set_title("abc");
        let mut grid = Grid::new(10, 3);
        panel.draw(&mut grid);
        assert_eq!(grid.row_text(0), "          ");
    }

    #[test]
    fn test_draw_rect_at_coordinate_limits() {
        let mut grid = Grid::new(10, 4);

        let mut far = bordered(i32::MAX - 2, 0, 10, 1);
        far.set_title("abc");
        far.draw(&mut grid);
        assert_eq!(far.inner_rect().width, 0);
        assert!(!far.in_rect(0, 0));

        // Fill and border only touch the visible cells
        let mut huge = bordered(-1_000_000_000, -1_000_000_000, 2_000_000_000, 2_000_000_000);
        huge.set_background_color(Color::Blue);
        huge.draw(&mut grid);
        assert_eq!(huge.inner_rect(), Rect::new(0, 0, 10, 4));
        assert_eq!(grid.get(9, 3).unwrap().bg, Color::Blue);
        assert_eq!(grid.row_text(0), "          ");
    }

    #[test]
    fn test_dont_clear_and_invisible() {
        let mut panel = Panel::new();
        panel.set_rect(Rect::new(0, 0, 3, 2));
        panel.set_background_color(Color::Blue);
        panel.set_dont_clear(true);
        let mut grid = Grid::new(6, 4);
        grid.mark_all_clean();
        panel.draw(&mut grid);
        assert!(!grid.is_dirty());

        panel.set_dont_clear(false);
        panel.set_visible(false);
        panel.draw(&mut grid);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_change_notification_once_per_change() {
        let mut panel = Panel::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        panel.set_change_listener(move |panel: &Panel, event: &ChangeEvent| {
            log.borrow_mut().push((panel.rect(), event.clone()));
        });

        panel.set_rect(Rect::new(0, 0, 15, 10));
        assert!(events.borrow().is_empty());

        panel.set_rect(Rect::new(1, 2, 3, 4));
        panel.set_rect(Rect::new(1, 2, 3, 4));
        panel.set_rect(Rect::new(1, 2, 3, 5));

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        // Listener sees the old rect on the panel and the new one in the event
        assert_eq!(events[0].0, Rect::new(0, 0, 15, 10));
        assert_eq!(events[0].1, ChangeEvent::SetRect { x: 1, y: 2, width: 3, height: 4 });
        assert_eq!(events[1].0, Rect::new(1, 2, 3, 4));
        assert_eq!(events[1].1.name(), "set.rect");
    }

    #[test]
    fn test_paste_handler() {
        let mut panel = Panel::new();
        panel.on_paste(&['x']);

        let pasted = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&pasted);
        panel.set_on_paste(move |text: &[char]| sink.borrow_mut().extend(text.iter()));
        panel.on_paste(&['h', 'i']);
        assert_eq!(*pasted.borrow(), "hi");
    }
}
