//! Progress bar widget.
//!
//! The bar holds a target percentage in `[0, 1]` and a displayed percentage
//! that follows the target on a damped spring. The caller drives the spring
//! with [`Model::advance_frame`] (or by forwarding [`FrameMsg`]s) for as long
//! as [`Model::is_animating`] reports true.
//!
//! ```rust
//! use wizard_widgets::progress::{new, with_width, without_percentage};
//!
//! let mut bar = new(&[with_width(10), without_percentage()]);
//! bar.set_percent(0.5);
//! while bar.is_animating() {
//!     bar.advance_frame();
//! }
//! assert_eq!(bar.view(), "█████░░░░░");
//! ```

use crate::style::{self, Role, SharedStyle};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

const FPS: u32 = 60;
const DEFAULT_WIDTH: usize = 40;
const DEFAULT_FREQUENCY: f64 = 18.0;
const DEFAULT_DAMPING: f64 = 1.0;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Configuration applied by [`new`].
pub enum ProgressOption {
    /// Total width in columns, label included.
    WithWidth(usize),
    /// Glyphs for the filled and empty parts.
    WithFillCharacters(char, char),
    /// Hides the percentage label.
    WithoutPercentage,
    /// Spring frequency and damping.
    WithSpringOptions(f64, f64),
    /// Renders through this style provider.
    WithStyles(SharedStyle),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithWidth(w) => m.width = *w,
            ProgressOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressOption::WithoutPercentage => m.show_percentage = false,
            ProgressOption::WithSpringOptions(frequency, damping) => {
                m.set_spring_options(*frequency, *damping)
            }
            ProgressOption::WithStyles(styles) => m.styles = Some(styles.clone()),
        }
    }
}

/// Sets the total width.
pub fn with_width(w: usize) -> ProgressOption {
    ProgressOption::WithWidth(w)
}

/// Sets the filled and empty glyphs.
pub fn with_fill_characters(full: char, empty: char) -> ProgressOption {
    ProgressOption::WithFillCharacters(full, empty)
}

/// Hides the percentage label.
pub fn without_percentage() -> ProgressOption {
    ProgressOption::WithoutPercentage
}

/// Tunes the animation. Higher frequency is faster, higher damping is
/// less bouncy.
pub fn with_spring_options(frequency: f64, damping: f64) -> ProgressOption {
    ProgressOption::WithSpringOptions(frequency, damping)
}

/// Attaches a style provider.
pub fn with_styles(styles: SharedStyle) -> ProgressOption {
    ProgressOption::WithStyles(styles)
}

/// Asks a progress bar to advance its animation by one frame.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    id: i64,
}

#[derive(Debug, Clone)]
struct Spring {
    frequency: f64,
    damping: f64,
    fps: f64,
}

impl Spring {
    fn new(fps: f64, frequency: f64, damping: f64) -> Self {
        Self {
            frequency,
            damping,
            fps,
        }
    }

    fn update(&self, position: f64, velocity: f64, target: f64) -> (f64, f64) {
        let dt = 1.0 / self.fps;
        let spring_force = -self.frequency * (position - target);
        let damping_force = -self.damping * velocity;
        let acceleration = spring_force + damping_force;

        let new_velocity = velocity + acceleration * dt;
        let new_position = position + new_velocity * dt;

        (new_position, new_velocity)
    }
}

/// Progress bar state.
#[derive(Clone)]
pub struct Model {
    id: i64,
    /// Total width in columns, label included.
    pub width: usize,
    /// Filled glyph.
    pub full: char,
    /// Empty glyph.
    pub empty: char,
    /// Whether to show the percentage label.
    pub show_percentage: bool,
    styles: Option<SharedStyle>,
    target: f64,
    shown: f64,
    velocity: f64,
    spring: Spring,
}

/// Creates a progress bar from options.
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        width: DEFAULT_WIDTH,
        full: '█',
        empty: '░',
        show_percentage: true,
        styles: None,
        target: 0.0,
        shown: 0.0,
        velocity: 0.0,
        spring: Spring::new(FPS as f64, DEFAULT_FREQUENCY, DEFAULT_DAMPING),
    };
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

impl Model {
    /// Replaces the spring parameters.
    pub fn set_spring_options(&mut self, frequency: f64, damping: f64) {
        self.spring = Spring::new(FPS as f64, frequency, damping);
    }

    /// Target percentage.
    pub fn percent(&self) -> f64 {
        self.target
    }

    /// Percentage currently drawn.
    pub fn shown_percent(&self) -> f64 {
        self.shown
    }

    /// Sets the target, clamped to `[0, 1]`.
    pub fn set_percent(&mut self, p: f64) {
        self.target = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    }

    /// Raises the target by `v`.
    pub fn incr_percent(&mut self, v: f64) {
        self.set_percent(self.target + v);
    }

    /// Lowers the target by `v`.
    pub fn decr_percent(&mut self, v: f64) {
        self.set_percent(self.target - v);
    }

    /// Whether the drawn percentage still differs from the target.
    pub fn is_animating(&self) -> bool {
        let dist = (self.shown - self.target).abs();
        !(dist < 0.001 && self.velocity.abs() < 0.01)
    }

    /// Moves the drawn percentage one spring step towards the target,
    /// snapping once it settles.
    pub fn advance_frame(&mut self) {
        if !self.is_animating() {
            self.shown = self.target;
            self.velocity = 0.0;
            return;
        }
        let (position, velocity) = self.spring.update(self.shown, self.velocity, self.target);
        self.shown = position;
        self.velocity = velocity;
        if !self.is_animating() {
            self.shown = self.target;
            self.velocity = 0.0;
        }
    }

    /// A frame message addressed to this bar.
    pub fn frame_msg(&self) -> FrameMsg {
        FrameMsg { id: self.id }
    }

    /// Command delivering one [`FrameMsg`] a frame from now.
    pub fn next_frame(&self) -> Cmd {
        let id = self.id;
        let duration = Duration::from_nanos(1_000_000_000 / FPS as u64);
        bubbletea_tick(duration, move |_| Box::new(FrameMsg { id }) as Msg)
    }

    /// Advances on a matching [`FrameMsg`]. Never schedules another frame.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            if frame.id == self.id {
                self.advance_frame();
            }
        }
        None
    }

    /// Renders the drawn percentage.
    pub fn view(&self) -> String {
        self.view_as(self.shown)
    }

    /// Renders an arbitrary percentage without touching state.
    pub fn view_as(&self, percent: f64) -> String {
        let style = style::resolve(&self.styles);
        let percent = percent.clamp(0.0, 1.0);
        let label = if self.show_percentage {
            format!(" {:3.0}%", percent * 100.0)
        } else {
            String::new()
        };

        let bar_width = self.width.saturating_sub(style.display_width(&label));
        let filled = ((bar_width as f64) * percent).round() as usize;
        let filled = filled.min(bar_width);

        let mut out = String::new();
        out.push_str(&style.paint(Role::Success, &self.full.to_string().repeat(filled)));
        out.push_str(&style.paint(
            Role::Muted,
            &self.empty.to_string().repeat(bar_width - filled),
        ));
        out.push_str(&style.paint(Role::Primary, &label));
        out
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(&[]), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(bar: &mut Model) -> usize {
        let mut frames = 0;
        while bar.is_animating() && frames < 10_000 {
            bar.advance_frame();
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_defaults() {
        let bar = new(&[]);
        assert_eq!(bar.width, DEFAULT_WIDTH);
        assert_eq!(bar.percent(), 0.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_percent_is_clamped() {
        let mut bar = new(&[]);
        bar.set_percent(1.7);
        assert_eq!(bar.percent(), 1.0);
        bar.decr_percent(2.0);
        assert_eq!(bar.percent(), 0.0);
        bar.incr_percent(0.25);
        bar.incr_percent(0.25);
        assert!((bar.percent() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut bar = new(&[]);
        bar.set_percent(0.8);
        assert!(bar.is_animating());
        bar.advance_frame();
        assert!(bar.shown_percent() > 0.0);
        let frames = settle(&mut bar);
        assert!(frames < 10_000);
        assert_eq!(bar.shown_percent(), 0.8);
    }

    #[test]
    fn test_view_as_fills_proportionally() {
        let bar = new(&[with_width(10), without_percentage()]);
        assert_eq!(bar.view_as(0.0), "░░░░░░░░░░");
        assert_eq!(bar.view_as(0.5), "█████░░░░░");
        assert_eq!(bar.view_as(1.0), "██████████");
    }

    #[test]
    fn test_view_with_label() {
        let bar = new(&[with_width(14), with_fill_characters('#', '.')]);
        assert_eq!(bar.view_as(0.5), "#####....  50%");
    }

    #[test]
    fn test_update_ignores_foreign_frames() {
        let mut a = new(&[]);
        let b = new(&[]);
        a.set_percent(1.0);
        assert!(a.update(Box::new(b.frame_msg())).is_none());
        assert_eq!(a.shown_percent(), 0.0);
        a.update(Box::new(a.frame_msg()));
        assert!(a.shown_percent() > 0.0);
    }
}
