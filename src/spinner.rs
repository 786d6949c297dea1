//! Spinner widget.
//!
//! A spinner cycles through a set of frames. It keeps no clock of its own:
//! whoever drives it calls [`Model::advance_frame`] (or forwards a
//! [`TickMsg`] through [`Model::update`]) and decides when the next frame is
//! due, optionally with help from [`Model::frame_due`]. A stopped spinner
//! ignores frame advances.
//!
//! # Basic Usage
//!
//! ```rust
//! use std::time::Instant;
//! use wizard_widgets::spinner::{new, with_spinner, LINE};
//!
//! let mut spinner = new(&[with_spinner(LINE.clone())]);
//! assert_eq!(spinner.view(), "|");
//! spinner.advance_frame(Instant::now());
//! assert_eq!(spinner.view(), "/");
//!
//! spinner.stop();
//! spinner.advance_frame(Instant::now());
//! assert_eq!(spinner.view(), "/");
//! ```
//!
//! # Named frame sets
//!
//! Frame sets are looked up by name through the style provider, which falls
//! back to the built-in sets (see [`builtin`]):
//!
//! ```rust
//! use wizard_widgets::spinner::{new, with_named};
//!
//! let spinner = new(&[with_named("pulse")]);
//! assert_eq!(spinner.view(), "█");
//! ```

use crate::style::{self, Role, SharedStyle};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames plus the interval between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    /// Frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames; smaller is faster.
    pub fps: Duration,
}

impl Spinner {
    /// Creates a frame set.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

fn frames(glyphs: &[&str], millis: u64) -> Spinner {
    Spinner {
        frames: glyphs.iter().map(|g| g.to_string()).collect(),
        fps: Duration::from_millis(millis),
    }
}

/// `| / - \`
pub static LINE: Lazy<Spinner> = Lazy::new(|| frames(&["|", "/", "-", "\\"], 100));

/// Braille dots.
pub static DOT: Lazy<Spinner> =
    Lazy::new(|| frames(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"], 100));

/// Smaller braille dots.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| {
    frames(
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        83,
    )
});

/// A dot jumping around a braille cell.
pub static JUMP: Lazy<Spinner> =
    Lazy::new(|| frames(&["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"], 100));

/// A dot bouncing down and up.
pub static BOUNCE: Lazy<Spinner> = Lazy::new(|| frames(&["⠁", "⠂", "⠄", "⠂"], 120));

/// Fading block.
pub static PULSE: Lazy<Spinner> = Lazy::new(|| frames(&["█", "▓", "▒", "░"], 125));

/// Three points with one lit.
pub static POINTS: Lazy<Spinner> =
    Lazy::new(|| frames(&["∙∙∙", "●∙∙", "∙●∙", "∙∙●"], 143));

/// Spinning globe.
pub static GLOBE: Lazy<Spinner> = Lazy::new(|| frames(&["🌍", "🌎", "🌏"], 250));

/// Moon phases.
pub static MOON: Lazy<Spinner> = Lazy::new(|| {
    frames(
        &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
        125,
    )
});

/// Filling and draining meter.
pub static METER: Lazy<Spinner> = Lazy::new(|| {
    frames(
        &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▰▰▱", "▰▱▱", "▱▱▱"],
        143,
    )
});

/// Trigrams.
pub static HAMBURGER: Lazy<Spinner> = Lazy::new(|| frames(&["☱", "☲", "☴", "☲"], 333));

/// Growing dots.
pub static ELLIPSIS: Lazy<Spinner> = Lazy::new(|| frames(&["", ".", "..", "..."], 333));

/// Looks up a built-in frame set by name.
///
/// Known names: `dots` (alias `dot`), `line`, `bounce`, `pulse`, `points`,
/// `mini_dot`, `jump`, `globe`, `moon`, `meter`, `hamburger`, `ellipsis`.
pub fn builtin(name: &str) -> Option<&'static Spinner> {
    let spinner: &'static Lazy<Spinner> = match name {
        "dots" | "dot" => &DOT,
        "line" => &LINE,
        "bounce" => &BOUNCE,
        "pulse" => &PULSE,
        "points" => &POINTS,
        "mini_dot" => &MINI_DOT,
        "jump" => &JUMP,
        "globe" => &GLOBE,
        "moon" => &MOON,
        "meter" => &METER,
        "hamburger" => &HAMBURGER,
        "ellipsis" => &ELLIPSIS,
        _ => return None,
    };
    Some(Lazy::force(spinner))
}

/// Asks a spinner to advance one frame.
///
/// An `id` of 0 addresses every spinner.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// When the tick fired.
    pub time: Instant,
    /// Target spinner.
    pub id: i64,
}

/// Configuration applied by [`new`].
pub enum SpinnerOption {
    /// Uses these frames and interval.
    WithSpinner(Spinner),
    /// Uses the frame set the style provider knows under this name.
    WithNamed(String),
    /// Renders through this style provider.
    WithStyles(SharedStyle),
}

impl SpinnerOption {
    fn apply(&self, m: &mut Model) {
        match self {
            SpinnerOption::WithSpinner(spinner) => {
                m.spinner = spinner.clone();
                m.name = None;
            }
            SpinnerOption::WithNamed(name) => m.name = Some(name.clone()),
            SpinnerOption::WithStyles(styles) => m.styles = Some(styles.clone()),
        }
    }
}

/// Sets explicit frames.
pub fn with_spinner(spinner: Spinner) -> SpinnerOption {
    SpinnerOption::WithSpinner(spinner)
}

/// Selects a frame set by name.
pub fn with_named(name: impl Into<String>) -> SpinnerOption {
    SpinnerOption::WithNamed(name.into())
}

/// Attaches a style provider.
pub fn with_styles(styles: SharedStyle) -> SpinnerOption {
    SpinnerOption::WithStyles(styles)
}

/// Spinner state: which frame is showing and whether it is running.
pub struct Model {
    /// Fallback frames, used when no named set resolves.
    pub spinner: Spinner,
    name: Option<String>,
    styles: Option<SharedStyle>,
    frame: usize,
    running: bool,
    last_frame: Option<Instant>,
    id: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// A running spinner with the `line` frames.
    pub fn new() -> Self {
        Self {
            spinner: LINE.clone(),
            name: None,
            styles: None,
            frame: 0,
            running: true,
            last_frame: None,
            id: next_id(),
        }
    }

    /// Builds a spinner from options.
    pub fn new_with_options(opts: &[SpinnerOption]) -> Self {
        let mut m = Self::new();
        for opt in opts {
            opt.apply(&mut m);
        }
        m
    }

    /// Builder form of [`with_spinner`].
    pub fn with_spinner(mut self, spinner: Spinner) -> Self {
        SpinnerOption::WithSpinner(spinner).apply(&mut self);
        self
    }

    /// Builder form of [`with_styles`].
    pub fn with_styles(mut self, styles: SharedStyle) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Unique id used to address [`TickMsg`]s.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Index of the frame on screen.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Frames currently in use.
    pub fn frames(&self) -> Vec<String> {
        self.name
            .as_deref()
            .and_then(|name| style::resolve(&self.styles).spinner_frames(name))
            .unwrap_or_else(|| self.spinner.frames.clone())
    }

    /// Interval between frames.
    pub fn interval(&self) -> Duration {
        self.name
            .as_deref()
            .and_then(builtin)
            .map(|s| s.fps)
            .unwrap_or(self.spinner.fps)
    }

    /// Resumes animation.
    pub fn start(&mut self) {
        if !self.running {
            debug!(id = self.id, "spinner started");
        }
        self.running = true;
    }

    /// Halts animation; frame advances are ignored until [`Model::start`].
    pub fn stop(&mut self) {
        if self.running {
            debug!(id = self.id, frame = self.frame, "spinner stopped");
        }
        self.running = false;
        self.last_frame = None;
    }

    /// Whether the spinner is animating.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Shows the next frame. No-op while stopped.
    pub fn advance_frame(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        let len = self.frames().len();
        self.frame = if len == 0 { 0 } else { (self.frame + 1) % len };
        self.last_frame = Some(now);
    }

    /// Whether a running spinner's interval has passed since its last frame.
    pub fn frame_due(&self, now: Instant) -> bool {
        self.running
            && self
                .last_frame
                .map_or(true, |t| now.saturating_duration_since(t) >= self.interval())
    }

    /// A tick addressed to this spinner.
    pub fn tick_msg(&self, now: Instant) -> TickMsg {
        TickMsg { time: now, id: self.id }
    }

    /// Command delivering one [`TickMsg`] after the interval. The caller
    /// issues it again for every frame it wants.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(self.interval(), move |_| {
            Box::new(TickMsg {
                time: Instant::now(),
                id,
            }) as Msg
        })
    }

    /// Advances on a matching [`TickMsg`]. Never schedules another tick.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if tick.id == 0 || tick.id == self.id {
                self.advance_frame(tick.time);
            }
        }
        None
    }

    /// The current frame, styled.
    pub fn view(&self) -> String {
        let frames = self.frames();
        match frames.get(self.frame) {
            Some(f) => style::resolve(&self.styles).paint(Role::Spinner, f),
            None => String::new(),
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new();
        let cmd = model.tick();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Creates a spinner from options.
pub fn new(opts: &[SpinnerOption]) -> Model {
    Model::new_with_options(opts)
}
