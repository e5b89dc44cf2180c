// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image carousel.
//!
//! A carousel cycles through `total_images` slides, 1-based. It is driven by
//! six kinds of input, all reduced to "step forward", "step backward" or
//! "jump to p":
//!
//! | input | effect |
//! |---|---|
//! | timer tick | forward |
//! | `ArrowRight` / next control / click in right 20% | forward |
//! | `ArrowLeft` / previous control / click in left 20% | backward |
//! | click in the middle 60% | none |
//! | dot `p` | jump to `p` |
//! | touch end more than 50px left / right of its start | forward / backward |
//!
//! [`Carousel`] is the pure state machine. [`CarouselMount`] owns one plus the
//! timer and viewport subscriptions it needs while mounted, and releases them
//! when dropped.
//!
//! The auto-advance timer is one-shot and re-armed after every index change,
//! so manual navigation restarts the interval. A timer that fires after it
//! was replaced is recognized by its token and ignored.
//!
//! Key events come from the whole viewport: with several carousels mounted,
//! every one of them reacts to the arrow keys.

mod gesture;
mod index;
mod mount;
mod view;

pub use gesture::{CLICK_ZONE_FRACTION, SWIPE_THRESHOLD, SwipeTracker, click_zone};
pub use index::{CarouselState, Direction};
pub use mount::CarouselMount;
pub use view::{
    ACTION_ATTR, DOT_ATTR, IMAGE_ATTR, NEXT_ACTION, PREVIOUS_ACTION, ROOT_ATTR, delegated_input, view,
};

use alloc::borrow::Cow;
use alloc::string::{String, ToString as _};

use kurbo::{Point, Rect};

use crate::backend::Key;
use crate::error::ConfigError;
use crate::site::SiteConfig;
use crate::time::Duration;

/// Auto-advance interval used when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Where touch gestures are listened for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TouchScope {
    /// Touches anywhere in the viewport swipe this carousel.
    #[default]
    Viewport,
    /// Only touches on the carousel element itself.
    Element,
}

/// Static description of one carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Number of slides; at least 1.
    pub total_images: usize,
    /// Auto-advance interval.
    pub interval: Duration,
    /// Image path with `{index}` and optional `{ext}` placeholders,
    /// e.g. `images/street/street_{index}.{ext}`.
    pub path_template: Cow<'static, str>,
    /// File extension substituted for `{ext}`.
    pub extension: Cow<'static, str>,
    /// Alt text; the slide number is appended.
    pub alt_text: Cow<'static, str>,
    /// Where swipes are detected.
    pub touch_scope: TouchScope,
}

impl CarouselConfig {
    /// A carousel over `total_images` files matching `path_template`, with
    /// default interval, `jpg` extension and viewport-wide touch.
    #[must_use]
    pub fn new(path_template: impl Into<Cow<'static, str>>, total_images: usize) -> Self {
        Self {
            total_images,
            interval: DEFAULT_INTERVAL,
            path_template: path_template.into(),
            extension: Cow::Borrowed("jpg"),
            alt_text: Cow::Borrowed(""),
            touch_scope: TouchScope::Viewport,
        }
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<Cow<'static, str>>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the alt text.
    #[must_use]
    pub fn with_alt_text(mut self, alt: impl Into<Cow<'static, str>>) -> Self {
        self.alt_text = alt.into();
        self
    }

    /// Sets the touch scope.
    #[must_use]
    pub fn with_touch_scope(mut self, scope: TouchScope) -> Self {
        self.touch_scope = scope;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_images == 0 {
            return Err(ConfigError::NoImages);
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !self.path_template.contains("{index}") {
            return Err(ConfigError::MissingIndexPlaceholder);
        }
        Ok(())
    }

    /// Image path for a 1-based `index`, resolved against the site base.
    #[must_use]
    pub fn image_source(&self, index: usize, site: &SiteConfig) -> String {
        let path = self
            .path_template
            .replace("{index}", &index.to_string())
            .replace("{ext}", &self.extension);
        site.asset_url(&path)
    }
}

/// What caused a [`Transition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionCause {
    /// Auto-advance timer.
    Timer,
    /// Arrow key.
    Key,
    /// Previous/next control.
    Control,
    /// Click in a side zone.
    ClickZone,
    /// Dot indicator.
    Dot,
    /// Touch swipe.
    Swipe,
}

/// A slide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// 1-based index before.
    pub from: usize,
    /// 1-based index after.
    pub to: usize,
    /// What triggered it.
    pub cause: TransitionCause,
}

/// Input to [`Carousel::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselInput {
    /// Auto-advance.
    Tick,
    /// Key press.
    Key(Key),
    /// Next control.
    Next,
    /// Previous control.
    Previous,
    /// Click at `point` on a carousel occupying `bounds`.
    Click {
        /// Click position.
        point: Point,
        /// Carousel bounds in the same coordinate space.
        bounds: Rect,
    },
    /// Dot indicator for 1-based position.
    Dot(usize),
    /// Touch began at horizontal coordinate `x`.
    TouchStart {
        /// Horizontal coordinate.
        x: f64,
    },
    /// Touch ended at horizontal coordinate `x`.
    TouchEnd {
        /// Horizontal coordinate.
        x: f64,
    },
}

/// The carousel state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    config: CarouselConfig,
    state: CarouselState,
    swipe: SwipeTracker,
}

impl Carousel {
    /// Validates `config` and starts at slide 1.
    pub fn new(config: CarouselConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = CarouselState::new(config.total_images)?;
        Ok(Self {
            config,
            state,
            swipe: SwipeTracker::new(),
        })
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// 1-based current index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.state.current()
    }

    /// Number of slides.
    #[must_use]
    pub fn total(&self) -> usize {
        self.state.total()
    }

    /// Source of the current slide.
    #[must_use]
    pub fn current_source(&self, site: &SiteConfig) -> String {
        self.config.image_source(self.current(), site)
    }

    /// Applies one input. Returns the transition if the index changed.
    pub fn handle(&mut self, input: CarouselInput) -> Option<Transition> {
        let from = self.current();
        let cause = match input {
            CarouselInput::Tick => {
                self.state.step(Direction::Forward);
                TransitionCause::Timer
            }
            CarouselInput::Key(Key::ArrowRight) => {
                self.state.step(Direction::Forward);
                TransitionCause::Key
            }
            CarouselInput::Key(Key::ArrowLeft) => {
                self.state.step(Direction::Backward);
                TransitionCause::Key
            }
            CarouselInput::Key(Key::Other) => return None,
            CarouselInput::Next => {
                self.state.step(Direction::Forward);
                TransitionCause::Control
            }
            CarouselInput::Previous => {
                self.state.step(Direction::Backward);
                TransitionCause::Control
            }
            CarouselInput::Click { point, bounds } => {
                self.state.step(click_zone(point, bounds)?);
                TransitionCause::ClickZone
            }
            CarouselInput::Dot(position) => {
                if !self.state.go_to(position) {
                    return None;
                }
                TransitionCause::Dot
            }
            CarouselInput::TouchStart { x } => {
                self.swipe.begin(x);
                return None;
            }
            CarouselInput::TouchEnd { x } => {
                self.state.step(self.swipe.end(x)?);
                TransitionCause::Swipe
            }
        };
        let to = self.current();
        (to != from).then_some(Transition { from, to, cause })
    }
}
