//! Main screen layout and label refresh
//!
//! The screen is three horizontal bands:
//!
//! ```text
//!   0 ┌──────────────┬──────────────┬──────────────┐
//!     │ Ult Cooldowns│  Tormentor   │   Buybacks   │  tab bar
//!  40 ├──────────────┴──────────────┴──────────────┤
//!     │ Hero #1: 07:42                             │
//!     │ ...                                        │  body (Buybacks tab)
//! 270 ├────────────────────────────────────────────┤
//!     │          In-game Timer: 12:03              │  footer
//! 320 └────────────────────────────────────────────┘
//! ```
//!
//! Each band has its own refresh period. When a period elapses the label
//! text is rebuilt from the session and the band is redrawn only if the
//! text changed. Bands are rendered strip by strip through a
//! [`StripBuffer`] and pushed out with a [`FlushTarget`].

use core::convert::Infallible;

use cooldown_core::config::{DisplayConfig, HERO_COUNT, HOR_RES};
use cooldown_core::session::{footer_label, hero_label, Label, SessionState, Tab};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use super::strip::StripBuffer;
use super::surface::FlushTarget;
use super::window::PixelWindow;

/// Lines per render strip
pub const STRIP_LINES: u16 = 32;

/// Pixels per render strip
pub const STRIP_PIXELS: usize = HOR_RES as usize * STRIP_LINES as usize;

/// Strip buffer sized for the screen
pub type UiStrip = StripBuffer<STRIP_PIXELS>;

const HEADER_Y: u16 = 0;
const HEADER_HEIGHT: u16 = 40;
const BODY_Y: u16 = 40;
const BODY_HEIGHT: u16 = 230;
const FOOTER_Y: u16 = 270;
const FOOTER_HEIGHT: u16 = 50;

const HERO_ROW_Y: u16 = 45;
const HERO_ROW_HEIGHT: u16 = 44;
const TEXT_MARGIN: i32 = 16;

const FILLER_TEXT: &str = "Filler Text\nReserved for later use.";

/// Screen background, the colour the panel is cleared to at boot
pub const BACKGROUND: Rgb565 = Rgb565::new(0x08, 0x28, 0x04);

/// Periodic deadline on the monotonic millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTimer {
    period_ms: u32,
    next_ms: u64,
}

impl RefreshTimer {
    /// Create a timer that is due immediately
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            next_ms: 0,
        }
    }

    /// Check the deadline, rearming it one period from `now_ms` when due
    pub fn due(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_ms {
            return false;
        }
        self.next_ms = now_ms + self.period_ms as u64;
        true
    }
}

/// Main screen state: what is on the glass and when to look again
pub struct Ui {
    tab_timer: RefreshTimer,
    hero_timer: RefreshTimer,
    footer_timer: RefreshTimer,
    tab: Option<Tab>,
    heroes: [Option<Label>; HERO_COUNT],
    footer: Option<Label>,
}

impl Ui {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            tab_timer: RefreshTimer::new(config.tab_refresh_ms),
            hero_timer: RefreshTimer::new(config.hero_refresh_ms),
            footer_timer: RefreshTimer::new(config.footer_refresh_ms),
            tab: None,
            heroes: Default::default(),
            footer: None,
        }
    }

    /// Run the refresh timers and redraw what changed
    ///
    /// Returns the number of flushes issued.
    pub async fn service<T, const N: usize>(
        &mut self,
        now_ms: u64,
        state: &SessionState,
        strip: &mut StripBuffer<N>,
        target: &mut T,
    ) -> Result<usize, T::Error>
    where
        T: FlushTarget,
    {
        let mut flushes = 0;

        if self.tab_timer.due(now_ms) && self.tab != Some(state.active_tab()) {
            let tab = state.active_tab();
            self.tab = Some(tab);
            flushes += draw_band(strip, target, HEADER_Y, HEADER_HEIGHT, |s| {
                paint_header(s, tab)
            })
            .await?;

            let labels = hero_labels(state);
            flushes += draw_band(strip, target, BODY_Y, BODY_HEIGHT, |s| {
                paint_body(s, tab, &labels)
            })
            .await?;
            self.heroes = labels.map(Some);
        }

        if self.hero_timer.due(now_ms) && self.tab == Some(Tab::Buybacks) {
            for (index, label) in hero_labels(state).into_iter().enumerate() {
                if self.heroes[index].as_ref() == Some(&label) {
                    continue;
                }
                let y = hero_row_y(index);
                flushes += draw_band(strip, target, y, HERO_ROW_HEIGHT, |s| {
                    paint_hero_row(s, index, &label)
                })
                .await?;
                self.heroes[index] = Some(label);
            }
        }

        if self.footer_timer.due(now_ms) {
            let label = footer_label(state);
            if self.footer.as_ref() != Some(&label) {
                flushes += draw_band(strip, target, FOOTER_Y, FOOTER_HEIGHT, |s| {
                    paint_footer(s, &label)
                })
                .await?;
                self.footer = Some(label);
            }
        }

        Ok(flushes)
    }
}

fn hero_labels(state: &SessionState) -> [Label; HERO_COUNT] {
    core::array::from_fn(|index| hero_label(state, index))
}

fn hero_row_y(index: usize) -> u16 {
    HERO_ROW_Y + index as u16 * HERO_ROW_HEIGHT
}

/// Render a full-width band strip by strip and flush each strip
async fn draw_band<T, const N: usize, F>(
    strip: &mut StripBuffer<N>,
    target: &mut T,
    y: u16,
    height: u16,
    mut paint: F,
) -> Result<usize, T::Error>
where
    T: FlushTarget,
    F: FnMut(&mut StripBuffer<N>) -> Result<(), Infallible>,
{
    let lines_per_strip = (N / HOR_RES as usize).clamp(1, u16::MAX as usize) as u16;
    let bottom = y + height;
    let mut top = y;
    let mut flushes = 0;

    while top < bottom {
        let lines = (bottom - top).min(lines_per_strip);
        let Some(window) = PixelWindow::from_origin(0, top, HOR_RES, lines) else {
            break;
        };
        if !strip.set_window(window) {
            break;
        }
        strip.fill(BACKGROUND);
        if let Err(never) = paint(strip) {
            match never {}
        }
        let _ready = target.flush(&window, strip.pixels()).await?;
        flushes += 1;
        top += lines;
    }
    Ok(flushes)
}

fn text<D>(
    target: &mut D,
    content: &str,
    position: Point,
    font: &'static MonoFont<'static>,
    color: Rgb565,
    alignment: Alignment,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(font, color);
    let layout = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(content, position, style, layout).draw(target)?;
    Ok(())
}

fn paint_header<D>(target: &mut D, active: Tab) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let width = HOR_RES as u32 / Tab::ALL.len() as u32;
    for tab in Tab::ALL {
        let left = (tab.index() as u32 * width) as i32;
        let selected = tab == active;
        let (fill, ink) = if selected {
            (Rgb565::WHITE, Rgb565::BLACK)
        } else {
            (BACKGROUND, Rgb565::WHITE)
        };
        Rectangle::new(
            Point::new(left, HEADER_Y as i32),
            Size::new(width, HEADER_HEIGHT as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(target)?;
        text(
            target,
            tab.title(),
            Point::new(left + width as i32 / 2, HEADER_Y as i32 + 11),
            &FONT_9X18_BOLD,
            ink,
            Alignment::Center,
        )?;
    }
    Ok(())
}

fn paint_body<D>(
    target: &mut D,
    tab: Tab,
    heroes: &[Label; HERO_COUNT],
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match tab {
        Tab::Buybacks => {
            for (index, label) in heroes.iter().enumerate() {
                paint_hero_row(target, index, label)?;
            }
            Ok(())
        }
        Tab::UltCooldowns | Tab::Tormentor => text(
            target,
            FILLER_TEXT,
            Point::new(TEXT_MARGIN, BODY_Y as i32 + TEXT_MARGIN),
            &FONT_10X20,
            Rgb565::WHITE,
            Alignment::Left,
        ),
    }
}

fn paint_hero_row<D>(target: &mut D, index: usize, label: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    text(
        target,
        label,
        Point::new(TEXT_MARGIN, hero_row_y(index) as i32 + 12),
        &FONT_10X20,
        Rgb565::WHITE,
        Alignment::Left,
    )
}

fn paint_footer<D>(target: &mut D, label: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(0, FOOTER_Y as i32),
        Size::new(HOR_RES as u32, FOOTER_HEIGHT as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
    .draw(target)?;
    text(
        target,
        label,
        Point::new(HOR_RES as i32 / 2, FOOTER_Y as i32 + 5),
        &FONT_10X20,
        Rgb565::BLACK,
        Alignment::Center,
    )
}

/// Raw RGB565 value of the screen background
pub fn background_raw() -> u16 {
    RawU16::from(BACKGROUND).into_inner()
}
