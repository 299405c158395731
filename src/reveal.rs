//! Scroll reveal bookkeeping.
//!
//! The page marks elements that fade in when they scroll into view and
//! language bars whose fills grow to a target width. This module holds the
//! decisions (which delay, which width, whether an element was already
//! handled) so they can be tested without a browser. The DOM side lives in
//! `web::reveal`.

use std::collections::HashSet;

use instant::Duration;

use crate::config::RevealConfig;

/// One scheduled fill of a language bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillStep {
    /// Position of the fill in document order within its bar.
    pub index: usize,
    /// CSS width to apply, e.g. `"85%"`.
    pub width: String,
    pub delay: Duration,
}

/// Reads a leading integer the way browsers read numeric attributes: leading
/// whitespace and a sign are accepted, anything after the digits is ignored.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// The reveal delay of the `index`-th marked item.
///
/// An explicit `data-delay` wins. Without one the items are staggered in
/// steps of `item_step_ms`, starting over every `item_cycle` items. A
/// malformed value counts as 0 and negative values are clamped to 0.
pub fn stagger_delay(attr: Option<&str>, index: usize, config: &RevealConfig) -> Duration {
    match attr {
        None => {
            let slot = index % config.item_cycle.max(1);
            Duration::from_millis(slot as u64 * config.item_step_ms as u64)
        }
        Some(value) => match parse_leading_int(value) {
            Some(ms) => Duration::from_millis(ms.max(0) as u64),
            None => {
                log::warn!("Ignoring malformed data-delay {:?}, using 0", value);
                Duration::ZERO
            }
        },
    }
}

/// The CSS width for a fill's `data-width` percentage. Missing or malformed
/// values give `"0%"`.
pub fn fill_width(attr: Option<&str>) -> String {
    let Some(value) = attr else {
        return "0%".to_string();
    };
    match value.trim().parse::<f64>() {
        Ok(width) if width.is_finite() => format!("{}%", width.max(0.0)),
        _ => {
            log::warn!("Ignoring malformed data-width {:?}, using 0", value);
            "0%".to_string()
        }
    }
}

/// Fills of one bar start `fill_step_ms` apart in document order.
pub fn fill_delay(index: usize, config: &RevealConfig) -> Duration {
    Duration::from_millis(index as u64 * config.fill_step_ms as u64)
}

/// The element selector an in-page link scrolls to, `None` for links that do
/// not name a target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

/// Registered items and bars, and which of them were already revealed.
///
/// Every item and every bar is acted on at most once. Later visibility
/// changes of a revealed element are ignored.
#[derive(Clone, Debug, Default)]
pub struct RevealController {
    config: RevealConfig,
    item_delays: Vec<Duration>,
    bars: Vec<Vec<String>>,
    revealed_items: HashSet<usize>,
    filled_bars: HashSet<usize>,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Registers the next item in document order and returns its delay.
    pub fn add_item(&mut self, delay_attr: Option<&str>) -> Duration {
        let delay = stagger_delay(delay_attr, self.item_delays.len(), &self.config);
        self.item_delays.push(delay);
        delay
    }

    /// Registers the next bar with the `data-width` of each of its fills.
    /// Returns the bar's index.
    pub fn add_bar<'a>(&mut self, width_attrs: impl IntoIterator<Item = Option<&'a str>>) -> usize {
        let widths = width_attrs.into_iter().map(fill_width).collect();
        self.bars.push(widths);
        self.bars.len() - 1
    }

    pub fn item_count(&self) -> usize {
        self.item_delays.len()
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Item `index` is now `ratio` visible. Returns the delay after which it
    /// should be shown, the first time it reaches the item threshold.
    pub fn on_item_visibility(&mut self, index: usize, ratio: f64) -> Option<Duration> {
        let delay = *self.item_delays.get(index)?;
        if ratio < self.config.item_threshold || !self.revealed_items.insert(index) {
            return None;
        }
        Some(delay)
    }

    /// Bar `index` is now `ratio` visible. Returns its fill schedule the
    /// first time it reaches the bar threshold.
    pub fn on_bar_visibility(&mut self, index: usize, ratio: f64) -> Option<Vec<FillStep>> {
        let widths = self.bars.get(index)?;
        if ratio < self.config.bar_threshold || !self.filled_bars.insert(index) {
            return None;
        }
        Some(
            widths
                .iter()
                .enumerate()
                .map(|(i, width)| FillStep {
                    index: i,
                    width: width.clone(),
                    delay: fill_delay(i, &self.config),
                })
                .collect(),
        )
    }
}
