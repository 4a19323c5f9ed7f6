//! Time keeping for the watch face: text formatting and redraw scheduling

use chrono::{Datelike, NaiveDateTime, Timelike};
use embassy_time::Duration;

use crate::Error;

/// Date text in `DD Mon` form
pub fn format_date<'a>(buf: &'a mut [u8], time: &NaiveDateTime) -> Result<&'a str, Error> {
    format_no_std::show(
        buf,
        format_args!("{:02} {}", time.day(), month_abbreviation(time.month0())),
    )
    .map_err(|_| Error::Format)
}

/// Time text, `H:MM` in ambient mode and `H:MM:SS` in interactive mode
pub fn format_time<'a>(
    buf: &'a mut [u8],
    time: &NaiveDateTime,
    ambient: bool,
) -> Result<&'a str, Error> {
    let (_, hour) = time.hour12();
    let shown = if ambient {
        format_no_std::show(buf, format_args!("{}:{:02}", hour, time.minute()))
    } else {
        format_no_std::show(
            buf,
            format_args!("{}:{:02}:{:02}", hour, time.minute(), time.second()),
        )
    };
    shown.map_err(|_| Error::Format)
}

pub fn am_pm(time: &NaiveDateTime) -> &'static str {
    if time.hour12().0 {
        "PM"
    } else {
        "AM"
    }
}

fn month_abbreviation(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        _ => "Dec",
    }
}

/// Visibility and ambient state as reported by the host
///
/// The host owns the actual timer; the engine decides whether it should be
/// running and how long to wait for the next tick.
#[derive(Debug, Clone)]
pub struct FaceEngine {
    visible: bool,
    ambient: bool,
    low_bit_ambient: bool,
    update_rate: Duration,
}

impl FaceEngine {
    pub fn new(update_rate: Duration) -> Self {
        Self {
            visible: false,
            ambient: false,
            low_bit_ambient: false,
            update_rate,
        }
    }

    /// Record a visibility change. Becoming visible always needs a redraw.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        debug!("Visibility changed: {}", visible);
        self.visible = visible;
        visible
    }

    /// Record an ambient mode change, returning whether the face must be redrawn.
    pub fn set_ambient(&mut self, ambient: bool) -> bool {
        if self.ambient == ambient {
            return false;
        }
        debug!("Ambient mode changed: {}", ambient);
        self.ambient = ambient;
        true
    }

    /// Record the display properties reported by the host
    pub fn set_properties(&mut self, low_bit_ambient: bool) {
        self.low_bit_ambient = low_bit_ambient;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_ambient(&self) -> bool {
        self.ambient
    }

    pub fn low_bit_ambient(&self) -> bool {
        self.low_bit_ambient
    }

    /// The timer only runs while visible and in interactive mode
    pub fn should_timer_run(&self) -> bool {
        self.visible && !self.ambient
    }

    /// Delay until the next whole update interval
    pub fn next_tick_delay(&self, now_ms: u64) -> Duration {
        let rate = self.update_rate.as_millis().max(1);
        Duration::from_millis(rate - now_ms % rate)
    }

    /// Handle a timer tick, returning the delay to re-arm with if the timer
    /// should keep running
    pub fn tick(&self, now_ms: u64) -> Option<Duration> {
        if self.should_timer_run() {
            let delay = self.next_tick_delay(now_ms);
            trace!("Next tick in {} ms", delay.as_millis());
            Some(delay)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 7, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn date_is_zero_padded_day_and_short_month() {
        let mut buf = [0u8; 16];
        assert_eq!(format_date(&mut buf, &at(9, 0, 0)).unwrap(), "04 Jul");
    }

    #[test]
    fn time_drops_seconds_in_ambient() {
        let mut buf = [0u8; 16];
        assert_eq!(format_time(&mut buf, &at(15, 7, 9), false).unwrap(), "3:07:09");
        assert_eq!(format_time(&mut buf, &at(15, 7, 9), true).unwrap(), "3:07");
    }

    #[test]
    fn noon_and_midnight_read_twelve() {
        let mut buf = [0u8; 16];
        assert_eq!(format_time(&mut buf, &at(0, 30, 0), true).unwrap(), "12:30");
        assert_eq!(am_pm(&at(0, 30, 0)), "AM");
        assert_eq!(format_time(&mut buf, &at(12, 30, 0), true).unwrap(), "12:30");
        assert_eq!(am_pm(&at(12, 30, 0)), "PM");
    }

    #[test]
    fn short_buffer_is_a_format_error() {
        let mut buf = [0u8; 3];
        assert_eq!(format_time(&mut buf, &at(10, 0, 0), false), Err(Error::Format));
    }

    #[test]
    fn timer_runs_only_when_visible_and_interactive() {
        let mut engine = FaceEngine::new(Duration::from_secs(1));
        assert!(!engine.should_timer_run());
        assert!(engine.set_visible(true));
        assert!(engine.should_timer_run());
        assert!(engine.set_ambient(true));
        assert!(!engine.should_timer_run());
        assert!(!engine.set_ambient(true));
        assert_eq!(engine.tick(0), None);
    }

    #[test]
    fn tick_aligns_to_next_second() {
        let mut engine = FaceEngine::new(Duration::from_secs(1));
        engine.set_visible(true);
        assert_eq!(engine.next_tick_delay(12_250).as_millis(), 750);
        assert_eq!(engine.next_tick_delay(13_000).as_millis(), 1000);
        assert_eq!(engine.tick(999).map(|d| d.as_millis()), Some(1));
    }
}
