//! Tick-driven scheduler deciding when to post rate updates.
//!
//! Each tick runs to completion before the next sleep starts: fetch the listing,
//! diff it against the last delivered snapshot, pick at most one trigger, notify,
//! then persist.

use std::time::Duration;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use tracing::{debug, error, info, warn};

use crate::client::Notifier;
use crate::db::StateStore;
use crate::error::Result;
use crate::service::format;
use crate::service::rate::{self, RateProvider, RateSnapshot};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}

pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.tz)
    }
}

/// Trading hours in the market's local time.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    pub open_hour: u32,
    pub close_hour: u32,
    pub rest_day: Weekday,
    pub report_minute: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            open_hour: 9,
            close_hour: 17,
            rest_day: Weekday::Fri,
            report_minute: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    MarketOpen,
    MarketClose,
    RateChange,
    HourlyReport,
}

impl Trigger {
    pub fn title(&self) -> &'static str {
        match self {
            Trigger::MarketOpen => "🟢 بازار باز شد",
            Trigger::MarketClose => "🔴 بازار بسته شد",
            Trigger::RateChange => "📈 تغییر نرخ",
            Trigger::HourlyReport => "📊 نرخ کامل ساعتی",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    pub last_open_sent: bool,
    pub last_close_sent: bool,
    pub last_hour_report: Option<u32>,
}

impl State {
    /// First matching trigger in priority order.
    pub fn decide(
        &self,
        schedule: &Schedule,
        hour: u32,
        minute: u32,
        has_changes: bool,
    ) -> Option<Trigger> {
        let trading = schedule.open_hour <= hour && hour < schedule.close_hour;

        if hour == schedule.open_hour && !self.last_open_sent {
            Some(Trigger::MarketOpen)
        } else if hour == schedule.close_hour && !self.last_close_sent {
            Some(Trigger::MarketClose)
        } else if trading && has_changes {
            Some(Trigger::RateChange)
        } else if schedule.open_hour <= hour
            && hour + 1 < schedule.close_hour
            && minute == schedule.report_minute
            && self.last_hour_report != Some(hour)
        {
            Some(Trigger::HourlyReport)
        } else {
            None
        }
    }

    fn apply(&mut self, trigger: Trigger, hour: u32) {
        match trigger {
            Trigger::MarketOpen => {
                self.last_open_sent = true;
                self.last_close_sent = false;
                self.last_hour_report = None;
            }
            Trigger::MarketClose => {
                self.last_close_sent = true;
                self.last_open_sent = false;
            }
            Trigger::RateChange => {}
            Trigger::HourlyReport => self.last_hour_report = Some(hour),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    RestDay,
    NoData,
    Idle,
    Notified(Trigger),
    DeliveryFailed(Trigger),
}

pub struct Monitor<R, S, N, C> {
    provider: R,
    store: S,
    notifier: N,
    clock: C,
    schedule: Schedule,
    state: State,
    /// Delivered snapshot the store failed to persist.
    unsaved: Option<RateSnapshot>,
}

impl<R, S, N, C> Monitor<R, S, N, C>
where
    R: RateProvider,
    S: StateStore,
    N: Notifier,
    C: Clock,
{
    pub fn new(provider: R, store: S, notifier: N, clock: C) -> Self {
        Self {
            provider,
            store,
            notifier,
            clock,
            schedule: Schedule::default(),
            state: State::default(),
            unsaved: None,
        }
    }

    /// Polls forever, sleeping a fixed `interval` after every tick.
    pub async fn run(mut self, interval: Duration) {
        info!("monitor started, ticking every {}s", interval.as_secs());

        loop {
            match self.tick().await {
                Ok(outcome) => debug!("tick finished: {outcome:?}"),
                Err(err) => error!("tick abandoned: {err}"),
            }

            tokio::time::sleep(interval).await;
        }
    }

    pub async fn tick(&mut self) -> Result<Tick> {
        let now = self.clock.now();

        if now.weekday() == self.schedule.rest_day {
            return Ok(Tick::RestDay);
        }

        let Some(current) = self.provider.fetch().await else {
            return Ok(Tick::NoData);
        };

        let previous = match self.unsaved.take() {
            Some(delivered) => {
                if let Err(err) = self.store.save(&delivered).await {
                    warn!("delivered rates still not persisted: {err}");
                    self.unsaved = Some(delivered.clone());
                }
                delivered
            }
            None => self.store.load().await?,
        };
        let changed = rate::compare(&previous, &current);

        let removed = rate::removed(&previous, &current);
        if !removed.is_empty() {
            debug!("currencies missing from listing: {}", removed.join(", "));
        }

        let (hour, minute) = (now.hour(), now.minute());
        let has_changes = !changed.is_empty();
        let Some(trigger) = self.state.decide(&self.schedule, hour, minute, has_changes) else {
            return Ok(Tick::Idle);
        };

        let body = match trigger {
            Trigger::RateChange => &changed,
            _ => &current,
        };
        let msg = format::render(body, trigger.title(), &now);

        if let Err(err) = self.notifier.notify(&msg).await {
            warn!("{trigger:?} not delivered: {err}");
            return Ok(Tick::DeliveryFailed(trigger));
        }

        info!("{trigger:?} delivered with {} rates", body.len());
        self.state.apply(trigger, hour);

        if let Err(err) = self.store.save(&current).await {
            self.unsaved = Some(current);
            return Err(err);
        }

        Ok(Tick::Notified(trigger))
    }
}
