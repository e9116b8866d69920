//! Dashboard page: profile, cards and charts.
//!
//! ARCHITECTURE
//! ============
//! Every component loads on its own. `load_once` runs all loaders
//! concurrently a single time (one-shot rendering); `mount` gives each
//! component a poller, refreshing the invested and change cards on the
//! configured interval and loading the others once.

use std::time::Duration;

use crate::components::allocation_chart::{self, AllocationChart};
use crate::components::change_card::{self, ChangeCard};
use crate::components::history_chart::{self, HistoryChart};
use crate::components::invested_card::{self, InvestedCard};
use crate::components::profile_card::{self, ProfileCard};
use crate::components::summary_card::{self, SummaryCard};
use crate::components::total_summary::{self, TotalSummary};
use crate::components::today_utc;
use crate::config::ClientConfig;
use crate::net::api::PeaApi;
use crate::net::types::Period;
use crate::poll::{Poller, Schedule, spawn_poller};
use crate::state::loadable::Loadable;
use crate::util::metrics::ZeroDivisionPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub period: Period,
    pub poll_interval: Duration,
    pub policy: ZeroDivisionPolicy,
}

impl DashboardOptions {
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self { period: Period::default(), poll_interval: config.poll_interval, policy: config.zero_division }
    }
}

/// Point-in-time state of every dashboard component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub profile: Loadable<ProfileCard>,
    pub total: Loadable<TotalSummary>,
    pub summary: Loadable<SummaryCard>,
    pub invested: Loadable<InvestedCard>,
    pub change: Loadable<ChangeCard>,
    pub allocation: Loadable<AllocationChart>,
    pub history: Loadable<HistoryChart>,
}

/// Load every component once, concurrently. Failures leave that component
/// in `Loading` and are logged.
pub async fn load_once(api: &PeaApi, options: &DashboardOptions) -> DashboardSnapshot {
    let today = today_utc();
    let policy = options.policy;
    let (profile, total, summary, invested, change, allocation, history) = tokio::join!(
        profile_card::load(api),
        total_summary::load(api, today),
        summary_card::load(api, policy),
        invested_card::load(api, today, policy),
        change_card::load(api, today, policy),
        allocation_chart::load(api, policy),
        history_chart::load(api, options.period, policy),
    );
    DashboardSnapshot {
        profile: Loadable::Loading.apply("profile_card", profile),
        total: Loadable::Loading.apply("total_summary", total),
        summary: Loadable::Loading.apply("summary_card", summary),
        invested: Loadable::Loading.apply("invested_card", invested),
        change: Loadable::Loading.apply("change_card", change),
        allocation: Loadable::Loading.apply("allocation_chart", allocation),
        history: Loadable::Loading.apply("history_chart", history),
    }
}

/// Mounted dashboard; dropping it stops every poller.
#[derive(Debug)]
pub struct LiveDashboard {
    api: PeaApi,
    options: DashboardOptions,
    profile: Poller<ProfileCard>,
    total: Poller<TotalSummary>,
    summary: Poller<SummaryCard>,
    invested: Poller<InvestedCard>,
    change: Poller<ChangeCard>,
    allocation: Poller<AllocationChart>,
    history: Poller<HistoryChart>,
}

/// Mount the dashboard. Must be called from within a tokio runtime.
#[must_use]
pub fn mount(api: &PeaApi, options: DashboardOptions) -> LiveDashboard {
    let policy = options.policy;
    let every = Schedule::Every(options.poll_interval);

    let profile = {
        let api = api.clone();
        spawn_poller("profile_card", Schedule::Once, move || {
            let api = api.clone();
            async move { profile_card::load(&api).await }
        })
    };
    let total = {
        let api = api.clone();
        spawn_poller("total_summary", Schedule::Once, move || {
            let api = api.clone();
            async move { total_summary::load(&api, today_utc()).await }
        })
    };
    let summary = {
        let api = api.clone();
        spawn_poller("summary_card", Schedule::Once, move || {
            let api = api.clone();
            async move { summary_card::load(&api, policy).await }
        })
    };
    let invested = {
        let api = api.clone();
        spawn_poller("invested_card", every, move || {
            let api = api.clone();
            async move { invested_card::load(&api, today_utc(), policy).await }
        })
    };
    let change = {
        let api = api.clone();
        spawn_poller("change_card", every, move || {
            let api = api.clone();
            async move { change_card::load(&api, today_utc(), policy).await }
        })
    };
    let allocation = {
        let api = api.clone();
        spawn_poller("allocation_chart", Schedule::Once, move || {
            let api = api.clone();
            async move { allocation_chart::load(&api, policy).await }
        })
    };
    let history = mount_history(api, options.period, policy);

    LiveDashboard { api: api.clone(), options, profile, total, summary, invested, change, allocation, history }
}

fn mount_history(api: &PeaApi, period: Period, policy: ZeroDivisionPolicy) -> Poller<HistoryChart> {
    let api = api.clone();
    spawn_poller("history_chart", Schedule::Once, move || {
        let api = api.clone();
        async move { history_chart::load(&api, period, policy).await }
    })
}

impl LiveDashboard {
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            profile: self.profile.current(),
            total: self.total.current(),
            summary: self.summary.current(),
            invested: self.invested.current(),
            change: self.change.current(),
            allocation: self.allocation.current(),
            history: self.history.current(),
        }
    }

    #[must_use]
    pub fn period(&self) -> Period {
        self.options.period
    }

    /// Select another history period. The history chart is reloaded only
    /// when the period actually changes; the previous load is abandoned.
    pub fn set_period(&mut self, period: Period) {
        if self.options.period == period {
            return;
        }
        self.options.period = period;
        self.history = mount_history(&self.api, period, self.options.policy);
    }

    /// Wait until any component publishes a new value.
    ///
    /// Returns `false` once every poller has finished and nothing is left to
    /// wait for.
    pub async fn changed(&mut self) -> bool {
        let Self { profile, total, summary, invested, change, allocation, history, .. } = self;
        tokio::select! {
            true = profile.changed() => true,
            true = total.changed() => true,
            true = summary.changed() => true,
            true = invested.changed() => true,
            true = change.changed() => true,
            true = allocation.changed() => true,
            true = history.changed() => true,
            else => false,
        }
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
