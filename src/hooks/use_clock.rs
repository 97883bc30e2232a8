use chrono::{Local, NaiveDateTime};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::utils::REPORT_CLOCK_INTERVAL_MS;

/// Hora local, refrescada cada `REPORT_CLOCK_INTERVAL_MS`
#[hook]
pub fn use_clock() -> NaiveDateTime {
    let now = use_state(|| Local::now().naive_local());

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(REPORT_CLOCK_INTERVAL_MS, move || {
                now.set(Local::now().naive_local());
            });
            move || drop(interval)
        });
    }

    *now
}
