//! Phase timing for perf metrics. wasm32-unknown-unknown has no `Instant`,
//! so the browser clock stands in there.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
#[inline]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn millis_since(stamp: Stamp) -> f64 {
    js_sys::Date::now() - stamp
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn millis_since(stamp: Stamp) -> f64 {
    stamp.elapsed().as_secs_f64() * 1000.0
}

/// Start of one timed phase.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer(Stamp);

impl PerfTimer {
    /// `Some(timer)` only when metrics are on, so disabled runs never read the clock.
    #[inline]
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer(now()))
    }
}

/// Milliseconds since `timer` started, 0 when metrics are off.
#[inline]
pub(crate) fn lap(timer: Option<PerfTimer>) -> f64 {
    timer.map_or(0.0, |PerfTimer(stamp)| millis_since(stamp))
}
