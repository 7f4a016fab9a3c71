use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

#[cfg(not(target_family = "wasm"))]
use std::time::Instant;
#[cfg(target_family = "wasm")]
use web_time::Instant;

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: SubTimersMap,
}

impl InnerTimer {
    fn reset(&mut self) {
        self.start = None;
        self.elapsed = Duration::ZERO;
        self.subtimers.clear();
    }

    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn suspend(&mut self) {
        //save current elapsed and suspend
        //subtimers if this timer appears active
        if let Some(instant) = self.start {
            self.elapsed += instant.elapsed();
            self.subtimers.suspend();
        }
    }

    fn resume(&mut self) {
        //resume if this timer appears active.
        //just refresh start time to now.
        if self.start.is_some() {
            self.start = Some(Instant::now());
            self.subtimers.resume();
        }
    }
}

#[derive(Debug, Default)]
struct SubTimersMap(HashMap<&'static str, InnerTimer>);

impl Deref for SubTimersMap {
    type Target = HashMap<&'static str, InnerTimer>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for SubTimersMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl SubTimersMap {
    fn reset_subtimer(&mut self, key: &'static str) {
        self.entry(key).or_default().reset();
    }

    fn start_subtimer(&mut self, key: &'static str) {
        self.entry(key).or_default().start();
    }

    //this function suspends every timer in the
    //collection.   Used for notimeit!
    fn suspend(&mut self) {
        self.values_mut().for_each(InnerTimer::suspend);
    }

    fn resume(&mut self) {
        self.values_mut().for_each(InnerTimer::resume);
    }

    fn total_time(&self) -> Duration {
        self.values().fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }

    fn elapsed(&self, key: &'static str) -> Duration {
        self.get(key).map_or(Duration::ZERO, |t| t.elapsed)
    }
}

/// A stack of named, nestable timers.
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimersMap,
}

impl Timers {
    fn mut_active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (first, rest) = self.stack.split_first()?;
        let mut active_timer = self.subtimers.get_mut(first)?;
        for key in rest {
            active_timer = active_timer.subtimers.get_mut(key)?;
        }
        Some(active_timer)
    }

    /// Zero a top level timer and all of its children
    pub fn reset_timer(&mut self, key: &'static str) {
        self.subtimers.reset_subtimer(key);
    }

    /// Start the timer `key` as a child of the currently active timer
    pub fn start_as_current(&mut self, key: &'static str) {
        match self.mut_active_timer() {
            Some(active) => active.subtimers.start_subtimer(key),
            None => self.subtimers.start_subtimer(key),
        }
        self.stack.push(key);
    }

    /// Stop the currently active timer
    pub fn stop_current(&mut self) {
        if let Some(active) = self.mut_active_timer() {
            active.stop();
        }
        self.stack.pop();
    }

    //Suspend every timer in the collection.   Used for notimeit!
    pub fn suspend(&mut self) {
        self.subtimers.suspend();
    }

    //Resume every timer in the collection.   Used for notimeit!
    pub fn resume(&mut self) {
        self.subtimers.resume();
    }

    /// Sum of all top level timers
    pub fn total_time(&self) -> Duration {
        self.subtimers.total_time()
    }

    /// Elapsed time of the top level timer `key`
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.subtimers.elapsed(key)
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {

        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[test]
fn test_nested_timers() {
    let mut timers = Timers::default();
    timers.reset_timer("solve");

    timeit! {timers => "solve"; {
        timeit! {timers => "inner"; {
            std::thread::sleep(Duration::from_millis(2));
        }}
        notimeit! {timers; {
            std::thread::sleep(Duration::from_millis(100));
        }}
    }}

    let solve = timers.elapsed("solve");
    assert!(solve >= Duration::from_millis(2));
    assert!(solve < Duration::from_millis(100));
    assert_eq!(timers.total_time(), solve);
    assert_eq!(timers.elapsed("missing"), Duration::ZERO);
}
