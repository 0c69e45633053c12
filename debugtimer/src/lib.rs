use std::fmt;
use std::time::{Duration, Instant};

#[derive(Clone, Copy)]
pub struct DebugTimer{
    now: Instant,
}

impl DebugTimer{
    pub fn start() -> Self {
        DebugTimer{
            now: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed::from(self.now.elapsed())
    }
}

/// Wall-clock time split into the units shown on a result line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elapsed{
    duration: Duration,
}

impl Elapsed{
    /// Whole minutes. Not wrapped at the hour.
    pub fn minutes(&self) -> u64 {
        self.duration.as_secs() / 60
    }

    pub fn seconds(&self) -> u64 {
        self.duration.as_secs() % 60
    }

    pub fn millis(&self) -> u64 {
        self.duration.subsec_millis() as u64
    }

    pub fn as_duration(&self) -> Duration {
        self.duration
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Elapsed{ duration }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m {}s {}ms", self.minutes(), self.seconds(), self.millis())
    }
}
