#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::Instant;
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

/// Logs process stats around the refresh when --monitor is set. A refresh is
/// one short request/render cycle, so this only samples on demand instead of
/// polling.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Pid,
    started: Instant,
    peak_memory_mb: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new();
        if enabled {
            system.refresh_all();
        }

        Self {
            system: Mutex::new(system),
            pid: sysinfo::get_current_pid().expect("Failed to get current PID"),
            started: Instant::now(),
            peak_memory_mb: Mutex::new(0),
            enabled,
        }
    }

    /// (cpu %, memory MB, peak memory MB), or None when disabled or the
    /// process table cannot be read.
    fn sample(&self) -> Option<(f32, u64, u64)> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_all();
        let process = system.process(self.pid)?;

        let memory_mb = process.memory() / 1024 / 1024;
        let mut peak = self.peak_memory_mb.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some((process.cpu_usage(), memory_mb, *peak))
    }

    pub fn log_stats(&self, phase: &str) {
        if let Some((cpu, memory_mb, peak_mb)) = self.sample() {
            tracing::info!(
                "📊 {}: CPU {:.1}%, memory {}MB (peak {}MB), elapsed {:?}",
                phase,
                cpu,
                memory_mb,
                peak_mb,
                self.started.elapsed()
            );
        }
    }

    pub fn log_final_stats(&self) {
        if let Some((_, _, peak_mb)) = self.sample() {
            tracing::info!(
                "📊 Refresh finished in {:?}, peak memory {}MB",
                self.started.elapsed(),
                peak_mb
            );
        }
    }
}

// No-op for builds without the CLI feature
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _phase: &str) {}

    pub fn log_final_stats(&self) {}
}
