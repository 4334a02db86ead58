use std::sync::{Mutex, OnceLock};
use sysinfo::{MemoryRefreshKind, RefreshKind, System};

#[derive(Debug, Clone, Copy)]
pub struct MemoryStats {
    pub used_mb: u64,
    pub avail_mb: u64,
}

static SYS: OnceLock<Mutex<System>> = OnceLock::new();

fn sys_handle() -> &'static Mutex<System> {
    SYS.get_or_init(|| {
        Mutex::new(System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::everything()),
        ))
    })
}

/// Snapshot of process-visible memory, in megabytes.
pub fn memory_stats_mb() -> MemoryStats {
    let mut sys = sys_handle().lock().expect("sysinfo lock poisoned");
    sys.refresh_memory();
    let total_mb = sys.total_memory() / (1024 * 1024);
    let avail_mb = sys.available_memory() / (1024 * 1024);
    MemoryStats {
        used_mb: total_mb.saturating_sub(avail_mb),
        avail_mb,
    }
}
