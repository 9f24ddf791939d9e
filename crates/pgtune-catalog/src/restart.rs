//! Settings that only take effect after a server restart.
//!
//! Everything else can be applied with `SELECT pg_reload_conf()`.

const RESTART_REQUIRED: &[&str] = &[
    "shared_buffers",
    "max_connections",
    "max_worker_processes",
    "max_parallel_workers",
    "max_parallel_workers_per_gather",
    "max_parallel_maintenance_workers",
    "max_wal_senders",
    "max_replication_slots",
    "wal_level",
    "wal_log_hints",
    "max_stack_depth",
    "dynamic_shared_memory_type",
    "huge_pages",
    "max_prepared_transactions",
    "shared_preload_libraries",
    "jit",
    "autovacuum_max_workers",
];

pub fn is_restart_required(name: &str) -> bool {
    RESTART_REQUIRED.iter().any(|n| *n == name)
}
