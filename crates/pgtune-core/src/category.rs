//! Display grouping for parameter names.
//!
//! Membership is static data, not a prefix heuristic: `log_autovacuum_min_duration`
//! groups with autovacuum and `lc_messages` with logging.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Performance,
    Autovacuum,
    Timeout,
    Logging,
    Other,
}

impl Category {
    /// Display order.
    pub const ALL: [Category; 5] = [
        Category::Performance,
        Category::Autovacuum,
        Category::Timeout,
        Category::Logging,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Performance => "performance",
            Category::Autovacuum => "autovacuum",
            Category::Timeout => "timeout",
            Category::Logging => "logging",
            Category::Other => "other",
        }
    }

    /// Names explicitly assigned to this category. Empty for `Other`,
    /// which is everything else.
    pub fn members(self) -> &'static [&'static str] {
        match self {
            Category::Performance => PERFORMANCE,
            Category::Autovacuum => AUTOVACUUM,
            Category::Timeout => TIMEOUT,
            Category::Logging => LOGGING,
            Category::Other => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                DeriveError::invalid(
                    "category",
                    format!(
                        "expected one of performance, autovacuum, timeout, logging, other; got '{s}'"
                    ),
                )
            })
    }
}

const PERFORMANCE: &[&str] = &[
    "wal_sender_timeout",
    "wal_compression",
    "jit",
    "max_connections",
    "shared_buffers",
    "effective_cache_size",
    "maintenance_work_mem",
    "checkpoint_completion_target",
    "wal_buffers",
    "wal_keep_size",
    "wal_writer_flush_after",
    "checkpoint_timeout",
    "default_statistics_target",
    "random_page_cost",
    "effective_io_concurrency",
    "work_mem",
    "huge_pages",
    "min_wal_size",
    "max_wal_size",
    "max_worker_processes",
    "max_parallel_workers_per_gather",
    "max_parallel_workers",
    "max_parallel_maintenance_workers",
    "bgwriter_lru_maxpages",
    "bgwriter_lru_multiplier",
    "enable_partitionwise_aggregate",
    "enable_partitionwise_join",
    "extra_float_digits",
    "max_wal_senders",
    "superuser_reserved_connections",
    "temp_file_limit",
    "track_io_timing",
    "max_replication_slots",
    "max_stack_depth",
];

const AUTOVACUUM: &[&str] = &[
    "autovacuum",
    "autovacuum_analyze_scale_factor",
    "autovacuum_analyze_threshold",
    "autovacuum_naptime",
    "autovacuum_vacuum_cost_delay",
    "autovacuum_vacuum_cost_limit",
    "autovacuum_vacuum_scale_factor",
    "autovacuum_vacuum_threshold",
    "log_autovacuum_min_duration",
    "autovacuum_freeze_max_age",
    "autovacuum_multixact_freeze_max_age",
    "autovacuum_max_workers",
    "autovacuum_work_mem",
    "vacuum_cleanup_index_scale_factor",
    "vacuum_cost_limit",
    "vacuum_cost_delay",
    "vacuum_cost_page_dirty",
    "vacuum_cost_page_hit",
    "vacuum_cost_page_miss",
    "vacuum_defer_cleanup_age",
    "vacuum_freeze_min_age",
    "vacuum_freeze_table_age",
    "vacuum_multixact_freeze_min_age",
    "vacuum_multixact_freeze_table_age",
];

const TIMEOUT: &[&str] = &[
    "idle_in_transaction_session_timeout",
    "statement_timeout",
    "tcp_keepalives_count",
    "tcp_keepalives_idle",
    "tcp_keepalives_interval",
];

const LOGGING: &[&str] = &[
    "log_destination",
    "logging_collector",
    "log_directory",
    "log_filename",
    "log_truncate_on_rotation",
    "log_min_messages",
    "log_checkpoints",
    "log_lock_waits",
    "log_connections",
    "log_disconnections",
    "log_line_prefix",
    "log_timezone",
    "log_min_duration_statement",
    "log_temp_files",
    "log_min_duration_sample",
    "log_statement_sample_rate",
    "lc_messages",
];

/// Classify a parameter name. Total: unknown names are `Other`.
pub fn classify(name: &str) -> Category {
    [
        Category::Performance,
        Category::Autovacuum,
        Category::Timeout,
        Category::Logging,
    ]
    .into_iter()
    .find(|c| c.members().iter().any(|m| *m == name))
    .unwrap_or(Category::Other)
}
