//! Formula table: the ordered parameter list for one input.

use serde::Serialize;

use crate::category::{Category, classify};
use crate::error::Result;
use crate::input::ConfigInput;
use crate::plan::ResourcePlan;
use crate::size::{format_bytes, format_kb, format_mb};

/// One recommended setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedParameter {
    pub name: &'static str,
    pub value: String,
    pub category: Category,
}

impl DerivedParameter {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            category: classify(name),
        }
    }
}

/// Derive the full parameter list. Order is stable for identical input.
pub fn derive(input: &ConfigInput) -> Result<Vec<DerivedParameter>> {
    let plan = ResourcePlan::compute(input)?;
    Ok(render(&plan))
}

struct ParamList(Vec<DerivedParameter>);

impl ParamList {
    fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push(DerivedParameter::new(name, value));
    }
}

/// Interleave the fixed literals with the plan's computed values.
pub fn render(plan: &ResourcePlan) -> Vec<DerivedParameter> {
    let mut p = ParamList(Vec::with_capacity(96));

    // autovacuum
    p.set("autovacuum", "on");
    p.set("autovacuum_analyze_scale_factor", "0.05");
    p.set("autovacuum_analyze_threshold", "50");
    p.set("autovacuum_naptime", "15");
    p.set("autovacuum_vacuum_cost_delay", "2");
    p.set("autovacuum_vacuum_cost_limit", "200");
    p.set("autovacuum_vacuum_scale_factor", "0.05");
    p.set("autovacuum_vacuum_threshold", "50");
    p.set("log_autovacuum_min_duration", "10000");
    p.set("autovacuum_freeze_max_age", "200000000");
    p.set("autovacuum_multixact_freeze_max_age", "400000000");
    p.set("autovacuum_max_workers", plan.autovacuum_max_workers.to_string());
    p.set("autovacuum_work_mem", format_kb(plan.autovacuum_work_mem_kb));

    // manual vacuum
    p.set("vacuum_cleanup_index_scale_factor", "0.1");
    p.set("vacuum_cost_limit", "10000");
    p.set("vacuum_cost_delay", "0");
    p.set("vacuum_cost_page_dirty", "20");
    p.set("vacuum_cost_page_hit", "1");
    p.set("vacuum_cost_page_miss", "2");
    p.set("vacuum_defer_cleanup_age", "0");
    p.set("vacuum_freeze_min_age", "50000000");
    p.set("vacuum_freeze_table_age", "200000000");
    p.set("vacuum_multixact_freeze_min_age", "5000000");
    p.set("vacuum_multixact_freeze_table_age", "200000000");

    p.set("wal_sender_timeout", "5min");
    p.set("wal_compression", "on");
    p.set("jit", "off");

    // session timeouts and keepalives
    p.set("idle_in_transaction_session_timeout", "6min");
    p.set("statement_timeout", "5min");
    p.set("tcp_keepalives_count", "10");
    p.set("tcp_keepalives_idle", "45");
    p.set("tcp_keepalives_interval", "10");

    // memory, checkpoints, planner costs
    p.set("max_connections", plan.max_connections.to_string());
    p.set("shared_buffers", format_bytes(plan.shared_buffers_bytes));
    p.set("effective_cache_size", format_bytes(plan.effective_cache_size_bytes));
    p.set("maintenance_work_mem", format_kb(plan.maintenance_work_mem_kb));
    p.set("checkpoint_completion_target", "0.9");
    p.set("wal_buffers", format_bytes(plan.wal_buffers_bytes));
    p.set("wal_keep_size", "2048MB");
    p.set("wal_writer_flush_after", "128");
    p.set("checkpoint_timeout", "15min");
    p.set("default_statistics_target", "100");
    p.set("random_page_cost", plan.random_page_cost);
    p.set("effective_io_concurrency", plan.effective_io_concurrency);
    p.set("work_mem", format_kb(plan.work_mem_kb));
    p.set("huge_pages", "try");
    p.set("min_wal_size", format_mb(plan.min_wal_size_mb));
    p.set("max_wal_size", format_mb(plan.max_wal_size_mb));

    // parallelism
    p.set("max_worker_processes", plan.max_worker_processes.to_string());
    p.set(
        "max_parallel_workers_per_gather",
        plan.max_parallel_workers_per_gather.to_string(),
    );
    p.set("max_parallel_workers", plan.max_parallel_workers.to_string());
    p.set(
        "max_parallel_maintenance_workers",
        plan.max_parallel_maintenance_workers.to_string(),
    );

    p.set("bgwriter_lru_maxpages", "1000");
    p.set("bgwriter_lru_multiplier", "2");

    p.set("enable_partitionwise_aggregate", "on");
    p.set("enable_partitionwise_join", "on");
    p.set("extra_float_digits", "3");
    p.set("max_wal_senders", "16");
    p.set("superuser_reserved_connections", "20");
    p.set("temp_file_limit", format_kb(plan.temp_file_limit_kb));
    p.set("track_functions", "pl");
    p.set("track_io_timing", "on");
    p.set("TimeZone", "Asia/Shanghai");
    p.set("max_replication_slots", "16");
    p.set("max_stack_depth", "2048");
    p.set("lc_messages", "en_US.UTF-8");

    // logging
    p.set("log_destination", "stderr");
    p.set("logging_collector", "on");
    p.set("log_directory", "pg_log");
    p.set("log_filename", "postgresql-%d.log");
    p.set("log_truncate_on_rotation", "on");
    p.set("log_min_messages", "NOTICE");
    p.set("log_checkpoints", "on");
    p.set("log_lock_waits", "on");
    p.set("log_connections", "off");
    p.set("log_disconnections", "off");
    p.set("log_line_prefix", "%m [%p][%a] %u %d %r ");
    p.set("log_timezone", "Asia/Shanghai");
    p.set("log_min_duration_statement", "5000ms");
    p.set("log_temp_files", "131072");
    p.set("log_min_duration_sample", "500ms");
    p.set("log_statement_sample_rate", "0.2");

    p.0
}

/// Look up one parameter's value by name.
pub fn value_of<'a>(params: &'a [DerivedParameter], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::StorageType;
    use std::collections::HashSet;

    fn derive_ok(cores: u32, memory_gb: f64, storage: StorageType) -> Vec<DerivedParameter> {
        derive(&ConfigInput::new(cores, memory_gb, storage)).unwrap()
    }

    #[test]
    fn test_names_unique() {
        let params = derive_ok(8, 32.0, StorageType::Ssd);
        let names: HashSet<_> = params.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), params.len());
    }

    #[test]
    fn test_order_starts_with_autovacuum_ends_with_logging() {
        let params = derive_ok(8, 32.0, StorageType::Ssd);
        assert_eq!(params.first().unwrap().name, "autovacuum");
        assert_eq!(params.last().unwrap().name, "log_statement_sample_rate");
        assert_eq!(params.len(), 82);
    }

    #[test]
    fn test_superseding_constants() {
        let params = derive_ok(8, 32.0, StorageType::Hdd);
        assert_eq!(value_of(&params, "checkpoint_timeout"), Some("15min"));
        assert_eq!(value_of(&params, "bgwriter_lru_multiplier"), Some("2"));
        assert_eq!(value_of(&params, "effective_io_concurrency"), Some("1"));
    }

    #[test]
    fn test_sizes_use_clean_units() {
        let params = derive_ok(8, 32.0, StorageType::Ssd);
        assert_eq!(value_of(&params, "shared_buffers"), Some("8GB"));
        assert_eq!(value_of(&params, "effective_cache_size"), Some("16GB"));
        assert_eq!(value_of(&params, "wal_buffers"), Some("256MB"));
        assert_eq!(value_of(&params, "work_mem"), Some("8MB"));
        assert_eq!(value_of(&params, "autovacuum_work_mem"), Some("512MB"));
        assert_eq!(value_of(&params, "min_wal_size"), Some("4GB"));
        assert_eq!(value_of(&params, "max_wal_size"), Some("16GB"));
        assert_eq!(value_of(&params, "temp_file_limit"), Some("32GB"));
    }

    #[test]
    fn test_category_attached() {
        let params = derive_ok(2, 4.0, StorageType::Ssd);
        let find = |name: &str| params.iter().find(|p| p.name == name).unwrap().category;
        assert_eq!(find("shared_buffers"), Category::Performance);
        assert_eq!(find("log_autovacuum_min_duration"), Category::Autovacuum);
        assert_eq!(find("statement_timeout"), Category::Timeout);
        assert_eq!(find("log_line_prefix"), Category::Logging);
        assert_eq!(find("TimeZone"), Category::Other);
    }

    #[test]
    fn test_input_untouched() {
        let input = ConfigInput::new(4, 8.0, StorageType::Hdd);
        let before = input.clone();
        derive(&input).unwrap();
        assert_eq!(input, before);
    }
}
