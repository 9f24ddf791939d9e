//! Numeric half of the derivation: every computed quantity in its native unit.

use serde::Serialize;

use crate::constants::*;
use crate::error::Result;
use crate::input::{ConfigInput, StorageType};

/// Computed sizes and counts for one input, before formatting.
///
/// Byte quantities keep their quantization artifacts on purpose:
/// `effective_cache_size_bytes` goes through an 8kB page count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourcePlan {
    pub memory_bytes: f64,
    pub autovacuum_max_workers: u64,
    pub autovacuum_work_mem_kb: f64,
    pub max_connections: u64,
    pub shared_buffers_bytes: f64,
    pub effective_cache_size_bytes: f64,
    pub maintenance_work_mem_kb: f64,
    pub wal_buffers_bytes: f64,
    pub work_mem_kb: f64,
    pub min_wal_size_mb: f64,
    pub max_wal_size_mb: f64,
    pub max_worker_processes: u64,
    pub max_parallel_workers_per_gather: u64,
    pub max_parallel_workers: u64,
    pub max_parallel_maintenance_workers: u64,
    pub temp_file_limit_kb: f64,
    pub random_page_cost: &'static str,
    pub effective_io_concurrency: &'static str,
}

impl ResourcePlan {
    pub fn compute(input: &ConfigInput) -> Result<Self> {
        input.validate()?;

        let memory_bytes = input.memory_bytes();
        let cores = u64::from(input.cpu_cores);
        let shared_buffers_bytes = memory_bytes / SHARED_BUFFERS_DIVISOR;

        Ok(Self {
            memory_bytes,
            autovacuum_max_workers: (memory_bytes / AUTOVACUUM_WORKER_DIVISOR)
                .floor()
                .clamp(AUTOVACUUM_MAX_WORKERS_MIN, AUTOVACUUM_MAX_WORKERS_MAX)
                as u64,
            autovacuum_work_mem_kb: (memory_bytes / WORK_MEM_DIVISOR)
                .floor()
                .max(AUTOVACUUM_WORK_MEM_MIN_KB),
            max_connections: cores * CONNECTIONS_PER_CORE,
            shared_buffers_bytes,
            effective_cache_size_bytes: (memory_bytes / CACHE_PAGE_DIVISOR).floor()
                * PAGE_SIZE_BYTES,
            maintenance_work_mem_kb: (memory_bytes / WORK_MEM_DIVISOR)
                .floor()
                .min(MAINTENANCE_WORK_MEM_MAX_KB),
            wal_buffers_bytes: (shared_buffers_bytes / WAL_BUFFERS_DIVISOR)
                .min(WAL_BUFFERS_MAX_BYTES),
            work_mem_kb: (memory_bytes / PER_QUERY_WORK_MEM_DIVISOR)
                .floor()
                .max(WORK_MEM_MIN_KB),
            min_wal_size_mb: (memory_bytes / MIN_WAL_DIVISOR)
                .floor()
                .clamp(MIN_WAL_SIZE_MIN_MB, MIN_WAL_SIZE_MAX_MB),
            max_wal_size_mb: (memory_bytes / MAX_WAL_DIVISOR)
                .floor()
                .clamp(MAX_WAL_SIZE_MIN_MB, MAX_WAL_SIZE_MAX_MB),
            max_worker_processes: cores * WORKER_PROCESSES_PER_CORE,
            max_parallel_workers_per_gather: (cores / 2).max(PARALLEL_WORKERS_PER_GATHER_MIN),
            max_parallel_workers: (cores * 3 / 4).max(PARALLEL_WORKERS_MIN),
            max_parallel_maintenance_workers: (cores / 2).max(PARALLEL_WORKERS_PER_GATHER_MIN),
            temp_file_limit_kb: (memory_bytes / KB).floor(),
            random_page_cost: match input.storage_type {
                StorageType::Ssd => SSD_RANDOM_PAGE_COST,
                StorageType::Hdd => HDD_RANDOM_PAGE_COST,
            },
            effective_io_concurrency: EFFECTIVE_IO_CONCURRENCY,
        })
    }
}
