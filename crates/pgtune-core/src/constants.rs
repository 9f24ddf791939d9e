/// Formula table revision. Bumped whenever a constant or formula below changes.
pub const FORMULA_VERSION: u32 = 2;

/// Bytes per kilobyte.
pub const KB: f64 = 1024.0;

/// Bytes per megabyte.
pub const MB: f64 = 1024.0 * KB;

/// Bytes per gigabyte.
pub const GB: f64 = 1024.0 * MB;

/// Upper bound on accepted memory (8 PiB). Not a tuning limit: above it,
/// byte counts derived from memory are no longer exact integers in an f64.
pub const MAX_MEMORY_GB: f64 = 8_388_608.0;

/// Memory divisor for one autovacuum worker (16GB).
pub const AUTOVACUUM_WORKER_DIVISOR: f64 = 17_179_869_184.0;
/// Floor for autovacuum_max_workers.
pub const AUTOVACUUM_MAX_WORKERS_MIN: f64 = 3.0;
/// Ceiling for autovacuum_max_workers.
pub const AUTOVACUUM_MAX_WORKERS_MAX: f64 = 10.0;

/// Memory divisor shared by autovacuum_work_mem and maintenance_work_mem.
pub const WORK_MEM_DIVISOR: f64 = 65_536.0;
/// Floor for autovacuum_work_mem, in kB (128MB).
pub const AUTOVACUUM_WORK_MEM_MIN_KB: f64 = 131_072.0;
/// Ceiling for maintenance_work_mem, in kB (4GB).
pub const MAINTENANCE_WORK_MEM_MAX_KB: f64 = 4_194_304.0;

/// Connections granted per CPU core.
pub const CONNECTIONS_PER_CORE: u64 = 200;

/// shared_buffers takes this fraction of memory, as a divisor.
pub const SHARED_BUFFERS_DIVISOR: f64 = 4.0;

/// effective_cache_size is quantized through 8kB pages of memory / 16kB.
pub const CACHE_PAGE_DIVISOR: f64 = 16_384.0;
/// PostgreSQL block size used to quantize effective_cache_size.
pub const PAGE_SIZE_BYTES: f64 = 8.0 * KB;

/// wal_buffers is shared_buffers / 32, capped just under 2GB.
pub const WAL_BUFFERS_DIVISOR: f64 = 32.0;
/// Cap for wal_buffers (2047MB).
pub const WAL_BUFFERS_MAX_BYTES: f64 = 2047.0 * MB;

/// Memory divisor for work_mem.
pub const PER_QUERY_WORK_MEM_DIVISOR: f64 = 4_194_304.0;
/// Floor for work_mem, in kB (4MB).
pub const WORK_MEM_MIN_KB: f64 = 4096.0;

/// Memory divisor for min_wal_size, yielding MB.
pub const MIN_WAL_DIVISOR: f64 = 8_388_608.0;
/// Floor for min_wal_size, in MB.
pub const MIN_WAL_SIZE_MIN_MB: f64 = 256.0;
/// Ceiling for min_wal_size, in MB (8GB).
pub const MIN_WAL_SIZE_MAX_MB: f64 = 8192.0;

/// Memory divisor for max_wal_size, yielding MB.
pub const MAX_WAL_DIVISOR: f64 = 2_097_152.0;
/// Floor for max_wal_size, in MB (2GB).
pub const MAX_WAL_SIZE_MIN_MB: f64 = 2048.0;
/// Ceiling for max_wal_size, in MB (16GB).
pub const MAX_WAL_SIZE_MAX_MB: f64 = 16_384.0;

/// Background worker processes per CPU core.
pub const WORKER_PROCESSES_PER_CORE: u64 = 2;
/// Floor shared by the per-gather and maintenance parallel worker counts.
pub const PARALLEL_WORKERS_PER_GATHER_MIN: u64 = 2;
/// Floor for max_parallel_workers.
pub const PARALLEL_WORKERS_MIN: u64 = 8;

/// random_page_cost for solid-state media.
pub const SSD_RANDOM_PAGE_COST: &str = "1.1";
/// random_page_cost for rotational media.
pub const HDD_RANDOM_PAGE_COST: &str = "4";

/// effective_io_concurrency is held constant across media.
pub const EFFECTIVE_IO_CONCURRENCY: &str = "1";
