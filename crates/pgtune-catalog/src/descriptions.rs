//! Per-parameter descriptions in both locales.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::i18n::{Lang, t};

/// (name, zh, en)
const DESCRIPTIONS: &[(&str, &str, &str)] = &[
    ("autovacuum", "启用自动清理进程，自动清理和更新表统计信息", "Enables the autovacuum launcher, which vacuums tables and refreshes statistics automatically"),
    ("autovacuum_analyze_scale_factor", "触发自动分析的表大小比例因子", "Fraction of table size that triggers an automatic ANALYZE"),
    ("autovacuum_analyze_threshold", "触发自动分析的最小变更行数", "Minimum number of changed rows that triggers an automatic ANALYZE"),
    ("autovacuum_naptime", "自动清理进程的休眠间隔（秒）", "Sleep time between autovacuum runs (seconds)"),
    ("autovacuum_vacuum_cost_delay", "自动清理的延迟时间（毫秒）", "Cost-based delay for autovacuum (milliseconds)"),
    ("autovacuum_vacuum_cost_limit", "自动清理的成本限制", "Cost limit for autovacuum"),
    ("autovacuum_vacuum_scale_factor", "触发自动清理的表大小比例因子", "Fraction of table size that triggers an automatic VACUUM"),
    ("autovacuum_vacuum_threshold", "触发自动清理的最小变更行数", "Minimum number of updated or deleted rows that triggers an automatic VACUUM"),
    ("log_autovacuum_min_duration", "记录自动清理操作的最小执行时间（毫秒）", "Log autovacuum actions running at least this long (milliseconds)"),
    ("autovacuum_freeze_max_age", "事务ID冻结的最大年龄", "Transaction ID age at which a table is vacuumed to prevent wraparound"),
    ("autovacuum_multixact_freeze_max_age", "多事务ID冻结的最大年龄", "Multixact age at which a table is vacuumed to prevent wraparound"),
    ("autovacuum_max_workers", "同时运行的自动清理工作进程的最大数量", "Maximum number of concurrently running autovacuum workers"),
    ("autovacuum_work_mem", "每个自动清理工作进程使用的内存大小", "Memory used by each autovacuum worker"),
    ("vacuum_cleanup_index_scale_factor", "清理索引时的比例因子", "Fraction of inserted tuples that triggers an index cleanup"),
    ("vacuum_cost_limit", "手动清理的成本限制", "Cost limit for manual VACUUM"),
    ("vacuum_cost_delay", "手动清理的延迟时间（毫秒）", "Cost-based delay for manual VACUUM (milliseconds)"),
    ("vacuum_cost_page_dirty", "清理脏页的成本", "Cost charged for dirtying a previously clean page"),
    ("vacuum_cost_page_hit", "清理缓存页的成本", "Cost charged for a page found in shared buffers"),
    ("vacuum_cost_page_miss", "清理未缓存页的成本", "Cost charged for a page read from disk"),
    ("vacuum_defer_cleanup_age", "延迟清理的事务年龄", "Number of transactions by which VACUUM defers dead row cleanup"),
    ("vacuum_freeze_min_age", "事务ID冻结的最小年龄", "Minimum transaction age before a row is frozen"),
    ("vacuum_freeze_table_age", "表冻结的年龄阈值", "Transaction age at which VACUUM scans the whole table to freeze rows"),
    ("vacuum_multixact_freeze_min_age", "多事务ID冻结的最小年龄", "Minimum multixact age before a row is frozen"),
    ("vacuum_multixact_freeze_table_age", "多事务表冻结的年龄阈值", "Multixact age at which VACUUM scans the whole table to freeze rows"),
    ("wal_sender_timeout", "WAL发送超时时间", "Terminate replication connections inactive for longer than this"),
    ("wal_compression", "是否启用WAL压缩", "Compress full-page images written to WAL"),
    ("jit", "是否启用即时编译（JIT）", "Allow just-in-time compilation of queries"),
    ("wal_buffers", "WAL缓冲区大小", "Shared memory used for WAL data not yet written to disk"),
    ("wal_keep_size", "保留的WAL文件大小", "Minimum size of past WAL kept for standby servers"),
    ("wal_writer_flush_after", "WAL写入器刷新阈值", "Amount of WAL written by the WAL writer that triggers a flush"),
    ("min_wal_size", "WAL文件的最小大小", "WAL size below which old segments are recycled instead of removed"),
    ("max_wal_size", "WAL文件的最大大小", "WAL size that triggers a checkpoint"),
    ("idle_in_transaction_session_timeout", "空闲事务会话超时时间", "Terminate sessions idle inside an open transaction for longer than this"),
    ("statement_timeout", "语句执行超时时间", "Abort statements running longer than this"),
    ("tcp_keepalives_count", "TCP keepalive 探测次数", "Number of lost TCP keepalives before the connection is considered dead"),
    ("tcp_keepalives_idle", "TCP keepalive 空闲时间（秒）", "Idle time before a TCP keepalive is sent (seconds)"),
    ("tcp_keepalives_interval", "TCP keepalive 探测间隔（秒）", "Interval between unacknowledged TCP keepalives (seconds)"),
    ("max_connections", "最大并发连接数", "Maximum number of concurrent connections"),
    ("shared_buffers", "共享缓冲区大小，用于缓存数据页", "Shared memory used to cache data pages"),
    ("effective_cache_size", "可用于磁盘缓存的估计内存大小", "Planner's estimate of memory available for disk caching"),
    ("maintenance_work_mem", "维护操作（如VACUUM、CREATE INDEX）使用的内存", "Memory for maintenance operations such as VACUUM and CREATE INDEX"),
    ("checkpoint_completion_target", "检查点完成目标（0.0-1.0）", "Fraction of the checkpoint interval over which writes are spread (0.0-1.0)"),
    ("checkpoint_timeout", "检查点超时时间", "Maximum time between automatic WAL checkpoints"),
    ("default_statistics_target", "默认统计信息收集目标", "Default statistics target for table columns"),
    ("random_page_cost", "随机页面读取的成本估计", "Planner's cost estimate for a non-sequentially fetched page"),
    ("effective_io_concurrency", "有效的并发I/O操作数", "Number of concurrent disk I/O operations the storage can serve"),
    ("work_mem", "每个查询操作使用的内存大小", "Memory per sort or hash operation before spilling to disk"),
    ("huge_pages", "是否使用大页内存", "Use huge pages for the main shared memory area"),
    ("max_worker_processes", "最大工作进程数", "Maximum number of background worker processes"),
    ("max_parallel_workers_per_gather", "每个Gather节点允许的最大并行工作进程数", "Maximum parallel workers per Gather node"),
    ("max_parallel_workers", "最大并行工作进程数", "Maximum number of parallel workers across the server"),
    ("max_parallel_maintenance_workers", "最大并行维护工作进程数", "Maximum parallel workers per maintenance command"),
    ("bgwriter_lru_maxpages", "后台写入器每次写入的最大页面数", "Maximum pages the background writer flushes per round"),
    ("bgwriter_lru_multiplier", "后台写入器的LRU乘数", "Multiplier on recent buffer demand used by the background writer"),
    ("enable_partitionwise_aggregate", "是否启用分区聚合", "Allow partitionwise grouping and aggregation"),
    ("enable_partitionwise_join", "是否启用分区连接", "Allow partitionwise joins"),
    ("extra_float_digits", "浮点数显示的额外精度位数", "Extra digits displayed for floating-point values"),
    ("max_wal_senders", "最大WAL发送进程数", "Maximum number of concurrent WAL sender processes"),
    ("superuser_reserved_connections", "为超级用户保留的连接数", "Connection slots reserved for superusers"),
    ("temp_file_limit", "临时文件大小限制", "Maximum temporary file space per process"),
    ("track_functions", "跟踪函数调用的级别", "Which function calls are tracked in statistics"),
    ("track_io_timing", "是否跟踪I/O操作时间", "Collect timing statistics for database I/O"),
    ("TimeZone", "服务器时区", "Time zone for displaying and interpreting timestamps"),
    ("max_replication_slots", "最大复制槽数", "Maximum number of replication slots"),
    ("max_stack_depth", "最大堆栈深度（KB）", "Maximum safe execution stack depth (kB)"),
    ("lc_messages", "消息区域设置", "Locale used for server messages"),
    ("log_destination", "日志输出目标", "Where server log output goes"),
    ("logging_collector", "是否启用日志收集器", "Capture stderr output into log files"),
    ("log_directory", "日志文件目录", "Directory where log files are written"),
    ("log_filename", "日志文件名模式", "Log file name pattern"),
    ("log_truncate_on_rotation", "日志轮转时是否截断", "Truncate an existing log file of the same name on rotation"),
    ("log_min_messages", "记录的最小消息级别", "Minimum message level written to the log"),
    ("log_checkpoints", "是否记录检查点", "Log each checkpoint"),
    ("log_lock_waits", "是否记录锁等待", "Log lock waits longer than deadlock_timeout"),
    ("log_connections", "是否记录连接", "Log each successful connection"),
    ("log_disconnections", "是否记录断开连接", "Log session terminations"),
    ("log_line_prefix", "日志行前缀格式", "printf-style prefix for each log line"),
    ("log_timezone", "日志时区", "Time zone used in log timestamps"),
    ("log_min_duration_statement", "记录慢查询的最小执行时间", "Log statements running at least this long"),
    ("log_temp_files", "记录临时文件的最小大小", "Log temporary files at least this large (kB)"),
    ("log_min_duration_sample", "采样记录的最小执行时间", "Sample statements running at least this long for logging"),
    ("log_statement_sample_rate", "语句采样率", "Fraction of statements above log_min_duration_sample that are logged"),
];

static BY_NAME: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        DESCRIPTIONS
            .iter()
            .map(|&(name, zh, en)| (name, (zh, en)))
            .collect()
    });

/// Description of a parameter, or the localized pointer to the official
/// docs when the name is unknown.
pub fn description(name: &str, lang: Lang) -> &'static str {
    match BY_NAME.get(name) {
        Some(&(zh, en)) => match lang {
            Lang::Zh => zh,
            Lang::En => en,
        },
        None => {
            tracing::debug!("no description for parameter '{name}'");
            t("paramDescriptionDefault", lang)
        }
    }
}
