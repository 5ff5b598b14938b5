//! Seed host resolver: parse → lookup → enumerate → bound.
//!
//! Lookups run on a small pool of named worker threads owned by the
//! resolver and shared by its clones, so at most `max_concurrent_resolvers`
//! lookups are in flight at once across every resolution call. The calling
//! thread waits until every lookup has answered or the deadline passes.
//! Entries still outstanding at the deadline become soft failures; a worker
//! stuck in a slow lookup keeps its slot, and queued work from finished
//! calls is skipped when a worker reaches it.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{trace, warn};

use crate::domain::{
    distinct_addresses, enumerate_ports, read_duration, read_port_range, read_positive, ConfigError,
    HostSpec, IpAddr, PortRange, ResolutionFailure, ResolutionLimit, ResolutionReport,
    ResolvedAddress, DEFAULT_MAX_CONCURRENT_RESOLVERS, DEFAULT_RESOLVE_TIMEOUT,
    DEFAULT_TRANSPORT_PORTS, SEED_RESOLVER_MAX_CONCURRENT, SEED_RESOLVER_TIMEOUT, TRANSPORT_PORT,
};
use crate::ports::{HostsResolver, NameResolver, SettingsSource};

/// Resolver tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Port used for entries written without one.
    pub default_port: u16,
    /// Budget for a whole resolution call.
    pub timeout: Duration,
    /// Upper bound on concurrent lookups.
    pub max_concurrent_resolvers: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_port: 9300,
            timeout: DEFAULT_RESOLVE_TIMEOUT,
            max_concurrent_resolvers: DEFAULT_MAX_CONCURRENT_RESOLVERS,
        }
    }
}

impl ResolverConfig {
    /// Build from `transport.port` and the `discovery.seed_resolver.*` settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSetting` for a malformed port range,
    /// duration, or concurrency value.
    pub fn from_settings(settings: &dyn SettingsSource) -> Result<Self, ConfigError> {
        let transport_ports = read_port_range(
            TRANSPORT_PORT,
            settings.get(TRANSPORT_PORT),
            DEFAULT_TRANSPORT_PORTS,
        )?;
        let timeout = read_duration(
            SEED_RESOLVER_TIMEOUT,
            settings.get(SEED_RESOLVER_TIMEOUT),
            DEFAULT_RESOLVE_TIMEOUT,
        )?;
        let max_concurrent_resolvers = read_positive(
            SEED_RESOLVER_MAX_CONCURRENT,
            settings.get(SEED_RESOLVER_MAX_CONCURRENT),
            DEFAULT_MAX_CONCURRENT_RESOLVERS,
        )?;

        Ok(Self {
            default_port: transport_ports.low(),
            timeout,
            max_concurrent_resolvers,
        })
    }
}

/// Default [`HostsResolver`] backed by an injected [`NameResolver`].
///
/// Stateless across calls: every call parses and looks up afresh. Clones
/// share one lookup pool.
#[derive(Clone)]
pub struct SeedHostsResolver {
    name_resolver: Arc<dyn NameResolver>,
    config: ResolverConfig,
    pool: Arc<LookupPool>,
}

/// A parsed entry waiting for its lookup.
struct Pending {
    slot: usize,
    entry: String,
    spec: HostSpec,
    ports: PortRange,
}

type LookupResult = io::Result<Vec<IpAddr>>;

impl SeedHostsResolver {
    /// Create a resolver. Worker threads are started on first use.
    pub fn new(name_resolver: Arc<dyn NameResolver>, config: ResolverConfig) -> Self {
        let pool = Arc::new(LookupPool::new(
            Arc::clone(&name_resolver),
            config.max_concurrent_resolvers,
        ));
        Self {
            name_resolver,
            config,
            pool,
        }
    }

    /// Current tuning.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve with the configured timeout as the deadline.
    pub fn resolve(&self, hosts: &[String], limit: ResolutionLimit) -> ResolutionReport {
        self.resolve_until(hosts, limit, Instant::now() + self.config.timeout)
    }

    /// Resolve, giving up on outstanding lookups at `deadline`.
    ///
    /// Never fails as a whole. Per-entry problems are recorded in
    /// [`ResolutionReport::failures`] and logged at `warn`.
    pub fn resolve_until(
        &self,
        hosts: &[String],
        limit: ResolutionLimit,
        deadline: Instant,
    ) -> ResolutionReport {
        let started = Instant::now();
        let mut outcomes: Vec<Result<Vec<ResolvedAddress>, ResolutionFailure>> =
            Vec::with_capacity(hosts.len());
        let mut pending = Vec::with_capacity(hosts.len());

        for (slot, entry) in hosts.iter().enumerate() {
            let parsed = HostSpec::parse(entry).and_then(|spec| {
                let ports = spec.ports_or(self.config.default_port)?;
                Ok((spec, ports))
            });
            match parsed {
                Ok((spec, ports)) => {
                    outcomes.push(Ok(Vec::new()));
                    pending.push(Pending {
                        slot,
                        entry: entry.clone(),
                        spec,
                        ports,
                    });
                }
                Err(source) => outcomes.push(Err(ResolutionFailure::InvalidHostSpec {
                    entry: entry.clone(),
                    source,
                })),
            }
        }

        let answers = self.lookup_all(&pending, deadline);
        let budget = deadline.saturating_duration_since(started);

        for (job, answer) in pending.iter().zip(answers) {
            outcomes[job.slot] = expand(job, answer, limit, budget);
        }

        let mut report = ResolutionReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(mut addresses) => report.addresses.append(&mut addresses),
                Err(failure) => {
                    match &failure {
                        ResolutionFailure::TimedOut { entry, timeout } => {
                            warn!(host = %entry, timeout = ?timeout, "timed out resolving host")
                        }
                        other => warn!(host = %other.entry(), error = %other, "failed to resolve host"),
                    }
                    report.failures.push(failure);
                }
            }
        }

        trace!(
            entries = hosts.len(),
            addresses = report.addresses.len(),
            failures = report.failures.len(),
            elapsed = ?started.elapsed(),
            "resolved seed hosts"
        );

        report
    }

    /// Look up every pending host. `None` marks a lookup that missed the deadline.
    fn lookup_all(&self, pending: &[Pending], deadline: Instant) -> Vec<Option<LookupResult>> {
        let mut answers: Vec<Option<LookupResult>> = pending.iter().map(|_| None).collect();
        if pending.is_empty() || Instant::now() >= deadline {
            return answers;
        }

        let round = Arc::new(Round {
            deadline,
            closed: AtomicBool::new(false),
        });

        if self.pool.ensure_workers(pending.len()) == 0 {
            // No worker threads: resolve inline, checking the deadline between entries.
            for (answer, job) in answers.iter_mut().zip(pending) {
                if !round.is_live() {
                    break;
                }
                *answer = Some(self.name_resolver.lookup(job.spec.host()));
            }
            return answers;
        }

        let (tx, rx) = mpsc::channel::<(usize, LookupResult)>();
        for (index, job) in pending.iter().enumerate() {
            self.pool.submit(LookupJob {
                index,
                host: job.spec.host().to_string(),
                round: Arc::clone(&round),
                results: tx.clone(),
            });
        }
        drop(tx);

        let mut outstanding = pending.len();
        while outstanding > 0 {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match rx.recv_timeout(deadline - now) {
                Ok((index, result)) => {
                    if answers[index].is_none() {
                        outstanding -= 1;
                    }
                    answers[index] = Some(result);
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        round.close();

        answers
    }
}

/// Turn one lookup answer into addresses or a failure.
fn expand(
    job: &Pending,
    answer: Option<LookupResult>,
    limit: ResolutionLimit,
    budget: Duration,
) -> Result<Vec<ResolvedAddress>, ResolutionFailure> {
    let host = job.spec.host();
    match answer {
        None => Err(ResolutionFailure::TimedOut {
            entry: job.entry.clone(),
            timeout: budget,
        }),
        Some(Err(e)) => Err(ResolutionFailure::lookup(&job.entry, host, &e)),
        Some(Ok(ips)) => {
            let ips = distinct_addresses(ips);
            if ips.is_empty() {
                return Err(ResolutionFailure::NoAddresses {
                    entry: job.entry.clone(),
                    host: host.to_string(),
                });
            }
            Ok(enumerate_ports(&ips, job.ports, limit))
        }
    }
}

impl HostsResolver for SeedHostsResolver {
    fn resolve_hosts(&self, hosts: &[String], limit: ResolutionLimit) -> Vec<ResolvedAddress> {
        self.resolve(hosts, limit).addresses
    }
}

impl std::fmt::Debug for SeedHostsResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedHostsResolver")
            .field("config", &self.config)
            .field("workers", &self.pool.live.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// LookupPool - Fixed set of lookup threads shared by every call
// ============================================================================

/// One resolution call, as seen by the workers.
struct Round {
    deadline: Instant,
    closed: AtomicBool,
}

impl Round {
    /// False once the caller stopped waiting.
    fn is_live(&self) -> bool {
        !self.closed.load(Ordering::Acquire) && Instant::now() < self.deadline
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

struct LookupJob {
    index: usize,
    host: String,
    round: Arc<Round>,
    results: mpsc::Sender<(usize, LookupResult)>,
}

impl LookupJob {
    fn run(self, resolver: &dyn NameResolver) {
        if !self.round.is_live() {
            return;
        }
        let result = resolver.lookup(&self.host);
        // The caller may have stopped waiting.
        let _ = self.results.send((self.index, result));
    }
}

/// Up to `max_workers` threads pulling jobs from one queue.
///
/// Threads exit once the pool is dropped and the queue drains.
struct LookupPool {
    jobs: mpsc::Sender<LookupJob>,
    queue: Arc<Mutex<mpsc::Receiver<LookupJob>>>,
    name_resolver: Arc<dyn NameResolver>,
    max_workers: usize,
    live: Arc<AtomicUsize>,
    /// Serializes spawning; holds the next thread id.
    next_id: Mutex<usize>,
}

impl LookupPool {
    fn new(name_resolver: Arc<dyn NameResolver>, max_workers: usize) -> Self {
        let (jobs, queue) = mpsc::channel();
        Self {
            jobs,
            queue: Arc::new(Mutex::new(queue)),
            name_resolver,
            max_workers,
            live: Arc::new(AtomicUsize::new(0)),
            next_id: Mutex::new(0),
        }
    }

    /// Start threads until `wanted` (capped at `max_workers`) are alive.
    /// Returns the number alive.
    fn ensure_workers(&self, wanted: usize) -> usize {
        let mut next_id = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);
        let target = wanted.min(self.max_workers);

        while self.live.load(Ordering::Acquire) < target {
            let id = *next_id;
            *next_id += 1;

            let slot = WorkerSlot::claim(&self.live);
            let queue = Arc::clone(&self.queue);
            let resolver = Arc::clone(&self.name_resolver);
            let spawned = thread::Builder::new()
                .name(format!("seed-resolver-{id}"))
                .spawn(move || {
                    let _slot = slot;
                    run_worker(&queue, resolver.as_ref());
                });
            if let Err(e) = spawned {
                warn!(error = %e, "failed to spawn seed resolver thread");
                break;
            }
        }

        self.live.load(Ordering::Acquire)
    }

    fn submit(&self, job: LookupJob) {
        // The pool owns the receiving end, so the queue is never disconnected here.
        if self.jobs.send(job).is_err() {
            warn!("seed resolver queue is closed");
        }
    }
}

fn run_worker(queue: &Mutex<mpsc::Receiver<LookupJob>>, resolver: &dyn NameResolver) {
    loop {
        let job = {
            let Ok(receiver) = queue.lock() else { return };
            match receiver.recv() {
                Ok(job) => job,
                Err(_) => return,
            }
        };
        job.run(resolver);
    }
}

/// Counts a live worker; released when the thread exits, even by panic.
struct WorkerSlot(Arc<AtomicUsize>);

impl WorkerSlot {
    fn claim(live: &Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::AcqRel);
        Self(Arc::clone(live))
    }
}

impl Drop for WorkerSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}
