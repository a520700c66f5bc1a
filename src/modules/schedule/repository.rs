use super::model::{Job, JobStatus, NewJob};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Default)]
struct Ledger {
    jobs: Vec<Job>,
    next_seq: u64,
}

/// Append-only, in-memory record of scheduled uploads. Contents live as long
/// as the process.
#[derive(Clone, Default)]
pub struct JobRegistry {
    ledger: Arc<RwLock<Ledger>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the job and returns the stored record. Id assignment and the
    /// append happen under one write lock, so ids follow submission order.
    pub async fn append(&self, new_job: NewJob) -> Job {
        let mut ledger = self.ledger.write().await;

        let created_at = OffsetDateTime::now_utc();
        let seq = ledger.next_seq;
        ledger.next_seq += 1;

        let job = Job {
            id: format!("{}-{}", created_at.unix_timestamp_nanos() / 1_000_000, seq),
            credential: new_job.credential,
            video_url: new_job.video_url,
            metadata: new_job.metadata,
            schedule_time: new_job.schedule_time,
            status: JobStatus::Scheduled,
            created_at,
        };

        ledger.jobs.push(job.clone());
        debug!(job_id = %job.id, total = ledger.jobs.len(), "Recorded scheduled job");

        job
    }

    /// All jobs in submission order.
    pub async fn find_all(&self) -> Vec<Job> {
        self.ledger.read().await.jobs.clone()
    }

    pub async fn len(&self) -> usize {
        self.ledger.read().await.jobs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::metadata::model::Metadata;
    use std::collections::HashSet;
    use time::macros::datetime;

    fn new_job(video_url: &str) -> NewJob {
        NewJob {
            credential: "k".to_string(),
            video_url: video_url.to_string(),
            metadata: Metadata {
                title: "T".to_string(),
                description: "D".to_string(),
                tags: vec!["a".to_string()],
            },
            schedule_time: datetime!(2025-01-01 10:00 UTC),
        }
    }

    #[tokio::test]
    async fn fresh_registry_is_empty() {
        let registry = JobRegistry::new();
        assert!(registry.find_all().await.is_empty());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn appended_job_is_listed_last_exactly_once() {
        let registry = JobRegistry::new();
        registry.append(new_job("https://x/1.mp4")).await;
        let job = registry.append(new_job("https://x/2.mp4")).await;

        let jobs = registry.find_all().await;
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs.last(), Some(&job));
        assert_eq!(jobs.iter().filter(|j| j.id == job.id).count(), 1);
        assert_eq!(job.status, JobStatus::Scheduled);
    }

    #[tokio::test]
    async fn ids_are_distinct_and_follow_submission_order() {
        let registry = JobRegistry::new();
        for i in 0..50 {
            registry.append(new_job(&format!("https://x/{i}.mp4"))).await;
        }

        let jobs = registry.find_all().await;
        let seqs: Vec<u64> = jobs
            .iter()
            .map(|j| j.id.rsplit('-').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(seqs, (0..50).collect::<Vec<u64>>());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_lose_nothing() {
        let registry = JobRegistry::new();

        let handles: Vec<_> = (0..200)
            .map(|i| {
                let registry = registry.clone();
                tokio::spawn(async move {
                    registry.append(new_job(&format!("https://x/{i}.mp4"))).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let jobs = registry.find_all().await;
        assert_eq!(jobs.len(), 200);
        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), 200);
        let urls: HashSet<_> = jobs.iter().map(|j| j.video_url.as_str()).collect();
        assert_eq!(urls.len(), 200);
    }

    #[tokio::test]
    async fn clones_share_one_ledger() {
        let registry = JobRegistry::new();
        let other = registry.clone();

        other.append(new_job("https://x/v.mp4")).await;

        assert_eq!(registry.len().await, 1);
    }
}
