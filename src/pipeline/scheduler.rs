// src/pipeline/scheduler.rs

//! Batched, order-preserving profile scheduling.
//!
//! Subjects are processed in strictly sequential batches of at most
//! `max_concurrent`. Every assembly in a batch runs concurrently and the
//! batch is joined in full before the next one starts. Results land in a
//! pre-sized vector at each subject's own index.

use std::ops::Range;

use futures::future::join_all;

use crate::models::FlatRecord;
use crate::services::ProfileAssembler;

/// Summary of a profile scraping run.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// One record per input subject, in input order
    pub records: Vec<FlatRecord>,
    pub batches: usize,
    pub failed_fetches: usize,
}

/// Split `0..total` into consecutive ranges of at most `cap` subjects.
pub fn batch_ranges(total: usize, cap: usize) -> Vec<Range<usize>> {
    let cap = cap.max(1);
    let mut ranges = Vec::with_capacity(total.div_ceil(cap));
    let mut cursor = 0;
    while cursor < total {
        let size = cap.min(total - cursor);
        ranges.push(cursor..cursor + size);
        cursor += size;
    }
    ranges
}

/// Drives the profile assembler over an ordered list of athlete names.
pub struct ProfileScheduler {
    assembler: ProfileAssembler,
    max_concurrent: usize,
}

impl ProfileScheduler {
    pub fn new(assembler: ProfileAssembler, max_concurrent: usize) -> Self {
        Self {
            assembler,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Assemble every subject. Output position `i` always belongs to `names[i]`.
    pub async fn run(&self, names: &[String]) -> ScrapeOutcome {
        let mut outcome = ScrapeOutcome {
            records: vec![FlatRecord::new(); names.len()],
            ..ScrapeOutcome::default()
        };

        let ranges = batch_ranges(names.len(), self.max_concurrent);
        let total_batches = ranges.len();

        for range in ranges {
            log::info!(
                "Batch {}/{}: scraping athletes {}-{} of {}",
                outcome.batches + 1,
                total_batches,
                range.start + 1,
                range.end,
                names.len()
            );

            let batch = range.map(|index| {
                let name = names[index].as_str();
                async move { (index, self.assembler.assemble(name).await) }
            });

            for (index, profile) in join_all(batch).await {
                if !profile.fetched {
                    outcome.failed_fetches += 1;
                }
                outcome.records[index] = profile.record;
            }
            outcome.batches += 1;
        }

        outcome
    }
}
