//! The job state machine.
//!
//! One `Job` per submission. The value is consumed by [`Job::run`], so a
//! job can never be re-driven or shared between two submissions; discard
//! the result and build a new `Job` to start over. Status transitions are
//! published on an unbounded channel as they happen.

use crate::detector;
use crate::entities::{
    AnalysisOutput, InputMode, JobInput, JobResult, JobStatus, ModelTier, OutputBundle,
};
use crate::fetcher::RelayFetcher;
use crate::normalizer;
use crate::ops::LanguageOps;
use crate::pipeline::error::PipelineError;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{Instrument, debug, info, info_span};
use url::Url;

/// Everything a job needs that outlives it.
pub struct PipelineContext {
    pub ops: Arc<dyn LanguageOps>,
    pub fetcher: RelayFetcher,
    pub target_language: String,
}

pub struct Job {
    id: uuid::Uuid,
    input: JobInput,
    status: JobStatus,
    status_tx: mpsc::UnboundedSender<JobStatus>,
}

impl Job {
    /// Creates a queued job and the receiver on which its status
    /// transitions will be published.
    pub fn new(input: JobInput) -> (Self, mpsc::UnboundedReceiver<JobStatus>) {
        let (status_tx, status_rx) = mpsc::unbounded_channel();
        let job = Self {
            id: uuid::Uuid::new_v4(),
            input,
            status: JobStatus::Queued,
            status_tx,
        };
        let _ = job.status_tx.send(JobStatus::Queued);
        (job, status_rx)
    }

    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    fn advance(&mut self, next: JobStatus) {
        debug_assert!(next > self.status, "job status must only move forward");
        self.status = next;
        debug!(status = %next, "job status");
        let _ = self.status_tx.send(next);
    }

    /// Drives the job to completion or terminal failure, consuming it.
    pub async fn run(mut self, ctx: &PipelineContext) -> Result<JobResult, PipelineError> {
        let span = info_span!("job", id = %self.id, mode = ?self.input.mode);
        async {
            let started = Instant::now();
            let started_at = chrono::Utc::now();
            let result = self.run_steps(ctx, started, started_at).await;
            match &result {
                Ok(result) => {
                    info!(elapsed_secs = result.elapsed_secs, "job completed");
                }
                Err(err) => {
                    info!(error = %err, "job failed");
                    self.advance(JobStatus::Failed);
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run_steps(
        &mut self,
        ctx: &PipelineContext,
        started: Instant,
        started_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<JobResult, PipelineError> {
        let tier = self.input.tier;

        self.advance(JobStatus::Extracting);
        let (content, source_url) = self.extract(ctx).await?;

        self.advance(JobStatus::DetectingLanguage);
        let language = detector::detect(ctx.ops.as_ref(), &content, &ctx.target_language).await;
        let needs_translation = language != ctx.target_language;
        debug!(language = %language, needs_translation, "language detected");

        self.advance(JobStatus::Analyzing);
        let analysis = ctx
            .ops
            .analyze(&content, tier)
            .await
            .map_err(PipelineError::Analysis)?;

        let (final_analysis, full_translation) = if needs_translation {
            self.advance(JobStatus::Translating);
            self.translate(ctx, &analysis, &content, tier).await?
        } else {
            // Already in the display language; pass content through.
            (analysis, content.clone())
        };

        self.advance(JobStatus::Completed);
        Ok(JobResult {
            title: final_analysis.title,
            source_url,
            original_content: content,
            started_at,
            elapsed_secs: started.elapsed().as_secs_f64(),
            outputs: OutputBundle {
                summary: final_analysis.summary,
                key_points: final_analysis.key_points,
                key_entities: final_analysis.key_entities,
                keywords: final_analysis.keywords,
                full_translation,
            },
        })
    }

    async fn extract(&self, ctx: &PipelineContext) -> Result<(String, String), PipelineError> {
        match self.input.mode {
            InputMode::Url => {
                let url = Url::parse(&self.input.value)
                    .map_err(|e| PipelineError::Fetch(e.into()))?;
                let raw = ctx.fetcher.fetch(&url).await?;
                let content = normalizer::from_url(&raw, &url)?;
                Ok((content, self.input.value.clone()))
            }
            InputMode::RawText => {
                let content = normalizer::from_text(&self.input.value)?;
                Ok((content, String::new()))
            }
        }
    }

    /// The paired translation calls: issued concurrently, all-or-nothing.
    async fn translate(
        &self,
        ctx: &PipelineContext,
        analysis: &AnalysisOutput,
        content: &str,
        tier: ModelTier,
    ) -> Result<(AnalysisOutput, String), PipelineError> {
        let (translated_analysis, translated_content) = tokio::try_join!(
            ctx.ops.translate_analysis(analysis, tier),
            ctx.ops.translate_content(content, tier),
        )
        .map_err(PipelineError::Translation)?;

        Ok((translated_analysis, translated_content))
    }
}
