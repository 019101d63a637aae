//! Submission orchestration.
//!
//! One call to [`submit_project`] owns exactly one browser session: it is
//! launched after the project and directories resolve, shared sequentially by
//! every selected directory, and closed on every exit path.

use crate::OutputFormat;
use crate::commands::summary::{self, ProjectReport};
use anyhow::{Result, anyhow};
use dirsubmit_browser::{ChromeFinder, ChromeLauncher, ProfileChoice, ProfileManager};
use dirsubmit_core::{
    BrowserSession, Catalog, FixedPacer, Pacer, Project, SessionLauncher, SubmissionResult,
};
use dirsubmit_directories::{Registry, SubmissionStrategy};
use std::path::PathBuf;
use std::time::Duration;

/// Collaborators shared by every project in a run
pub struct SubmitContext<'a> {
    pub catalog: &'a Catalog,
    pub registry: &'a Registry,
    pub launcher: &'a dyn SessionLauncher,
    pub pacer: &'a dyn Pacer,
    pub format: OutputFormat,
}

impl SubmitContext<'_> {
    fn status(&self, line: impl AsRef<str>) {
        if self.format.streams_progress() {
            println!("{}", line.as_ref());
        }
    }
}

/// Fill one project's forms on one directory, or on all of them
pub async fn submit_project(
    ctx: &SubmitContext<'_>,
    project_key: &str,
    directory: Option<&str>,
) -> Result<ProjectReport> {
    let project = ctx.catalog.get(project_key)?;
    let directories = ctx.registry.select(directory)?;

    ctx.status(format!("\n🚀 Submitting {}...", project.name));
    ctx.status(format!("   URL: {}", project.url));
    ctx.status(format!("   Tags: {}", project.tags_joined()));

    let mut session = ctx.launcher.launch().await?;
    let run = run_directories(ctx, session.as_mut(), &directories, project).await;

    if let Err(e) = session.close().await {
        tracing::warn!("Failed to close browser session: {}", e);
    }

    let report = ProjectReport::new(project, run?);
    if ctx.format.streams_progress() {
        summary::print(&report, ctx.format)?;
    }
    Ok(report)
}

async fn run_directories(
    ctx: &SubmitContext<'_>,
    session: &mut dyn BrowserSession,
    directories: &[&dyn SubmissionStrategy],
    project: &Project,
) -> Result<Vec<SubmissionResult>> {
    let page = session.new_page().await?;
    let mut results = Vec::with_capacity(directories.len());

    for strategy in directories {
        ctx.status(format!("\n📝 {}:", strategy.name()));

        let outcome = strategy.submit(page.as_ref(), project).await;
        if outcome.is_success() {
            ctx.status("  ✅ Filled! Please review and submit.");
        } else {
            ctx.status(format!("  ❌ Failed: {}", outcome.detail()));
        }
        results.push(SubmissionResult::new(strategy.name(), outcome));

        ctx.pacer.between_directories().await;
    }

    Ok(results)
}

/// Run every catalog project in order; a failed project does not stop the batch
pub async fn submit_all(ctx: &SubmitContext<'_>, directory: Option<&str>) -> Result<Vec<ProjectReport>> {
    ctx.registry.select(directory)?;

    ctx.status(format!("🌟 Submitting all {} projects...", ctx.catalog.len()));

    let mut reports = Vec::with_capacity(ctx.catalog.len());
    for key in ctx.catalog.keys() {
        match submit_project(ctx, key, directory).await {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::error!("Submitting {} failed: {:#}", key, e);
                ctx.status(format!("  ❌ Error: {}", e));
            }
        }
        ctx.pacer.between_projects().await;
    }

    Ok(reports)
}

/// What the command line asked for
pub enum Target {
    Project(String),
    All,
}

pub struct SubmitOptions {
    pub target: Target,
    pub directory: Option<String>,
    pub chrome_path: Option<PathBuf>,
    pub profile: Option<String>,
    pub headless: bool,
    pub directory_delay: Duration,
    pub project_delay: Duration,
    pub format: OutputFormat,
}

pub fn execute(catalog: &Catalog, registry: &Registry, options: SubmitOptions) -> Result<()> {
    // Resolve keys before touching the browser
    if let Target::Project(key) = &options.target {
        catalog.get(key)?;
    }
    registry.select(options.directory.as_deref())?;

    let chrome_binary = ChromeFinder::new(options.chrome_path.clone()).find()?;
    tracing::info!("Using Chrome at {}", chrome_binary.display());

    let profile = match &options.profile {
        Some(name) => {
            let path = ProfileManager::named_profile_path(name)?;
            tracing::info!("Using profile: {}", path.display());
            ProfileChoice::Persistent(path)
        }
        None => ProfileChoice::Temporary,
    };

    let launcher = ChromeLauncher::new(chrome_binary, profile).headless(options.headless);
    let pacer = FixedPacer::new(options.directory_delay, options.project_delay);
    let ctx = SubmitContext {
        catalog,
        registry,
        launcher: &launcher,
        pacer: &pacer,
        format: options.format,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let directory = options.directory.as_deref();
    let result = runtime.block_on(async {
        let run = async {
            match &options.target {
                Target::Project(key) => submit_project(&ctx, key, directory).await.map(|r| vec![r]),
                Target::All => submit_all(&ctx, directory).await,
            }
        };

        // Dropping the run drops any open session, which kills its browser
        tokio::select! {
            reports = run => reports,
            _ = tokio::signal::ctrl_c() => Err(anyhow!("Interrupted, browser closed")),
        }
    });

    runtime.shutdown_timeout(Duration::from_millis(100));

    let reports = result?;
    if !options.format.streams_progress() {
        let output = match options.target {
            Target::Project(_) => match reports.first() {
                Some(report) => summary::render(report, OutputFormat::Json)?,
                None => return Err(anyhow!("No report produced")),
            },
            Target::All => summary::render_json_batch(&reports)?,
        };
        println!("{}", output);
    }

    Ok(())
}
