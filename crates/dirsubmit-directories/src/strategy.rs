use crate::DirectoryDescriptor;
use async_trait::async_trait;
use dirsubmit_core::{Error, FieldRule, FormPlan, PageDriver, Project, SubmissionOutcome};

/// One directory's submission procedure.
///
/// Implementors supply the site identity and form plan; `submit` runs the
/// shared protocol: navigate, probe the login wall, fill each field with the
/// first matching locator, then stop before the final submit click.
#[async_trait]
pub trait SubmissionStrategy: Send + Sync {
    fn descriptor(&self) -> &DirectoryDescriptor;

    fn plan(&self) -> &FormPlan;

    fn key(&self) -> &str {
        &self.descriptor().key
    }

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// Never returns an error: every failure becomes a failed outcome
    async fn submit(&self, page: &dyn PageDriver, project: &Project) -> SubmissionOutcome {
        match fill_form(self.descriptor(), self.plan(), page, project).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("{} failed: {}", self.name(), e);
                SubmissionOutcome::error(e.to_string())
            }
        }
    }
}

/// Run the form protocol against a page
pub async fn fill_form(
    descriptor: &DirectoryDescriptor,
    plan: &FormPlan,
    page: &dyn PageDriver,
    project: &Project,
) -> dirsubmit_core::Result<SubmissionOutcome> {
    tracing::info!("Navigating to {}...", descriptor.name);
    page.goto(&descriptor.submit_url).await?;

    if behind_login_wall(plan, page).await? {
        match &descriptor.signup_url {
            Some(url) => tracing::warn!("Login required. Create an account at {}", url),
            None => tracing::warn!("Login required at {}", descriptor.base_url),
        }
        return Ok(SubmissionOutcome::login_required());
    }

    for (rule, value) in plan.fills_for(project) {
        fill_field(page, rule, &value).await?;
    }

    tracing::info!("Form filled, waiting for manual submission");
    Ok(SubmissionOutcome::manual_submit())
}

async fn behind_login_wall(plan: &FormPlan, page: &dyn PageDriver) -> dirsubmit_core::Result<bool> {
    for locator in &plan.login_wall {
        if page.count(locator).await? > 0 {
            tracing::debug!("Login wall detected via {}", locator);
            return Ok(true);
        }
    }
    Ok(false)
}

async fn fill_field(page: &dyn PageDriver, rule: &FieldRule, value: &str) -> dirsubmit_core::Result<()> {
    for locator in &rule.locators {
        if page.count(locator).await? > 0 {
            tracing::debug!("Filling {} via {}", rule.field, locator);
            return page.fill(locator, value).await;
        }
    }

    Err(Error::NoMatchingElement {
        field: rule.field.to_string(),
        tried: rule.locators.iter().map(|l| l.to_string()).collect(),
    })
}


#[cfg(test)]
mod tests {
    use super::stub::{Call, StubPage};
    use super::*;
    use crate::{AlternativeTo, DevHunt, IndieHackers, SaaSHub};
    use dirsubmit_core::{Catalog, FailureReason, Field, Locator};

    fn page_without_login_wall(strategy: &dyn SubmissionStrategy) -> StubPage {
        strategy
            .plan()
            .login_wall
            .iter()
            .fold(StubPage::new(1), |page, l| page.with_count(l.clone(), 0))
    }

    #[tokio::test]
    async fn test_login_wall_short_circuits_without_fills() {
        let strategy = AlternativeTo::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("badge-generator").unwrap();
        let page = StubPage::new(1);

        let outcome = strategy.submit(&page, project).await;

        assert_eq!(outcome, SubmissionOutcome::login_required());
        assert_eq!(outcome.detail(), "login-required");
        assert!(page.fills().is_empty());
        assert_eq!(
            page.calls()[0],
            Call::Goto("https://alternativeto.net/software/add".to_string())
        );
    }

    #[tokio::test]
    async fn test_fills_each_field_once_in_order() {
        let strategy = AlternativeTo::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("badge-generator").unwrap();
        let page = page_without_login_wall(&strategy);

        let outcome = strategy.submit(&page, project).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.detail(), "manual-submit");

        let fills = page.fills();
        let expected: Vec<(Locator, String)> = vec![
            (Locator::css(r#"input[name="name"]"#), project.name.clone()),
            (
                Locator::css(r#"textarea[name="description"]"#),
                project.description.clone(),
            ),
            (Locator::css(r#"input[name="url"]"#), project.url.clone()),
            (
                Locator::css(r#"input[name="website"]"#),
                "https://badge-generator.com".to_string(),
            ),
            (Locator::css(r#"input[name="tags"]"#), project.tags_joined()),
        ];
        assert_eq!(fills, expected);
    }

    #[tokio::test]
    async fn test_falls_back_to_later_locator() {
        let strategy = SaaSHub::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("docuapi").unwrap();
        let page = page_without_login_wall(&strategy)
            .with_count(Locator::css(r#"input[name="product[name]"]"#), 0);

        let outcome = strategy.submit(&page, project).await;

        assert!(outcome.is_success());
        assert_eq!(page.fills()[0].0, Locator::css("#product_name"));
    }

    #[tokio::test]
    async fn test_no_matching_locator_reports_field() {
        let strategy = SaaSHub::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("docuapi").unwrap();
        let url_rule = strategy
            .plan()
            .fields
            .iter()
            .find(|r| r.field == Field::Url)
            .unwrap();
        let page = url_rule
            .locators
            .iter()
            .fold(page_without_login_wall(&strategy), |page, l| {
                page.with_count(l.clone(), 0)
            });

        let outcome = strategy.submit(&page, project).await;

        assert!(!outcome.is_success());
        let reason = outcome.detail();
        assert!(reason.contains("No element matched field 'url'"));
        assert!(reason.contains("css=#product_website"));
    }

    #[tokio::test]
    async fn test_fill_error_becomes_failure_reason() {
        let strategy = AlternativeTo::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("badge-generator").unwrap();
        let mut page = page_without_login_wall(&strategy);
        page.fill_error = Some("element is not editable".to_string());

        let outcome = strategy.submit(&page, project).await;

        let expected = Error::Browser("element is not editable".to_string()).to_string();
        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                reason: FailureReason::Error(expected)
            }
        );
        assert_eq!(page.fills().len(), 1);
    }

    #[tokio::test]
    async fn test_saashub_fills_product_fields_in_order() {
        let strategy = SaaSHub::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("docuapi").unwrap();
        let page = page_without_login_wall(&strategy);

        let outcome = strategy.submit(&page, project).await;

        assert!(outcome.is_success());
        assert_eq!(
            page.fills(),
            vec![
                (Locator::css(r#"input[name="product[name]"]"#), project.name.clone()),
                (
                    Locator::css(r#"textarea[name="product[description]"]"#),
                    project.description.clone()
                ),
                (Locator::css(r#"input[name="product[website]"]"#), project.url.clone()),
            ]
        );
    }

    #[tokio::test]
    async fn test_devhunt_fills_in_order_with_placeholder_fallback() {
        let strategy = DevHunt::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("cron-monitor").unwrap();
        let page = page_without_login_wall(&strategy)
            .with_count(Locator::css(r#"input[name="name"]"#), 0)
            .with_count(Locator::css(r#"input[name="tags"]"#), 0);

        let outcome = strategy.submit(&page, project).await;

        assert!(outcome.is_success());
        assert_eq!(
            page.fills(),
            vec![
                (Locator::css(r#"input[placeholder*="name" i]"#), project.name.clone()),
                (
                    Locator::css(r#"textarea[name="description"]"#),
                    project.description.clone()
                ),
                (Locator::css(r#"input[name="url"]"#), project.url.clone()),
                (Locator::css(r#"input[placeholder*="tags" i]"#), project.tags_joined()),
            ]
        );
    }

    #[tokio::test]
    async fn test_devhunt_login_link_text_is_a_login_wall() {
        let strategy = DevHunt::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("cron-monitor").unwrap();
        let page = StubPage::new(1).with_count(Locator::text("button", "Login"), 0);

        let outcome = strategy.submit(&page, project).await;

        assert_eq!(outcome, SubmissionOutcome::login_required());
        assert!(page.fills().is_empty());
        assert!(page.calls().contains(&Call::Count(Locator::text("a", "Login"))));
    }

    #[tokio::test]
    async fn test_indiehackers_puts_project_url_in_website() {
        let strategy = IndieHackers::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("badge-generator").unwrap();
        let page = page_without_login_wall(&strategy);

        let outcome = strategy.submit(&page, project).await;

        assert!(outcome.is_success());
        assert_eq!(
            page.fills(),
            vec![
                (Locator::css(r#"input[name="name"]"#), project.name.clone()),
                (
                    Locator::css(r#"textarea[name="description"]"#),
                    project.description.clone()
                ),
                (Locator::css(r#"input[name="website"]"#), project.url.clone()),
            ]
        );
    }

    #[tokio::test]
    async fn test_indiehackers_sign_button_is_a_login_wall() {
        let strategy = IndieHackers::new();
        let catalog = Catalog::builtin();
        let project = catalog.get("badge-generator").unwrap();
        let page = StubPage::new(1).with_count(Locator::css(r#"a[href*="login"]"#), 0);

        let outcome = strategy.submit(&page, project).await;

        assert_eq!(outcome.detail(), "login-required");
        assert!(page.fills().is_empty());
    }
}
