use crate::{DirectoryDescriptor, SubmissionStrategy};
use dirsubmit_core::{Field, FieldRule, FormPlan, Locator};

/// DevHunt renders its form client-side with unstable names, so every field
/// falls back to a case-insensitive placeholder match.
pub struct DevHunt {
    descriptor: DirectoryDescriptor,
    plan: FormPlan,
}

impl DevHunt {
    pub const KEY: &'static str = "devhunt";

    pub fn new() -> Self {
        // Sign-in is GitHub OAuth from the home page
        let descriptor = DirectoryDescriptor::new(
            Self::KEY,
            "DevHunt",
            "https://devhunt.org",
            "https://devhunt.org/submit",
        )
        .with_signup("https://devhunt.org");

        let plan = FormPlan::new(
            vec![Locator::text("button", "Login"), Locator::text("a", "Login")],
            vec![
                FieldRule::new(
                    Field::Name,
                    vec![
                        Locator::css(r#"input[name="name"]"#),
                        Locator::css(r#"input[placeholder*="name" i]"#),
                    ],
                ),
                FieldRule::new(
                    Field::Description,
                    vec![
                        Locator::css(r#"textarea[name="description"]"#),
                        Locator::css(r#"textarea[placeholder*="description" i]"#),
                    ],
                ),
                FieldRule::new(
                    Field::Url,
                    vec![
                        Locator::css(r#"input[name="url"]"#),
                        Locator::css(r#"input[placeholder*="url" i]"#),
                    ],
                ),
                FieldRule::new(
                    Field::Tags,
                    vec![
                        Locator::css(r#"input[name="tags"]"#),
                        Locator::css(r#"input[placeholder*="tags" i]"#),
                    ],
                ),
            ],
        );

        Self { descriptor, plan }
    }
}

impl Default for DevHunt {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStrategy for DevHunt {
    fn descriptor(&self) -> &DirectoryDescriptor {
        &self.descriptor
    }

    fn plan(&self) -> &FormPlan {
        &self.plan
    }
}
