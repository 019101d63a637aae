use crate::{DirectoryDescriptor, SubmissionStrategy};
use dirsubmit_core::{Field, FieldRule, FormPlan, Locator};

pub struct AlternativeTo {
    descriptor: DirectoryDescriptor,
    plan: FormPlan,
}

impl AlternativeTo {
    pub const KEY: &'static str = "alternativeto";

    pub fn new() -> Self {
        let descriptor = DirectoryDescriptor::new(
            Self::KEY,
            "AlternativeTo",
            "https://alternativeto.net",
            "https://alternativeto.net/software/add",
        )
        .with_signup("https://alternativeto.net/account/register");

        let plan = FormPlan::new(
            vec![
                Locator::css(r#"input[name="username"]"#),
                Locator::css(r#"input[type="email"]"#),
            ],
            vec![
                FieldRule::new(
                    Field::Name,
                    vec![Locator::css(r#"input[name="name"]"#), Locator::css("#Name")],
                ),
                FieldRule::new(
                    Field::Description,
                    vec![
                        Locator::css(r#"textarea[name="description"]"#),
                        Locator::css("#Description"),
                    ],
                ),
                FieldRule::new(
                    Field::Url,
                    vec![Locator::css(r#"input[name="url"]"#), Locator::css("#Url")],
                ),
                // The listing's "website" is the live demo, when there is one
                FieldRule::new(
                    Field::Demo,
                    vec![Locator::css(r#"input[name="website"]"#), Locator::css("#Website")],
                ),
                FieldRule::new(
                    Field::Tags,
                    vec![Locator::css(r#"input[name="tags"]"#), Locator::css("#Tags")],
                ),
            ],
        );

        Self { descriptor, plan }
    }
}

impl Default for AlternativeTo {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStrategy for AlternativeTo {
    fn descriptor(&self) -> &DirectoryDescriptor {
        &self.descriptor
    }

    fn plan(&self) -> &FormPlan {
        &self.plan
    }
}
