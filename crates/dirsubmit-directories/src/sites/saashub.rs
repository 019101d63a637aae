use crate::{DirectoryDescriptor, SubmissionStrategy};
use dirsubmit_core::{Field, FieldRule, FormPlan, Locator};

/// SaaSHub's Rails form; fields are namespaced under `product[...]`
pub struct SaaSHub {
    descriptor: DirectoryDescriptor,
    plan: FormPlan,
}

impl SaaSHub {
    pub const KEY: &'static str = "saashub";

    pub fn new() -> Self {
        let descriptor = DirectoryDescriptor::new(
            Self::KEY,
            "SaaSHub",
            "https://www.saashub.com",
            "https://www.saashub.com/submit",
        )
        .with_signup("https://www.saashub.com/users/sign_up");

        let plan = FormPlan::new(
            vec![
                Locator::css(r#"a[href*="login"]"#),
                Locator::css(r#"a[href*="sign-in"]"#),
            ],
            vec![
                FieldRule::new(
                    Field::Name,
                    vec![
                        Locator::css(r#"input[name="product[name]"]"#),
                        Locator::css("#product_name"),
                    ],
                ),
                FieldRule::new(
                    Field::Description,
                    vec![
                        Locator::css(r#"textarea[name="product[description]"]"#),
                        Locator::css("#product_description"),
                    ],
                ),
                FieldRule::new(
                    Field::Url,
                    vec![
                        Locator::css(r#"input[name="product[website]"]"#),
                        Locator::css("#product_website"),
                    ],
                ),
            ],
        );

        Self { descriptor, plan }
    }
}

impl Default for SaaSHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStrategy for SaaSHub {
    fn descriptor(&self) -> &DirectoryDescriptor {
        &self.descriptor
    }

    fn plan(&self) -> &FormPlan {
        &self.plan
    }
}
