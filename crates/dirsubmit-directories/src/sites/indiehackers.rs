use crate::{DirectoryDescriptor, SubmissionStrategy};
use dirsubmit_core::{Field, FieldRule, FormPlan, Locator};

pub struct IndieHackers {
    descriptor: DirectoryDescriptor,
    plan: FormPlan,
}

impl IndieHackers {
    pub const KEY: &'static str = "indiehackers";

    pub fn new() -> Self {
        let descriptor = DirectoryDescriptor::new(
            Self::KEY,
            "Indie Hackers",
            "https://www.indiehackers.com",
            "https://www.indiehackers.com/products/new",
        )
        .with_signup("https://www.indiehackers.com");

        // Product pages take the source URL in the "website" input
        let plan = FormPlan::new(
            vec![Locator::css(r#"a[href*="login"]"#), Locator::text("button", "Sign")],
            vec![
                FieldRule::new(Field::Name, vec![Locator::css(r#"input[name="name"]"#)]),
                FieldRule::new(
                    Field::Description,
                    vec![Locator::css(r#"textarea[name="description"]"#)],
                ),
                FieldRule::new(Field::Url, vec![Locator::css(r#"input[name="website"]"#)]),
            ],
        );

        Self { descriptor, plan }
    }
}

impl Default for IndieHackers {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStrategy for IndieHackers {
    fn descriptor(&self) -> &DirectoryDescriptor {
        &self.descriptor
    }

    fn plan(&self) -> &FormPlan {
        &self.plan
    }
}
