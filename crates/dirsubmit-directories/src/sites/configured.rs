use crate::{DirectoryDescriptor, Result, SubmissionStrategy};
use dirsubmit_core::FormPlan;
use serde::{Deserialize, Serialize};

/// JSON shape of a site in a `--sites` file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDefinition {
    #[serde(flatten)]
    pub descriptor: DirectoryDescriptor,
    #[serde(flatten)]
    pub plan: FormPlan,
}

/// A directory defined entirely by data, for sites whose markup changes
/// faster than releases
#[derive(Debug, Clone)]
pub struct ConfiguredSite {
    descriptor: DirectoryDescriptor,
    plan: FormPlan,
}

impl ConfiguredSite {
    pub fn from_definition(definition: SiteDefinition) -> Result<Self> {
        definition.descriptor.validate()?;
        definition.plan.validate(&definition.descriptor.key)?;

        Ok(Self {
            descriptor: definition.descriptor,
            plan: definition.plan,
        })
    }
}

impl SubmissionStrategy for ConfiguredSite {
    fn descriptor(&self) -> &DirectoryDescriptor {
        &self.descriptor
    }

    fn plan(&self) -> &FormPlan {
        &self.plan
    }
}
