use dirsubmit_core::Catalog;
use dirsubmit_directories::Registry;

/// Help shown when neither `--project` nor `--all` is given
pub fn render(catalog: &Catalog, registry: &Registry) -> String {
    let projects = catalog.keys().collect::<Vec<_>>().join(", ");
    let directories = registry.keys().collect::<Vec<_>>().join(", ");
    let example_project = catalog.keys().next().unwrap_or("<project>");
    let example_directory = registry.keys().next().unwrap_or("<dir>");

    format!(
        "\
dirsubmit - pre-fill project submission forms on software directories

Usage:
  dirsubmit --project=<project> [--directory=<dir>]
  dirsubmit --all [--directory=<dir>]

Projects:
  {projects}

Directories:
  {directories}

Examples:
  dirsubmit --project={example_project}
  dirsubmit --project={example_project} --directory={example_directory}
  dirsubmit --all

Forms are filled but never submitted; review each one and submit it yourself.
"
    )
}

pub fn execute(catalog: &Catalog, registry: &Registry) {
    print!("{}", render(catalog, registry));
}
