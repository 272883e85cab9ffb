use std::fs;
use std::io;

use anyhow::{Context, Result, anyhow, bail};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::{self, ProjyConfig};
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::scaffold::{self, CATALOG, RenderedOperation};
use crate::util::naming;

/// A fully resolved request to generate one project.
#[derive(Debug)]
struct Request {
    template: String,
    destination: Utf8PathBuf,
    dry_run: bool,
    cleanup: bool,
}

#[derive(Debug)]
enum Outcome {
    Created,
    Planned(Vec<RenderedOperation>),
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.list {
        print_templates();
        return Ok(());
    }

    let (Some(template), Some(path)) = (cli.template, cli.path) else {
        bail!("usage: projy <template> <path>");
    };
    let destination = Utf8PathBuf::from_path_buf(path)
        .map_err(|path| anyhow!("path {} is not valid UTF-8", path.display()))?;

    let explicit = cli
        .config
        .map(|path| {
            Utf8PathBuf::from_path_buf(path)
                .map_err(|path| anyhow!("config path {} is not valid UTF-8", path.display()))
        })
        .transpose()?;
    let config = config::load(explicit.as_deref())?;

    let request = build_request(&config, &template, destination, cli.dry_run, cli.keep_partial);
    match execute(&request)? {
        Outcome::Planned(plan) => {
            println!(
                "Dry run: '{}' project at {} would be created with:",
                request.template, request.destination
            );
            for operation in plan {
                println!("  {}", operation);
            }
        }
        Outcome::Created => {
            println!(
                "Successfully created '{}' project at: {}",
                request.template, request.destination
            );
            println!("Happy coding!");
        }
    }
    Ok(())
}

fn print_templates() {
    println!("Supported templates:");
    for entry in CATALOG {
        println!("  {:<10} {}", entry.id, entry.summary);
    }
}

fn build_request(
    config: &ProjyConfig,
    template: &str,
    destination: Utf8PathBuf,
    dry_run: bool,
    keep_partial: bool,
) -> Request {
    let resolved = config.resolve_template(template);
    if resolved != template {
        info!("template alias `{}` resolves to `{}`", template, resolved);
    }
    Request {
        template: resolved.to_owned(),
        destination,
        dry_run,
        cleanup: config.cleanup_on_failure() && !keep_partial,
    }
}

fn execute(request: &Request) -> Result<Outcome> {
    execute_with(request, scaffold::scaffold)
}

/// `build` performs the actual scaffold run; a failure triggers cleanup per `request`.
fn execute_with<F>(request: &Request, build: F) -> Result<Outcome>
where
    F: FnOnce(&str, &Utf8Path, &str) -> ScaffoldResult<()>,
{
    let destination = request.destination.as_path();
    ensure_absent(destination)?;
    let project_name = naming::project_name(destination)?;

    if request.dry_run {
        let entry = scaffold::lookup(&request.template)?;
        return Ok(Outcome::Planned(entry.render(&project_name)?));
    }

    if let Err(err) = build(&request.template, destination, &project_name) {
        if request.cleanup {
            remove_partial(destination);
        }
        return Err(err).context("error creating project");
    }
    Ok(Outcome::Created)
}

/// Anything already at `destination`, even a dangling link, counts as present.
fn ensure_absent(destination: &Utf8Path) -> Result<(), ScaffoldError> {
    match fs::symlink_metadata(destination) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        _ => Err(ScaffoldError::DestinationExists(destination.to_owned())),
    }
}

fn remove_partial(destination: &Utf8Path) {
    match fs::remove_dir_all(destination) {
        Ok(()) => info!("removed partially created {}", destination),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!("could not remove partially created {}: {}", destination, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    fn request(template: &str, destination: Utf8PathBuf) -> Request {
        build_request(&ProjyConfig::default(), template, destination, false, false)
    }

    #[test]
    fn creates_project_when_destination_is_free() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("proj");

        let outcome = execute(&request("rust", dest.clone())).unwrap();
        assert!(matches!(outcome, Outcome::Created));
        assert!(dest.join("Cargo.toml").is_file());
    }

    #[test]
    fn existing_destination_is_left_alone() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("proj");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "mine").unwrap();

        let err = execute(&request("rust", dest.clone())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DestinationExists(_))
        ));
        assert!(!dest.join("Cargo.toml").exists());
        assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "mine");
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_existing() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("link");
        std::os::unix::fs::symlink(utf8(&tmp).join("missing"), &dest).unwrap();

        assert!(matches!(
            ensure_absent(&dest),
            Err(ScaffoldError::DestinationExists(_))
        ));
    }

    #[test]
    fn unsupported_template_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("x");

        let err = execute(&request("bogus", dest.clone())).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported template 'bogus'"));
        assert!(!dest.exists());
    }

    #[test]
    fn dry_run_plans_without_writing() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("svc");
        let req = build_request(&ProjyConfig::default(), "go", dest.clone(), true, false);

        let Outcome::Planned(plan) = execute(&req).unwrap() else {
            panic!("expected a plan");
        };
        assert!(plan.iter().any(|op| op.path() == "cmd/svc/main.go"));
        assert!(!dest.exists());
    }

    #[test]
    fn aliases_and_keep_partial_shape_the_request() {
        let config: ProjyConfig = toml::from_str(
            r#"
cleanup_on_failure = true

[aliases]
py = "python"
"#,
        )
        .unwrap();

        let req = build_request(&config, "py", Utf8PathBuf::from("lab"), false, true);
        assert_eq!(req.template, "python");
        assert!(!req.cleanup);

        let req = build_request(&config, "rust", Utf8PathBuf::from("lab"), false, false);
        assert_eq!(req.template, "rust");
        assert!(req.cleanup);
    }

    /// Writes part of a layout, then fails the way a blocked directory would.
    fn half_written(template: &str, destination: &Utf8Path, name: &str) -> ScaffoldResult<()> {
        assert_eq!(template, "rust");
        let mut builder = crate::builder::ScaffoldBuilder::new(destination);
        builder
            .write_file("README.md", &format!("# {name}"))
            .write_file("src", "blocks the src directory")
            .write_file("src/main.rs", "fn main() {}");
        builder.finish()
    }

    #[test]
    fn failed_run_removes_the_partial_tree() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("proj");

        let err = execute_with(&request("rust", dest.clone()), half_written).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DirectoryCreationFailed { path, .. }) if path == "src"
        ));
        assert!(format!("{err:#}").starts_with("error creating project: "));
        assert!(!dest.exists());
        assert!(tmp.path().exists());
    }

    #[test]
    fn failed_run_keeps_the_partial_tree_when_cleanup_is_off() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("proj");
        let req = build_request(&ProjyConfig::default(), "rust", dest.clone(), false, true);

        execute_with(&req, half_written).unwrap_err();
        assert_eq!(fs::read_to_string(dest.join("README.md")).unwrap(), "# proj");
        assert!(dest.join("src").is_file());
    }

    #[test]
    fn config_can_disable_cleanup() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("proj");
        let config: ProjyConfig = toml::from_str("cleanup_on_failure = false\n").unwrap();
        let req = build_request(&config, "rust", dest.clone(), false, false);

        execute_with(&req, half_written).unwrap_err();
        assert!(dest.join("README.md").is_file());
    }

    #[test]
    fn remove_partial_deletes_the_whole_tree() {
        let tmp = TempDir::new().unwrap();
        let dest = utf8(&tmp).join("half");
        fs::create_dir_all(dest.join("src/bin")).unwrap();
        fs::write(dest.join("src/main.rs"), "fn main() {}").unwrap();

        remove_partial(&dest);
        assert!(!dest.exists());

        remove_partial(&dest);
    }
}
