//! Version bumping of the package descriptor, with optional git and npm steps.

use codicon_version::{BumpKind, BumpOutcome, FontBumpKind};

use crate::{
    ProjectPaths, Result,
    io::write_text,
    process::{CommandRunner, args},
};

/// What to bump and which follow-up steps to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpRequest {
    pub package: BumpKind,
    pub font: FontBumpKind,
    pub commit: bool,
    pub tag: bool,
    pub push: bool,
    pub npm_install: bool,
}

impl BumpRequest {
    /// Tagging and pushing both need a commit first.
    pub fn wants_commit(&self) -> bool {
        self.commit || self.tag || self.push
    }
}

pub fn commit_message(outcome: &BumpOutcome) -> String {
    format!(
        "chore: bump version to {}, font to {}",
        outcome.new_version, outcome.new_font_version
    )
}

pub fn tag_name(outcome: &BumpOutcome) -> String {
    format!("v{}", outcome.new_version)
}

pub fn tag_message(outcome: &BumpOutcome) -> String {
    format!("Release {} with font version {}", tag_name(outcome), outcome.new_font_version)
}

/// Bump both versions in `package.json` and run the requested follow-ups.
///
/// The descriptor is only written after both versions parsed and bumped.
pub fn bump_versions(
    paths: &ProjectPaths,
    request: &BumpRequest,
    runner: &impl CommandRunner,
) -> Result<BumpOutcome> {
    let mut package = paths.load_package()?;
    let outcome = package.bump(request.package, request.font)?;
    write_text(&paths.package, package.to_pretty_json()?)?;

    println!("Updated package version: {} → {}", outcome.old_version, outcome.new_version);
    println!(
        "Updated font version: {} → {}",
        outcome.old_font_version, outcome.new_font_version
    );

    if request.wants_commit() {
        commit_release(paths, request, &outcome, runner)?;
    }

    if request.npm_install {
        runner.run("npm", &args(["install"]), &paths.root)?;
        println!("package-lock.json updated");
    }

    Ok(outcome)
}

fn commit_release(
    paths: &ProjectPaths,
    request: &BumpRequest,
    outcome: &BumpOutcome,
    runner: &impl CommandRunner,
) -> Result<()> {
    let cwd = &paths.root;
    let message = commit_message(outcome);
    let package = paths.package.to_string_lossy();

    runner.run("git", &args(["add", &package]), cwd)?;
    runner.run("git", &args(["commit", "-m", &message]), cwd)?;
    println!("Changes committed: {message}");

    if request.tag {
        let tag = tag_name(outcome);
        runner.run("git", &args(["tag", "-a", &tag, "-m", &tag_message(outcome)]), cwd)?;
        println!("Tag created: {tag}");
    }

    if request.push {
        runner.run("git", &args(["push"]), cwd)?;
        if request.tag {
            runner.run("git", &args(["push", "--tags"]), cwd)?;
        }
        println!("Changes pushed to remote");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, io::read_text, process::RecordingRunner};

    const PACKAGE: &str = "{\n  \"name\": \"codicons\",\n  \"version\": \"0.0.36\",\n  \"fontVersion\": \"1.15\"\n}\n";

    fn project(package: &str) -> (tempfile::TempDir, ProjectPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = ProjectPaths::new(dir.path());
        write_text(&paths.package, package).unwrap();
        (dir, paths)
    }

    #[test]
    fn test_bump_without_git() {
        let (_dir, paths) = project(PACKAGE);
        let runner = RecordingRunner::new();

        let outcome = bump_versions(&paths, &BumpRequest::default(), &runner).unwrap();
        assert_eq!(outcome.new_version.to_string(), "0.0.37");
        assert_eq!(outcome.new_font_version.to_string(), "1.16");
        assert!(runner.commands().is_empty());

        let written = read_text(&paths.package).unwrap();
        assert_eq!(written, PACKAGE.replace("0.0.36", "0.0.37").replace("1.15", "1.16"));
    }

    #[test]
    fn test_tag_and_push_imply_commit() {
        let (_dir, paths) = project(PACKAGE);
        let runner = RecordingRunner::new();
        let request = BumpRequest {
            package: BumpKind::Minor,
            font: FontBumpKind::Major,
            tag: true,
            push: true,
            npm_install: true,
            ..BumpRequest::default()
        };

        bump_versions(&paths, &request, &runner).unwrap();

        let package = paths.package.to_string_lossy();
        assert_eq!(
            runner.command_lines(),
            vec![
                format!("git add {package}"),
                "git commit -m chore: bump version to 0.1.0, font to 2.0".to_string(),
                "git tag -a v0.1.0 -m Release v0.1.0 with font version 2.0".to_string(),
                "git push".to_string(),
                "git push --tags".to_string(),
                "npm install".to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_version_writes_nothing() {
        let package = "{\"version\": \"1.2\", \"fontVersion\": \"1.0\"}";
        let (_dir, paths) = project(package);
        let runner = RecordingRunner::new();

        let err = bump_versions(&paths, &BumpRequest::default(), &runner).unwrap_err();
        assert!(matches!(
            err,
            Error::Version(codicon_version::Error::InvalidVersionFormat { .. })
        ));
        assert_eq!(read_text(&paths.package).unwrap(), package);
    }

    #[test]
    fn test_git_failure_propagates() {
        let (_dir, paths) = project(PACKAGE);
        let runner = RecordingRunner::failing_on("git");
        let request = BumpRequest { commit: true, npm_install: true, ..BumpRequest::default() };

        assert!(matches!(
            bump_versions(&paths, &request, &runner),
            Err(Error::ExternalTool { .. })
        ));
        assert_eq!(runner.commands().len(), 1);
    }
}
