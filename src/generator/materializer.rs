//! Turns a generator descriptor into files on disk.
//!
//! Everything that can reject a request (type, name, existing target,
//! manifest shape) is checked before the first file is written.

use super::config::{GeneratorDescriptor, TemplatesRoot};
use super::placeholder::Placeholders;
use super::registrar::{PreparedRegistration, Registrar, RegistrationOutcome};
use crate::error::{Error, Result};
use crate::ext::{NameExt, PathExt};
use crate::ioutils::{create_dir_all, write_file};
use crate::validation::validate_component_name;
use std::path::{Path, PathBuf};

/// A single `kimu new` invocation.
#[derive(Debug, Clone)]
pub struct ComponentRequest {
    /// Generator type id (a directory under the templates root)
    pub kind: String,
    /// Component name in kebab-case
    pub name: String,
    /// Overrides the descriptor's `targetPath`
    pub path: Option<PathBuf>,
    /// Write into an existing target directory
    pub force: bool,
    /// Update the descriptor's manifest
    pub register: bool,
}

impl ComponentRequest {
    pub fn new<K: Into<String>, N: Into<String>>(kind: K, name: N) -> Self {
        Self { kind: kind.into(), name: name.into(), path: None, force: false, register: true }
    }
}

/// Everything a generation run produced.
#[derive(Debug)]
pub struct GenerationReport {
    /// Display name of the generator that ran
    pub generator: String,
    /// Target directory as rendered, before resolution against the project root
    pub target_path: String,
    pub target_dir: PathBuf,
    pub written: Vec<PathBuf>,
    /// Templates listed by the descriptor but missing on disk
    pub skipped: Vec<PathBuf>,
    pub registration: RegistrationOutcome,
    /// Post-create instructions with placeholders substituted
    pub post_create: Vec<String>,
}

/// Renders generator templates into a project.
pub struct Generator {
    templates: TemplatesRoot,
    project_root: PathBuf,
}

impl Generator {
    pub fn new<P: Into<PathBuf>>(templates: TemplatesRoot, project_root: P) -> Self {
        Self { templates, project_root: project_root.into() }
    }

    pub fn templates(&self) -> &TemplatesRoot {
        &self.templates
    }

    /// All discovered generator types paired with their loaded descriptor.
    pub fn list(&self) -> Result<Vec<(String, Result<GeneratorDescriptor>)>> {
        Ok(self
            .templates
            .discover()?
            .into_iter()
            .map(|kind| {
                let descriptor = self.templates.load(&kind);
                (kind, descriptor)
            })
            .collect())
    }

    /// Validates the request, then generates the component.
    pub fn create(&self, request: &ComponentRequest) -> Result<GenerationReport> {
        let available = self.templates.discover()?;
        if !available.contains(&request.kind) {
            return Err(Error::UnknownGeneratorError {
                kind: request.kind.clone(),
                available: available.join(", "),
            });
        }
        validate_component_name(&request.name)?;
        self.create_from_template(request)
    }

    /// Generates a component without validating type or name.
    pub fn create_from_template(&self, request: &ComponentRequest) -> Result<GenerationReport> {
        let descriptor = self.templates.load(&request.kind)?;
        let templates_dir = self.templates.templates_dir(&request.kind);
        let name = request.name.as_str();

        let target_path = match &request.path {
            Some(path) => path.to_str_checked()?.to_string(),
            None => Placeholders::new(name, "").render(&descriptor.target_path),
        };
        let target_dir = Path::new(&target_path).resolve_against(&self.project_root);

        if target_dir.exists() && !request.force {
            return Err(Error::ComponentExistsError { target: target_path });
        }

        let registration = if request.register {
            Registrar::new(&self.project_root).prepare(&descriptor, name, &target_path)?
        } else {
            log::debug!("Registration skipped (--no-register)");
            PreparedRegistration::Disabled
        };

        log::debug!(
            "Creating {} {} ({}) in '{}'",
            request.kind,
            name,
            name.to_pascal_case(),
            target_dir.display()
        );
        create_dir_all(&target_dir)?;

        let placeholders = Placeholders::new(name, &target_path);
        let mut written = Vec::with_capacity(descriptor.files.len());
        let mut skipped = Vec::new();

        for file in &descriptor.files {
            let template_path = templates_dir.join(&file.template);
            if !template_path.is_file() {
                log::warn!("Template not found: {}", template_path.display());
                skipped.push(template_path);
                continue;
            }

            let content = std::fs::read_to_string(&template_path)?;
            let output_path = target_dir.join(placeholders.render(&file.output));
            write_file(&placeholders.render(&content), &output_path)?;
            log::info!("Created: {}", output_path.display());
            written.push(output_path);
        }

        let registration = registration.commit()?;

        let post_create =
            descriptor.post_create.iter().map(|line| placeholders.render(line)).collect();

        Ok(GenerationReport {
            generator: descriptor.name,
            target_path,
            target_dir,
            written,
            skipped,
            registration,
            post_create,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        templates: PathBuf,
        project: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = TempDir::new().unwrap();
            let templates = tmp.path().join("generators");
            let project = tmp.path().join("project");
            fs::create_dir_all(&project).unwrap();

            let widget = templates.join("widget");
            fs::create_dir_all(widget.join("templates")).unwrap();
            fs::write(
                widget.join("config.json"),
                json!({
                    "name": "Widget",
                    "description": "A widget",
                    "targetPath": "src/widgets/{{name}}",
                    "files": [
                        { "template": "widget.ts.tmpl", "output": "{{name}}.ts" },
                        { "template": "missing.tmpl", "output": "missing.txt" },
                        { "template": "readme.md.tmpl", "output": "docs/README.md" }
                    ],
                    "registration": {
                        "enabled": true,
                        "file": "widgets.json",
                        "type": "array",
                        "entry": { "name": "{{name}}", "class": "{{className}}" }
                    },
                    "postCreate": ["Import {{className}} from {{targetPath}}"]
                })
                .to_string(),
            )
            .unwrap();
            fs::write(
                widget.join("templates/widget.ts.tmpl"),
                "export class {{className}} {}\n// {{targetPath}}\n",
            )
            .unwrap();
            fs::write(widget.join("templates/readme.md.tmpl"), "# {{titleName}}\n").unwrap();

            Self { _tmp: tmp, templates, project }
        }

        fn generator(&self) -> Generator {
            Generator::new(TemplatesRoot::new(&self.templates), &self.project)
        }
    }

    #[test]
    fn renders_files_and_registers() {
        let fixture = Fixture::new();
        fs::write(fixture.project.join("widgets.json"), "[]").unwrap();

        let report = fixture.generator().create(&ComponentRequest::new("widget", "date-picker")).unwrap();

        let target = fixture.project.join("src/widgets/date-picker");
        assert_eq!(report.target_dir, target);
        assert_eq!(report.target_path, "src/widgets/date-picker");
        assert_eq!(
            fs::read_to_string(target.join("date-picker.ts")).unwrap(),
            "export class DatePicker {}\n// src/widgets/date-picker\n"
        );
        assert_eq!(fs::read_to_string(target.join("docs/README.md")).unwrap(), "# Date Picker\n");
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert!(!target.join("missing.txt").exists());

        let manifest: serde_json::Value =
            crate::ioutils::read_json(fixture.project.join("widgets.json")).unwrap();
        assert_eq!(manifest, json!([{ "name": "date-picker", "class": "DatePicker" }]));
        assert_eq!(
            report.registration,
            RegistrationOutcome::Registered(fixture.project.join("widgets.json"))
        );
        assert_eq!(report.post_create, vec!["Import DatePicker from src/widgets/date-picker"]);
    }

    #[test]
    fn existing_target_without_force_writes_nothing() {
        let fixture = Fixture::new();
        fs::write(fixture.project.join("widgets.json"), "[]").unwrap();
        let target = fixture.project.join("src/widgets/date-picker");
        fs::create_dir_all(&target).unwrap();

        let err = fixture
            .generator()
            .create(&ComponentRequest::new("widget", "date-picker"))
            .unwrap_err();

        assert!(matches!(err, Error::ComponentExistsError { .. }));
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
        assert_eq!(fs::read_to_string(fixture.project.join("widgets.json")).unwrap(), "[]");
    }

    #[test]
    fn force_writes_into_existing_target_without_clearing() {
        let fixture = Fixture::new();
        let target = fixture.project.join("src/widgets/date-picker");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), "mine").unwrap();
        fs::write(target.join("date-picker.ts"), "old").unwrap();

        let mut request = ComponentRequest::new("widget", "date-picker");
        request.force = true;
        fixture.generator().create(&request).unwrap();

        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "mine");
        assert!(fs::read_to_string(target.join("date-picker.ts")).unwrap().contains("DatePicker"));
    }

    #[test]
    fn explicit_path_overrides_target() {
        let fixture = Fixture::new();
        let mut request = ComponentRequest::new("widget", "chart");
        request.path = Some(PathBuf::from("custom/place"));
        request.register = false;

        let report = fixture.generator().create(&request).unwrap();

        assert_eq!(report.target_dir, fixture.project.join("custom/place"));
        assert!(fixture.project.join("custom/place/chart.ts").is_file());
        assert_eq!(report.registration, RegistrationOutcome::Disabled);
        assert_eq!(report.post_create, vec!["Import Chart from custom/place"]);
    }

    #[test]
    fn missing_manifest_is_not_fatal() {
        let fixture = Fixture::new();
        let report = fixture.generator().create(&ComponentRequest::new("widget", "chart")).unwrap();
        assert!(matches!(report.registration, RegistrationOutcome::ManifestMissing(_)));
        assert_eq!(report.written.len(), 2);
    }

    #[test]
    fn mismatched_manifest_fails_before_writing() {
        let fixture = Fixture::new();
        let manifest = fixture.project.join("widgets.json");
        fs::write(&manifest, r#"{"installedExtensions": []}"#).unwrap();

        let request = ComponentRequest::new("widget", "chat");
        let err = fixture.generator().create(&request).unwrap_err();

        assert!(matches!(err, Error::ManifestShapeError { .. }), "{err:?}");
        assert!(!fixture.project.join("src/widgets/chat").exists());
        assert_eq!(fs::read_to_string(&manifest).unwrap(), r#"{"installedExtensions": []}"#);

        fs::write(&manifest, "[]").unwrap();
        let report = fixture.generator().create(&request).unwrap();
        assert_eq!(report.registration, RegistrationOutcome::Registered(manifest));
    }

    #[test]
    fn rejects_unknown_type() {
        let fixture = Fixture::new();
        let err = fixture.generator().create(&ComponentRequest::new("gadget", "chart")).unwrap_err();
        match err {
            Error::UnknownGeneratorError { kind, available } => {
                assert_eq!(kind, "gadget");
                assert_eq!(available, "widget");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_names_before_writing() {
        let fixture = Fixture::new();
        for name in ["My_Component", "comp!", ""] {
            let err = fixture.generator().create(&ComponentRequest::new("widget", name)).unwrap_err();
            assert!(matches!(err, Error::InvalidNameError { .. }), "{name:?}");
        }
        assert!(!fixture.project.join("src").exists());
    }

    #[test]
    fn lists_descriptors() {
        let fixture = Fixture::new();
        let broken = fixture.templates.join("broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join("config.json"), "{").unwrap();

        let listed = fixture.generator().list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].0, "broken");
        assert!(listed[0].1.is_err());
        assert_eq!(listed[1].0, "widget");
        assert_eq!(listed[1].1.as_ref().unwrap().description, "A widget");
    }
}
