//! Generation runs over (template, targets) requests.
//!
//! Every pair is independent: a template is read once per request and
//! rendered for each of its targets, and each target writes its own file.
//! Requests fan out over rayon; reports keep request order either way.

use std::path::PathBuf;

use monomorph_core::TypeDescriptor;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::emit::{add_header, emit, header_line};
use crate::filter::{demote_visibility, filter_dropped};
use crate::lint::{Warning, lint};
use crate::rewrite::Pipeline;
use crate::source::{Layout, LogicalName, Template, locate_template};
use crate::vocabulary::Vocabulary;
use crate::{Error, Result};

/// One template and the targets to specialize it for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub template: LogicalName,
    pub targets: Vec<&'static TypeDescriptor>,
    /// Demote the top-level declaration from `public`.
    pub package_private: bool,
}

impl Request {
    pub fn new(template: LogicalName, targets: Vec<&'static TypeDescriptor>) -> Self {
        Self {
            template,
            targets,
            package_private: false,
        }
    }

    pub fn package_private(mut self, value: bool) -> Self {
        self.package_private = value;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Lint warnings fail every target of the template.
    pub strict: bool,
    pub parallel: bool,
    /// Stop at the first failure. Implies sequential processing.
    pub fail_fast: bool,
    /// Header comment on [`Generator::render`] output. Written files
    /// carry it regardless, unless the template has its own marker.
    pub header: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            parallel: true,
            fail_fast: false,
            header: true,
        }
    }
}

/// Result of one (template, target) pair.
#[derive(Debug)]
pub struct Outcome {
    pub template: LogicalName,
    pub target: &'static TypeDescriptor,
    /// Destination path; for checks, the path that would be written.
    pub result: Result<PathBuf>,
}

impl Outcome {
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

#[derive(Debug, Default)]
pub struct Report {
    outcomes: Vec<Outcome>,
    warnings: Vec<(LogicalName, Warning)>,
}

impl Report {
    /// Every attempted pair, in request order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn generated(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn warnings(&self) -> &[(LogicalName, Warning)] {
        &self.warnings
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    fn push(
        &mut self,
        template: &LogicalName,
        target: &'static TypeDescriptor,
        result: Result<PathBuf>,
    ) {
        self.outcomes.push(Outcome {
            template: template.clone(),
            target,
            result,
        });
    }

    fn merge(mut self, other: Report) -> Self {
        self.outcomes.extend(other.outcomes);
        self.warnings.extend(other.warnings);
        self
    }
}

#[derive(Debug)]
pub struct Generator {
    layout: Layout,
    pipeline: Pipeline,
    options: Options,
}

impl Generator {
    pub fn new(layout: Layout, vocabulary: Vocabulary) -> Result<Self> {
        Ok(Self {
            layout,
            pipeline: Pipeline::new(vocabulary)?,
            options: Options::default(),
        })
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn parallel(mut self, value: bool) -> Self {
        self.options.parallel = value;
        self
    }

    pub fn fail_fast(mut self, value: bool) -> Self {
        self.options.fail_fast = value;
        self
    }

    pub fn header(mut self, value: bool) -> Self {
        self.options.header = value;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Specialize one template for one target, in memory.
    pub fn render(
        &self,
        template: &Template,
        target: &TypeDescriptor,
        package_private: bool,
    ) -> Result<Vec<String>> {
        self.render_with(template, target, package_private, self.options.header)
    }

    fn render_with(
        &self,
        template: &Template,
        target: &TypeDescriptor,
        package_private: bool,
        header: bool,
    ) -> Result<Vec<String>> {
        let mut lines = filter_dropped(self.pipeline.rewrite_all(&template.lines, target));

        if package_private {
            demote_visibility(template.name.as_str(), &mut lines)?;
        }
        if header {
            let marker = &self.pipeline.vocabulary().generated_marker;
            add_header(&mut lines, header_line(&template.name, target), marker);
        }

        debug!(template = %template.name, %target, lines = lines.len(), "rendered");
        Ok(lines)
    }

    /// Render and write every target of `request`.
    pub fn generate(&self, request: &Request) -> Report {
        self.process(request, true)
    }

    pub fn generate_all(&self, requests: &[Request]) -> Report {
        self.process_all(requests, true)
    }

    /// Like [`Generator::generate`], without writing anything.
    pub fn check(&self, request: &Request) -> Report {
        self.process(request, false)
    }

    pub fn check_all(&self, requests: &[Request]) -> Report {
        self.process_all(requests, false)
    }

    fn process_all(&self, requests: &[Request], write: bool) -> Report {
        if self.options.parallel && !self.options.fail_fast {
            let reports: Vec<Report> = requests
                .par_iter()
                .map(|request| self.process(request, write))
                .collect();
            return reports.into_iter().fold(Report::default(), Report::merge);
        }

        let mut report = Report::default();
        for request in requests {
            report = report.merge(self.process(request, write));
            if self.options.fail_fast && !report.is_success() {
                break;
            }
        }
        report
    }

    fn process(&self, request: &Request, write: bool) -> Report {
        let mut report = Report::default();

        let template = match locate_template(&self.layout, &request.template) {
            Ok(template) => template,
            Err(err) => {
                for &target in &request.targets {
                    report.push(&request.template, target, Err(err.clone()));
                    if self.options.fail_fast {
                        break;
                    }
                }
                return report;
            }
        };

        let rejected = self.lint(&template, &mut report);

        for &target in &request.targets {
            let result = match &rejected {
                Some(err) => Err(err.clone()),
                None => self.specialize(&template, target, request.package_private, write),
            };
            let failed = result.is_err();
            report.push(&template.name, target, result);
            if failed && self.options.fail_fast {
                break;
            }
        }

        report
    }

    /// Record lint warnings; in strict mode, return the error every target
    /// of the template fails with.
    fn lint(&self, template: &Template, report: &mut Report) -> Option<Error> {
        let warnings = lint(&template.lines, self.pipeline.vocabulary());
        if warnings.is_empty() {
            return None;
        }

        let rejected = if self.options.strict {
            let message = warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            Some(Error::AmbiguousRewrite {
                name: template.name.to_string(),
                message,
            })
        } else {
            for warning in &warnings {
                warn!(template = %template.name, "{warning}");
            }
            None
        };

        report
            .warnings
            .extend(warnings.into_iter().map(|w| (template.name.clone(), w)));
        rejected
    }

    fn specialize(
        &self,
        template: &Template,
        target: &'static TypeDescriptor,
        package_private: bool,
        write: bool,
    ) -> Result<PathBuf> {
        let lines = self.render_with(template, target, package_private, true)?;
        if write {
            emit(&self.layout, &self.pipeline, &template.name, target, &lines)
        } else {
            Ok(self.layout.output_path(&template.name, target, &self.pipeline))
        }
    }
}
