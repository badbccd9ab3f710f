use std::fs;
use std::path::Path;

use indoc::indoc;
use monomorph_core::TypeDescriptor;
use monomorph_core::registry::{DOUBLE, INT, LONG};

use crate::Error;
use crate::driver::{Generator, Request};
use crate::source::{Layout, LogicalName, locate_template};
use crate::test_utils::write_template;
use crate::vocabulary::Vocabulary;

const LIST: &str = "primavera.array.WrapperList";

const LIST_TEMPLATE: &str = indoc! {"
    package primavera.array;

    import primavera.SpecializedCodeGenerator.Wrapper;

    public class WrapperList<Wrapper1> {
        private Primitive[] array = Wrapper.newArray(16);
    }
"};

fn layout(root: &Path) -> Layout {
    Layout {
        template_root: root.join("templates"),
        output_root: root.join("out"),
        ..Layout::default()
    }
}

fn generator(root: &Path) -> Generator {
    Generator::new(layout(root), Vocabulary::default()).unwrap()
}

fn request(name: &str, targets: &[&'static TypeDescriptor]) -> Request {
    Request::new(LogicalName::new(name).unwrap(), targets.to_vec())
}

fn setup() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_template(&dir.path().join("templates"), LIST, LIST_TEMPLATE);
    dir
}

#[test]
fn writes_one_file_per_target() {
    let dir = setup();
    let report = generator(dir.path()).generate(&request(LIST, &[&INT, &LONG]));

    assert!(report.is_success());
    let out = dir.path().join("out/primavera/array");
    let written: Vec<_> = report.generated().cloned().collect();
    assert_eq!(written, [out.join("IntList.java"), out.join("LongList.java")]);

    assert_eq!(
        fs::read_to_string(out.join("IntList.java")).unwrap(),
        indoc! {"
            // Generated by monomorph from primavera.array.WrapperList (int). Do not edit.
            package primavera.array;


            public class IntList {
                private int[] array = new int[16];
            }
        "}
    );
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = setup();
    let generator = generator(dir.path());
    let request = request(LIST, &[&DOUBLE]);
    let path = dir.path().join("out/primavera/array/DoubleList.java");

    assert!(generator.generate(&request).is_success());
    let first = fs::read(&path).unwrap();
    assert!(generator.generate(&request).is_success());
    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn render_matches_written_file() {
    let dir = setup();
    let generator = generator(dir.path());
    let template =
        locate_template(generator.layout(), &LogicalName::new(LIST).unwrap()).unwrap();

    let lines = generator.render(&template, &LONG, true).unwrap();
    assert_eq!(lines[4], "class LongList {");

    generator.generate(&request(LIST, &[&LONG]).package_private(true));
    let written = fs::read_to_string(dir.path().join("out/primavera/array/LongList.java")).unwrap();
    assert_eq!(written, format!("{}\n", lines.join("\n")));
}

#[test]
fn written_files_keep_header_when_render_omits_it() {
    let dir = setup();
    let generator = generator(dir.path()).header(false);
    let template =
        locate_template(generator.layout(), &LogicalName::new(LIST).unwrap()).unwrap();

    let lines = generator.render(&template, &INT, false).unwrap();
    assert_eq!(lines[0], "package primavera.array;");

    assert!(generator.generate(&request(LIST, &[&INT])).is_success());
    let written = fs::read_to_string(dir.path().join("out/primavera/array/IntList.java")).unwrap();
    assert!(written.starts_with(
        "// Generated by monomorph from primavera.array.WrapperList (int). Do not edit.\n"
    ));
}

#[test]
fn missing_template_fails_every_target() {
    let dir = setup();
    let report = generator(dir.path()).generate(&request("primavera.array.Missing", &[&INT, &LONG]));

    let failed: Vec<_> = report.failures().map(|o| o.target.name).collect();
    assert_eq!(failed, ["int", "long"]);
    assert!(report
        .failures()
        .all(|o| matches!(o.error(), Some(Error::TemplateNotFound { .. }))));
}

#[test]
fn failures_are_collected_across_requests() {
    let dir = setup();
    let requests = [
        request("primavera.array.Missing", &[&INT]),
        request(LIST, &[&INT, &LONG]),
        request("primavera.set.AlsoMissing", &[&DOUBLE]),
    ];
    let report = generator(dir.path()).generate_all(&requests);

    let attempted: Vec<_> = report
        .outcomes()
        .iter()
        .map(|o| format!("{} {} {}", o.template, o.target, o.result.is_ok()))
        .collect();
    assert_eq!(
        attempted,
        [
            "primavera.array.Missing int false",
            "primavera.array.WrapperList int true",
            "primavera.array.WrapperList long true",
            "primavera.set.AlsoMissing double false",
        ]
    );
    assert!(dir.path().join("out/primavera/array/LongList.java").exists());
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let dir = setup();
    let requests = [
        request("primavera.array.Missing", &[&INT, &LONG]),
        request(LIST, &[&INT]),
    ];
    let report = generator(dir.path()).fail_fast(true).generate_all(&requests);

    assert_eq!(report.outcomes().len(), 1);
    assert!(!report.is_success());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn demotion_failure_is_reported_per_target() {
    let dir = setup();
    write_template(
        &dir.path().join("templates"),
        "primavera.function.WrapperTriFunction",
        "interface WrapperTriFunction {\n}\n",
    );
    let report = generator(dir.path()).generate(
        &request("primavera.function.WrapperTriFunction", &[&INT, &LONG]).package_private(true),
    );

    assert_eq!(report.failures().count(), 2);
    assert!(report
        .failures()
        .all(|o| matches!(o.error(), Some(Error::AmbiguousRewrite { .. }))));
}

#[test]
fn lint_warnings_are_kept_in_lenient_mode() {
    let dir = setup();
    write_template(
        &dir.path().join("templates"),
        "primavera.Broken",
        "class Broken { int c = Primitive.compare(a, b, c); }\n",
    );
    let report = generator(dir.path()).generate(&request("primavera.Broken", &[&INT]));

    assert!(report.is_success());
    assert_eq!(report.warnings().len(), 1);
    assert_eq!(report.warnings()[0].1.line, 1);
}

#[test]
fn strict_mode_rejects_lint_warnings() {
    let dir = setup();
    write_template(
        &dir.path().join("templates"),
        "primavera.Broken",
        "class Broken { int c = Primitive.compare(a, b, c); }\n",
    );
    let report = generator(dir.path())
        .strict(true)
        .generate(&request("primavera.Broken", &[&INT, &LONG]));

    let messages: Vec<_> = report
        .failures()
        .map(|o| o.error().unwrap().to_string())
        .collect();
    assert_eq!(
        messages,
        [
            "ambiguous rewrite in 'primavera.Broken': line 1: `Primitive.compare` takes 2 arguments, found 3",
            "ambiguous rewrite in 'primavera.Broken': line 1: `Primitive.compare` takes 2 arguments, found 3",
        ]
    );
    assert!(!dir.path().join("out").exists());
}

#[test]
fn check_writes_nothing() {
    let dir = setup();
    let report = generator(dir.path()).check_all(&[request(LIST, &[&INT])]);

    assert!(report.is_success());
    let paths: Vec<_> = report.generated().collect();
    assert_eq!(paths, [&dir.path().join("out/primavera/array/IntList.java")]);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn invalid_vocabulary_is_rejected() {
    let vocabulary = Vocabulary {
        wrapper: String::new(),
        ..Vocabulary::default()
    };
    let err = Generator::new(Layout::default(), vocabulary).unwrap_err();
    assert!(matches!(err, Error::Vocabulary(_)));
}
