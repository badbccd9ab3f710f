use indoc::indoc;
use monomorph_core::registry::{FLOAT, INT, LONG, OBJECT};
use monomorph_core::{TypeDescriptor, numeric};

use super::*;
use crate::test_utils::{lines, specialize};
use crate::vocabulary::Vocabulary;

const LIST_TEMPLATE: &str = indoc! {r#"
    package primavera.array;

    import java.util.Arrays;

    import javax.annotation.processing.Generated;

    import primavera.SpecializedCodeGenerator.Primitive;
    import primavera.SpecializedCodeGenerator.Wrapper;
    import primavera.SpecializedCodeGenerator.WrapperFunction;

    @Generated("SpecializedCodeGenerator")
    public class WrapperList<Wrapper1> {

        private Primitive[] array = Wrapper.newArray(16);

        public Primitive first() {
            return size == 0 ? Wrapper.initital() : array[0];
        }

        public Primitive increment(int index, Primitive increment) {
            return Primitive.increment(array[index], increment);
        }

        public <V> V map(int index, WrapperFunction<V> mapper) {
            return mapper.apply(array[index]);
        }

        public int compareAt(int left, int right) {
            return Primitive.compare(array[left], array[right]);
        }
    }
"#};

fn rewrite(line: &str, target: &TypeDescriptor) -> RewriteResult {
    Pipeline::standard().unwrap().rewrite(line, target)
}

fn keep(text: &str) -> RewriteResult {
    RewriteResult::Keep(text.to_string())
}

#[test]
fn zero_value_lines() {
    assert_eq!(rewrite("x = Wrapper.initital();", &INT), keep("x = 0;"));
    assert_eq!(rewrite("x = Wrapper.initital();", &FLOAT), keep("x = 0f;"));
}

#[test]
fn array_construction_lines() {
    assert_eq!(
        rewrite("Primitive[] a = Wrapper.newArray(16);", &INT),
        keep("int[] a = new int[16];")
    );
    assert_eq!(
        rewrite("Primitive[] a = Wrapper.newArray(16);", &OBJECT),
        keep("E[] a = (E[]) java.lang.reflect.Array.newInstance(Object.class, 16);")
    );
}

#[test]
fn compare_line() {
    assert_eq!(rewrite("Primitive.compare(a, b)", &LONG), keep("Long.compare(a, b)"));
}

#[test]
fn marker_imports_resolve_before_renaming() {
    let pipeline = Pipeline::standard().unwrap();
    let line = "import primavera.SpecializedCodeGenerator.WrapperFunction;";

    assert_eq!(
        pipeline.rewrite(line, &INT),
        keep("import java.util.function.IntFunction;")
    );

    // Renamed first, the import no longer names a known marker.
    let renamed = rename_placeholders(&pipeline, line, &INT);
    let renamed = renamed.kept().unwrap();
    assert_eq!(renamed, "import primavera.SpecializedCodeGenerator.IntFunction;");
    assert!(resolve_marker_imports(&pipeline, renamed, &INT).is_drop());
}

#[test]
fn dropped_lines_are_only_namespace_imports() {
    let template = lines(LIST_TEMPLATE);
    let pipeline = Pipeline::standard().unwrap();

    for target in monomorph_core::all() {
        let results = pipeline.rewrite_all(&template, target);
        assert_eq!(results.len(), template.len());

        let dropped = results.iter().filter(|r| r.is_drop()).count();
        assert_eq!(dropped, 2, "target {target}");

        let kept = results.iter().filter_map(RewriteResult::kept).count();
        assert_eq!(kept, template.len() - dropped);
    }
}

#[test]
fn rewriting_is_deterministic() {
    for target in monomorph_core::all() {
        assert_eq!(specialize(LIST_TEMPLATE, target), specialize(LIST_TEMPLATE, target));
    }
}

#[test]
fn numeric_targets_leave_no_placeholder() {
    for target in numeric() {
        let output = specialize(LIST_TEMPLATE, target);
        assert!(!output.contains("Wrapper"), "{target}:\n{output}");
        assert!(!output.contains("Primitive"), "{target}:\n{output}");
    }
}

#[test]
fn list_template_for_int() {
    let res = specialize(LIST_TEMPLATE, &INT);

    insta::assert_snapshot!(res, @r#"
    package primavera.array;

    import java.util.Arrays;

    import javax.annotation.processing.Generated;

    import java.util.function.IntFunction;

    @Generated("SpecializedCodeGenerator")
    public class IntList {

        private int[] array = new int[16];

        public int first() {
            return size == 0 ? 0 : array[0];
        }

        public int increment(int index, int increment) {
            return array[index] += increment;
        }

        public <V> V map(int index, IntFunction<V> mapper) {
            return mapper.apply(array[index]);
        }

        public int compareAt(int left, int right) {
            return Integer.compare(array[left], array[right]);
        }
    }
    "#);
}

#[test]
fn list_template_for_object() {
    let res = specialize(LIST_TEMPLATE, &OBJECT);

    insta::assert_snapshot!(res, @r#"
    package primavera.array;

    import java.util.Arrays;

    import javax.annotation.processing.Generated;

    import java.util.function.Function;

    @Generated("SpecializedCodeGenerator")
    public class List<E> {

        private E[] array = (E[]) java.lang.reflect.Array.newInstance(Object.class, 16);

        public E first() {
            return size == 0 ? null : array[0];
        }

        public E increment(int index, E increment) {
            return array[index] += increment;
        }

        public <V> V map(int index, Function<V> mapper) {
            return mapper.apply(array[index]);
        }

        public int compareAt(int left, int right) {
            return E.compare(array[left], array[right]);
        }
    }
    "#);
}

#[test]
fn custom_vocabulary() {
    let vocabulary = Vocabulary {
        wrapper: "Boxed".into(),
        primitive: "Scalar".into(),
        ..Vocabulary::default()
    };
    let pipeline = Pipeline::new(vocabulary).unwrap();

    assert_eq!(
        pipeline.rewrite("public final class BoxedQueue<Boxed> {", &LONG),
        keep("public final class LongQueue {")
    );
    assert_eq!(
        pipeline.rewrite("Scalar peek(Boxed fallback);", &LONG),
        keep("long peek(Long fallback);")
    );
}

#[test]
fn empty_vocabulary_fields_are_rejected() {
    let vocabulary = Vocabulary {
        zero_call: " ".into(),
        ..Vocabulary::default()
    };
    let err = Pipeline::new(vocabulary).unwrap_err();
    assert_eq!(err.to_string(), "invalid vocabulary: `zero-call` must not be empty");
}

#[test]
fn specialized_names() {
    let pipeline = Pipeline::standard().unwrap();
    assert_eq!(pipeline.specialize_name("WrapperList", &INT), "IntList");
    assert_eq!(pipeline.specialize_name("NavigableWrapperMap", &LONG), "NavigableLongMap");
    assert_eq!(pipeline.specialize_name("WrapperList", &OBJECT), "List");
    assert_eq!(pipeline.specialize_name("RingBuffer", &FLOAT), "FloatRingBuffer");
}
